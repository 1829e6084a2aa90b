// src/processing/biquad.rs
//! Second-order IIR filter section (biquad), Direct Form I.
//!
//! Difference equation on normalized coefficients:
//! `y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]`

use super::coefficients::BiquadCoefficients;
use super::FilterError;

// a0 magnitudes below this are treated as zero
const A0_EPSILON: f32 = 1e-10;

/// Stateful biquad section.
///
/// Coefficients are stored normalized by `a0`; the state is the shift
/// register `(x1, x2, y1, y2)` of previous inputs and outputs.
#[derive(Debug, Clone)]
pub struct BiquadFilter {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,

    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl BiquadFilter {
    /// Build a section from raw `[b0, b1, b2]` / `[a0, a1, a2]` arrays.
    ///
    /// Fails if either array is not length 3 or `a0` is (within epsilon of)
    /// zero. State starts zeroed.
    pub fn new(b: &[f32], a: &[f32]) -> Result<Self, FilterError> {
        let mut filter = Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        };
        filter.update_coefficients(b, a)?;
        Ok(filter)
    }

    /// Build a section from a designed coefficient set.
    pub fn from_coefficients(coefficients: &BiquadCoefficients) -> Result<Self, FilterError> {
        Self::new(&coefficients.b, &coefficients.a)
    }

    /// Replace the coefficients, re-validating and re-normalizing.
    ///
    /// Resets the state: history accumulated under the old transfer function
    /// is meaningless under the new one.
    pub fn update_coefficients(&mut self, b: &[f32], a: &[f32]) -> Result<(), FilterError> {
        if b.len() != 3 || a.len() != 3 {
            return Err(FilterError::CoefficientCount {
                b_len: b.len(),
                a_len: a.len(),
            });
        }

        let a0 = a[0];
        if a0.abs() < A0_EPSILON {
            return Err(FilterError::DegenerateA0);
        }

        self.b0 = b[0] / a0;
        self.b1 = b[1] / a0;
        self.b2 = b[2] / a0;
        self.a1 = a[1] / a0;
        self.a2 = a[2] / a0;

        self.reset();
        Ok(())
    }

    /// Process one sample, advancing the shift register.
    #[inline]
    pub fn process(&mut self, x: f32) -> f32 {
        let y = self.b0 * x + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = y;

        y
    }

    /// Zero the state without touching coefficients.
    ///
    /// Called when a stream restarts so transients from the previous session
    /// do not bleed into the next one.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_coefficients_pass_signal_through() {
        let mut filter = BiquadFilter::from_coefficients(&BiquadCoefficients::identity()).unwrap();
        for &x in &[1.0, -0.5, 0.25, 0.0] {
            assert_eq!(filter.process(x), x);
        }
    }

    #[test]
    fn test_rejects_wrong_coefficient_count() {
        let err = BiquadFilter::new(&[1.0, 0.0], &[1.0, 0.0, 0.0]).unwrap_err();
        assert_eq!(err, FilterError::CoefficientCount { b_len: 2, a_len: 3 });
    }

    #[test]
    fn test_rejects_zero_a0() {
        let err = BiquadFilter::new(&[1.0, 0.0, 0.0], &[0.0, 0.5, 0.5]).unwrap_err();
        assert_eq!(err, FilterError::DegenerateA0);
    }

    #[test]
    fn test_normalizes_by_a0() {
        // b = [2,0,0], a = [2,0,0] is identity after normalization
        let mut filter = BiquadFilter::new(&[2.0, 0.0, 0.0], &[2.0, 0.0, 0.0]).unwrap();
        assert_eq!(filter.process(0.7), 0.7);
    }

    #[test]
    fn test_impulse_response_of_pure_delay() {
        // H(z) = z^-1: output is input delayed by one sample
        let mut filter = BiquadFilter::new(&[0.0, 1.0, 0.0], &[1.0, 0.0, 0.0]).unwrap();
        assert_eq!(filter.process(1.0), 0.0);
        assert_eq!(filter.process(0.0), 1.0);
        assert_eq!(filter.process(0.0), 0.0);
    }

    #[test]
    fn test_feedback_term() {
        // y[n] = x[n] + 0.5*y[n-1]: impulse decays geometrically
        let mut filter = BiquadFilter::new(&[1.0, 0.0, 0.0], &[1.0, -0.5, 0.0]).unwrap();
        assert_eq!(filter.process(1.0), 1.0);
        assert_eq!(filter.process(0.0), 0.5);
        assert_eq!(filter.process(0.0), 0.25);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut filter = BiquadFilter::new(&[1.0, 0.0, 0.0], &[1.0, -0.5, 0.0]).unwrap();
        filter.process(1.0);
        filter.reset();
        // With zeroed history the impulse response repeats exactly
        assert_eq!(filter.process(1.0), 1.0);
        assert_eq!(filter.process(0.0), 0.5);
    }

    #[test]
    fn test_update_coefficients_resets_state() {
        let mut filter = BiquadFilter::new(&[1.0, 0.0, 0.0], &[1.0, -0.5, 0.0]).unwrap();
        filter.process(1.0);
        filter
            .update_coefficients(&[1.0, 0.0, 0.0], &[1.0, -0.5, 0.0])
            .unwrap();
        assert_eq!(filter.process(0.0), 0.0);
    }
}
