// src/processing/chain.rs
//! Per-channel filter cascade: notch -> high-pass -> low-pass

use tracing::debug;

use super::biquad::BiquadFilter;
use super::coefficients::{design_high_pass, design_low_pass, design_notch, BiquadCoefficients};
use super::FilterError;

// Narrow rejection band for line interference
const NOTCH_Q: f32 = 4.0;
// Critically damped Butterworth response, maximally flat passband
const BUTTERWORTH_Q: f32 = 0.707;

/// Filter cascade for a single EMG channel.
///
/// Topology is fixed at construction: notch, then high-pass, then low-pass.
/// Line interference is removed before the slow drift so large low-frequency
/// offsets cannot skew the narrow rejection band, and band-limiting runs
/// last.
#[derive(Debug, Clone)]
pub struct ChannelFilterChain {
    notch: BiquadFilter,
    highpass: BiquadFilter,
    lowpass: BiquadFilter,
}

impl ChannelFilterChain {
    /// Build the cascade for one channel.
    ///
    /// A notch target of 0 (disabled) or at/above Nyquist is substituted
    /// with a unity pass-through section; this is the documented fallback,
    /// not an error. High-pass and low-pass corners are taken as given.
    pub fn new(
        sample_rate_hz: f32,
        notch_hz: f32,
        highpass_hz: f32,
        lowpass_hz: f32,
    ) -> Result<Self, FilterError> {
        let nyquist = sample_rate_hz / 2.0;

        let notch_coefficients = if notch_hz <= 0.0 || notch_hz >= nyquist {
            debug!(notch_hz, nyquist, "notch disabled, using pass-through");
            BiquadCoefficients::identity()
        } else {
            design_notch(notch_hz, sample_rate_hz, NOTCH_Q)
        };

        let highpass_coefficients = design_high_pass(highpass_hz, sample_rate_hz, BUTTERWORTH_Q);
        let lowpass_coefficients = design_low_pass(lowpass_hz, sample_rate_hz, BUTTERWORTH_Q);

        Ok(Self {
            notch: BiquadFilter::from_coefficients(&notch_coefficients)?,
            highpass: BiquadFilter::from_coefficients(&highpass_coefficients)?,
            lowpass: BiquadFilter::from_coefficients(&lowpass_coefficients)?,
        })
    }

    /// Run one sample through the cascade.
    #[inline]
    pub fn process(&mut self, sample: f32) -> f32 {
        let after_notch = self.notch.process(sample);
        let after_highpass = self.highpass.process(after_notch);
        self.lowpass.process(after_highpass)
    }

    /// Zero the state of all three sections.
    pub fn reset(&mut self) {
        self.notch.reset();
        self.highpass.reset();
        self.lowpass.reset();
    }
}
