// src/processing/mod.rs
//! Signal conditioning pipeline for EMG frames

pub mod biquad;
pub mod chain;
pub mod coefficients;
pub mod features;
pub mod processor;
pub mod windowing;

pub use biquad::BiquadFilter;
pub use chain::ChannelFilterChain;
pub use coefficients::{design_high_pass, design_low_pass, design_notch, BiquadCoefficients};
pub use features::FeatureExtractor;
pub use processor::SignalProcessor;
pub use windowing::FrameWindow;

use thiserror::Error;

/// Errors raised while constructing or re-configuring digital filters.
///
/// These signal a malformed design configuration, never a transient stream
/// condition; they propagate synchronously to the caller and are never
/// substituted with a pass-through.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Coefficient arrays are not second-order (three terms each)
    #[error("biquad requires 3 numerator and 3 denominator coefficients, got b[{b_len}] a[{a_len}]")]
    CoefficientCount {
        /// Supplied numerator length
        b_len: usize,
        /// Supplied denominator length
        a_len: usize,
    },

    /// Leading denominator coefficient is zero, normalization undefined
    #[error("denominator coefficient a0 must be non-zero")]
    DegenerateA0,
}
