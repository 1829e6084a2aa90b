//! EMG-Pipeline: real-time EMG signal conditioning and feature extraction
//!
//! This library implements the signal path between a sleeve device connector
//! and the application state layer:
//!
//! - Per-channel digital filter chains (notch -> high-pass -> low-pass)
//! - Cookbook biquad coefficient design for arbitrary sample rates
//! - Stateful stream filtering with explicit reset on disconnect
//! - RMS / MAV muscle-activation features over a bounded frame window
//!
//! # Quick Start
//!
//! ```rust
//! use emg_pipeline::processing::{FeatureExtractor, FrameWindow, SignalProcessor};
//! use emg_pipeline::{EmgFrame, PipelineConfig};
//!
//! fn main() -> Result<(), emg_pipeline::FilterError> {
//!     // One processor per connected device; chains grow to the observed
//!     // channel count on the first frame.
//!     let mut processor = SignalProcessor::new(PipelineConfig::wearable_50hz());
//!     let mut window = FrameWindow::new(10);
//!
//!     for n in 0..10u64 {
//!         let frame = EmgFrame::new(0xA1, n * 20, vec![0.2, -0.1, 0.4, 0.0]);
//!         let filtered = processor.process_emg(&frame)?;
//!         window.push(filtered.channels);
//!     }
//!
//!     let features = FeatureExtractor::extract_features(window.rows());
//!     println!("RMS per channel: {:?}", features.rms);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod processing;
pub mod types;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ConfigError, PipelineConfig};
pub use processing::{
    BiquadCoefficients, BiquadFilter, ChannelFilterChain, FeatureExtractor, FilterError,
    FrameWindow, SignalProcessor,
};
pub use types::{EmgFeatures, EmgFrame};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "emg-pipeline");
    }
}
