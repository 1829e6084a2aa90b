// src/processing/processor.rs
//! Stateful multi-channel EMG frame processor

use tracing::debug;

use super::chain::ChannelFilterChain;
use super::FilterError;
use crate::config::PipelineConfig;
use crate::types::EmgFrame;

/// Filters whole EMG frames, one [`ChannelFilterChain`] per channel index.
///
/// Chains are allocated when the channel count is first observed and grown
/// if a later frame carries more channels. Index `i` maps to the same chain
/// for the lifetime of the processor, so channel state never migrates
/// between electrodes.
///
/// Not safe for concurrent use: filter state is mutated in place on every
/// frame. Give each processor instance one owning thread.
pub struct SignalProcessor {
    config: PipelineConfig,
    chains: Vec<ChannelFilterChain>,
}

impl SignalProcessor {
    /// Create a processor with the given corner configuration.
    ///
    /// No chains are allocated yet; the channel count is taken from the
    /// first processed frame.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            chains: Vec::new(),
        }
    }

    /// The corner configuration this processor was built with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Number of channel chains currently allocated.
    pub fn channel_count(&self) -> usize {
        self.chains.len()
    }

    /// Filter one frame, returning a new frame with identical metadata and
    /// replaced channels.
    ///
    /// The input frame is read-only; per-channel filter state advances as a
    /// side effect. Frames narrower than the allocated chain set use the
    /// first `n` chains, preserving the index-to-electrode mapping.
    pub fn process_emg(&mut self, frame: &EmgFrame) -> Result<EmgFrame, FilterError> {
        self.ensure_chains(frame.channels.len())?;

        let mut filtered = Vec::with_capacity(frame.channels.len());
        for (chain, &sample) in self.chains.iter_mut().zip(&frame.channels) {
            filtered.push(chain.process(sample));
        }

        Ok(EmgFrame {
            header: frame.header,
            timestamp: frame.timestamp,
            channels: filtered,
            checksum: frame.checksum,
        })
    }

    /// Discard all chains; the next frame rebuilds them with zeroed state.
    ///
    /// Call on stream disconnect so filter momentum from one session cannot
    /// contaminate the next.
    pub fn reset(&mut self) {
        debug!(channels = self.chains.len(), "signal processor reset");
        self.chains.clear();
    }

    fn ensure_chains(&mut self, channel_count: usize) -> Result<(), FilterError> {
        if self.chains.len() >= channel_count {
            return Ok(());
        }

        debug!(
            from = self.chains.len(),
            to = channel_count,
            "allocating channel filter chains"
        );
        while self.chains.len() < channel_count {
            self.chains.push(ChannelFilterChain::new(
                self.config.sample_rate_hz,
                self.config.notch_hz,
                self.config.highpass_hz,
                self.config.lowpass_hz,
            )?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(channels: Vec<f32>) -> EmgFrame {
        EmgFrame::new(0xA1, 1234, channels)
    }

    #[test]
    fn test_chains_grow_to_first_frame() {
        let mut processor = SignalProcessor::new(PipelineConfig::wearable_50hz());
        assert_eq!(processor.channel_count(), 0);
        assert_eq!(processor.config().sample_rate_hz, 50.0);

        processor.process_emg(&frame(vec![0.1; 8])).unwrap();
        assert_eq!(processor.channel_count(), 8);
    }

    #[test]
    fn test_chains_grow_for_wider_frames_only() {
        let mut processor = SignalProcessor::new(PipelineConfig::wearable_50hz());
        processor.process_emg(&frame(vec![0.1; 4])).unwrap();
        assert_eq!(processor.channel_count(), 4);

        let narrow = processor.process_emg(&frame(vec![0.1; 2])).unwrap();
        assert_eq!(narrow.channel_count(), 2);
        assert_eq!(processor.channel_count(), 4);

        processor.process_emg(&frame(vec![0.1; 6])).unwrap();
        assert_eq!(processor.channel_count(), 6);
    }

    #[test]
    fn test_metadata_passes_through_unchanged() {
        let mut processor = SignalProcessor::new(PipelineConfig::wearable_50hz());
        let input = frame(vec![0.5, -0.5, 1.0]);
        let output = processor.process_emg(&input).unwrap();

        assert_eq!(output.header, input.header);
        assert_eq!(output.timestamp, input.timestamp);
        assert_eq!(output.checksum, input.checksum);
        assert_eq!(output.channel_count(), input.channel_count());
    }

    #[test]
    fn test_input_frame_not_mutated() {
        let mut processor = SignalProcessor::new(PipelineConfig::wearable_50hz());
        let input = frame(vec![1.0, 1.0]);
        let before = input.clone();
        processor.process_emg(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn test_reset_discards_chains() {
        let mut processor = SignalProcessor::new(PipelineConfig::wearable_50hz());
        processor.process_emg(&frame(vec![0.1; 4])).unwrap();
        processor.reset();
        assert_eq!(processor.channel_count(), 0);
    }
}
