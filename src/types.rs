// src/types.rs
//! Core data types at the EMG stream boundary

use serde::{Deserialize, Serialize};

use crate::utils::integrity::sum8_checksum;

/// Single EMG frame as delivered by a sleeve connector.
///
/// Metadata fields (`header`, `timestamp`, `checksum`) pass through the
/// filter pipeline untouched; only `channels` is transformed. Channel order
/// is stable for the lifetime of a stream: index `i` always maps to the same
/// electrode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmgFrame {
    /// Protocol header byte (0xA1 for EMG frames in the sleeve protocol)
    pub header: u8,
    /// Milliseconds since epoch at which the frame was produced
    pub timestamp: u64,
    /// One value per electrode
    pub channels: Vec<f32>,
    /// Sum-8 integrity byte computed over the channel payload
    pub checksum: u8,
}

impl EmgFrame {
    /// Build a frame with the checksum computed from the channel payload.
    pub fn new(header: u8, timestamp: u64, channels: Vec<f32>) -> Self {
        let checksum = sum8_checksum(&channels);
        Self {
            header,
            timestamp,
            channels,
            checksum,
        }
    }

    /// Number of channels carried by this frame.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

/// Per-channel muscle-activation metrics over a window of filtered frames.
///
/// Computed fresh on every extraction; carries no retained state.
#[derive(Debug, Clone, PartialEq)]
pub struct EmgFeatures {
    /// Root mean square per channel, a proxy for muscular effort
    pub rms: Vec<f32>,
    /// Mean absolute value per channel, a proxy for activation onset
    pub mav: Vec<f32>,
}
