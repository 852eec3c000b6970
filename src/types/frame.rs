//! Per-capture frame output preferences.
//!
//! These settings describe how the capture layer should hand frames back to
//! the caller; no pixel data lives here.

use crate::types::CameraResolution;
use serde::{Deserialize, Serialize};

/// Channel order of delivered frame data.
///
/// DirectShow sample grabbers produce BGR, so that is the default; RGB asks
/// the capture layer to swap channels before handing the frame over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelOrder {
    Bgr,
    Rgb,
}

impl Default for ChannelOrder {
    fn default() -> Self {
        ChannelOrder::Bgr
    }
}

/// Output preferences for frame retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameSettings {
    /// Flip the image vertically. DirectShow delivers bottom-up rows, so
    /// callers that want top-down frames set this.
    pub flip_vertical: bool,
    pub channel_order: ChannelOrder,
    /// The negotiated resolution frames will arrive in; the empty sentinel
    /// until negotiation has happened.
    pub resolution: CameraResolution,
}

impl FrameSettings {
    pub fn new(resolution: CameraResolution) -> Self {
        Self {
            flip_vertical: false,
            channel_order: ChannelOrder::default(),
            resolution,
        }
    }

    pub fn with_flip_vertical(mut self, flip: bool) -> Self {
        self.flip_vertical = flip;
        self
    }

    pub fn with_channel_order(mut self, order: ChannelOrder) -> Self {
        self.channel_order = order;
        self
    }
}
