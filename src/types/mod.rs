//! Core value types shared across the crate.

pub mod device;
pub mod frame;
pub mod resolution;

pub use device::CameraDeviceInfo;
pub use frame::{ChannelOrder, FrameSettings};
pub use resolution::CameraResolution;
