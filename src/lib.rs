//! WinCamera: typed data model for a Windows camera-capture wrapper
//!
//! This crate provides the value types a capture wrapper negotiates with:
//! device descriptors, resolution descriptors with cached pixel/byte counts,
//! frame delivery settings, and a scoped media-subsystem lifecycle handle.
//!
//! # Features
//! - Resolution descriptors with derived pixel and byte counts
//! - First-match resolution lookup over enumeration-ordered lists
//! - Device descriptors with builder-style construction
//! - Explicit, re-entrant media-subsystem lifecycle guard
//! - TOML-backed configuration
//!
//! # Usage
//! ```rust
//! use wincamera::{CameraDeviceInfo, CameraResolution, MediaSubsystem};
//!
//! let _subsystem = MediaSubsystem::acquire().expect("media subsystem");
//!
//! let device = CameraDeviceInfo::new("Integrated Webcam".to_string(), "usb#cam0".to_string())
//!     .with_resolutions(vec![
//!         CameraResolution::new(640, 480, 2),
//!         CameraResolution::new(1920, 1080, 3),
//!     ]);
//!
//! assert_eq!(device.resolution_index(1920, 1080), Some(1));
//! ```
pub mod config;
pub mod errors;
pub mod platform;
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::WinCameraConfig;
pub use errors::{CameraError, CameraErrorKind};
pub use platform::MediaSubsystem;
pub use types::{CameraDeviceInfo, CameraResolution, ChannelOrder, FrameSettings};

/// Initialize logging for the camera system
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "wincamera=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get crate information
pub fn get_info() -> CrateInfo {
    CrateInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

/// Crate information structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CrateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}
