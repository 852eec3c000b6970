//! Camera device descriptors as reported by enumeration.

use crate::types::CameraResolution;
use serde::{Deserialize, Serialize};

/// Information about one enumerated camera device.
///
/// The supported-resolution list keeps the order the enumeration backend
/// reported; that order is what resolution indices refer to during format
/// negotiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDeviceInfo {
    /// Human-readable device name (e.g. "HD Pro Webcam C920").
    pub friendly_name: String,
    /// OS device identifier, unique per physical device and port.
    pub device_path: String,
    /// Longer description when the backend provides one.
    pub description: Option<String>,
    /// Supported resolutions in enumeration order; duplicates are allowed.
    pub supported_resolutions: Vec<CameraResolution>,
    /// Whether the device was reachable at enumeration time.
    pub is_available: bool,
}

impl CameraDeviceInfo {
    pub fn new(friendly_name: String, device_path: String) -> Self {
        Self {
            friendly_name,
            device_path,
            description: None,
            supported_resolutions: Vec::new(),
            is_available: true,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_resolutions(mut self, resolutions: Vec<CameraResolution>) -> Self {
        self.supported_resolutions = resolutions;
        self
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.is_available = available;
        self
    }

    /// Whether any supported resolution matches the given width and height.
    pub fn supports_resolution(&self, width: u32, height: u32) -> bool {
        self.resolution_index(width, height).is_some()
    }

    /// Index of the first supported resolution matching width and height.
    pub fn resolution_index(&self, width: u32, height: u32) -> Option<usize> {
        CameraResolution::find_index(&self.supported_resolutions, width, height)
    }
}
