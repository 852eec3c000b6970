use thiserror::Error;

/// Classification of camera errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraErrorKind {
    PropertyNotSupported,
    CameraNotOpened,
    DeviceNotFound,
    SubsystemError,
    ConfigError,
}

/// The single error type for this crate.
///
/// One tagged value instead of a type per failure: the kind drives caller
/// logic, the message is preformatted at construction for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CameraError {
    kind: CameraErrorKind,
    message: String,
}

impl CameraError {
    pub fn kind(&self) -> CameraErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn property_not_supported(property: &str) -> Self {
        Self {
            kind: CameraErrorKind::PropertyNotSupported,
            message: format!("Property \"{property}\" is not supported by this camera"),
        }
    }

    /// `location` names the operation that required an opened camera.
    pub fn camera_not_opened(location: &str) -> Self {
        Self {
            kind: CameraErrorKind::CameraNotOpened,
            message: format!("Camera is not opened in {location}"),
        }
    }

    pub fn device_not_found(device_path: &str) -> Self {
        Self {
            kind: CameraErrorKind::DeviceNotFound,
            message: format!("Camera device not found: {device_path}"),
        }
    }

    pub fn subsystem(message: impl Into<String>) -> Self {
        Self {
            kind: CameraErrorKind::SubsystemError,
            message: format!("Media subsystem error: {}", message.into()),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: CameraErrorKind::ConfigError,
            message: format!("Configuration error: {}", message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_formatted_at_construction() {
        let error = CameraError::property_not_supported("Exposure");
        assert_eq!(error.kind(), CameraErrorKind::PropertyNotSupported);
        assert_eq!(
            error.to_string(),
            "Property \"Exposure\" is not supported by this camera"
        );
    }

    #[test]
    fn test_camera_not_opened_carries_location() {
        let error = CameraError::camera_not_opened("get_frame()");
        assert_eq!(error.kind(), CameraErrorKind::CameraNotOpened);
        assert!(error.message().contains("get_frame()"));
    }
}
