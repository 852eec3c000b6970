#[cfg(test)]
mod error_tests {
    use std::error::Error;
    use wincamera::errors::{CameraError, CameraErrorKind};

    #[test]
    fn test_property_not_supported() {
        let error = CameraError::property_not_supported("White Balance");
        assert_eq!(error.kind(), CameraErrorKind::PropertyNotSupported);
        assert!(error.to_string().contains("White Balance"));
        assert!(error.to_string().contains("not supported"));
    }

    #[test]
    fn test_camera_not_opened() {
        let error = CameraError::camera_not_opened("start_capture()");
        assert_eq!(error.kind(), CameraErrorKind::CameraNotOpened);
        assert_eq!(
            error.to_string(),
            "Camera is not opened in start_capture()"
        );
    }

    #[test]
    fn test_device_not_found() {
        let error = CameraError::device_not_found("usb#missing");
        assert_eq!(error.kind(), CameraErrorKind::DeviceNotFound);
        assert!(error.to_string().contains("usb#missing"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = CameraError::subsystem("init failed");
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("SubsystemError"));
        assert!(debug_str.contains("init failed"));
    }

    #[test]
    fn test_error_implements_error_trait() {
        let error = CameraError::config("bad value");
        let _error_trait: &dyn Error = &error;
        assert!(error.source().is_none());
    }

    #[test]
    fn test_kind_drives_dispatch() {
        let errors = vec![
            CameraError::property_not_supported("Zoom"),
            CameraError::camera_not_opened("get_frame()"),
            CameraError::device_not_found("usb#cam9"),
            CameraError::subsystem("teardown race"),
            CameraError::config("missing section"),
        ];

        let kinds: Vec<CameraErrorKind> = errors.iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                CameraErrorKind::PropertyNotSupported,
                CameraErrorKind::CameraNotOpened,
                CameraErrorKind::DeviceNotFound,
                CameraErrorKind::SubsystemError,
                CameraErrorKind::ConfigError,
            ]
        );

        // Display output is the preformatted message, nothing more
        for error in &errors {
            assert_eq!(error.to_string(), error.message());
        }
    }
}
