//! Path and string helpers for the capture layers.

use std::path::Path;

/// Lowercased file extension without the leading dot.
///
/// Returns `None` when the path has no extension (including dotfiles like
/// `.gitignore`, which `Path` treats as extensionless).
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Normalize a device name for comparison across enumeration backends.
///
/// Backends disagree on padding and embedded whitespace for the same physical
/// device; trimming and collapsing runs of whitespace gives a stable key.
pub fn normalize_device_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_extension_lowercased() {
        assert_eq!(
            file_extension(&PathBuf::from("capture/Frame01.JPG")),
            Some("jpg".to_string())
        );
        assert_eq!(
            file_extension(&PathBuf::from("clip.tar.gz")),
            Some("gz".to_string())
        );
    }

    #[test]
    fn test_file_extension_absent() {
        assert_eq!(file_extension(&PathBuf::from("README")), None);
        assert_eq!(file_extension(&PathBuf::from(".gitignore")), None);
    }

    #[test]
    fn test_normalize_device_name() {
        assert_eq!(
            normalize_device_name("  HD Pro   Webcam\tC920 "),
            "HD Pro Webcam C920"
        );
        assert_eq!(normalize_device_name(""), "");
    }
}
