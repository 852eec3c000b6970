//! Configuration management for wincamera
//!
//! Provides configuration loading, saving, and validation for the preferred
//! capture format, frame delivery defaults, and storage locations.

use crate::errors::CameraError;
use crate::types::{CameraResolution, ChannelOrder, FrameSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinCameraConfig {
    pub camera: CameraConfig,
    pub storage: StorageConfig,
}

/// Camera-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Preferred capture resolution [width, height]
    pub preferred_resolution: [u32; 2],
    /// Bytes per pixel of the preferred format
    pub preferred_byte_per_pixel: u32,
    /// Flip frames vertically on delivery
    pub flip_vertical: bool,
    /// Deliver frames as RGB instead of the native BGR
    pub deliver_rgb: bool,
}

/// Storage and file management configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Default output directory for captures
    pub output_directory: String,
    /// Default image format (jpeg, png, bmp)
    pub default_format: String,
}

impl Default for WinCameraConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig {
                preferred_resolution: [1920, 1080],
                preferred_byte_per_pixel: 3,
                flip_vertical: false,
                deliver_rgb: false,
            },
            storage: StorageConfig {
                output_directory: "./captures".to_string(),
                default_format: "jpeg".to_string(),
            },
        }
    }
}

impl WinCameraConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CameraError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| CameraError::config(format!("Failed to read config file: {}", e)))?;

        let config: WinCameraConfig = toml::from_str(&contents)
            .map_err(|e| CameraError::config(format!("Failed to parse config file: {}", e)))?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CameraError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CameraError::config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| CameraError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, toml_string)
            .map_err(|e| CameraError::config(format!("Failed to write config file: {}", e)))?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("wincamera.toml")
    }

    /// Load from default location or create with defaults
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// The frame settings this configuration asks the capture layer for.
    pub fn frame_settings(&self) -> FrameSettings {
        let [width, height] = self.camera.preferred_resolution;
        let order = if self.camera.deliver_rgb {
            ChannelOrder::Rgb
        } else {
            ChannelOrder::Bgr
        };
        FrameSettings::new(CameraResolution::new(
            width,
            height,
            self.camera.preferred_byte_per_pixel,
        ))
        .with_flip_vertical(self.camera.flip_vertical)
        .with_channel_order(order)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.camera.preferred_resolution[0] == 0 || self.camera.preferred_resolution[1] == 0 {
            return Err("Invalid preferred resolution".to_string());
        }
        if self.camera.preferred_byte_per_pixel == 0 || self.camera.preferred_byte_per_pixel > 8 {
            return Err("Bytes per pixel must be between 1 and 8".to_string());
        }
        if self.storage.output_directory.is_empty() {
            return Err("Output directory must not be empty".to_string());
        }
        match self.storage.default_format.as_str() {
            "jpeg" | "png" | "bmp" => Ok(()),
            other => Err(format!("Unsupported image format: {}", other)),
        }
    }
}
