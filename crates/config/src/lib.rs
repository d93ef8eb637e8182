//! Shared configuration for tileglow
//!
//! This crate provides the single source of truth for the icon size table,
//! the asset-catalog constants written into `Contents.json`, and the
//! generator settings shared by the library crates and the CLI.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "tile_3/Assets.xcassets/AppIcon.appiconset";

/// File name of the asset-catalog manifest
pub const MANIFEST_FILE_NAME: &str = "Contents.json";

/// Platform idiom written for every manifest entry
pub const MANIFEST_IDIOM: &str = "mac";

/// Author tag in the manifest `info` block
pub const MANIFEST_AUTHOR: &str = "xcode";

/// Manifest format version
pub const MANIFEST_VERSION: u32 = 1;

/// Pixel density of an icon image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    #[serde(rename = "1x")]
    X1,
    #[serde(rename = "2x")]
    X2,
}

impl Scale {
    /// Tag as written in the manifest ("1x" / "2x")
    pub fn as_str(self) -> &'static str {
        match self {
            Scale::X1 => "1x",
            Scale::X2 => "2x",
        }
    }

    /// Pixels per logical point
    pub fn factor(self) -> u32 {
        match self {
            Scale::X1 => 1,
            Scale::X2 => 2,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the icon size table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    /// Width and height of the image in pixels
    pub pixel_size: u32,
    /// Density the image is rendered for
    pub scale: Scale,
    /// Output file name inside the iconset directory
    pub file_name: &'static str,
}

impl SizeSpec {
    pub const fn new(pixel_size: u32, scale: Scale, file_name: &'static str) -> Self {
        Self {
            pixel_size,
            scale,
            file_name,
        }
    }

    /// Size in points, i.e. the pixel size divided by the scale factor
    pub fn logical_size(&self) -> u32 {
        self.pixel_size / self.scale.factor()
    }
}

/// All images required by a macOS `AppIcon.appiconset`, in catalog order
pub const ICON_SIZES: [SizeSpec; 10] = [
    SizeSpec::new(16, Scale::X1, "icon_16x16.png"),
    SizeSpec::new(32, Scale::X2, "icon_16x16@2x.png"),
    SizeSpec::new(32, Scale::X1, "icon_32x32.png"),
    SizeSpec::new(64, Scale::X2, "icon_32x32@2x.png"),
    SizeSpec::new(128, Scale::X1, "icon_128x128.png"),
    SizeSpec::new(256, Scale::X2, "icon_128x128@2x.png"),
    SizeSpec::new(256, Scale::X1, "icon_256x256.png"),
    SizeSpec::new(512, Scale::X2, "icon_256x256@2x.png"),
    SizeSpec::new(512, Scale::X1, "icon_512x512.png"),
    SizeSpec::new(1024, Scale::X2, "icon_512x512@2x.png"),
];

/// How the outer glow around the content border is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlowStyle {
    /// Nested translucent outlines drawn straight onto the canvas
    #[default]
    Layered,
    /// The same outlines on a separate layer, Gaussian-blurred and composited underneath
    Blur,
}

impl GlowStyle {
    /// Parse from a CLI / config string
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "layered" => Some(Self::Layered),
            "blur" => Some(Self::Blur),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for one generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory the PNGs and manifest are written into
    pub output_dir: PathBuf,
    /// Glow rendering style
    pub glow: GlowStyle,
    /// Render sizes on the rayon pool instead of sequentially
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            glow: GlowStyle::default(),
            parallel: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a config writing into `output_dir` with default settings
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Path of the manifest inside the output directory
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(MANIFEST_FILE_NAME)
    }
}
