//! `Contents.json` for an `AppIcon.appiconset`

use serde::{Deserialize, Serialize};
use tileglow_config::{MANIFEST_AUTHOR, MANIFEST_IDIOM, MANIFEST_VERSION, Scale, SizeSpec};

/// One image slot in the asset catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub filename: String,
    pub idiom: String,
    pub scale: Scale,
    /// Logical size in points, formatted "WxH"
    pub size: String,
}

impl ManifestEntry {
    pub fn from_spec(spec: &SizeSpec) -> Self {
        let logical = spec.logical_size();
        Self {
            filename: spec.file_name.to_string(),
            idiom: MANIFEST_IDIOM.to_string(),
            scale: spec.scale,
            size: format!("{logical}x{logical}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: MANIFEST_AUTHOR.to_string(),
            version: MANIFEST_VERSION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestEntry>,
    pub info: ManifestInfo,
}

impl Manifest {
    /// Pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Build the manifest for a size table, preserving table order
pub fn build_manifest(sizes: &[SizeSpec]) -> Manifest {
    Manifest {
        images: sizes.iter().map(ManifestEntry::from_spec).collect(),
        info: ManifestInfo::default(),
    }
}
