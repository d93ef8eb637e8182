//! Iconset writer
//!
//! Renders each entry of the size table, encodes it as PNG into the output
//! directory, then writes `Contents.json` next to the images. The first
//! failure aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use rayon::prelude::*;
use tileglow_config::{GeneratorConfig, SizeSpec, ICON_SIZES};
use tileglow_painting::{compose_icon, ComposeOptions};
use tracing::{debug, info};

use crate::error::IconsetError;
use crate::manifest::{build_manifest, Manifest};

/// One PNG written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub spec: SizeSpec,
    pub path: PathBuf,
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconsetReport {
    pub output_dir: PathBuf,
    pub icons: Vec<WrittenIcon>,
    pub manifest_path: PathBuf,
}

/// Write the full macOS iconset described by `config`
pub fn write_iconset(config: &GeneratorConfig) -> Result<IconsetReport, IconsetError> {
    write_iconset_with(config, &ICON_SIZES)
}

/// Write an iconset for an arbitrary size table
pub fn write_iconset_with(
    config: &GeneratorConfig,
    sizes: &[SizeSpec],
) -> Result<IconsetReport, IconsetError> {
    let output_dir = config.output_dir.clone();
    fs::create_dir_all(&output_dir).map_err(|source| IconsetError::CreateDir {
        path: output_dir.clone(),
        source,
    })?;

    let options = ComposeOptions::from(config);
    debug!(
        "write_iconset: dir={} sizes={} parallel={}",
        output_dir.display(),
        sizes.len(),
        config.parallel
    );

    let icons = if config.parallel {
        sizes
            .par_iter()
            .map(|spec| render_icon(&output_dir, spec, &options))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        sizes
            .iter()
            .map(|spec| render_icon(&output_dir, spec, &options))
            .collect::<Result<Vec<_>, _>>()?
    };

    let manifest_path = config.manifest_path();
    write_manifest(&build_manifest(sizes), &manifest_path)?;
    info!("Wrote {}", manifest_path.display());

    Ok(IconsetReport {
        output_dir,
        icons,
        manifest_path,
    })
}

/// Compose one size and save it as `<dir>/<file_name>`
pub fn render_icon(
    dir: &Path,
    spec: &SizeSpec,
    options: &ComposeOptions,
) -> Result<WrittenIcon, IconsetError> {
    let canvas = compose_icon(spec.pixel_size, options)?;
    let path = dir.join(spec.file_name);

    canvas
        .to_rgba_image()?
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| IconsetError::Encode {
            path: path.clone(),
            source,
        })?;

    info!("Wrote {}", path.display());
    Ok(WrittenIcon { spec: *spec, path })
}

/// Serialize `manifest` to `path`, replacing any existing file
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), IconsetError> {
    let json = manifest.to_json()?;
    fs::write(path, json).map_err(|source| IconsetError::Write {
        path: path.to_path_buf(),
        source,
    })
}
