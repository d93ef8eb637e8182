//! Checks an existing iconset directory against a size table

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tileglow_config::{SizeSpec, MANIFEST_FILE_NAME};
use tracing::{debug, warn};

use crate::error::IconsetError;
use crate::manifest::{build_manifest, Manifest};

/// An image whose pixel dimensions disagree with its table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeMismatch {
    pub file_name: String,
    pub expected: u32,
    pub actual: (u32, u32),
}

/// Findings of [`verify_iconset`]; empty lists mean the directory is complete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Expected files that are absent (includes the manifest)
    pub missing: Vec<String>,
    /// Files present that are not part of the iconset
    pub unexpected: Vec<String>,
    pub wrong_size: Vec<SizeMismatch>,
    /// Manifest exists and equals the one built from the size table
    pub manifest_matches: bool,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
            && self.unexpected.is_empty()
            && self.wrong_size.is_empty()
            && self.manifest_matches
    }
}

/// Inspect `dir` and report how it differs from the iconset for `sizes`
///
/// Only I/O and PNG decoding failures are errors; everything else is
/// reported as a finding.
pub fn verify_iconset(dir: &Path, sizes: &[SizeSpec]) -> Result<VerifyReport, IconsetError> {
    let read_err = |source| IconsetError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut present = BTreeSet::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        present.insert(entry.file_name().to_string_lossy().into_owned());
    }

    let mut expected: BTreeSet<String> = sizes.iter().map(|s| s.file_name.to_string()).collect();
    expected.insert(MANIFEST_FILE_NAME.to_string());

    let mut report = VerifyReport {
        missing: expected.difference(&present).cloned().collect(),
        unexpected: present.difference(&expected).cloned().collect(),
        ..VerifyReport::default()
    };

    for spec in sizes.iter().filter(|s| present.contains(s.file_name)) {
        let path = dir.join(spec.file_name);
        let actual = image::image_dimensions(&path)
            .map_err(|source| IconsetError::Decode { path, source })?;
        if actual != (spec.pixel_size, spec.pixel_size) {
            report.wrong_size.push(SizeMismatch {
                file_name: spec.file_name.to_string(),
                expected: spec.pixel_size,
                actual,
            });
        }
    }

    if present.contains(MANIFEST_FILE_NAME) {
        let path = dir.join(MANIFEST_FILE_NAME);
        let text = fs::read_to_string(&path).map_err(|source| IconsetError::Read {
            path: path.clone(),
            source,
        })?;
        report.manifest_matches = match Manifest::from_json(&text) {
            Ok(manifest) => manifest == build_manifest(sizes),
            Err(e) => {
                warn!("Unreadable manifest {}: {}", path.display(), e);
                false
            }
        };
    }

    for name in &report.missing {
        warn!("Missing {}", name);
    }
    for name in &report.unexpected {
        warn!("Unexpected file {}", name);
    }
    for mismatch in &report.wrong_size {
        warn!(
            "{} is {}x{}, expected {}x{}",
            mismatch.file_name,
            mismatch.actual.0,
            mismatch.actual.1,
            mismatch.expected,
            mismatch.expected
        );
    }
    debug!("verify_iconset: {} ok={}", dir.display(), report.is_ok());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::write_iconset_with;
    use tileglow_config::{GeneratorConfig, Scale};

    const SMALL: [SizeSpec; 2] = [
        SizeSpec::new(16, Scale::X1, "icon_16x16.png"),
        SizeSpec::new(32, Scale::X2, "icon_16x16@2x.png"),
    ];

    fn written() -> (tempfile::TempDir, GeneratorConfig) {
        let tmp = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::new(tmp.path().join("AppIcon.appiconset"));
        write_iconset_with(&config, &SMALL).unwrap();
        (tmp, config)
    }

    #[test]
    fn test_fresh_iconset_verifies() {
        let (_tmp, config) = written();
        let report = verify_iconset(&config.output_dir, &SMALL).unwrap();
        assert!(report.is_ok(), "{report:?}");
    }

    #[test]
    fn test_missing_and_stray_files() {
        let (_tmp, config) = written();
        fs::remove_file(config.output_dir.join("icon_16x16.png")).unwrap();
        fs::write(config.output_dir.join("notes.txt"), b"hi").unwrap();

        let report = verify_iconset(&config.output_dir, &SMALL).unwrap();
        assert_eq!(report.missing, vec!["icon_16x16.png".to_string()]);
        assert_eq!(report.unexpected, vec!["notes.txt".to_string()]);
        assert!(report.manifest_matches);
        assert!(!report.is_ok());
    }

    #[test]
    fn test_wrong_dimensions() {
        let (_tmp, config) = written();
        // Swap the two images
        let a = config.output_dir.join("icon_16x16.png");
        let b = config.output_dir.join("icon_16x16@2x.png");
        let tmp_path = config.output_dir.join("swap");
        fs::rename(&a, &tmp_path).unwrap();
        fs::rename(&b, &a).unwrap();
        fs::rename(&tmp_path, &b).unwrap();

        let report = verify_iconset(&config.output_dir, &SMALL).unwrap();
        assert_eq!(report.wrong_size.len(), 2);
        assert_eq!(report.wrong_size[0].file_name, "icon_16x16.png");
        assert_eq!(report.wrong_size[0].actual, (32, 32));
    }

    #[test]
    fn test_manifest_mismatch() {
        let (_tmp, config) = written();
        let report = verify_iconset(&config.output_dir, &SMALL[..1]).unwrap();
        assert!(!report.manifest_matches);
        assert_eq!(report.unexpected, vec!["icon_16x16@2x.png".to_string()]);

        fs::write(config.manifest_path(), "{ not json").unwrap();
        let report = verify_iconset(&config.output_dir, &SMALL).unwrap();
        assert!(!report.manifest_matches);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = verify_iconset(&tmp.path().join("nope"), &SMALL);
        assert!(matches!(result, Err(IconsetError::Read { .. })));
    }
}
