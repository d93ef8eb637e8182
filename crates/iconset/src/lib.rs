//! Asset-catalog output for tileglow
//!
//! - [`manifest`] - `Contents.json` model and builder
//! - [`writer`] - Renders every size and writes PNGs plus the manifest
//! - [`verify`] - Checks an existing iconset directory against the size table

pub mod error;
pub mod manifest;
pub mod verify;
pub mod writer;

pub use error::IconsetError;
pub use manifest::{build_manifest, Manifest, ManifestEntry, ManifestInfo};
pub use verify::{verify_iconset, SizeMismatch, VerifyReport};
pub use writer::{render_icon, write_iconset, write_iconset_with, write_manifest, IconsetReport, WrittenIcon};
