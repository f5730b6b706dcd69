//! Image asset staging.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest, verifies the
//! image files it references (portrait, company logos), and copies them into
//! the staging directory under content-hashed filenames.
//!
//! ## Why content-hashed filenames
//!
//! Staged files are named `<slug>-<hash8>.<ext>`, where `hash8` is the first
//! eight hex digits of the file's SHA-256. Replacing an image changes its
//! URL, so a deployed site never serves a stale cached logo.
//!
//! ## Degradation over failure
//!
//! A referenced file that is missing or unreadable as an image is reported
//! as an event and skipped; the build continues and the generator renders a
//! placeholder in its place. Nothing in this stage is fatal beyond plain IO
//! errors on the staging directory itself.

use crate::types::{AssetIndex, Manifest, StagedAsset};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-asset outcome, consumed by the CLI output formatter.
#[derive(Debug, Clone)]
pub enum AssetEvent {
    Staged {
        label: String,
        source_path: String,
        file_name: String,
        width: u32,
        height: u32,
    },
    Missing {
        label: String,
        source_path: String,
    },
    Unreadable {
        label: String,
        source_path: String,
        reason: String,
    },
    /// A file under `assets/` that nothing in site.toml references.
    Unused { source_path: String },
}

/// Result of the staging stage.
pub struct StageResult {
    /// The input manifest with its asset index filled in.
    pub manifest: Manifest,
    pub events: Vec<AssetEvent>,
}

/// Verify and stage all image assets referenced by the manifest.
///
/// Reads the stage-1 manifest from `manifest_path`, resolves asset paths
/// against `source_root`, and writes staged copies into `staged_dir`.
pub fn stage(
    manifest_path: &Path,
    source_root: &Path,
    staged_dir: &Path,
) -> Result<StageResult, AssetError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let mut manifest: Manifest = serde_json::from_str(&manifest_content)?;

    fs::create_dir_all(staged_dir)?;

    let mut events = Vec::new();
    let mut referenced = BTreeSet::new();
    let mut index = AssetIndex::default();

    if let Some(photo) = manifest.profile.photo.clone() {
        referenced.insert(source_root.join(&photo));
        index.portrait =
            stage_one("portrait", "portrait", &photo, source_root, staged_dir, &mut events)?;
    }

    for entry in &manifest.experience {
        let Some(logo) = entry.logo.clone() else {
            continue;
        };
        referenced.insert(source_root.join(&logo));
        let staged = stage_one(
            &entry.company,
            &entry.slug,
            &logo,
            source_root,
            staged_dir,
            &mut events,
        )?;
        if let Some(asset) = staged {
            index.logos.insert(entry.slug.clone(), asset);
        }
    }

    report_unused(source_root, &referenced, &mut events);

    manifest.assets = index;
    Ok(StageResult { manifest, events })
}

/// Stage a single image file. Returns `None` (with an event) when the file
/// is missing or not a decodable image.
fn stage_one(
    label: &str,
    slug: &str,
    relative_path: &str,
    source_root: &Path,
    staged_dir: &Path,
    events: &mut Vec<AssetEvent>,
) -> Result<Option<StagedAsset>, AssetError> {
    let source = source_root.join(relative_path);
    if !source.is_file() {
        events.push(AssetEvent::Missing {
            label: label.to_string(),
            source_path: relative_path.to_string(),
        });
        return Ok(None);
    }

    let bytes = fs::read(&source)?;

    let probed = probe_image(&bytes);
    let (format, width, height) = match probed {
        Ok(p) => p,
        Err(reason) => {
            events.push(AssetEvent::Unreadable {
                label: label.to_string(),
                source_path: relative_path.to_string(),
                reason,
            });
            return Ok(None);
        }
    };

    let extension = format.extensions_str().first().copied().unwrap_or("img");
    let hash = format!("{:x}", Sha256::digest(&bytes));
    let file_name = format!("{slug}-{}.{extension}", &hash[..8]);
    fs::write(staged_dir.join(&file_name), &bytes)?;

    events.push(AssetEvent::Staged {
        label: label.to_string(),
        source_path: relative_path.to_string(),
        file_name: file_name.clone(),
        width,
        height,
    });

    Ok(Some(StagedAsset {
        source_path: relative_path.to_string(),
        file_name,
        width,
        height,
    }))
}

/// Sniff the image format and read its dimensions from the header, without
/// decoding pixel data.
fn probe_image(bytes: &[u8]) -> Result<(image::ImageFormat, u32, u32), String> {
    let format = image::guess_format(bytes).map_err(|e| e.to_string())?;
    let reader = image::ImageReader::with_format(Cursor::new(bytes), format);
    let (width, height) = reader.into_dimensions().map_err(|e| e.to_string())?;
    Ok((format, width, height))
}

/// Warn about files under `assets/` that nothing references.
fn report_unused(source_root: &Path, referenced: &BTreeSet<PathBuf>, events: &mut Vec<AssetEvent>) {
    let assets_dir = source_root.join("assets");
    if !assets_dir.is_dir() {
        return;
    }
    for entry in WalkDir::new(&assets_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        if !referenced.contains(entry.path()) {
            let relative = entry
                .path()
                .strip_prefix(source_root)
                .unwrap_or(entry.path());
            events.push(AssetEvent::Unused {
                source_path: relative.display().to_string(),
            });
        }
    }
}
