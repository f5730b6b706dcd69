//! Shared test utilities for the simple-folio test suite.
//!
//! Provides fixture setup and lookup helpers for scan-phase data structures.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let entry = find_entry(&manifest, "North Foundry");
//! assert_eq!(entry.bullets.len(), 3);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{ExperienceEntry, Manifest};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and synthesize the image
/// assets it references.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures. Images are generated rather than checked in, so
/// the repository stays free of binary files.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();

    write_test_image(&tmp.path().join("assets/portrait.png"), 640, 640);
    write_test_image(&tmp.path().join("assets/logos/north-foundry.png"), 320, 320);
    write_test_image(&tmp.path().join("assets/logos/hearthside-labs.png"), 320, 320);
    tmp
}

/// A minimal content root with the given `site.toml` and a stub `about.md`.
pub fn fixture_with_site_toml(site_toml: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("site.toml"), site_toml).unwrap();
    std::fs::write(tmp.path().join("about.md"), "# About\n\nHello.\n").unwrap();
    tmp
}

/// Write a solid-color PNG of the given size, creating parent directories.
pub fn write_test_image(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([120, 120, 140]));
    img.save(path).unwrap();
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find an experience entry by company name. Panics if not found.
pub fn find_entry<'a>(manifest: &'a Manifest, company: &str) -> &'a ExperienceEntry {
    manifest
        .experience
        .iter()
        .find(|e| e.company == company)
        .unwrap_or_else(|| {
            let companies = entry_companies(manifest);
            panic!("entry '{company}' not found. Available: {companies:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All company names in manifest order.
pub fn entry_companies(manifest: &Manifest) -> Vec<&str> {
    manifest
        .experience
        .iter()
        .map(|e| e.company.as_str())
        .collect()
}

/// All contact labels in manifest order.
pub fn contact_labels(manifest: &Manifest) -> Vec<&str> {
    manifest.contact.iter().map(|c| c.label.as_str()).collect()
}

// =========================================================================
// Rendering assertions
// =========================================================================

/// Count non-overlapping occurrences of `needle` in `haystack`.
///
/// Used for the "exactly once" rendering contract of experience content.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}
