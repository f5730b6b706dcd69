//! CLI output formatting for all pipeline stages.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every entity (profile, experience entry, asset) is its semantic identity,
//! with filesystem paths shown as secondary context via indented `Source:`
//! lines.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! ## Scan
//!
//! ```text
//! Profile
//!     Dana Webb (Software Engineer)
//!     Source: site.toml
//! About: Who I Am
//!     Source: about.md
//! Experience (3 entries)
//! 001 North Foundry (3 bullets)
//!     Role: Software Engineer
//!     Period: February 2025 - August 2025
//!     Logo: assets/logos/north-foundry.png
//! Contact (2 links)
//! 001 Email: dana@example.com
//! ```
//!
//! ## Assets
//!
//! ```text
//! Assets
//! 001 portrait
//!     Source: assets/portrait.png
//!     Staged: portrait-ab12cd34.png (640x640)
//! 002 Hearthside Labs
//!     Source: assets/logos/hearthside.png
//!     Missing (placeholder will be rendered)
//! Staged 1, missing 1, unreadable 0
//! ```

use crate::assets::AssetEvent;
use crate::config::ExperienceLayout;
use crate::types::Manifest;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 North Foundry (3 bullets)
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

// ============================================================================
// Scan
// ============================================================================

pub fn format_scan_output(manifest: &Manifest, source: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Profile".to_string());
    lines.push(format!(
        "{}{} ({})",
        indent(1),
        manifest.profile.name,
        manifest.profile.headline
    ));
    lines.push(format!(
        "{}Source: {}",
        indent(1),
        source.join("site.toml").display()
    ));

    lines.push(format!("About: {}", manifest.about.title));
    lines.push(format!(
        "{}Source: {}",
        indent(1),
        source.join("about.md").display()
    ));

    lines.push(format!("Experience ({} entries)", manifest.experience.len()));
    for (idx, entry) in manifest.experience.iter().enumerate() {
        let detail = format!("{} bullets", entry.bullets.len());
        lines.push(entity_header(idx + 1, &entry.company, Some(&detail)));
        lines.push(format!("{}Role: {}", indent(1), entry.role));
        lines.push(format!("{}Period: {}", indent(1), entry.period));
        match &entry.logo {
            Some(logo) => lines.push(format!("{}Logo: {}", indent(1), logo)),
            None => lines.push(format!("{}Logo: none", indent(1))),
        }
    }

    lines.push(format!("Contact ({} links)", manifest.contact.len()));
    for (idx, link) in manifest.contact.iter().enumerate() {
        lines.push(entity_header(
            idx + 1,
            &format!("{}: {}", link.label, link.value),
            None,
        ));
    }

    lines
}

pub fn print_scan_output(manifest: &Manifest, source: &Path) {
    for line in format_scan_output(manifest, source) {
        println!("{}", line);
    }
}

// ============================================================================
// Assets
// ============================================================================

pub fn format_assets_output(events: &[AssetEvent]) -> Vec<String> {
    let mut lines = vec!["Assets".to_string()];
    let mut staged = 0usize;
    let mut missing = 0usize;
    let mut unreadable = 0usize;
    let mut unused = Vec::new();
    let mut index = 0usize;

    for event in events {
        match event {
            AssetEvent::Staged {
                label,
                source_path,
                file_name,
                width,
                height,
            } => {
                staged += 1;
                index += 1;
                lines.push(entity_header(index, label, None));
                lines.push(format!("{}Source: {}", indent(1), source_path));
                lines.push(format!(
                    "{}Staged: {} ({}x{})",
                    indent(1),
                    file_name,
                    width,
                    height
                ));
            }
            AssetEvent::Missing { label, source_path } => {
                missing += 1;
                index += 1;
                lines.push(entity_header(index, label, None));
                lines.push(format!("{}Source: {}", indent(1), source_path));
                lines.push(format!(
                    "{}Missing (placeholder will be rendered)",
                    indent(1)
                ));
            }
            AssetEvent::Unreadable {
                label,
                source_path,
                reason,
            } => {
                unreadable += 1;
                index += 1;
                lines.push(entity_header(index, label, None));
                lines.push(format!("{}Source: {}", indent(1), source_path));
                lines.push(format!("{}Unreadable: {}", indent(1), reason));
            }
            AssetEvent::Unused { source_path } => unused.push(source_path.clone()),
        }
    }

    if index == 0 {
        lines.push(format!("{}(no image assets referenced)", indent(1)));
    }

    if !unused.is_empty() {
        lines.push("Unused assets".to_string());
        for path in unused {
            lines.push(format!("{}{}", indent(1), path));
        }
    }

    lines.push(format!(
        "Staged {}, missing {}, unreadable {}",
        staged, missing, unreadable
    ));
    lines
}

pub fn print_assets_output(events: &[AssetEvent]) {
    for line in format_assets_output(events) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let layout = match manifest.config.experience.layout {
        ExperienceLayout::Timeline => "timeline",
        ExperienceLayout::Cards => "cards",
    };
    let asset_count =
        manifest.assets.logos.len() + usize::from(manifest.assets.portrait.is_some());

    vec![
        format!(
            "index.html ({} layout, {} experience cards)",
            layout,
            manifest.experience.len()
        ),
        format!("assets/ ({} files)", asset_count),
    ]
}

pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
