//! Shared types used across all pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → assets → generate)
//! and must be identical across all three modules. The experience list is
//! defined once here and shared by every presentational variant that renders
//! it — the timeline and the cards layout draw from the same entries.

use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Manifest passed between pipeline stages.
///
/// Stage 1 (scan) fills everything except [`Manifest::assets`], which stays
/// empty until stage 2 (assets) has verified and staged the image files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub meta: PageMeta,
    pub profile: Profile,
    pub about: AboutSection,
    pub experience: Vec<ExperienceEntry>,
    pub contact: Vec<ContactLink>,
    /// Optional lede paragraph above the contact links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_note: Option<String>,
    pub config: SiteConfig,
    #[serde(default, skip_serializing_if = "AssetIndex::is_empty")]
    pub assets: AssetIndex,
}

/// Document head metadata: `<title>`, description, keywords, OpenGraph tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// The site owner's identity, shown in the hero section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Full name, revealed character-by-character by the typing effect.
    pub name: String,
    /// One-line subheadline under the name.
    pub headline: String,
    /// Portrait image path relative to the content root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// The about section: markdown body with the title lifted from its
/// first `# heading` (falls back to "About").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutSection {
    pub title: String,
    /// Raw markdown body content.
    pub body: String,
}

/// A single employment position.
///
/// Entries are hand-authored in `site.toml` and immutable from there on:
/// never created, mutated, or destroyed at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    /// URL-safe identifier derived from the company name. Unique per site;
    /// used for card anchors and staged logo filenames.
    pub slug: String,
    pub role: String,
    /// Free-text time period, e.g. "February 2025 - August 2025".
    pub period: String,
    /// Ordered bullet-point descriptions. At least one per entry.
    pub bullets: Vec<String>,
    /// Logo image path relative to the content root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// A contact method rendered in the contact section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    /// Human-readable value, e.g. "someone@example.com".
    pub value: String,
    pub href: String,
}

impl ContactLink {
    /// Web links open in a new tab; `mailto:`/`tel:` links don't.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

/// Image assets staged by stage 2, keyed for lookup during HTML generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetIndex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<StagedAsset>,
    /// Logo assets keyed by experience entry slug.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub logos: BTreeMap<String, StagedAsset>,
}

impl AssetIndex {
    pub fn is_empty(&self) -> bool {
        self.portrait.is_none() && self.logos.is_empty()
    }
}

/// A verified image asset with its content-hashed output filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagedAsset {
    /// Original path relative to the content root.
    pub source_path: String,
    /// Hashed filename in the staging directory, e.g. `scale-ai-1f0a9c2d.jpeg`.
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}
