//! Content loading and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads the hand-authored content files and
//! produces a structured manifest that subsequent stages consume.
//!
//! ## Content Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Presentation config (optional)
//! ├── site.toml                    # Identity, contact links, experience
//! ├── about.md                     # About section markdown
//! └── assets/                      # Portrait + company logos
//!     ├── portrait.jpeg
//!     └── logos/
//!         ├── happyrobot.jpeg
//!         └── ...
//! ```
//!
//! ## Validation
//!
//! The scanner enforces these rules:
//! - Profile name must be non-empty (it drives the hero typing effect)
//! - At least one experience entry
//! - Every entry has at least one bullet
//! - Company names must produce unique, non-empty slugs
//! - Contact links must carry a label and an href
//!
//! Asset *references* are taken at face value here; whether the files exist
//! is stage 2's concern, and a missing file degrades the page rather than
//! failing the build.

use crate::config;
use crate::slug::slugify;
use crate::types::{
    AboutSection, AssetIndex, ContactLink, ExperienceEntry, Manifest, PageMeta, Profile,
};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error in site.toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Required content file missing: {0}")]
    Missing(PathBuf),
    #[error("profile.name must not be empty")]
    EmptyName,
    #[error("site.toml defines no [[experience]] entries")]
    NoExperience,
    #[error("Experience entry '{0}' has no bullets")]
    NoBullets(String),
    #[error("Company name '{0}' does not produce a usable slug")]
    UnusableCompanyName(String),
    #[error("Duplicate company '{0}' in experience list")]
    DuplicateCompany(String),
    #[error("Contact link '{0}' has an empty href")]
    EmptyContactHref(String),
}

// Raw deserialization targets for site.toml. Unknown keys are rejected,
// same policy as config.toml.

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SiteFile {
    profile: ProfileSection,
    #[serde(default)]
    meta: Option<MetaSection>,
    #[serde(default)]
    contact: Vec<ContactSection>,
    /// Lede paragraph above the contact links.
    #[serde(default)]
    contact_note: Option<String>,
    #[serde(default)]
    experience: Vec<EntrySection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileSection {
    name: String,
    headline: String,
    #[serde(default)]
    photo: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MetaSection {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContactSection {
    label: String,
    value: String,
    href: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntrySection {
    company: String,
    role: String,
    period: String,
    bullets: Vec<String>,
    #[serde(default)]
    logo: Option<String>,
}

/// Scan the content root into a manifest.
///
/// Reads `config.toml` (stock defaults if absent), `site.toml` (required)
/// and `about.md` (required), validates the result, and returns a manifest
/// with an empty asset index for stage 2 to fill.
pub fn scan(root: &Path) -> Result<Manifest, ContentError> {
    let site_config = config::load_config(root)?;

    let site_path = root.join("site.toml");
    if !site_path.exists() {
        return Err(ContentError::Missing(site_path));
    }
    let site: SiteFile = toml::from_str(&fs::read_to_string(&site_path)?)?;

    let about_path = root.join("about.md");
    if !about_path.exists() {
        return Err(ContentError::Missing(about_path));
    }
    let about = parse_about(&fs::read_to_string(&about_path)?);

    let profile = Profile {
        name: site.profile.name.trim().to_string(),
        headline: site.profile.headline.trim().to_string(),
        photo: site.profile.photo,
    };
    if profile.name.is_empty() {
        return Err(ContentError::EmptyName);
    }

    let experience = build_experience(site.experience)?;

    let contact = site
        .contact
        .into_iter()
        .map(|c| {
            if c.href.trim().is_empty() {
                return Err(ContentError::EmptyContactHref(c.label));
            }
            Ok(ContactLink {
                label: c.label,
                value: c.value,
                href: c.href,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let meta = resolve_meta(site.meta, &profile);

    Ok(Manifest {
        meta,
        profile,
        about,
        experience,
        contact,
        contact_note: site.contact_note,
        config: site_config,
        assets: AssetIndex::default(),
    })
}

fn build_experience(raw: Vec<EntrySection>) -> Result<Vec<ExperienceEntry>, ContentError> {
    if raw.is_empty() {
        return Err(ContentError::NoExperience);
    }

    let mut seen = BTreeSet::new();
    let mut entries = Vec::with_capacity(raw.len());
    for entry in raw {
        let slug = slugify(&entry.company);
        if slug.is_empty() {
            return Err(ContentError::UnusableCompanyName(entry.company));
        }
        if !seen.insert(slug.clone()) {
            return Err(ContentError::DuplicateCompany(entry.company));
        }
        let bullets: Vec<String> = entry
            .bullets
            .into_iter()
            .filter(|b| !b.trim().is_empty())
            .collect();
        if bullets.is_empty() {
            return Err(ContentError::NoBullets(entry.company));
        }
        entries.push(ExperienceEntry {
            company: entry.company,
            slug,
            role: entry.role,
            period: entry.period,
            bullets,
            logo: entry.logo,
        });
    }
    Ok(entries)
}

/// Split `about.md` into a section title and markdown body.
///
/// The first `# heading` becomes the section title and is removed from the
/// body, since the rendered section carries the title as its own `<h2>`.
/// Without a heading the title falls back to "About".
fn parse_about(markdown: &str) -> AboutSection {
    for (idx, line) in markdown.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(title) = trimmed.strip_prefix("# ") {
            let body = markdown
                .lines()
                .enumerate()
                .filter(|(i, _)| *i != idx)
                .map(|(_, l)| l)
                .collect::<Vec<_>>()
                .join("\n");
            return AboutSection {
                title: title.trim().to_string(),
                body: body.trim().to_string(),
            };
        }
        // Only scan leading blank lines for the heading
        if !trimmed.is_empty() {
            break;
        }
    }
    AboutSection {
        title: "About".to_string(),
        body: markdown.trim().to_string(),
    }
}

/// Fill in page metadata, deriving defaults from the profile.
fn resolve_meta(meta: Option<MetaSection>, profile: &Profile) -> PageMeta {
    let meta = meta.unwrap_or(MetaSection {
        title: None,
        description: None,
        keywords: Vec::new(),
    });
    let title = meta
        .title
        .unwrap_or_else(|| format!("{} | {}", profile.name, profile.headline));
    let description = meta
        .description
        .unwrap_or_else(|| format!("Portfolio of {} - {}", profile.name, profile.headline));
    let keywords = if meta.keywords.is_empty() {
        vec![profile.name.clone(), profile.headline.clone()]
    } else {
        meta.keywords
    };
    PageMeta {
        title,
        description,
        keywords,
    }
}
