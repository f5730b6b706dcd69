//! HTML site generation.
//!
//! Stage 3 of the build pipeline. Takes the staged manifest and generates the
//! final single-page site.
//!
//! ## Page Structure
//!
//! One `index.html`, sections in fixed order:
//!
//! - **Nav**: fixed bar with ripple-effect anchor links
//! - **Hero**: portrait + name with typing effect + CTA button
//! - **About**: markdown content with a one-shot reveal animation
//! - **Experience**: pinned horizontal timeline, or stacked parallax cards
//! - **Contact**: contact links + footer
//!
//! plus the decorative cursor-glow overlay.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base styles (colors/theme/motion vars injected
//!   ahead of it from config)
//! - `static/site.js`: scroll driver, typing, reveals, glow, ripples,
//!   timeline scrub
//!
//! All animation tuning reaches the page as data attributes, so the script
//! stays free of site-specific constants. The scrub math behind
//! `data-snap-points` and `data-shift-max` lives in [`crate::motion`].
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::ExperienceLayout;
use crate::motion;
use crate::slug::initials;
use crate::types::{
    AboutSection, AssetIndex, ContactLink, ExperienceEntry, Manifest, PageMeta, Profile,
    StagedAsset,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Sections reachable from the nav bar, in page order.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("About", "about"),
    ("Experience", "experience"),
    ("Contact", "contact"),
];

/// Vertical travel of parallax card content, in px from rest.
const CARD_PARALLAX_PX: u32 = 40;

pub fn generate(
    manifest_path: &Path,
    staged_dir: &Path,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    fs::create_dir_all(output_dir)?;
    copy_staged_assets(staged_dir, &output_dir.join("assets"))?;

    let page = render_page(&manifest);
    fs::write(output_dir.join("index.html"), page.into_string())?;

    Ok(())
}

/// Copy staged image files into the output assets directory.
fn copy_staged_assets(staged_dir: &Path, assets_dir: &Path) -> std::io::Result<()> {
    if !staged_dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(assets_dir)?;
    for entry in fs::read_dir(staged_dir)? {
        let entry = entry?;
        let path = entry.path();
        // Skip the stage manifest, copy everything else
        if path.is_file() && path.extension().map(|e| e != "json").unwrap_or(true) {
            fs::copy(&path, assets_dir.join(entry.file_name()))?;
        }
    }
    Ok(())
}

// ============================================================================
// Page assembly
// ============================================================================

/// Renders the complete single-page document.
pub fn render_page(manifest: &Manifest) -> Markup {
    let css = page_css(manifest);
    let motion_cfg = &manifest.config.motion;

    let experience = match manifest.config.experience.layout {
        ExperienceLayout::Timeline => render_timeline(
            &manifest.experience,
            &manifest.assets,
            manifest.config.experience.snap,
        ),
        ExperienceLayout::Cards => render_cards(&manifest.experience, &manifest.assets),
    };

    let content = html! {
        div.cursor-glow
            aria-hidden="true"
            data-stiffness=(motion_cfg.glow_stiffness)
            data-damping=(motion_cfg.glow_damping)
            data-mass=(motion_cfg.glow_mass) {}
        (render_nav())
        main {
            (render_hero(&manifest.profile, &manifest.assets, motion_cfg.typing_speed_ms))
            (render_about(&manifest.about))
            (experience)
            (render_contact(
                &manifest.contact,
                manifest.contact_note.as_deref(),
                &manifest.profile.name,
            ))
        }
        script { (PreEscaped(JS)) }
    };

    base_document(&manifest.meta, &css, motion_cfg, content)
}

/// Assemble the full stylesheet: config-derived custom properties ahead of
/// the embedded base styles.
fn page_css(manifest: &Manifest) -> String {
    let colors = crate::config::generate_color_css(&manifest.config.colors);
    let theme =
        crate::config::generate_theme_css(&manifest.config.theme, &manifest.config.motion);
    format!("{colors}\n\n{theme}\n\n{CSS_STATIC}")
}

/// Renders the base HTML document structure.
fn base_document(
    meta: &PageMeta,
    css: &str,
    motion_cfg: &crate::config::MotionConfig,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                @if !meta.keywords.is_empty() {
                    meta name="keywords" content=(meta.keywords.join(", "));
                }
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                meta property="og:type" content="website";
                style { (PreEscaped(css)) }
            }
            body data-scroll-lerp=(motion_cfg.scroll_lerp)
                data-ripple-duration=(motion_cfg.ripple_duration_ms)
                data-reveal-threshold=(motion_cfg.reveal_threshold) {
                (content)
            }
        }
    }
}

/// Renders the fixed navigation bar.
pub fn render_nav() -> Markup {
    html! {
        nav.site-nav {
            div.nav-inner {
                @for (label, id) in NAV_ITEMS {
                    a.nav-link.ripple href={ "#" (id) } { (label) }
                }
            }
        }
    }
}

// ============================================================================
// Section renderers
// ============================================================================

/// Renders the hero: portrait, typed name, headline, CTA.
///
/// Without a staged portrait the photo block degrades to an initials tile.
/// The name ships fully typed so the page reads without JavaScript; the
/// script clears and retypes it.
fn render_hero(profile: &Profile, assets: &AssetIndex, typing_speed_ms: u32) -> Markup {
    let duration = motion::typing_duration_ms(&profile.name, typing_speed_ms);
    html! {
        section.hero id="top" {
            div.hero-grid {
                @if let Some(portrait) = &assets.portrait {
                    div.hero-photo {
                        img src={ "assets/" (portrait.file_name) }
                            alt=(profile.name)
                            width=(portrait.width)
                            height=(portrait.height);
                    }
                } @else {
                    div.hero-photo-fallback aria-hidden="true" { (initials(&profile.name)) }
                }
                div.hero-intro {
                    h1.typing
                        data-text=(profile.name)
                        data-speed=(typing_speed_ms)
                        data-duration=(duration) {
                        span.typed { (profile.name) }
                        span.caret aria-hidden="true" { "|" }
                    }
                    p.headline { (profile.headline) }
                    a.cta.ripple href="#contact" { "Get in touch" }
                }
            }
        }
    }
}

/// Renders the about section from markdown content.
fn render_about(about: &AboutSection) -> Markup {
    let parser = Parser::new(&about.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    html! {
        section.about.reveal id="about" {
            div.section-inner {
                h2 { (about.title) }
                div.about-body {
                    (PreEscaped(body_html))
                }
            }
        }
    }
}

/// Renders the pinned timeline: vertical scroll scrubs the card track
/// horizontally, one viewport-wide card per entry, snap points between.
fn render_timeline(entries: &[ExperienceEntry], assets: &AssetIndex, snap: bool) -> Markup {
    let count = entries.len();
    let shift_max = -motion::track_shift_percent(1.0, count);
    let first_active = motion::active_card(0.0, count);

    html! {
        section.experience.timeline id="experience"
            style={ "--card-count: " (count) ";" }
            data-snap-points=(motion::format_snap_points(count))
            data-shift-max=(shift_max)
            data-snap[snap] {
            div.timeline-viewport {
                h2 { "Experience" }
                div.timeline-track {
                    @for entry in entries {
                        article.timeline-card id={ "exp-" (entry.slug) } {
                            (entry_card(entry, assets))
                        }
                    }
                }
                div.timeline-dots aria-hidden="true" {
                    @for idx in 0..count {
                        span.dot.is-active[idx == first_active] {}
                    }
                }
            }
        }
    }
}

/// Renders the stacked cards variant: parallax card content and a fixed
/// scroll progress bar.
fn render_cards(entries: &[ExperienceEntry], assets: &AssetIndex) -> Markup {
    html! {
        section.experience.cards id="experience" {
            div.section-inner {
                h2.reveal { "Experience" }
                div.card-stack {
                    @for entry in entries {
                        article.exp-card.reveal
                            id={ "exp-" (entry.slug) }
                            data-parallax=(CARD_PARALLAX_PX) {
                            (entry_card(entry, assets))
                        }
                    }
                }
            }
            div.scroll-progress aria-hidden="true" {
                span.scroll-progress-fill {}
            }
        }
    }
}

/// The card shared by both experience layouts: logo + role, company,
/// period, and the ordered bullet list.
fn entry_card(entry: &ExperienceEntry, assets: &AssetIndex) -> Markup {
    html! {
        div.card-pair {
            (entry_logo(entry, assets.logos.get(&entry.slug)))
            div.card-body {
                h3 { (entry.role) }
                p.card-company { (entry.company) }
                p.card-period { (entry.period) }
                ul.card-bullets {
                    @for bullet in &entry.bullets {
                        li { (bullet) }
                    }
                }
            }
        }
    }
}

/// Logo image, or an initials tile when the entry has no staged logo.
fn entry_logo(entry: &ExperienceEntry, asset: Option<&StagedAsset>) -> Markup {
    html! {
        @if let Some(asset) = asset {
            div.card-logo {
                img src={ "assets/" (asset.file_name) }
                    alt={ (entry.company) " logo" }
                    width=(asset.width)
                    height=(asset.height)
                    loading="lazy";
            }
        } @else {
            div.logo-fallback aria-hidden="true" { (initials(&entry.company)) }
        }
    }
}

/// Renders the contact section and footer.
fn render_contact(links: &[ContactLink], note: Option<&str>, owner: &str) -> Markup {
    html! {
        section.contact.reveal id="contact" {
            div.section-inner {
                h2 { "Let's connect" }
                @if let Some(note) = note {
                    p.contact-lede { (note) }
                }
                ul.contact-list {
                    @for link in links {
                        li {
                            a.contact-link
                                href=(link.href)
                                target=[link.is_external().then_some("_blank")]
                                rel=[link.is_external().then_some("noopener noreferrer")] {
                                span.contact-label { (link.label) }
                                span.contact-value { (link.value) }
                            }
                        }
                    }
                }
                footer.site-footer {
                    p { "© " (owner) ". All rights reserved." }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::test_helpers::count_occurrences;

    fn sample_entries() -> Vec<ExperienceEntry> {
        vec![
            ExperienceEntry {
                company: "North Foundry".into(),
                slug: "north-foundry".into(),
                role: "Growth Platform Engineer".into(),
                period: "February 2025 - August 2025".into(),
                bullets: vec![
                    "Built voice agent pipelines for logistics customers.".into(),
                    "Scaled annual revenue as a core early engineer.".into(),
                    "Led technical discovery for enterprise prospects.".into(),
                ],
                logo: Some("assets/logos/north-foundry.png".into()),
            },
            ExperienceEntry {
                company: "Hearthside Labs".into(),
                slug: "hearthside-labs".into(),
                role: "QA Engineer".into(),
                period: "September 2024 - February 2025".into(),
                bullets: vec!["Labeled numerical methods problems for model training.".into()],
                logo: None,
            },
            ExperienceEntry {
                company: "Quietwater".into(),
                slug: "quietwater".into(),
                role: "Growth Associate".into(),
                period: "August 2023 - September 2024".into(),
                bullets: vec!["Activated thousands of new marketplace sellers.".into()],
                logo: None,
            },
        ]
    }

    fn sample_manifest() -> Manifest {
        Manifest {
            meta: PageMeta {
                title: "Dana Webb | Software Engineer".into(),
                description: "Portfolio of Dana Webb".into(),
                keywords: vec!["Dana Webb".into(), "portfolio".into()],
            },
            profile: Profile {
                name: "Dana Webb".into(),
                headline: "Software Engineer".into(),
                photo: None,
            },
            about: AboutSection {
                title: "About".into(),
                body: "Hey, I'm **Dana**.".into(),
            },
            experience: sample_entries(),
            contact: vec![
                ContactLink {
                    label: "Email".into(),
                    value: "dana@example.com".into(),
                    href: "mailto:dana@example.com".into(),
                },
                ContactLink {
                    label: "LinkedIn".into(),
                    value: "linkedin.com/in/danawebb".into(),
                    href: "https://www.linkedin.com/in/danawebb".into(),
                },
            ],
            contact_note: Some("Always open to a chat.".into()),
            config: SiteConfig::default(),
            assets: AssetIndex::default(),
        }
    }

    #[test]
    fn page_contains_every_entry_field_exactly_once() {
        let html = render_page(&sample_manifest()).into_string();

        for entry in sample_entries() {
            assert_eq!(count_occurrences(&html, &entry.company), 1, "{}", entry.company);
            assert_eq!(count_occurrences(&html, &entry.role), 1, "{}", entry.role);
            assert_eq!(count_occurrences(&html, &entry.period), 1, "{}", entry.period);
            for bullet in &entry.bullets {
                assert_eq!(count_occurrences(&html, bullet), 1, "{bullet}");
            }
        }
    }

    #[test]
    fn entries_render_in_list_order() {
        let html = render_page(&sample_manifest()).into_string();
        let positions: Vec<usize> = sample_entries()
            .iter()
            .map(|e| html.find(&e.company).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn bullets_render_in_entry_order() {
        let entries = sample_entries();
        let html = entry_card(&entries[0], &AssetIndex::default()).into_string();
        let positions: Vec<usize> = entries[0]
            .bullets
            .iter()
            .map(|b| html.find(b.as_str()).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn nav_anchors_match_section_ids() {
        let html = render_page(&sample_manifest()).into_string();
        for (_, id) in NAV_ITEMS {
            assert_eq!(
                count_occurrences(&html, &format!("href=\"#{id}\"")),
                if *id == "contact" { 2 } else { 1 }, // CTA also targets contact
                "anchor #{id}"
            );
            assert_eq!(count_occurrences(&html, &format!("id=\"{id}\"")), 1, "section #{id}");
        }
    }

    #[test]
    fn hero_typing_contract() {
        let html = render_page(&sample_manifest()).into_string();
        // Target string emitted once as the typing source, once pre-typed.
        assert!(html.contains(r#"data-text="Dana Webb""#));
        assert!(html.contains(r#"data-speed="120""#));
        // (9 chars + 1) * 120ms
        assert!(html.contains(r#"data-duration="1200""#));
        assert!(html.contains(r#"<span class="typed">Dana Webb</span>"#));
    }

    #[test]
    fn hero_without_portrait_uses_initials() {
        let html = render_page(&sample_manifest()).into_string();
        assert!(html.contains("hero-photo-fallback"));
        assert!(html.contains(">DW<"));
    }

    #[test]
    fn hero_with_portrait_renders_dimensions() {
        let mut manifest = sample_manifest();
        manifest.assets.portrait = Some(StagedAsset {
            source_path: "assets/portrait.png".into(),
            file_name: "portrait-0a1b2c3d.png".into(),
            width: 640,
            height: 640,
        });
        let html = render_page(&manifest).into_string();
        assert!(html.contains(r#"src="assets/portrait-0a1b2c3d.png""#));
        assert!(html.contains(r#"width="640""#));
        assert!(!html.contains("hero-photo-fallback"));
    }

    #[test]
    fn timeline_scrub_attributes() {
        let html = render_page(&sample_manifest()).into_string();
        assert!(html.contains(r#"data-snap-points="0,0.5,1""#));
        assert!(html.contains(r#"data-shift-max="200""#));
        assert!(html.contains("--card-count: 3;"));
        assert!(html.contains("data-snap>"));
        // One dot per card, first active.
        assert_eq!(count_occurrences(&html, r#"<span class="dot"#), 3);
        assert_eq!(count_occurrences(&html, "dot is-active"), 1);
    }

    #[test]
    fn timeline_snap_disabled_by_config() {
        let mut manifest = sample_manifest();
        manifest.config.experience.snap = false;
        let html = render_page(&manifest).into_string();
        assert!(!html.contains("data-snap=\"\""));
        assert!(!html.contains("data-snap>"));
    }

    #[test]
    fn logo_fallback_shows_initials() {
        let entries = sample_entries();
        let html = entry_card(&entries[1], &AssetIndex::default()).into_string();
        assert!(html.contains("logo-fallback"));
        assert!(html.contains(">HL<"));
    }

    #[test]
    fn staged_logo_rendered_with_alt() {
        let entries = sample_entries();
        let mut assets = AssetIndex::default();
        assets.logos.insert(
            "north-foundry".into(),
            StagedAsset {
                source_path: "assets/logos/north-foundry.png".into(),
                file_name: "north-foundry-99aabbcc.png".into(),
                width: 320,
                height: 320,
            },
        );
        let html = entry_card(&entries[0], &assets).into_string();
        assert!(html.contains(r#"src="assets/north-foundry-99aabbcc.png""#));
        assert!(html.contains(r#"alt="North Foundry logo""#));
        assert!(!html.contains("logo-fallback"));
    }

    #[test]
    fn cards_layout_renders_parallax_stack() {
        let mut manifest = sample_manifest();
        manifest.config.experience.layout = ExperienceLayout::Cards;
        let html = render_page(&manifest).into_string();

        assert!(html.contains("card-stack"));
        assert!(html.contains(r#"data-parallax="40""#));
        assert!(html.contains("scroll-progress-fill"));
        assert!(!html.contains("timeline-track"));
        // The shared entry list feeds this variant too.
        assert_eq!(count_occurrences(&html, "North Foundry"), 1);
    }

    #[test]
    fn contact_links_and_note() {
        let html = render_page(&sample_manifest()).into_string();
        assert!(html.contains("Always open to a chat."));
        assert!(html.contains(r#"href="mailto:dana@example.com""#));
        // Only the web link opens in a new tab.
        assert_eq!(count_occurrences(&html, r#"target="_blank""#), 1);
        assert_eq!(count_occurrences(&html, r#"rel="noopener noreferrer""#), 1);
        assert!(html.contains("© Dana Webb. All rights reserved."));
    }

    #[test]
    fn about_markdown_converted() {
        let about = AboutSection {
            title: "About".into(),
            body: "This is **bold** and *italic*.".into(),
        };
        let html = render_about(&about).into_string();
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn base_document_includes_doctype_and_meta() {
        let html = render_page(&sample_manifest()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Dana Webb | Software Engineer</title>"));
        assert!(html.contains(r#"meta name="description" content="Portfolio of Dana Webb""#));
        assert!(html.contains(r#"content="Dana Webb, portfolio""#));
        assert!(html.contains(r#"property="og:title""#));
    }

    #[test]
    fn motion_settings_reach_body_and_glow() {
        let html = render_page(&sample_manifest()).into_string();
        assert!(html.contains(r#"data-scroll-lerp="0.1""#));
        assert!(html.contains(r#"data-ripple-duration="600""#));
        assert!(html.contains(r#"data-reveal-threshold="0.3""#));
        assert!(html.contains(r#"data-stiffness="200""#));
        assert!(html.contains(r#"data-damping="30""#));
        assert!(html.contains(r#"data-mass="0.5""#));
    }

    #[test]
    fn page_embeds_styles_and_script() {
        let html = render_page(&sample_manifest()).into_string();
        assert!(html.contains("--color-bg: #faf8f2"));
        assert!(html.contains(".cursor-glow"));
        assert!(html.contains("requestAnimationFrame"));
    }

    #[test]
    fn html_escape_in_maud() {
        let mut manifest = sample_manifest();
        manifest.profile.name = "<script>alert('xss')</script>".into();
        let html = render_hero(&manifest.profile, &manifest.assets, 120).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
