//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. User values are
//! merged on top of stock defaults, so a config file only needs the keys it
//! wants to override. Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [experience]
//! layout = "timeline"       # "timeline" (pinned slideshow) or "cards"
//! snap = true               # snap between cards after scrolling settles
//!
//! [motion]
//! typing_speed_ms = 120     # per-character delay of the hero typing effect
//! ripple_duration_ms = 600  # lifetime of a button hover ripple
//! glow_size_px = 600        # diameter of the cursor glow
//! glow_stiffness = 200.0    # spring constants for the glow follower
//! glow_damping = 30.0
//! glow_mass = 0.5
//! scroll_lerp = 0.1         # per-frame smoothing factor of the scroll driver
//! reveal_threshold = 0.3    # visible fraction that triggers a section reveal
//!
//! [theme]
//! content_width = "72rem"   # max width of section content
//! card_radius = "1.5rem"    # corner radius of cards and the portrait
//!
//! [theme.section_pad]
//! size = "8vw"              # preferred vertical section padding
//! min = "4rem"              # minimum bound
//! max = "8rem"              # maximum bound
//!
//! [colors.light]
//! background = "#faf8f2"
//! surface = "#ffffff"
//! text = "#111827"
//! text_muted = "#6b7280"
//! border = "#e7e5e4"
//! accent = "#111827"
//! glow = "rgba(100, 116, 139, 0.15)"
//!
//! [colors.dark]
//! background = "#0c0a09"
//! surface = "#1c1917"
//! text = "#f5f5f4"
//! text_muted = "#a8a29e"
//! border = "#292524"
//! accent = "#fafaf9"
//! glow = "rgba(148, 163, 184, 0.12)"
//! ```
//!
//! The motion and color values become CSS custom properties and data
//! attributes in the generated page; the embedded JavaScript reads them from
//! there rather than carrying its own constants.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Layout settings (content width, padding, radii).
    pub theme: ThemeConfig,
    /// Animation timing and easing parameters.
    pub motion: MotionConfig,
    /// Experience section presentation.
    pub experience: ExperienceConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.motion;
        if m.typing_speed_ms == 0 || m.typing_speed_ms > 2000 {
            return Err(ConfigError::Validation(
                "motion.typing_speed_ms must be 1-2000".into(),
            ));
        }
        if m.ripple_duration_ms == 0 {
            return Err(ConfigError::Validation(
                "motion.ripple_duration_ms must be non-zero".into(),
            ));
        }
        if m.glow_stiffness <= 0.0 || m.glow_damping <= 0.0 || m.glow_mass <= 0.0 {
            return Err(ConfigError::Validation(
                "motion glow spring constants must be positive".into(),
            ));
        }
        if !(m.scroll_lerp > 0.0 && m.scroll_lerp <= 1.0) {
            return Err(ConfigError::Validation(
                "motion.scroll_lerp must be in (0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&m.reveal_threshold) {
            return Err(ConfigError::Validation(
                "motion.reveal_threshold must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

/// Experience section presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperienceConfig {
    /// Which presentational variant renders the (single, shared) entry list.
    pub layout: ExperienceLayout,
    /// Snap to the nearest card once timeline scrolling settles.
    pub snap: bool,
}

/// The two presentational variants of the experience section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLayout {
    /// Pinned section with a horizontally scrubbed slideshow.
    Timeline,
    /// Vertically stacked cards with parallax content and a progress bar.
    Cards,
}

impl Default for ExperienceLayout {
    fn default() -> Self {
        ExperienceLayout::Timeline
    }
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            layout: ExperienceLayout::default(),
            snap: true,
        }
    }
}

/// Animation timing and easing parameters.
///
/// Defaults match the reference motion design: 120 ms per typed character,
/// 600 ms ripples, a 600 px glow with a stiffness-200/damping-30/mass-0.5
/// spring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Per-character delay of the hero typing effect, in milliseconds.
    pub typing_speed_ms: u32,
    /// Lifetime of a button hover ripple, in milliseconds.
    pub ripple_duration_ms: u32,
    /// Diameter of the cursor glow, in pixels.
    pub glow_size_px: u32,
    /// Spring stiffness of the glow follower.
    pub glow_stiffness: f64,
    /// Spring damping of the glow follower.
    pub glow_damping: f64,
    /// Spring mass of the glow follower.
    pub glow_mass: f64,
    /// Per-frame smoothing factor of the smooth-scroll driver (0-1].
    pub scroll_lerp: f64,
    /// Fraction of a section that must be visible to trigger its reveal.
    pub reveal_threshold: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: 120,
            ripple_duration_ms: 600,
            glow_size_px: 600,
            glow_stiffness: 200.0,
            glow_damping: 30.0,
            glow_mass: 0.5,
            scroll_lerp: 0.1,
            reveal_threshold: 0.3,
        }
    }
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
///
/// - `size`: the preferred/fluid value, typically viewport-relative (e.g. `"8vw"`)
/// - `min`: the minimum bound (e.g. `"4rem"`)
/// - `max`: the maximum bound (e.g. `"8rem"`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative.
    pub size: String,
    /// Minimum bound.
    pub min: String,
    /// Maximum bound.
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Max width of section content (CSS value).
    pub content_width: String,
    /// Vertical padding of stacked sections.
    pub section_pad: ClampSize,
    /// Corner radius of cards and the hero portrait (CSS value).
    pub card_radius: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            content_width: "72rem".to_string(),
            section_pad: ClampSize {
                size: "8vw".to_string(),
                min: "4rem".to_string(),
                max: "8rem".to_string(),
            },
            card_radius: "1.5rem".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Card and nav surface color.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (periods, bullets, footer).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Accent color (CTA button, progress indicators).
    pub accent: String,
    /// Cursor glow gradient color, including alpha.
    pub glow: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#faf8f2".to_string(),
            surface: "#ffffff".to_string(),
            text: "#111827".to_string(),
            text_muted: "#6b7280".to_string(),
            border: "#e7e5e4".to_string(),
            accent: "#111827".to_string(),
            glow: "rgba(100, 116, 139, 0.15)".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0c0a09".to_string(),
            surface: "#1c1917".to_string(),
            text: "#f5f5f4".to_string(),
            text_muted: "#a8a29e".to_string(),
            border: "#292524".to_string(),
            accent: "#fafaf9".to_string(),
            glow: "rgba(148, 163, 184, 0.12)".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as config.toml next to site.toml in your content root.
# Each file only needs the keys it wants to override.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Experience section
# ---------------------------------------------------------------------------
[experience]
# "timeline": pinned section, vertical scroll scrubs horizontally through the
#             entries, with snap points between cards.
# "cards":    vertically stacked cards with parallax content and a
#             scroll progress bar.
layout = "timeline"

# Snap to the nearest card once timeline scrolling settles.
snap = true

# ---------------------------------------------------------------------------
# Motion
# ---------------------------------------------------------------------------
[motion]
# Per-character delay of the hero typing effect, in milliseconds.
typing_speed_ms = 120

# Lifetime of a button hover ripple, in milliseconds.
ripple_duration_ms = 600

# Cursor glow: diameter in pixels, plus the spring that makes it trail
# the pointer.
glow_size_px = 600
glow_stiffness = 200.0
glow_damping = 30.0
glow_mass = 0.5

# Per-frame smoothing factor of the smooth-scroll driver. Lower is floatier.
scroll_lerp = 0.1

# Fraction of a section that must be visible before it fades in.
reveal_threshold = 0.3

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Max width of section content (CSS value).
content_width = "72rem"

# Corner radius of cards and the hero portrait (CSS value).
card_radius = "1.5rem"

# Vertical section padding, as CSS clamp(min, size, max).
[theme.section_pad]
size = "8vw"
min = "4rem"
max = "8rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#faf8f2"
surface = "#ffffff"
text = "#111827"
text_muted = "#6b7280"    # Periods, bullets, footer
border = "#e7e5e4"
accent = "#111827"        # CTA button, progress indicators
glow = "rgba(100, 116, 139, 0.15)"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0c0a09"
surface = "#1c1917"
text = "#f5f5f4"
text_muted = "#a8a29e"
border = "#292524"
accent = "#fafaf9"
glow = "rgba(148, 163, 184, 0.12)"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
    --color-glow: {light_glow};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-surface: {dark_surface};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
        --color-glow: {dark_glow};
    }}
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        light_glow = colors.light.glow,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
        dark_glow = colors.dark.glow,
    )
}

/// Generate CSS custom properties from theme and motion config.
///
/// Motion durations live in CSS so keyframe animations and the embedded
/// JavaScript share one source of truth.
pub fn generate_theme_css(theme: &ThemeConfig, motion: &MotionConfig) -> String {
    format!(
        r#":root {{
    --content-width: {content_width};
    --section-pad: {section_pad};
    --card-radius: {card_radius};
    --glow-size: {glow_size}px;
    --ripple-duration: {ripple_duration}ms;
}}"#,
        content_width = theme.content_width,
        section_pad = theme.section_pad.to_css(),
        card_radius = theme.card_radius,
        glow_size = motion.glow_size_px,
        ripple_duration = motion.ripple_duration_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_colors() {
        let config = SiteConfig::default();
        assert_eq!(config.colors.light.background, "#faf8f2");
        assert_eq!(config.colors.dark.background, "#0c0a09");
    }

    #[test]
    fn default_config_has_motion_settings() {
        let config = SiteConfig::default();
        assert_eq!(config.motion.typing_speed_ms, 120);
        assert_eq!(config.motion.ripple_duration_ms, 600);
        assert_eq!(config.motion.glow_size_px, 600);
        assert_eq!(config.theme.section_pad.to_css(), "clamp(4rem, 8vw, 8rem)");
        assert_eq!(config.experience.layout, ExperienceLayout::Timeline);
        assert!(config.experience.snap);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors.light]
background = "#fafafa"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.colors.light.background, "#fafafa");
        // Default values preserved
        assert_eq!(config.colors.light.text, "#111827");
        assert_eq!(config.colors.dark.background, "#0c0a09");
        assert_eq!(config.motion.typing_speed_ms, 120);
    }

    #[test]
    fn parse_experience_layout() {
        let toml = r##"
[experience]
layout = "cards"
snap = false
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.experience.layout, ExperienceLayout::Cards);
        assert!(!config.experience.snap);
    }

    #[test]
    fn unknown_layout_rejected() {
        let toml = r##"
[experience]
layout = "carousel"
"##;
        assert!(toml::from_str::<SiteConfig>(toml).is_err());
    }

    #[test]
    fn unknown_keys_rejected() {
        let toml = r##"
[motion]
typing_sped_ms = 100
"##;
        assert!(toml::from_str::<SiteConfig>(toml).is_err());
    }

    #[test]
    fn validate_rejects_zero_typing_speed() {
        let mut config = SiteConfig::default();
        config.motion.typing_speed_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_lerp() {
        let mut config = SiteConfig::default();
        config.motion.scroll_lerp = 0.0;
        assert!(config.validate().is_err());
        config.motion.scroll_lerp = 1.5;
        assert!(config.validate().is_err());
        config.motion.scroll_lerp = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_spring() {
        let mut config = SiteConfig::default();
        config.motion.glow_mass = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.background = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0"));
        assert!(css.contains("--color-bg: #1a1a1a"));
        assert!(css.contains("--color-glow: rgba(100, 116, 139, 0.15)"));
    }

    #[test]
    fn generate_theme_css_includes_motion_vars() {
        let css = generate_theme_css(&ThemeConfig::default(), &MotionConfig::default());
        assert!(css.contains("--glow-size: 600px"));
        assert!(css.contains("--ripple-duration: 600ms"));
        assert!(css.contains("--section-pad: clamp(4rem, 8vw, 8rem)"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();

        assert_eq!(config.colors.light.background, "#faf8f2");
        assert_eq!(config.motion.typing_speed_ms, 120);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[motion]
typing_speed_ms = 80

[colors.light]
background = "#123456"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.motion.typing_speed_ms, 80);
        assert_eq!(config.colors.light.background, "#123456");
        // Unspecified values should be defaults
        assert_eq!(config.colors.dark.background, "#0c0a09");
        assert_eq!(config.motion.ripple_duration_ms, 600);
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[motion]
typing_speed_ms = 5000
"##,
        )
        .unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn load_config_rejects_bad_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not [valid toml").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn stock_config_round_trips() {
        // The documented stock config must parse to the defaults.
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.motion.typing_speed_ms, 120);
        assert_eq!(config.experience.layout, ExperienceLayout::Timeline);
        assert_eq!(config.colors.light.background, "#faf8f2");
        config.validate().unwrap();
    }

    #[test]
    fn merge_preserves_base_keys() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r##"
[motion]
glow_size_px = 400
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let config: SiteConfig = merged.try_into().unwrap();
        assert_eq!(config.motion.glow_size_px, 400);
        assert_eq!(config.motion.typing_speed_ms, 120);
    }
}
