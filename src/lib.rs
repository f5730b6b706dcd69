//! # Simple Folio
//!
//! A minimal static site generator for single-page animated personal
//! portfolios. Hand-authored content files become one page: a hero with a
//! typed name, an about blurb, a scroll-scrubbed experience timeline, and
//! contact links, wrapped in smooth-scroll and cursor-glow effects.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! Simple Folio processes content through three independent stages, each
//! producing a JSON manifest that the next stage consumes:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (content files → structured data)
//! 2. Assets    manifest  →  staged/          (verify + hash image assets)
//! 3. Generate  manifest  →  dist/            (final single-page HTML site)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: each manifest is human-readable JSON you can inspect.
//! - **Incremental builds**: skip stages whose inputs haven't changed.
//! - **Testability**: each stage is a pure function from manifest to manifest,
//!   so unit tests can exercise pipeline logic without touching the filesystem
//!   or a browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Stage 1 — loads and validates `site.toml`, `about.md`, `config.toml`; produces the scan manifest |
//! | [`assets`] | Stage 2 — verifies referenced images and stages them under content-hashed names |
//! | [`generate`] | Stage 3 — renders the final page from the staged manifest using Maud |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS variable generation |
//! | [`motion`] | Pure scroll-scrub and typing math behind the page's data attributes |
//! | [`types`] | Shared types serialized between stages |
//! | [`slug`] | Company-name slugs for anchors, asset names, and placeholder initials |
//! | [`output`] | CLI output formatting — information-first display of pipeline results |
//!
//! # Design Decisions
//!
//! ## One Shared Experience List
//!
//! The experience entries are defined once in `site.toml` and feed both
//! presentational variants (the pinned timeline and the stacked parallax
//! cards). Which variant renders is a config switch, not a second copy of
//! the data.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Vanilla JavaScript, Injected Tuning
//!
//! The page's behavior layer (smooth-scroll driver, typing effect, section
//! reveals, cursor glow, ripples, timeline scrub) is one embedded vanilla
//! JavaScript file. Every tuning value it needs — typing speed, spring
//! constants, snap points — is computed in Rust and injected as data
//! attributes, so the script carries no site-specific constants and the
//! scrub math stays unit-testable in [`motion`].
//!
//! ## Degradation Over Failure
//!
//! A missing portrait or logo never fails the build: stage 2 reports it and
//! the generator renders an initials placeholder. Likewise the page itself
//! degrades — without JavaScript (or under `prefers-reduced-motion`) every
//! section is fully readable, just unanimated.
//!
//! # The "Forever Stack"
//!
//! The output is plain HTML, established CSS, and one file of vanilla
//! JavaScript. The binary has zero runtime dependencies. The generated site
//! can be dropped on any file server — no Node, no PHP, no database. If a
//! browser can render HTML, it can display your portfolio.

pub mod assets;
pub mod config;
pub mod content;
pub mod generate;
pub mod motion;
pub mod output;
pub mod slug;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
