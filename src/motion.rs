//! Scroll and typing math shared by the generator and its tests.
//!
//! The timeline's scrub behavior is a pure mapping: vertical scroll progress
//! in `[0, 1]` becomes a horizontal track shift across a fixed set of cards.
//! These functions compute that mapping once, in Rust; the generated page
//! carries the results as data attributes (`data-snap-points`,
//! `data-shift-max`) so the embedded JavaScript never re-derives them.
//!
//! Keeping the math here also makes the scrub contract testable without a
//! browser: progress 0 shows the first card, progress 1 the last, and the
//! shift is linear and monotonic in between.

/// Snap fractions for an `n`-card timeline: `[0, 1/(n-1), ..., 1]`.
///
/// A single card (or none) has one snap point at 0.
pub fn snap_points(cards: usize) -> Vec<f64> {
    if cards <= 1 {
        return vec![0.0];
    }
    let last = (cards - 1) as f64;
    (0..cards).map(|i| i as f64 / last).collect()
}

/// Snap fractions formatted for the `data-snap-points` attribute.
///
/// Up to four decimal places, trailing zeros trimmed: `"0,0.25,0.5,0.75,1"`.
pub fn format_snap_points(cards: usize) -> String {
    snap_points(cards)
        .iter()
        .map(|p| {
            let s = format!("{:.4}", p);
            let s = s.trim_end_matches('0').trim_end_matches('.');
            s.to_string()
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Horizontal track shift for a given scroll progress, as a percentage of
/// one card width. Always `<= 0`: the track moves left as progress grows.
///
/// Progress is clamped to `[0, 1]`; 0 keeps the first card fully shown,
/// 1 shifts to the last card, and the mapping is linear in between.
pub fn track_shift_percent(progress: f64, cards: usize) -> f64 {
    if cards <= 1 {
        return 0.0;
    }
    let p = progress.clamp(0.0, 1.0);
    -100.0 * (cards - 1) as f64 * p
}

/// The card index nearest to a given scroll progress.
pub fn active_card(progress: f64, cards: usize) -> usize {
    if cards <= 1 {
        return 0;
    }
    let p = progress.clamp(0.0, 1.0);
    (p * (cards - 1) as f64).round() as usize
}

/// Total duration of the typing effect: one tick per character plus the
/// initial empty tick.
pub fn typing_duration_ms(text: &str, speed_ms: u32) -> u32 {
    (text.chars().count() as u32 + 1) * speed_ms
}

/// Parallax offset of card content for a scroll progress in `[0, 1]`.
///
/// Content starts `distance` below its rest position when the card enters
/// the viewport and ends `distance` above it on exit, crossing zero at the
/// midpoint.
pub fn parallax_shift(progress: f64, distance: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    (1.0 - 2.0 * p) * distance
}
