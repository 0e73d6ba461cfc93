//! Mood score presentation table
//!
//! Every function here is total over `f64`: scores outside 1..=10, fractional
//! scores, NaN and infinities all map to the "unknown" sentinel.

pub const UNKNOWN_LABEL: &str = "unknown";
pub const UNKNOWN_COLOR: &str = "#6b7280";

const LABELS: [&str; 10] = [
    "worst",
    "very bad",
    "bad",
    "slightly bad",
    "normal",
    "slightly good",
    "good",
    "very good",
    "great",
    "best",
];

// Red for the lowest scores through green to deep blue for the highest.
const COLORS: [&str; 10] = [
    "#e53e3e", "#dd6b20", "#d69e2e", "#bbb52c", "#90be6d", "#68d391", "#4fd1c5", "#38b2ac",
    "#3182ce", "#0063a5",
];

/// Index into the 10-entry tables, or None for anything that isn't an integer in 1..=10
fn table_index(score: f64) -> Option<usize> {
    if score.fract() != 0.0 || !(1.0..=10.0).contains(&score) {
        return None;
    }
    Some(score as usize - 1)
}

pub fn mood_label(score: f64) -> &'static str {
    table_index(score).map_or(UNKNOWN_LABEL, |i| LABELS[i])
}

pub fn mood_color(score: f64) -> &'static str {
    table_index(score).map_or(UNKNOWN_COLOR, |i| COLORS[i])
}
