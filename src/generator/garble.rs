//! Filler glyphs and power-up bracket groups

use crate::core::{BracketStyle, Cell, PowerUpId};
use rand::Rng;

/// Punctuation alphabet the garble is drawn from
pub const GARBLE_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '_', '[', ']', '{', '}', '<', '>',
    '\\', '|', '\'', '"', ';', ':', '/', '?', ',', '.',
];

/// Draw `length` garble glyphs uniformly from the alphabet
pub fn garble<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Vec<char> {
    (0..length)
        .map(|_| GARBLE_CHARS[rng.random_range(0..GARBLE_CHARS.len())])
        .collect()
}

/// Pick a bracket style: 30% square, 30% angle, 40% round
pub fn pick_style<R: Rng + ?Sized>(rng: &mut R) -> BracketStyle {
    let roll: f64 = rng.random();
    if roll < 0.3 {
        BracketStyle::Square
    } else if roll < 0.6 {
        BracketStyle::Angle
    } else {
        BracketStyle::Round
    }
}

/// Glyphs of a power-up group of `length` cells
///
/// The interior holds `max(length - 2, 1)` garble glyphs, so a group is
/// never shorter than three cells.
pub fn power_up_glyphs<R: Rng + ?Sized>(
    style: BracketStyle,
    length: usize,
    rng: &mut R,
) -> Vec<char> {
    let interior = garble(length.saturating_sub(2).max(1), rng);
    let mut glyphs = Vec::with_capacity(interior.len() + 2);
    glyphs.push(style.open());
    glyphs.extend(interior);
    glyphs.push(style.close());
    glyphs
}

/// Cells of a power-up group tagged with `id`
pub fn power_up_cells<R: Rng + ?Sized>(id: PowerUpId, length: usize, rng: &mut R) -> Vec<Cell> {
    let style = pick_style(rng);
    power_up_glyphs(style, length, rng)
        .into_iter()
        .map(|glyph| Cell::power_up(glyph, id))
        .collect()
}
