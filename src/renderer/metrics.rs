//! Text width estimation.
//!
//! There is no font engine at render time, so glyph advances are
//! approximated per character class. The numbers were tuned against the
//! condensed heavy sans used for engraving; they only need to be stable,
//! since the same estimate drives every layout decision.

const DASH_FACTOR: f64 = 0.50;
const NARROW_FACTOR: f64 = 0.35;
const WIDE_FACTOR: f64 = 0.85;
const UPPER_FACTOR: f64 = 0.64;
const DIGIT_FACTOR: f64 = 0.58;
const DEFAULT_FACTOR: f64 = 0.58;

/// Advance width of `ch` as a fraction of the font size.
pub(crate) fn char_width_factor(ch: char) -> f64 {
    match ch {
        '_' | '-' | '—' | '–' | ':' | '+' => DASH_FACTOR,
        'i' | 'l' | 'I' | '\'' | '`' | '.' | ',' | '!' => NARROW_FACTOR,
        'm' | 'w' | 'M' | 'W' | '@' | '#' | '&' | '%' => WIDE_FACTOR,
        'A'..='Z' => UPPER_FACTOR,
        '0'..='9' => DIGIT_FACTOR,
        _ => DEFAULT_FACTOR,
    }
}

/// Estimated advance width of one character.
pub fn char_width(ch: char, font_size: f64) -> f64 {
    char_width_factor(ch) * font_size
}

/// Estimated width of a string: the sum of its character advances.
pub fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().map(|ch| char_width(ch, font_size)).sum()
}
