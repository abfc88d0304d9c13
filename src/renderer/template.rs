//! Plaque template and color palette.
//!
//! The template is an explicit, immutable configuration value handed to the
//! renderer. Alternate templates (other brands, test variants) are built with
//! struct update syntax or loaded from JSON.

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::error::PlaqueResult;
use crate::model::RenderMode;

/// Fixed physical template the layout is derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaqueTemplate {
    pub base_width: f64,
    pub base_height: f64,
    pub border_width: f64,
    pub corner_radius: f64,

    pub title_top_gap: f64,
    pub bar_nominal_offset: f64,
    pub artist_top_gap: f64,
    pub title_line_gap: f64,
    pub extra_artist_gap: f64,
    /// Minimum clearance between the artist line and the progress bar.
    pub artist_bar_min_gap: f64,
    pub fit_safe_pad: f64,
    pub times_offset: f64,
    pub controls_offset: f64,

    pub title_font_size: f64,
    pub min_title_font_size: f64,
    pub two_line_shrink: f64,
    pub shrink_step: f64,
    pub max_fit_iterations: usize,
    pub artist_font_size: f64,
    pub time_font_size: f64,
    pub max_artist_chars: usize,
    pub min_text_width: f64,

    pub bar_height: f64,
    pub knob_radius: f64,

    pub heart_scale: f64,
    pub heart_reserve_pad: f64,
}

impl Default for PlaqueTemplate {
    fn default() -> Self {
        Self {
            base_width: BASE_WIDTH,
            base_height: BASE_HEIGHT,
            border_width: BORDER_WIDTH,
            corner_radius: CORNER_RADIUS,
            title_top_gap: TITLE_TOP_GAP,
            bar_nominal_offset: BAR_NOMINAL_OFFSET,
            artist_top_gap: ARTIST_TOP_GAP,
            title_line_gap: TITLE_LINE_GAP,
            extra_artist_gap: EXTRA_ARTIST_GAP,
            artist_bar_min_gap: ARTIST_BAR_MIN_GAP,
            fit_safe_pad: FIT_SAFE_PAD,
            times_offset: TIMES_OFFSET,
            controls_offset: CONTROLS_OFFSET,
            title_font_size: TITLE_FONT_SIZE,
            min_title_font_size: MIN_TITLE_FONT_SIZE,
            two_line_shrink: TWO_LINE_SHRINK,
            shrink_step: SHRINK_STEP,
            max_fit_iterations: MAX_FIT_ITERATIONS,
            artist_font_size: ARTIST_FONT_SIZE,
            time_font_size: TIME_FONT_SIZE,
            max_artist_chars: MAX_ARTIST_CHARS,
            min_text_width: MIN_TEXT_WIDTH,
            bar_height: BAR_HEIGHT,
            knob_radius: KNOB_RADIUS,
            heart_scale: HEART_SCALE,
            heart_reserve_pad: HEART_RESERVE_PAD,
        }
    }
}

impl PlaqueTemplate {
    /// Load a template from JSON. Missing keys keep their default values.
    pub fn from_json(json: &str) -> PlaqueResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn total_width(&self) -> f64 {
        self.base_width + self.border_width * 2.0
    }

    pub fn total_height(&self) -> f64 {
        self.base_height + self.border_width * 2.0
    }

    /// Side of the square album region (spans the full content width).
    pub fn album_side(&self) -> f64 {
        self.base_width
    }

    /// Heart glyph (width, height).
    pub fn heart_size(&self) -> (f64, f64) {
        let h = (self.artist_font_size + 6.0) * self.heart_scale;
        (h * HEART_ASPECT, h)
    }

    /// Width available to title and artist once the heart is reserved.
    pub fn text_max_width(&self) -> f64 {
        let (heart_w, _) = self.heart_size();
        let reserve = (heart_w + self.heart_reserve_pad).round();
        (self.base_width - reserve).max(self.min_text_width)
    }

    pub fn registration_mark_length(&self) -> f64 {
        (self.album_side() * MARK_LENGTH_RATIO)
            .round()
            .clamp(MARK_MIN_LENGTH, MARK_MAX_LENGTH)
    }
}

/// Colors for one render mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub engrave: &'static str,
    pub light: &'static str,
    pub track: &'static str,
    pub plaque_stroke: &'static str,
    pub cut_outline: &'static str,
}

impl Palette {
    pub const PRODUCTION: Palette = Palette {
        engrave: PRODUCTION_ENGRAVE,
        light: LIGHT_FILL,
        track: PRODUCTION_ENGRAVE,
        plaque_stroke: PRODUCTION_ENGRAVE,
        cut_outline: CUT_RED,
    };

    pub const PREVIEW: Palette = Palette {
        engrave: PREVIEW_ENGRAVE,
        light: LIGHT_FILL,
        track: PREVIEW_TRACK,
        plaque_stroke: TRANSPARENT,
        cut_outline: TRANSPARENT,
    };

    pub fn for_mode(mode: RenderMode) -> Self {
        match mode {
            RenderMode::Preview => Self::PREVIEW,
            RenderMode::Production => Self::PRODUCTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_dimensions() {
        let t = PlaqueTemplate::default();
        assert!((t.total_width() - 607.19).abs() < 1e-9);
        assert!((t.total_height() - 853.99).abs() < 1e-9);
        let (heart_w, heart_h) = t.heart_size();
        assert!((heart_w - 69.0).abs() < 1e-9);
        assert_eq!(heart_h, 60.0);
        assert!((t.text_max_width() - 458.19).abs() < 1e-9);
        assert_eq!(t.registration_mark_length(), 19.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let t = PlaqueTemplate::from_json(r#"{"titleFontSize": 34, "borderWidth": 18}"#).unwrap();
        assert_eq!(t.title_font_size, 34.0);
        assert_eq!(t.border_width, 18.0);
        assert_eq!(t.artist_font_size, ARTIST_FONT_SIZE);
    }

    #[test]
    fn palettes_differ_by_mode() {
        let p = Palette::for_mode(RenderMode::Production);
        assert_eq!(p.cut_outline, "#ff0000");
        assert_eq!(p.engrave, "#000000");
        let p = Palette::for_mode(RenderMode::Preview);
        assert_eq!(p.cut_outline, "transparent");
        assert_eq!(p.engrave, "#334155");
    }
}
