//! Layout computation: turns the fixed template plus the fitted text into
//! absolute coordinates for every element on the plaque.
//!
//! All coordinates are relative to the content area (inside the border),
//! except `total_width` / `total_height` which describe the whole document.

use serde::Serialize;

use super::fit::{resolve_title_fit, TitleFit};
use super::glyphs::{CONTROLS_BOTTOM, CONTROLS_EDGE_TOP, CONTROLS_FRAME};
use super::template::PlaqueTemplate;
use super::wrap::truncate_to_width;
use crate::model::{ResolvedOptions, ResolvedTrack};
use crate::timefmt::{current_time_label, parse_duration_label, total_time_label};

// ═══════════════════════════════════════════════════════════════════════
// Layout structures
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Every resolved position and text run for one plaque.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaqueLayout {
    pub total_width: f64,
    pub total_height: f64,
    pub border: f64,
    pub corner_radius: f64,

    pub album: Rect,
    /// Corner tick length for registration marks.
    pub mark_length: f64,

    pub text_x: f64,
    pub text_max_width: f64,
    pub title: TitleFit,
    /// Top of the title (text is hanging-baseline).
    pub title_y: f64,
    /// Vertical advance from the first title line to the second.
    pub title_line_advance: f64,
    pub artist: String,
    pub artist_y: f64,
    pub artist_font_size: f64,

    pub bar: Rect,
    pub progress: f64,
    pub fill_width: f64,
    pub knob_x: f64,
    pub knob_y: f64,
    pub knob_radius: f64,

    pub heart: Rect,

    pub times_y: f64,
    pub left_time_x: f64,
    pub right_time_x: f64,
    pub current_time: String,
    pub total_time: String,

    /// Vertical shift of the decorative controls row.
    pub controls_offset: f64,
    /// Scale from the controls design frame to this template's width.
    pub controls_scale: f64,
}

impl PlaqueLayout {
    pub fn artist_bottom(&self) -> f64 {
        self.artist_y + self.artist_font_size
    }

    /// How far the bar was pushed below its nominal position.
    pub fn bar_push_down(&self, tpl: &PlaqueTemplate) -> f64 {
        self.bar.y - (self.album.bottom() + tpl.bar_nominal_offset)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Main layout computation
// ═══════════════════════════════════════════════════════════════════════

pub fn compute_plaque_layout(
    track: &ResolvedTrack,
    opts: &ResolvedOptions,
    tpl: &PlaqueTemplate,
) -> PlaqueLayout {
    let side = tpl.album_side();
    let album = Rect { x: 0.0, y: 0.0, width: side, height: side };

    // Text shares the bar's left edge and stops short of the heart.
    let text_x = 0.0;
    let text_max_width = tpl.text_max_width();

    let title = resolve_title_fit(&track.title, tpl, text_max_width);
    let artist = truncate_to_width(
        &track.artist,
        tpl.artist_font_size,
        text_max_width,
        tpl.max_artist_chars,
    );

    let title_y = album.bottom() + tpl.title_top_gap;
    let title_line_advance = title.font_size + tpl.title_line_gap;
    let artist_y = if title.wrapped.is_two_line() {
        title_y + title_line_advance + title.font_size + tpl.artist_top_gap + tpl.extra_artist_gap
    } else {
        title_y + title.font_size + tpl.artist_top_gap
    };
    let artist_bottom = artist_y + tpl.artist_font_size;

    // The bar only ever moves down, and only as far as the text needs.
    let nominal_bar_y = album.bottom() + tpl.bar_nominal_offset;
    let bar_y = nominal_bar_y.max(artist_bottom + tpl.artist_bar_min_gap);
    let bar = Rect {
        x: 0.0,
        y: bar_y,
        width: tpl.base_width,
        height: tpl.bar_height,
    };

    let r = tpl.knob_radius;
    let fill_width = bar.width * opts.progress;
    let knob_x = bar.x + fill_width.max(r).min((bar.width - r).max(r));

    let (heart_w, heart_h) = tpl.heart_size();
    let heart_center_y = (title_y + artist_bottom) / 2.0;
    let heart = Rect {
        x: bar.right() - heart_w,
        y: heart_center_y - heart_h / 2.0,
        width: heart_w,
        height: heart_h,
    };

    let total_seconds = parse_duration_label(&track.duration);
    let times_y = bar.bottom() + tpl.times_offset;
    let (controls_scale, controls_offset) = place_controls(tpl, times_y);

    PlaqueLayout {
        total_width: tpl.total_width(),
        total_height: tpl.total_height(),
        border: tpl.border_width,
        corner_radius: tpl.corner_radius,
        album,
        mark_length: tpl.registration_mark_length(),
        text_x,
        text_max_width,
        title,
        title_y,
        title_line_advance,
        artist,
        artist_y,
        artist_font_size: tpl.artist_font_size,
        bar,
        progress: opts.progress,
        fill_width,
        knob_x,
        knob_y: bar.center_y(),
        knob_radius: r,
        heart,
        times_y,
        left_time_x: bar.x,
        right_time_x: bar.right(),
        current_time: current_time_label(total_seconds, opts.progress),
        total_time: total_time_label(&track.duration),
        controls_offset,
        controls_scale,
    }
}

/// Scale and vertical offset of the controls row.
///
/// The row keeps its distance from the bottom edge. It only moves further
/// down when the timestamps would reach the end icons, and never so far that
/// the play disc leaves the content area.
fn place_controls(tpl: &PlaqueTemplate, times_y: f64) -> (f64, f64) {
    let (frame_w, frame_h) = CONTROLS_FRAME;
    let scale = tpl.base_width / frame_w;
    let resting = tpl.controls_offset + (tpl.base_height - frame_h * scale);

    let clear_of_times = times_y - CONTROLS_EDGE_TOP * scale;
    if clear_of_times <= resting {
        return (scale, resting);
    }
    let lowest = tpl.base_height - CONTROLS_BOTTOM * scale;
    (scale, clear_of_times.min(lowest.max(resting)))
}
