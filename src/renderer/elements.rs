//! Element renderers. Each draws one region of the plaque into the builder.

use super::glyphs::*;
use super::layout::PlaqueLayout;
use super::svg_builder::{num, SvgBuilder};
use super::template::Palette;

// ═══════════════════════════════════════════════════════════════════════
// Style block
// ═══════════════════════════════════════════════════════════════════════

const TEXT_FONT: &str = "Arial,'Helvetica Neue',Arial,sans-serif";
const TITLE_FONT: &str = "'Arial Black','Helvetica Neue',Arial,sans-serif";

pub(super) fn render_style(svg: &mut SvgBuilder, layout: &PlaqueLayout, palette: &Palette, time_font_size: f64) {
    let engrave = palette.engrave;
    svg.css(
        ".cls-1",
        &format!(
            "fill: transparent; stroke-width: .4px; stroke: {}; stroke-miterlimit:10;",
            palette.plaque_stroke
        ),
    );
    svg.css(".light-fill", &format!("fill:{}; stroke:none;", palette.light));
    svg.css(".engrave", &format!("fill:{engrave}; stroke:none;"));
    svg.css(".track", &format!("fill:{}; stroke:none;", palette.track));
    svg.css(
        ".cut-outline",
        &format!("fill:none; stroke:{}; stroke-width:0.1mm;", palette.cut_outline),
    );
    svg.css(
        ".dyn-text",
        &format!("fill:{engrave}; stroke:none; font-family: Arial, sans-serif;"),
    );
    svg.css(
        ".dyn-title",
        &format!(
            "font-size:{}px; font-weight:900; font-family:{TITLE_FONT}; letter-spacing:-1px; font-stretch:condensed;",
            num(layout.title.font_size)
        ),
    );
    svg.css(
        ".dyn-artist",
        &format!(
            "font-size:{}px; font-weight:600; font-family:{TEXT_FONT}; letter-spacing:0;",
            num(layout.artist_font_size)
        ),
    );
    svg.css(
        ".score",
        &format!("fill:none; stroke:{engrave}; stroke-width:0.1mm; stroke-linecap:round;"),
    );
    svg.css(
        ".dyn-time",
        &format!(
            "fill:{engrave}; font-size:{}px; font-weight:500; font-family:{TEXT_FONT}; letter-spacing:0;",
            num(time_font_size)
        ),
    );
    svg.css(".dyn-time-end", "text-anchor:end;");
}

// ═══════════════════════════════════════════════════════════════════════
// Decorative controls
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_controls(svg: &mut SvgBuilder, layout: &PlaqueLayout) {
    let mut row = format!("translate(0, {})", num(layout.controls_offset));
    if (layout.controls_scale - 1.0).abs() > 1e-9 {
        row.push_str(&format!(" scale({})", scale_factor(layout.controls_scale)));
    }
    svg.open_group(None, &row);

    let (tx, ty) = PLAY_TRANSLATE;
    svg.open_group(
        None,
        &format!("translate({}, {}) scale({})", num(tx), num(ty), PLAY_SCALE),
    );
    let (cx, cy, r) = PLAY_DISC;
    svg.circle("engrave", cx, cy, r);
    svg.path(Some("light-fill"), PLAY_TRIANGLE);
    svg.close_group();

    for d in [NEXT_TRACK, PREVIOUS_TRACK, SHUFFLE, REPEAT] {
        svg.path(Some("engrave"), d);
    }

    svg.close_group();
}

/// Scale factors need more precision than coordinates.
fn scale_factor(v: f64) -> String {
    let s = format!("{v:.4}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

// ═══════════════════════════════════════════════════════════════════════
// Progress bar
// ═══════════════════════════════════════════════════════════════════════

const BAR_CORNER: f64 = 1.0;

pub(super) fn render_progress(svg: &mut SvgBuilder, layout: &PlaqueLayout) {
    let bar = &layout.bar;
    svg.rect("track", bar.x, bar.y, bar.width, bar.height, BAR_CORNER);
    if layout.fill_width > 0.0 {
        svg.rect("engrave", bar.x, bar.y, layout.fill_width, bar.height, BAR_CORNER);
    }
    svg.circle("engrave", layout.knob_x, layout.knob_y, layout.knob_radius);
}

// ═══════════════════════════════════════════════════════════════════════
// Album region
// ═══════════════════════════════════════════════════════════════════════

/// How the square album region is filled.
pub(super) enum AlbumFill<'a> {
    /// Corner ticks only; the cover is printed separately and placed by hand.
    RegistrationMarks,
    Image(&'a str),
    Placeholder,
}

pub(super) fn render_album(svg: &mut SvgBuilder, layout: &PlaqueLayout, fill: AlbumFill<'_>) {
    let a = &layout.album;
    match fill {
        AlbumFill::RegistrationMarks => {
            let len = layout.mark_length;
            let corners = [
                (a.x, a.y, 1.0, 1.0),
                (a.right(), a.y, -1.0, 1.0),
                (a.x, a.bottom(), 1.0, -1.0),
                (a.right(), a.bottom(), -1.0, -1.0),
            ];
            for (x, y, dx, dy) in corners {
                let d = format!(
                    "M{x} {y} l{h} 0 M{x} {y} l0 {v}",
                    x = num(x),
                    y = num(y),
                    h = num(dx * len),
                    v = num(dy * len)
                );
                svg.path(Some("score"), &d);
            }
        }
        AlbumFill::Image(href) => svg.image(a.x, a.y, a.width, a.height, href),
        AlbumFill::Placeholder => svg.rect("cls-1", a.x, a.y, a.width, a.height, 0.0),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Heart, title, artist, times
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_heart(svg: &mut SvgBuilder, layout: &PlaqueLayout) {
    let h = &layout.heart;
    svg.open_group(
        Some("engrave"),
        &format!("translate({}, {})", num(h.x), num(h.y)),
    );
    svg.path(None, &heart_path(h.width, h.height, num));
    svg.close_group();
}

pub(super) fn render_text(svg: &mut SvgBuilder, layout: &PlaqueLayout) {
    let lines = layout.title.wrapped.lines();
    if lines.len() > 1 {
        svg.text_lines(
            "dyn-text dyn-title",
            layout.text_x,
            layout.title_y,
            layout.title_line_advance,
            &lines,
        );
    } else {
        let line = lines.first().copied().unwrap_or_default();
        svg.text("dyn-text dyn-title", layout.text_x, layout.title_y, "start", true, line);
    }

    svg.text(
        "dyn-text dyn-artist",
        layout.text_x,
        layout.artist_y,
        "start",
        true,
        &layout.artist,
    );

    svg.text(
        "dyn-time",
        layout.left_time_x,
        layout.times_y,
        "start",
        false,
        &layout.current_time,
    );
    svg.text(
        "dyn-time dyn-time-end",
        layout.right_time_x,
        layout.times_y,
        "end",
        false,
        &layout.total_time,
    );
}
