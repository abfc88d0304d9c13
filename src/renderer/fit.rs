//! Title font-size fitting.
//!
//! Wrapping and sizing depend on each other: a smaller font changes where
//! the line breaks, which changes how many lines need vertical room. The
//! resolver runs them in a bounded loop until the title + artist block fits
//! above the progress bar, or the minimum size is reached.

use serde::Serialize;

use super::template::PlaqueTemplate;
use super::wrap::{wrap_title, WrappedTitle};

/// Outcome of fitting the title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleFit {
    pub font_size: f64,
    pub wrapped: WrappedTitle,
    /// Shrink steps taken inside the fit loop.
    pub iterations: usize,
    /// True when the floor size was accepted without the block fitting.
    pub hit_floor: bool,
}

/// Height of the title block plus the artist line for a given wrap.
pub(crate) fn block_height(wrapped: &WrappedTitle, font_size: f64, tpl: &PlaqueTemplate) -> f64 {
    let lines = wrapped.line_count() as f64;
    lines * font_size
        + (lines - 1.0) * tpl.title_line_gap
        + tpl.artist_top_gap
        + tpl.artist_font_size
}

/// Vertical budget between the title top and the nominal bar position.
pub(crate) fn available_height(tpl: &PlaqueTemplate) -> f64 {
    tpl.bar_nominal_offset - tpl.title_top_gap - tpl.fit_safe_pad
}

/// Find the largest title size (starting from the template size) whose
/// wrapped block fits the available height.
pub fn resolve_title_fit(title: &str, tpl: &PlaqueTemplate, max_width: f64) -> TitleFit {
    let floor = tpl.min_title_font_size;
    let available = available_height(tpl);

    let mut size = tpl.title_font_size;
    let mut wrapped = wrap_title(title, size, max_width);

    // Two-line titles start smaller to save iterations.
    if wrapped.is_two_line() {
        size = (size * tpl.two_line_shrink).round().max(floor);
        wrapped = wrap_title(title, size, max_width);
    }

    let mut iterations = 0;
    let mut fits = block_height(&wrapped, size, tpl) <= available;
    while !fits && iterations < tpl.max_fit_iterations && size > floor {
        size = (size * tpl.shrink_step).floor().max(floor);
        wrapped = wrap_title(title, size, max_width);
        iterations += 1;
        fits = block_height(&wrapped, size, tpl) <= available;
    }

    let hit_floor = !fits;
    if hit_floor {
        tracing::debug!(
            font_size = size,
            lines = wrapped.line_count(),
            "title does not fit above the bar; accepting floor size"
        );
    }

    TitleFit {
        font_size: size,
        wrapped,
        iterations,
        hit_floor,
    }
}
