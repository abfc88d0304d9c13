//! Plaque renderer. Converts track metadata into a laser-ready SVG.
//!
//! The renderer estimates text widths, wraps and sizes the title, lays out
//! every element on a fixed template and serializes the result. It never
//! fails: missing metadata falls back to defaults and overlong text is
//! shrunk or ellipsized.

mod constants;
mod elements;
mod fit;
mod glyphs;
mod layout;
mod metrics;
mod svg_builder;
mod template;
mod wrap;

use crate::model::{RenderOptions, ResolvedOptions, ResolvedTrack, TrackMetadata};
use elements::*;
use svg_builder::SvgBuilder;

pub use fit::{resolve_title_fit, TitleFit};
pub use layout::{compute_plaque_layout, PlaqueLayout, Rect};
pub use metrics::{char_width, text_width};
pub use svg_builder::escape_xml;
pub use template::{Palette, PlaqueTemplate};
pub use wrap::{truncate_to_width, wrap_title, WrappedTitle};

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a plaque with the default template.
pub fn render_plaque_svg(metadata: &TrackMetadata, options: &RenderOptions) -> String {
    render_plaque_svg_with(metadata, options, &PlaqueTemplate::default())
}

/// Render a plaque on an explicit template.
///
/// Identical inputs always produce byte-identical output.
pub fn render_plaque_svg_with(
    metadata: &TrackMetadata,
    options: &RenderOptions,
    template: &PlaqueTemplate,
) -> String {
    let track = metadata.resolve();
    let opts = options.resolve();
    render_resolved(&track, &opts, template)
}

#[tracing::instrument(level = "debug", skip_all, fields(mode = ?opts.mode, size = ?opts.size))]
pub(crate) fn render_resolved(
    track: &ResolvedTrack,
    opts: &ResolvedOptions,
    template: &PlaqueTemplate,
) -> String {
    let layout = compute_plaque_layout(track, opts, template);
    let palette = Palette::for_mode(opts.mode);

    tracing::debug!(
        title_font_size = layout.title.font_size,
        title_lines = layout.title.wrapped.line_count(),
        bar_y = layout.bar.y,
        "plaque layout resolved"
    );

    let mut svg = SvgBuilder::new(layout.total_width, layout.total_height);
    render_style(&mut svg, &layout, &palette, template.time_font_size);

    svg.rect(
        "cut-outline",
        0.0,
        0.0,
        layout.total_width,
        layout.total_height,
        layout.corner_radius,
    );

    svg.open_group(
        None,
        &format!(
            "translate({}, {})",
            svg_builder::num(layout.border),
            svg_builder::num(layout.border)
        ),
    );

    render_controls(&mut svg, &layout);
    render_progress(&mut svg, &layout);

    let album = if opts.omit_album {
        AlbumFill::RegistrationMarks
    } else {
        match track.image.as_deref() {
            Some(href) if opts.embed_image => AlbumFill::Image(href),
            _ => AlbumFill::Placeholder,
        }
    };
    render_album(&mut svg, &layout, album);

    render_heart(&mut svg, &layout);
    render_text(&mut svg, &layout);

    svg.close_group();
    svg.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weeknd() -> TrackMetadata {
        TrackMetadata::new("Blinding Lights", "The Weeknd", "3:20")
            .with_image("https://img.example/cover.jpg")
    }

    #[test]
    fn production_omits_image_and_draws_marks() {
        let svg = render_plaque_svg(&weeknd(), &RenderOptions::production());
        assert!(!svg.contains("<image"));
        assert_eq!(svg.matches(r#"class="score""#).count(), 4);
        assert!(svg.contains("stroke:#ff0000"));
    }

    #[test]
    fn preview_embeds_image_when_available() {
        let svg = render_plaque_svg(&weeknd(), &RenderOptions::preview(true));
        assert!(svg.contains(r#"href="https://img.example/cover.jpg""#));
        assert!(!svg.contains(r#"class="score""#));
        assert!(svg.contains("fill:#334155"));
    }

    #[test]
    fn missing_image_falls_back_to_placeholder() {
        let meta = TrackMetadata::new("Blinding Lights", "The Weeknd", "3:20");
        let svg = render_plaque_svg(&meta, &RenderOptions::preview(true));
        assert!(!svg.contains("<image"));
        assert!(svg.contains(r#"<rect class="cls-1""#));
    }

    #[test]
    fn style_carries_resolved_title_size() {
        let meta = TrackMetadata::new("Somebody That I Used To Know (feat. Kimbra)", "Gotye", "4:04");
        let svg = render_plaque_svg(&meta, &RenderOptions::production());
        assert!(svg.contains("font-size:32px"));
        assert_eq!(svg.matches("<tspan").count(), 2);
        assert!(svg.contains(r#"dy="38""#));
    }

    #[test]
    fn output_is_deterministic() {
        let a = render_plaque_svg(&weeknd(), &RenderOptions::preview(true));
        let b = render_plaque_svg(&weeknd(), &RenderOptions::preview(true));
        assert_eq!(a, b);
    }
}
