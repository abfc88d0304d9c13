//! Fulfilment files: the laser-cutter SVG, a cover print and a manifest,
//! named and bundled for the production team.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use zip::write::SimpleFileOptions;

use crate::collab::CoverRasterizer;
use crate::error::PlaqueResult;
use crate::model::{PlaqueSize, RenderOptions, ResolvedTrack, TrackMetadata};
use crate::renderer::{render_resolved, PlaqueTemplate};
use crate::timefmt::{current_time_label, parse_duration_label};

pub const DEFAULT_PRINT_DPI: u32 = 300;

const STEM_ARTIST_CHARS: usize = 20;
const STEM_TITLE_CHARS: usize = 30;

// ═══════════════════════════════════════════════════════════════════════
// Naming & print sizing
// ═══════════════════════════════════════════════════════════════════════

fn sanitize(text: &str, max_chars: usize) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(max_chars)
        .collect()
}

/// File stem shared by every file of one order:
/// `{artist}_{title}_{size}_{YYYY-MM-DD}` with non-alphanumerics as `_`.
pub fn production_file_stem(track: &ResolvedTrack, size: PlaqueSize, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}_{}",
        sanitize(&track.artist, STEM_ARTIST_CHARS),
        sanitize(&track.title, STEM_TITLE_CHARS),
        size.label(),
        date.format("%Y-%m-%d")
    )
}

/// Physical size of the printed cover that sits in the album region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverPrintSpec {
    pub side_inch: f64,
    pub pixels: u32,
    pub dpi: u32,
}

/// The album region scales with the plaque, so its printed side is the
/// template's album/height ratio applied to the finished height.
pub fn cover_print_spec(template: &PlaqueTemplate, plaque_height_inch: f64, dpi: u32) -> CoverPrintSpec {
    let side_inch = template.album_side() / template.total_height() * plaque_height_inch;
    CoverPrintSpec {
        side_inch,
        pixels: (side_inch * f64::from(dpi)).round().max(1.0) as u32,
        dpi,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Bundle
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    title: &'a str,
    artist: &'a str,
    duration: &'a str,
    progress: f64,
    progress_time: String,
    size: PlaqueSize,
    height_inch: f64,
    price_cents: u32,
    date: String,
    image: Option<&'a str>,
    cover: Option<CoverPrintSpec>,
    files: Vec<String>,
}

/// Everything the production team needs for one plaque.
#[derive(Debug, Clone)]
pub struct ProductionBundle {
    pub stem: String,
    pub svg: String,
    pub manifest_json: String,
    /// Print-ready cover, when an image and a rasterizer were available.
    pub cover_jpeg: Option<Vec<u8>>,
}

impl ProductionBundle {
    /// Render the production SVG and, if possible, the cover print.
    ///
    /// A failed cover rasterization is logged and the bundle is produced
    /// without it; the SVG alone is enough to cut the plaque.
    pub fn build(
        metadata: &TrackMetadata,
        progress: f64,
        size: PlaqueSize,
        date: NaiveDate,
        rasterizer: Option<&dyn CoverRasterizer>,
    ) -> PlaqueResult<Self> {
        let template = PlaqueTemplate::default();
        let track = metadata.resolve();
        let opts = RenderOptions::production()
            .with_progress(progress)
            .with_size(size)
            .resolve();

        let stem = production_file_stem(&track, size, date);
        let svg = render_resolved(&track, &opts, &template);

        let print = cover_print_spec(&template, size.height_inch(), DEFAULT_PRINT_DPI);
        let cover_jpeg = match (rasterizer, track.image.as_deref()) {
            (Some(r), Some(url)) => match r.rasterize(url, print.pixels, print.dpi) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    tracing::warn!(%stem, error = %e, "could not process cover image");
                    None
                }
            },
            _ => None,
        };

        let mut bundle = Self {
            stem,
            svg,
            manifest_json: String::new(),
            cover_jpeg,
        };

        let manifest = Manifest {
            title: &track.title,
            artist: &track.artist,
            duration: &track.duration,
            progress: opts.progress,
            progress_time: current_time_label(parse_duration_label(&track.duration), opts.progress),
            size,
            height_inch: size.height_inch(),
            price_cents: size.price_cents(),
            date: date.format("%Y-%m-%d").to_string(),
            image: track.image.as_deref(),
            cover: bundle.cover_jpeg.as_ref().map(|_| print),
            files: vec![bundle.svg_file_name()]
                .into_iter()
                .chain(bundle.cover_file_name())
                .collect(),
        };
        bundle.manifest_json = serde_json::to_string_pretty(&manifest)?;

        tracing::info!(stem = %bundle.stem, cover = bundle.cover_jpeg.is_some(), "production bundle built");
        Ok(bundle)
    }

    pub fn svg_file_name(&self) -> String {
        format!("{}.svg", self.stem)
    }

    pub fn cover_file_name(&self) -> Option<String> {
        self.cover_jpeg.as_ref().map(|_| format!("{}_cover.jpg", self.stem))
    }

    pub fn manifest_file_name(&self) -> String {
        format!("{}.json", self.stem)
    }

    fn entries(&self) -> Vec<(String, &[u8])> {
        let mut entries = vec![
            (self.svg_file_name(), self.svg.as_bytes()),
            (self.manifest_file_name(), self.manifest_json.as_bytes()),
        ];
        if let (Some(name), Some(bytes)) = (self.cover_file_name(), self.cover_jpeg.as_deref()) {
            entries.push((name, bytes));
        }
        entries
    }

    /// Pack every file into one zip archive.
    pub fn to_zip(&self) -> PlaqueResult<Vec<u8>> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (name, bytes) in self.entries() {
            zip.start_file(name, options)?;
            zip.write_all(bytes)?;
        }

        Ok(zip.finish()?.into_inner())
    }

    /// Write every file into `dir`, creating it if needed.
    pub fn write_to_dir(&self, dir: &Path) -> PlaqueResult<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::new();
        for (name, bytes) in self.entries() {
            let path = dir.join(name);
            std::fs::write(&path, bytes)?;
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn stem_sanitizes_and_truncates() {
        let track = TrackMetadata::new(
            "Somebody That I Used To Know (feat. Kimbra)",
            "Gotye & Friends",
            "4:04",
        )
        .resolve();
        assert_eq!(
            production_file_stem(&track, PlaqueSize::Large, date()),
            "Gotye___Friends_Somebody_That_I_Used_To_Know___large_2024-03-09"
        );
    }

    #[test]
    fn stem_uses_defaults_for_blank_metadata() {
        let track = TrackMetadata::default().resolve();
        assert_eq!(
            production_file_stem(&track, PlaqueSize::Small, date()),
            "Unknown_Artist_Unknown_Track_small_2024-03-09"
        );
    }

    #[test]
    fn cover_size_follows_plaque_height() {
        let t = PlaqueTemplate::default();
        let small = cover_print_spec(&t, 5.0, 300);
        assert!((small.side_inch - 3.1335).abs() < 1e-3);
        assert_eq!(small.pixels, 940);
        let large = cover_print_spec(&t, 12.0, 300);
        assert_eq!(large.pixels, 2256);
    }
}
