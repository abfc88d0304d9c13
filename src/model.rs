//! Data model for plaque rendering.
//!
//! `TrackMetadata` and `RenderOptions` are the raw inputs as they arrive from
//! the storefront (JSON, every field optional). Both are resolved exactly once
//! at the render entry point into `ResolvedTrack` / `ResolvedOptions`, so the
//! layout code never has to deal with missing values.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Unknown Track";
pub const DEFAULT_ARTIST: &str = "Unknown Artist";
pub const DEFAULT_DURATION: &str = "0:00";
pub const DEFAULT_PROGRESS: f64 = 0.4;

/// Plaques at or above this height (inches) are cut as the large variant.
const LARGE_MIN_HEIGHT_INCH: f64 = 8.5;

/// Track metadata as returned by the metadata resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackMetadata {
    /// Song title
    pub title: Option<String>,
    /// Artist name(s)
    pub artist: Option<String>,
    /// Album cover URL
    pub image: Option<String>,
    /// Duration label, e.g. "3:20"
    pub duration: Option<String>,
}

impl TrackMetadata {
    pub fn new(title: &str, artist: &str, duration: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            artist: Some(artist.to_string()),
            image: None,
            duration: Some(duration.to_string()),
        }
    }

    pub fn with_image(mut self, url: &str) -> Self {
        self.image = Some(url.to_string());
        self
    }

    /// Replace missing or blank fields with their literal defaults.
    pub fn resolve(&self) -> ResolvedTrack {
        fn non_blank(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.trim().is_empty())
        }

        ResolvedTrack {
            title: non_blank(&self.title).unwrap_or(DEFAULT_TITLE).to_string(),
            artist: non_blank(&self.artist).unwrap_or(DEFAULT_ARTIST).to_string(),
            image: non_blank(&self.image).map(str::to_string),
            duration: non_blank(&self.duration)
                .map(str::trim)
                .unwrap_or(DEFAULT_DURATION)
                .to_string(),
        }
    }
}

/// Track metadata with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTrack {
    pub title: String,
    pub artist: String,
    pub image: Option<String>,
    pub duration: String,
}

/// Physical plaque variants offered by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaqueSize {
    #[default]
    Small,
    Large,
}

impl PlaqueSize {
    pub fn from_height_inch(height: Option<f64>) -> Self {
        match height {
            Some(h) if h.is_finite() && h >= LARGE_MIN_HEIGHT_INCH => PlaqueSize::Large,
            _ => PlaqueSize::Small,
        }
    }

    /// Finished plaque height in inches.
    pub fn height_inch(self) -> f64 {
        match self {
            PlaqueSize::Small => 5.0,
            PlaqueSize::Large => 12.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaqueSize::Small => "small",
            PlaqueSize::Large => "large",
        }
    }

    /// Unit price in US cents.
    pub fn price_cents(self) -> u32 {
        match self {
            PlaqueSize::Small => 2999,
            PlaqueSize::Large => 3999,
        }
    }
}

/// Which output the document is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Customer-facing preview: muted engraving, hidden cut guides.
    Preview,
    /// Laser-cutter file: black engraving, red cut outline.
    Production,
}

/// Raw render options bag. Every field is optional; see [`RenderOptions::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Fraction of playback elapsed, 0..=1
    pub progress_position: Option<f64>,
    /// Embed the album cover as an `<image>`
    pub embed_image: Option<bool>,
    /// Replace the album region with registration marks
    pub omit_album: Option<bool>,
    /// Preview palette instead of the production palette
    pub is_preview: Option<bool>,
    /// Physical plaque height in inches
    pub plaque_height_inch: Option<f64>,
}

impl RenderOptions {
    /// Options for the customer preview shown before checkout.
    pub fn preview(image_available: bool) -> Self {
        Self {
            embed_image: Some(image_available),
            omit_album: Some(false),
            is_preview: Some(true),
            ..Self::default()
        }
    }

    /// Options for the laser-cut production file.
    pub fn production() -> Self {
        Self {
            embed_image: Some(false),
            omit_album: Some(true),
            is_preview: Some(false),
            ..Self::default()
        }
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress_position = Some(progress);
        self
    }

    pub fn with_size(mut self, size: PlaqueSize) -> Self {
        self.plaque_height_inch = Some(size.height_inch());
        self
    }

    /// Resolve every default once. Progress is clamped to `[0, 1]`; absent or
    /// non-finite progress falls back to [`DEFAULT_PROGRESS`].
    pub fn resolve(&self) -> ResolvedOptions {
        let progress = match self.progress_position {
            Some(p) if p.is_finite() => p.clamp(0.0, 1.0),
            _ => DEFAULT_PROGRESS,
        };
        let mode = if self.is_preview.unwrap_or(false) {
            RenderMode::Preview
        } else {
            RenderMode::Production
        };

        ResolvedOptions {
            progress,
            embed_image: self.embed_image.unwrap_or(false),
            omit_album: self.omit_album.unwrap_or(false),
            mode,
            size: PlaqueSize::from_height_inch(self.plaque_height_inch),
        }
    }
}

/// Render options with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOptions {
    pub progress: f64,
    pub embed_image: bool,
    pub omit_album: bool,
    pub mode: RenderMode,
    pub size: PlaqueSize,
}

impl ResolvedOptions {
    pub fn is_preview(&self) -> bool {
        self.mode == RenderMode::Preview
    }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        RenderOptions::default().resolve()
    }
}
