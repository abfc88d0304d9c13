//! Collaborator interfaces.
//!
//! Metadata lookup and cover rasterization live outside this crate (HTTP
//! scrapers, image pipelines). They are described here only as traits so the
//! storefront and fulfilment code can plug in real services or test doubles.

use crate::error::{PlaqueError, PlaqueResult};
use crate::model::{RenderOptions, TrackMetadata};
use crate::renderer::render_plaque_svg;

/// Resolves a free-form query (track URL, share link, "artist - title") to
/// track metadata.
pub trait MetadataResolver {
    fn resolve(&self, query: &str) -> PlaqueResult<TrackMetadata>;
}

/// Fetches a cover image and produces a square print-ready JPEG of
/// `target_px` × `target_px` tagged with `dpi`.
pub trait CoverRasterizer {
    fn rasterize(&self, url: &str, target_px: u32, dpi: u32) -> PlaqueResult<Vec<u8>>;
}

impl<T: MetadataResolver + ?Sized> MetadataResolver for &T {
    fn resolve(&self, query: &str) -> PlaqueResult<TrackMetadata> {
        (**self).resolve(query)
    }
}

impl<T: CoverRasterizer + ?Sized> CoverRasterizer for &T {
    fn rasterize(&self, url: &str, target_px: u32, dpi: u32) -> PlaqueResult<Vec<u8>> {
        (**self).rasterize(url, target_px, dpi)
    }
}

/// Resolve `query` and render the plaque.
///
/// Blank queries are rejected before the resolver is called.
pub fn render_query<R: MetadataResolver + ?Sized>(
    resolver: &R,
    query: &str,
    options: &RenderOptions,
) -> PlaqueResult<String> {
    let query = query.trim();
    if query.is_empty() {
        return Err(PlaqueError::invalid_input("empty track query"));
    }

    let metadata = resolver.resolve(query).map_err(|e| {
        tracing::warn!(query, error = %e, "metadata lookup failed");
        e
    })?;
    tracing::info!(
        query,
        title = metadata.title.as_deref().unwrap_or_default(),
        "metadata resolved"
    );
    Ok(render_plaque_svg(&metadata, options))
}
