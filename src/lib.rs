//! plaquelib: parametric layout and SVG rendering for music plaques.
//!
//! Turns track metadata (title, artist, duration, cover URL) and a playback
//! position into a laser-ready vector document: the title is wrapped and
//! sized to fit, the progress bar and timestamps reflect the chosen moment,
//! and the output is deterministic for identical input.
//!
//! # Example
//! ```
//! use plaquelib::{render_plaque_svg, RenderOptions, TrackMetadata};
//!
//! let meta = TrackMetadata::new("Blinding Lights", "The Weeknd", "3:20");
//! let svg = render_plaque_svg(&meta, &RenderOptions::default().with_progress(0.4));
//! assert!(svg.contains("1:20"));
//! ```

pub mod collab;
pub mod error;
pub mod model;
pub mod production;
pub mod renderer;
pub mod timefmt;

#[cfg(target_os = "android")]
pub mod android;

pub use collab::{render_query, CoverRasterizer, MetadataResolver};
pub use error::{PlaqueError, PlaqueResult};
pub use model::*;
pub use production::{cover_print_spec, production_file_stem, CoverPrintSpec, ProductionBundle};
pub use renderer::{
    compute_plaque_layout, escape_xml, render_plaque_svg, render_plaque_svg_with, PlaqueLayout,
    PlaqueTemplate,
};

fn parse_request(metadata_json: &str, options_json: Option<&str>) -> PlaqueResult<(TrackMetadata, RenderOptions)> {
    let metadata: TrackMetadata = serde_json::from_str(metadata_json)?;
    let options: RenderOptions = match options_json.map(str::trim) {
        Some(json) if !json.is_empty() => serde_json::from_str(json)?,
        _ => RenderOptions::default(),
    };
    Ok((metadata, options))
}

/// Render from JSON input, as sent by the web and mobile clients.
///
/// `metadata_json` uses the camelCase field names of [`TrackMetadata`];
/// `options_json` those of [`RenderOptions`]. Absent options use defaults.
pub fn render_json_to_svg(metadata_json: &str, options_json: Option<&str>) -> PlaqueResult<String> {
    let (metadata, options) = parse_request(metadata_json, options_json)?;
    Ok(render_plaque_svg(&metadata, &options))
}

/// Compute the layout only and return it as JSON.
/// Useful for clients that draw an interactive knob over the preview.
pub fn layout_to_json(metadata_json: &str, options_json: Option<&str>) -> PlaqueResult<String> {
    let (metadata, options) = parse_request(metadata_json, options_json)?;
    let layout = compute_plaque_layout(
        &metadata.resolve(),
        &options.resolve(),
        &PlaqueTemplate::default(),
    );
    Ok(serde_json::to_string_pretty(&layout)?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

unsafe fn optional_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        None
    } else {
        unsafe { CStr::from_ptr(ptr) }.to_str().ok()
    }
}

/// Render a plaque from JSON and return SVG as a C string.
/// The caller must free the returned string with `plaquelib_free_string`.
///
/// Returns null if `metadata_json` is null or not valid JSON.
///
/// # Safety
/// `metadata_json` must be a valid null-terminated UTF-8 C string.
/// `options_json` may be null.
#[no_mangle]
pub unsafe extern "C" fn plaquelib_render_json(
    metadata_json: *const c_char,
    options_json: *const c_char,
) -> *mut c_char {
    let Some(meta) = (unsafe { optional_str(metadata_json) }) else {
        return std::ptr::null_mut();
    };
    let opts = unsafe { optional_str(options_json) };

    match render_json_to_svg(meta, opts) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(e) => {
            tracing::warn!(error = %e, "plaquelib_render_json rejected input");
            std::ptr::null_mut()
        }
    }
}

/// Compute the plaque layout from JSON and return it as a JSON C string.
/// The caller must free the returned string with `plaquelib_free_string`.
///
/// # Safety
/// Same contract as [`plaquelib_render_json`].
#[no_mangle]
pub unsafe extern "C" fn plaquelib_layout_json(
    metadata_json: *const c_char,
    options_json: *const c_char,
) -> *mut c_char {
    let Some(meta) = (unsafe { optional_str(metadata_json) }) else {
        return std::ptr::null_mut();
    };
    let opts = unsafe { optional_str(options_json) };

    match layout_to_json(meta, opts) {
        Ok(json) => CString::new(json).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by plaquelib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a plaquelib function, or null.
#[no_mangle]
pub unsafe extern "C" fn plaquelib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_through_ffi() {
        let meta = CString::new(r#"{"title":"Blinding Lights","artist":"The Weeknd","duration":"3:20"}"#).unwrap();
        let opts = CString::new(r#"{"progressPosition":0.5,"isPreview":true}"#).unwrap();
        unsafe {
            let out = plaquelib_render_json(meta.as_ptr(), opts.as_ptr());
            assert!(!out.is_null());
            let svg = CStr::from_ptr(out).to_str().unwrap().to_owned();
            plaquelib_free_string(out);
            assert!(svg.contains("1:40"));
            assert!(svg.contains("#334155"));
        }
    }

    #[test]
    fn ffi_rejects_null_and_bad_json() {
        unsafe {
            assert!(plaquelib_render_json(std::ptr::null(), std::ptr::null()).is_null());
            let bad = CString::new("{not json").unwrap();
            assert!(plaquelib_render_json(bad.as_ptr(), std::ptr::null()).is_null());
            plaquelib_free_string(std::ptr::null_mut());
        }
    }

    #[test]
    fn layout_json_exposes_knob_position() {
        let json = layout_to_json(r#"{"title":"Blinding Lights"}"#, Some(r#"{"progressPosition":0}"#)).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["knob_x"], serde_json::json!(8.5));
        assert_eq!(v["current_time"], "0:00");
    }

    #[test]
    fn blank_options_use_defaults() {
        let svg = render_json_to_svg("{}", Some("  ")).unwrap();
        assert!(svg.contains("Unknown Track"));
        assert!(svg.contains("Unknown Artist"));
    }
}
