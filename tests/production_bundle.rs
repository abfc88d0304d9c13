use std::cell::RefCell;
use std::io::{Cursor, Read};

use chrono::NaiveDate;
use plaquelib::*;
use pretty_assertions::assert_eq;

struct FakeRasterizer {
    calls: RefCell<Vec<(String, u32, u32)>>,
    fail: bool,
}

impl FakeRasterizer {
    fn new(fail: bool) -> Self {
        Self { calls: RefCell::new(Vec::new()), fail }
    }
}

impl CoverRasterizer for FakeRasterizer {
    fn rasterize(&self, url: &str, target_px: u32, dpi: u32) -> PlaqueResult<Vec<u8>> {
        self.calls.borrow_mut().push((url.to_string(), target_px, dpi));
        if self.fail {
            return Err(PlaqueError::network("connection reset"));
        }
        Ok(vec![0xFF, 0xD8, 0xFF, 0xD9])
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 2).unwrap()
}

fn track() -> TrackMetadata {
    TrackMetadata::new("Blinding Lights", "The Weeknd", "3:20").with_image("https://img.example/cover.jpg")
}

#[test]
fn bundle_with_cover_zips_three_files() {
    let raster = FakeRasterizer::new(false);
    let bundle = ProductionBundle::build(&track(), 0.4, PlaqueSize::Large, date(), Some(&raster)).unwrap();

    assert_eq!(bundle.stem, "The_Weeknd_Blinding_Lights_large_2025-11-02");
    assert_eq!(
        raster.calls.borrow().as_slice(),
        &[("https://img.example/cover.jpg".to_string(), 2256, 300)]
    );

    let bytes = bundle.to_zip().unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "The_Weeknd_Blinding_Lights_large_2025-11-02.json",
            "The_Weeknd_Blinding_Lights_large_2025-11-02.svg",
            "The_Weeknd_Blinding_Lights_large_2025-11-02_cover.jpg",
        ]
    );

    let mut svg = String::new();
    archive
        .by_name("The_Weeknd_Blinding_Lights_large_2025-11-02.svg")
        .unwrap()
        .read_to_string(&mut svg)
        .unwrap();
    assert_eq!(svg, bundle.svg);
    assert!(!svg.contains("<image"));
    assert!(svg.contains("stroke:#ff0000"));

    let mut manifest = String::new();
    archive
        .by_name("The_Weeknd_Blinding_Lights_large_2025-11-02.json")
        .unwrap()
        .read_to_string(&mut manifest)
        .unwrap();
    let v: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(v["size"], "large");
    assert_eq!(v["priceCents"], 3999);
    assert_eq!(v["progressTime"], "1:20");
    assert_eq!(v["cover"]["pixels"], 2256);
    assert_eq!(v["files"].as_array().unwrap().len(), 2);
}

#[test]
fn failed_cover_is_skipped() {
    let raster = FakeRasterizer::new(true);
    let bundle = ProductionBundle::build(&track(), 0.4, PlaqueSize::Small, date(), Some(&raster)).unwrap();

    assert!(bundle.cover_jpeg.is_none());
    assert_eq!(bundle.cover_file_name(), None);
    assert_eq!(raster.calls.borrow()[0].1, 940);

    let v: serde_json::Value = serde_json::from_str(&bundle.manifest_json).unwrap();
    assert!(v["cover"].is_null());
    assert_eq!(v["files"], serde_json::json!(["The_Weeknd_Blinding_Lights_small_2025-11-02.svg"]));

    let bytes = bundle.to_zip().unwrap();
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 2);
}

#[test]
fn no_rasterizer_or_no_image_means_no_cover() {
    let bundle = ProductionBundle::build(&track(), 0.4, PlaqueSize::Small, date(), None).unwrap();
    assert!(bundle.cover_jpeg.is_none());

    let raster = FakeRasterizer::new(false);
    let meta = TrackMetadata::new("Blinding Lights", "The Weeknd", "3:20");
    let bundle = ProductionBundle::build(&meta, 0.4, PlaqueSize::Small, date(), Some(&raster)).unwrap();
    assert!(bundle.cover_jpeg.is_none());
    assert!(raster.calls.borrow().is_empty());
}

#[test]
fn bundle_writes_to_directory() {
    let dir = std::env::temp_dir().join(format!("plaquelib-bundle-{}", std::process::id()));
    let bundle = ProductionBundle::build(&track(), 0.75, PlaqueSize::Small, date(), None).unwrap();
    let written = bundle.write_to_dir(&dir).unwrap();

    assert_eq!(written.len(), 2);
    for path in &written {
        assert!(path.exists(), "{} missing", path.display());
    }
    let svg = std::fs::read_to_string(dir.join(bundle.svg_file_name())).unwrap();
    assert_eq!(svg, bundle.svg);
    assert!(svg.contains("2:30"));

    std::fs::remove_dir_all(&dir).unwrap();
}
