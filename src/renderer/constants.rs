//! Default template values for the plaque renderer (all in SVG user units).

// ── Document & border ───────────────────────────────────────────────
pub(super) const BASE_WIDTH: f64 = 535.19;
pub(super) const BASE_HEIGHT: f64 = 781.99;
pub(super) const BORDER_WIDTH: f64 = 36.0; // 0.5 in at 72 units per inch
pub(super) const CORNER_RADIUS: f64 = 30.0;

// ── Vertical rhythm ─────────────────────────────────────────────────
pub(super) const TITLE_TOP_GAP: f64 = 10.0; // album bottom → title top
pub(super) const BAR_NOMINAL_OFFSET: f64 = 120.0; // album bottom → bar top
pub(super) const ARTIST_TOP_GAP: f64 = 5.0;
pub(super) const TITLE_LINE_GAP: f64 = 6.0;
pub(super) const EXTRA_ARTIST_GAP: f64 = 10.0; // two-line titles only
pub(super) const ARTIST_BAR_MIN_GAP: f64 = 28.0;
pub(super) const FIT_SAFE_PAD: f64 = 10.0;
pub(super) const TIMES_OFFSET: f64 = 25.0; // bar bottom → timestamp baseline
pub(super) const CONTROLS_OFFSET: f64 = 20.0;

// ── Font sizes & fitting ────────────────────────────────────────────
pub(super) const TITLE_FONT_SIZE: f64 = 41.0;
pub(super) const MIN_TITLE_FONT_SIZE: f64 = 26.0;
pub(super) const TWO_LINE_SHRINK: f64 = 0.85;
pub(super) const SHRINK_STEP: f64 = 0.92;
pub(super) const MAX_FIT_ITERATIONS: usize = 10;
pub(super) const ARTIST_FONT_SIZE: f64 = 24.0;
pub(super) const TIME_FONT_SIZE: f64 = 20.0;
pub(super) const MAX_ARTIST_CHARS: usize = 60;
pub(super) const MIN_TEXT_WIDTH: f64 = 180.0;

// ── Progress bar ────────────────────────────────────────────────────
pub(super) const BAR_HEIGHT: f64 = 6.8;
pub(super) const KNOB_RADIUS: f64 = 8.5;

// ── Heart glyph ─────────────────────────────────────────────────────
pub(super) const HEART_SCALE: f64 = 2.0;
pub(super) const HEART_ASPECT: f64 = 1.15; // width / height
pub(super) const HEART_RESERVE_PAD: f64 = 8.0;

// ── Registration marks ──────────────────────────────────────────────
pub(super) const MARK_LENGTH_RATIO: f64 = 0.035;
pub(super) const MARK_MIN_LENGTH: f64 = 8.0;
pub(super) const MARK_MAX_LENGTH: f64 = 28.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const PRODUCTION_ENGRAVE: &str = "#000000";
pub(super) const PREVIEW_ENGRAVE: &str = "#334155";
pub(super) const LIGHT_FILL: &str = "#FFFFFF";
pub(super) const PREVIEW_TRACK: &str = "#94A3B8";
pub(super) const CUT_RED: &str = "#ff0000";
pub(super) const TRANSPARENT: &str = "transparent";

// ── Text ────────────────────────────────────────────────────────────
pub(super) const ELLIPSIS: char = '…';
