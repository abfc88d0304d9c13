//! Vector glyph data for the decorative player controls and the heart icon.
//!
//! Control outlines are drawn in a fixed design frame matching the default
//! template's content area. The renderer scales that frame to the template
//! width and anchors it to the bottom edge (see `PlaqueLayout::controls_scale`).

/// Design frame the control outlines are drawn in.
pub(super) const CONTROLS_FRAME: (f64, f64) = (535.19, 781.99);
/// Topmost point of the icons at the row's ends (shuffle, repeat), which
/// share the row with the timestamps.
pub(super) const CONTROLS_EDGE_TOP: f64 = 697.63;
/// Lowest point of the row: the bottom of the scaled play disc.
pub(super) const CONTROLS_BOTTOM: f64 = 766.49;

/// Play button: engraved disc with a light triangle, scaled about the origin.
pub(super) const PLAY_DISC: (f64, f64, f64) = (262.59, 721.49, 60.0);
pub(super) const PLAY_TRIANGLE: &str = "M287.71,718.9l-39.46-22.78c-2-1.15-4.5.29-4.5,2.6v45.57c0,2.31,2.5,3.75,4.5,2.6l39.46-22.78c2-1.15,2-4.04,0-5.2Z";
pub(super) const PLAY_TRANSLATE: (f64, f64) = (65.6475, 180.3725);
pub(super) const PLAY_SCALE: f64 = 0.75;

pub(super) const NEXT_TRACK: &str = "M416.92,698.86v19.16l-32.57-18.81c-1.75-1.01-3.95.25-3.95,2.28v39.99c0,2.03,2.19,3.29,3.95,2.28l32.57-18.81v19.16h6v-45.26h-6Z";

pub(super) const PREVIOUS_TRACK: &str = "M108.25,698.86v19.16s32.57-18.81,32.57-18.81c1.75-1.01,3.95.25,3.95,2.28v39.99c0,2.03-2.19,3.29-3.95,2.28l-32.57-18.81v19.16h-6v-45.26h6Z";

pub(super) const SHUFFLE: &str = "M34.86,697.63c.56,0,1.04.2,1.45.6l8.13,8.13c.39.39.59.87.59,1.43s-.2,1.05-.59,1.45l-8.13,8.13c-.39.39-.87.59-1.45.59s-1.04-.2-1.44-.6-.6-.88-.6-1.44.2-1.02.59-1.43l4.67-4.67h-3.22c-1.91,0-3.7.42-5.37,1.25s-3.08,1.97-4.21,3.41c-1.75,2.22-2.62,4.74-2.62,7.54s-.68,5.45-2.03,7.88c-.72,1.3-1.59,2.47-2.62,3.51-1.5,1.54-3.26,2.73-5.26,3.59-2,.86-4.12,1.29-6.35,1.29H2.33c-.56,0-1.04-.2-1.44-.6-.4-.4-.6-.88-.6-1.44,0-.56.2-1.04.6-1.44.4-.4.88-.6,1.44-.6h4.07c1.92,0,3.71-.41,5.38-1.24s3.07-1.96,4.2-3.4c1.75-2.22,2.62-4.74,2.62-7.56s.68-5.45,2.03-7.88c.73-1.31,1.6-2.48,2.62-3.49,1.5-1.54,3.26-2.73,5.26-3.6s4.12-1.29,6.35-1.29h3.22l-4.67-4.65c-.39-.41-.59-.89-.59-1.45s.2-1.04.6-1.44c.4-.4.88-.6,1.44-.6h0ZM34.86,726.09c.56,0,1.04.2,1.45.6l8.13,8.13c.39.39.59.87.59,1.45s-.2,1.04-.59,1.43l-8.13,8.13c-.39.39-.87.59-1.45.59s-1.04-.2-1.44-.59c-.4-.39-.6-.87-.6-1.43s.2-1.03.59-1.45l4.67-4.67h-3.22c-2.23,0-4.35-.43-6.35-1.29s-3.75-2.05-5.26-3.59c.82-1.2,1.49-2.47,2.03-3.83,1.13,1.44,2.53,2.57,4.2,3.4,1.67.83,3.46,1.24,5.38,1.24h3.22l-4.67-4.65c-.39-.41-.59-.89-.59-1.45,0-.56.2-1.04.6-1.44s.88-.6,1.44-.6h0ZM2.33,705.76h4.07c2.23,0,4.35.43,6.35,1.29,2,.86,3.75,2.06,5.26,3.6-.83,1.22-1.5,2.49-2.03,3.83-1.13-1.44-2.54-2.58-4.21-3.41-1.67-.83-3.46-1.25-5.37-1.25H2.33c-.56,0-1.04-.2-1.44-.6-.4-.4-.6-.88-.6-1.44,0-.56.2-1.04.6-1.44.4-.4.88-.6,1.44-.6h0Z";

pub(super) const REPEAT: &str = "M532.33,713.03c-1.4,0-2.55,1.15-2.55,2.55v5.92c0,5.6-4.54,10.16-10.16,10.16h-20.94l1.58-1.58c.46-.46.73-1.1.73-1.79,0-1.4-1.15-2.55-2.55-2.55-.71,0-1.33.28-1.79.76l-5.92,5.92c-.46.46-.73,1.1-.73,1.79s.28,1.33.73,1.79l5.96,5.92c.46.46,1.1.73,1.79.73,1.4,0,2.55-1.15,2.55-2.55,0-.71-.28-1.33-.73-1.79l-1.58-1.58h20.94c8.42,0,15.23-6.81,15.23-15.23v-5.92c-.02-1.4-1.17-2.55-2.57-2.55ZM512.88,711.36h4.01l-1.58,1.58c-.46.46-.76,1.1-.76,1.79,0,1.4,1.15,2.55,2.55,2.55.71,0,1.33-.28,1.79-.76l5.92-5.92c.46-.46.76-1.1.76-1.79s-.28-1.33-.73-1.79l-5.92-5.94c-.46-.46-1.1-.73-1.79-.73-1.4,0-2.55,1.15-2.55,2.55,0,.71.28,1.33.76,1.79l1.58,1.58h-20.94c-8.42,0-15.23,6.81-15.23,15.23v5.92c0,1.4,1.15,2.55,2.55,2.55s2.55-1.15,2.55-2.55v-5.92c0-5.6,4.54-10.16,10.16-10.16l16.88.02h0Z";

/// Heart outline on a 24 × 22 grid; each entry is one cubic segment
/// (control 1, control 2, end point) after the move-to at `HEART_START`.
const HEART_START: (f64, f64) = (12.0, 21.0);
const HEART_CURVES: [[(f64, f64); 3]; 6] = [
    [(5.0, 16.0), (2.0, 13.0), (2.0, 9.0)],
    [(2.0, 6.0), (4.5, 4.0), (7.0, 4.0)],
    [(9.0, 4.0), (10.5, 5.5), (12.0, 7.0)],
    [(13.5, 5.5), (15.0, 4.0), (17.0, 4.0)],
    [(19.5, 4.0), (22.0, 6.0), (22.0, 9.0)],
    [(22.0, 13.0), (19.0, 16.0), (12.0, 21.0)],
];
const HEART_GRID: (f64, f64) = (24.0, 22.0);

/// Build the heart path `d` attribute scaled to `width` × `height`, with its
/// top-left corner at the local origin.
pub(super) fn heart_path(width: f64, height: f64, fmt: impl Fn(f64) -> String) -> String {
    let sx = width / HEART_GRID.0;
    let sy = height / HEART_GRID.1;
    let pt = |(x, y): (f64, f64)| format!("{} {}", fmt(x * sx), fmt(y * sy));

    let mut d = format!("M {}", pt(HEART_START));
    for [c1, c2, end] in HEART_CURVES {
        d.push_str(&format!(" C {} {} {}", pt(c1), pt(c2), pt(end)));
    }
    d.push_str(" Z");
    d
}
