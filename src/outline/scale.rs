use crate::foundation::core::{Footprint, Point};

/// Fraction of the target footprint the traced output fills. The remaining
/// margin is left for kerf compensation and placement downstream.
pub const FILL_FRACTION: f64 = 0.7;

/// Uniform pixel-to-millimeter scale for a buffer fitted into a footprint.
///
/// The smaller of the two per-axis scales wins, so the buffer's longer
/// dimension ends up spanning exactly [`FILL_FRACTION`] of the tighter
/// footprint axis.
pub fn scale_for(buffer_width: u32, buffer_height: u32, footprint: Footprint) -> f64 {
    let sx = footprint.width_mm * FILL_FRACTION / f64::from(buffer_width);
    let sy = footprint.height_mm * FILL_FRACTION / f64::from(buffer_height);
    sx.min(sy)
}

/// Map pixel-space subpaths into millimeter space, centered on the origin.
///
/// Every point moves to `(p - buffer_center) * scale`; the caller translates
/// the centered result to its final placement.
pub fn fit_to_footprint(
    subpaths: &mut [Vec<Point>],
    buffer_width: u32,
    buffer_height: u32,
    footprint: Footprint,
) -> f64 {
    let scale = scale_for(buffer_width, buffer_height, footprint);
    let cx = f64::from(buffer_width) / 2.0;
    let cy = f64::from(buffer_height) / 2.0;

    for subpath in subpaths.iter_mut() {
        for p in subpath.iter_mut() {
            p.x = (p.x - cx) * scale;
            p.y = (p.y - cy) * scale;
        }
    }
    scale
}

#[cfg(test)]
#[path = "../../tests/unit/outline/scale.rs"]
mod tests;
