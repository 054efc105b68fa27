use crate::foundation::core::{Contour, DetailProfile, RankedContour};

/// Floor for the minimum bounding-box area, px². Keeps speck-sized contours
/// out even on tiny buffers where the detail fraction would round to
/// nothing.
pub const MIN_AREA_FLOOR: f64 = 16.0;

/// Rank contours by bounding-box area and keep the largest.
///
/// `min_area = max(16, buffer_area * fraction)` with the fraction taken from
/// the detail profile. If the filter would discard every contour, the
/// original set is kept instead (annotated with area 0) so a pipeline run
/// never comes up empty solely because the filter was too aggressive.
/// Survivors are sorted by area descending (the one stage that reorders)
/// with the stable sort keeping scan order among equal areas, then truncated
/// to the profile's path cap.
pub fn rank_and_filter(
    contours: Vec<Contour>,
    buffer_width: u32,
    buffer_height: u32,
    profile: &DetailProfile,
) -> Vec<RankedContour> {
    let buffer_area = f64::from(buffer_width) * f64::from(buffer_height);
    let min_area = (buffer_area * profile.min_area_fraction).max(MIN_AREA_FLOOR);

    let mut kept: Vec<RankedContour> = contours
        .iter()
        .filter_map(|contour| {
            let bounds = contour.bounds()?;
            let area = bounds.width() * bounds.height();
            (area >= min_area).then(|| RankedContour {
                contour: contour.clone(),
                area,
            })
        })
        .collect();

    if kept.is_empty() {
        kept = contours
            .into_iter()
            .map(|contour| RankedContour { contour, area: 0.0 })
            .collect();
    }

    kept.sort_by(|a, b| b.area.total_cmp(&a.area));
    kept.truncate(profile.max_paths);
    kept
}

#[cfg(test)]
#[path = "../../tests/unit/contour/rank.rs"]
mod tests;
