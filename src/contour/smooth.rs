use crate::foundation::core::{Contour, Point};

/// Half-window scale: a smoothing strength of 1.0 averages over
/// `2 * 5 + 1 = 11` points.
pub const WINDOW_SCALE: f32 = 5.0;

/// Apply circular moving-average smoothing to a closed contour.
///
/// Each point becomes the mean of the `2 * window + 1` points centered on it
/// with indices wrapping modulo the contour length, where
/// `window = max(1, round(smoothing * 5))`. Order and point count are
/// preserved. Contours with fewer than 3 points, or a smoothing strength of
/// zero or less, pass through unchanged.
pub fn smooth_closed(contour: &Contour, smoothing: f32) -> Contour {
    let n = contour.len();
    if smoothing <= 0.0 || n < 3 {
        return contour.clone();
    }

    let window = ((smoothing * WINDOW_SCALE).round() as i64).max(1);
    let span = (2 * window + 1) as f64;
    let points = &contour.points;

    let smoothed = (0..n as i64)
        .map(|i| {
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for offset in -window..=window {
                let idx = (i + offset).rem_euclid(n as i64) as usize;
                sum_x += points[idx].x;
                sum_y += points[idx].y;
            }
            Point::new(sum_x / span, sum_y / span)
        })
        .collect();

    Contour::new(smoothed)
}
