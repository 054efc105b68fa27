use crate::foundation::core::Point;

/// Perpendicular-distance tolerance for simplification, in buffer px.
pub const EPSILON: f64 = 1.5;

/// Reduce a contour's point count with Ramer–Douglas–Peucker.
///
/// The chord runs from the first to the last point; the point farthest from
/// it splits the range recursively when its perpendicular distance exceeds
/// [`EPSILON`], otherwise the whole range collapses to its endpoints. The
/// closing edge back to the first point stays implicit, as in the input. A
/// degenerate result (fewer than 2 points) falls back to the unsimplified
/// input.
pub fn simplify_contour(points: &[Point]) -> Vec<Point> {
    let reduced = rdp(points);
    if reduced.len() < 2 {
        return points.to_vec();
    }
    reduced
}

fn rdp(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_dist = 0.0;
    let mut max_idx = 0;
    for (idx, p) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let dist = perpendicular_distance(*p, first, last);
        if dist > max_dist {
            max_dist = dist;
            max_idx = idx;
        }
    }

    if max_dist > EPSILON {
        let mut left = rdp(&points[..=max_idx]);
        let right = rdp(&points[max_idx..]);
        // The split point ends both halves; keep one copy.
        left.pop();
        left.extend(right);
        left
    } else {
        vec![first, last]
    }
}

/// Distance from `p` to the infinite line through `a` and `b`, or to `a`
/// when the chord is degenerate.
fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let chord_len = dx.hypot(dy);
    if chord_len == 0.0 {
        return p.distance(a);
    }
    ((p.x - a.x) * dy - (p.y - a.y) * dx).abs() / chord_len
}

#[cfg(test)]
#[path = "../../tests/unit/contour/simplify.rs"]
mod tests;
