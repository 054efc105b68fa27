use crate::{
    foundation::core::{Contour, Point},
    foundation::error::TraceResult,
    pipeline::scheduler::Scheduler,
    raster::buffer::RasterBuffer,
};

/// Tracing stops once this many contours have been collected.
pub const MAX_CONTOURS: usize = 150;

/// Tracing stops once the cumulative point count across accepted contours
/// reaches this ceiling.
pub const MAX_TOTAL_POINTS: usize = 50_000;

/// Upper bound on the per-trace step counter, clamped further by the buffer
/// pixel count. A walk that exceeds it is a runaway on a pathological mask
/// and is dropped without surfacing an error.
pub const MAX_TRACE_STEPS: usize = 3000;

/// Contours with more points than this are discarded as runaway traces.
pub const MAX_CONTOUR_POINTS: usize = 5000;

/// Scanned rows between scheduler checkpoints.
pub const CHECKPOINT_ROW_INTERVAL: i64 = 15;

/// One unit move of the boundary walker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Left,
    Right,
    Up,
    Down,
}

impl Step {
    fn delta(self) -> (i64, i64) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }
}

/// 4-bit cell code for the 2x2 neighborhood anchored at `(x, y)`:
/// `tl<<3 | tr<<2 | bl<<1 | br`, each bit 1 for foreground. The two diagonal
/// configurations (6 and 9) are genuine topological ambiguities (two
/// regions touching only at a corner) and resolve by walk history. Changing
/// either tie-break changes which of two plausible contours gets traced, so
/// both are fixed.
fn cell_code(mask: &RasterBuffer, x: i64, y: i64) -> u8 {
    let tl = u8::from(mask.foreground(x, y));
    let tr = u8::from(mask.foreground(x + 1, y));
    let bl = u8::from(mask.foreground(x, y + 1));
    let br = u8::from(mask.foreground(x + 1, y + 1));
    (tl << 3) | (tr << 2) | (bl << 1) | br
}

fn next_step(cell: u8, prev: Step) -> Step {
    match cell {
        1 | 5 | 13 => Step::Down,
        2 | 3 | 7 => Step::Left,
        4 | 12 | 14 => Step::Right,
        8 | 10 | 11 => Step::Up,
        6 => {
            if prev == Step::Down {
                Step::Left
            } else {
                Step::Right
            }
        }
        9 => {
            if prev == Step::Left {
                Step::Down
            } else {
                Step::Up
            }
        }
        // 0 and 15: no boundary through this cell; carry on.
        _ => prev,
    }
}

/// Extract every closed foreground/background boundary from a binarized
/// buffer.
///
/// Cells are scanned in row-major order; a trace starts wherever the
/// top-left, top-right and bottom-left samples of a 2x2 cell disagree and
/// the cell has not been visited by an earlier walk. Walks follow the cell
/// code table, keep the step history for the two saddle codes, and close
/// when they return to their starting cell. Runaway walks (over the step
/// cap) and trivially small or oversized loops are dropped silently.
///
/// Contours come out in scan order, bounded by [`MAX_CONTOURS`] and
/// [`MAX_TOTAL_POINTS`] for the phase as a whole. Yields to `scheduler`
/// every [`CHECKPOINT_ROW_INTERVAL`] scanned rows.
pub fn trace_boundaries(
    mask: &RasterBuffer,
    scheduler: &mut dyn Scheduler,
) -> TraceResult<Vec<Contour>> {
    let w = i64::from(mask.width());
    let h = i64::from(mask.height());
    let step_cap = mask.pixel_count().min(MAX_TRACE_STEPS);

    let mut visited = vec![false; mask.pixel_count()];
    let mut contours: Vec<Contour> = Vec::new();
    let mut total_points = 0usize;

    'scan: for y in 0..h {
        if y > 0 && y % CHECKPOINT_ROW_INTERVAL == 0 {
            scheduler.checkpoint()?;
        }
        for x in 0..w {
            if visited[(y * w + x) as usize] {
                continue;
            }
            let tl = mask.foreground(x, y);
            let tr = mask.foreground(x + 1, y);
            let bl = mask.foreground(x, y + 1);
            if tl == tr && tr == bl {
                continue;
            }

            let Some(points) = walk(mask, &mut visited, x, y, step_cap) else {
                continue;
            };
            let count = points.len();
            if count <= 3 || count > MAX_CONTOUR_POINTS {
                continue;
            }
            total_points += count;
            contours.push(Contour::new(points));
            if contours.len() >= MAX_CONTOURS || total_points >= MAX_TOTAL_POINTS {
                break 'scan;
            }
        }
    }

    Ok(contours)
}

/// Follow one boundary from `(start_x, start_y)` back to itself.
///
/// Returns `None` when the step counter passes `step_cap` before the walk
/// closes. Visited marks are written for every in-range cell the walk
/// touches, also for abandoned walks, so a runaway is not re-entered from a
/// later scan position. Positions may leave the buffer by one cell (the
/// apron reads as background); those cells are part of the contour but have
/// no visited slot.
fn walk(
    mask: &RasterBuffer,
    visited: &mut [bool],
    start_x: i64,
    start_y: i64,
    step_cap: usize,
) -> Option<Vec<Point>> {
    let w = i64::from(mask.width());
    let h = i64::from(mask.height());

    let mut points = Vec::new();
    let (mut x, mut y) = (start_x, start_y);
    let mut dir = Step::Left;
    let mut steps = 0usize;

    loop {
        if x >= 0 && y >= 0 && x < w && y < h {
            visited[(y * w + x) as usize] = true;
        }
        points.push(Point::new(x as f64, y as f64));

        dir = next_step(cell_code(mask, x, y), dir);
        let (dx, dy) = dir.delta();
        x += dx;
        y += dy;
        steps += 1;

        if x == start_x && y == start_y {
            return Some(points);
        }
        if steps > step_cap {
            return None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contour/boundary.rs"]
mod tests;
