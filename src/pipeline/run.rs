use crate::{
    contour::{boundary, rank, simplify, smooth},
    foundation::core::{Footprint, PathData, Point, Rect, TraceOptions, TraceStats},
    foundation::error::{TraceError, TraceResult},
    outline::{scale, svg},
    pipeline::scheduler::{RunToCompletion, Scheduler},
    raster::{binarize, decode},
};

/// Trace an encoded image into millimeter path data, synchronously.
///
/// Equivalent to [`trace_with_scheduler`] with [`RunToCompletion`]: the
/// pipeline runs without suspension points and produces byte-identical
/// output.
pub fn trace(image: &[u8], footprint: Footprint, options: &TraceOptions) -> TraceResult<PathData> {
    trace_with_scheduler(image, footprint, options, &mut RunToCompletion)
}

/// Trace an encoded image, yielding to `scheduler` at the pipeline's
/// cooperative checkpoints.
#[tracing::instrument(skip(image, scheduler))]
pub fn trace_with_scheduler(
    image: &[u8],
    footprint: Footprint,
    options: &TraceOptions,
    scheduler: &mut dyn Scheduler,
) -> TraceResult<PathData> {
    trace_with_stats(image, footprint, options, scheduler).map(|(path, _)| path)
}

/// Trace an encoded image, returning diagnostic counters alongside the
/// path data.
///
/// The stages run in fixed order (decode/resample, binarize, boundary
/// trace, smooth, rank/filter, simplify, scale, serialize) and every stage
/// preserves scan order except ranking, which reorders by bounding-box area
/// descending. Output is bit-for-bit reproducible for identical input bytes
/// and options.
pub fn trace_with_stats(
    image: &[u8],
    footprint: Footprint,
    options: &TraceOptions,
    scheduler: &mut dyn Scheduler,
) -> TraceResult<(PathData, TraceStats)> {
    options.validate()?;

    let mut buffer = decode::decode_for_detail(image, options.detail)?;
    tracing::debug!(
        width = buffer.width(),
        height = buffer.height(),
        "resampled source image"
    );

    binarize::binarize_in_place(&mut buffer, options, scheduler)?;

    let contours = boundary::trace_boundaries(&buffer, scheduler)?;
    if contours.is_empty() {
        return Err(TraceError::no_contours(
            "mask has no foreground/background boundary; try adjusting the threshold",
        ));
    }
    let contours_traced = contours.len();
    let points_traced: usize = contours.iter().map(|c| c.len()).sum();
    tracing::debug!(contours_traced, points_traced, "boundary tracing done");

    let smoothed: Vec<_> = contours
        .iter()
        .map(|c| smooth::smooth_closed(c, options.smoothing))
        .collect();

    let profile = options.detail.profile();
    let ranked = rank::rank_and_filter(smoothed, buffer.width(), buffer.height(), &profile);
    let contours_kept = ranked.len();

    let mut subpaths: Vec<Vec<Point>> = ranked
        .iter()
        .map(|r| simplify::simplify_contour(&r.contour.points))
        .collect();
    let points_output: usize = subpaths.iter().map(Vec::len).sum();

    let scale_mm_per_px =
        scale::fit_to_footprint(&mut subpaths, buffer.width(), buffer.height(), footprint);

    let path = svg::to_path_data(&subpaths);
    enforce_budget(&path)?;
    tracing::debug!(
        subpaths = path.subpath_count,
        commands = path.command_count,
        "serialized output"
    );

    let stats = TraceStats {
        buffer_width: buffer.width(),
        buffer_height: buffer.height(),
        contours_traced,
        points_traced,
        contours_kept,
        points_output,
        command_count: path.command_count,
        scale_mm_per_px,
        output_bounds: bounds_of(&subpaths),
    };
    Ok((path, stats))
}

/// Reject finished output that is empty or over the command ceiling. The
/// ceiling is a hard failure, never a silent truncation.
fn enforce_budget(path: &PathData) -> TraceResult<()> {
    if path.subpath_count == 0 {
        return Err(TraceError::no_contours(
            "every traced contour degenerated during filtering",
        ));
    }
    if path.command_count > svg::COMMAND_BUDGET {
        return Err(TraceError::too_complex(format!(
            "path command count {} exceeds the budget of {}; lower the detail level or simplify the source image",
            path.command_count,
            svg::COMMAND_BUDGET,
        )));
    }
    Ok(())
}

fn bounds_of(subpaths: &[Vec<Point>]) -> Option<Rect> {
    let mut iter = subpaths.iter().flatten();
    let first = iter.next()?;
    let mut bounds = Rect::new(first.x, first.y, first.x, first.y);
    for p in iter {
        bounds.x0 = bounds.x0.min(p.x);
        bounds.y0 = bounds.y0.min(p.y);
        bounds.x1 = bounds.x1.max(p.x);
        bounds.y1 = bounds.y1.max(p.y);
    }
    Some(bounds)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/run.rs"]
mod tests;
