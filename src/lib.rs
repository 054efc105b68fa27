//! Kerfvec is a deterministic raster-to-vector contour extraction engine.
//!
//! It turns an encoded bitmap (a photo or a generated silhouette) into a
//! bounded set of closed vector contour paths scaled into physical
//! millimeter coordinates, ready to embed as SVG path data for laser
//! cutting or engraving.
//!
//! # Pipeline overview
//!
//! 1. **Decode/resample**: encoded bytes -> [`RasterBuffer`] capped at a
//!    detail-dependent dimension (all downstream work is bounded by the cap)
//! 2. **Binarize**: in-place luminance thresholding into a binary mask
//! 3. **Trace**: marching-squares boundary walking under hard contour/point
//!    budgets
//! 4. **Smooth / rank / simplify**: circular moving average, bounding-box
//!    ranking with a detail-scaled area filter, Ramer-Douglas-Peucker
//! 5. **Scale / serialize**: millimeter mapping centered on the origin, SVG
//!    path-data output guarded by a command budget
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identical input bytes and options produce
//!   byte-identical output; there is no randomness and no hash-order
//!   dependence anywhere in the pipeline.
//! - **Bounded output**: every stage enforces explicit complexity caps and
//!   favors predictable termination over maximal fidelity.
//! - **Cooperative, not parallel**: one logical task that suspends at fixed
//!   checkpoints through the [`Scheduler`] seam; nothing else may touch a
//!   pipeline invocation's buffers while it is suspended.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod contour;
mod foundation;
mod outline;
mod pipeline;
mod raster;

pub use contour::boundary::{
    CHECKPOINT_ROW_INTERVAL, MAX_CONTOURS, MAX_CONTOUR_POINTS, MAX_TOTAL_POINTS, MAX_TRACE_STEPS,
    trace_boundaries,
};
pub use contour::rank::{MIN_AREA_FLOOR, rank_and_filter};
pub use contour::simplify::{EPSILON, simplify_contour};
pub use contour::smooth::{WINDOW_SCALE, smooth_closed};
pub use foundation::core::{
    Contour, Detail, DetailProfile, Footprint, PathData, Point, RankedContour, Rect, TraceOptions,
    TraceStats,
};
pub use foundation::error::{TraceError, TraceResult};
pub use outline::scale::{FILL_FRACTION, fit_to_footprint, scale_for};
pub use outline::svg::{COMMAND_BUDGET, count_path_commands, document, to_path_data};
pub use pipeline::run::{trace, trace_with_scheduler, trace_with_stats};
pub use pipeline::scheduler::{CancelFlag, RunToCompletion, Scheduler};
pub use raster::binarize::{BACKGROUND_ALPHA_CUTOFF, CHUNK_PIXELS, binarize_in_place};
pub use raster::buffer::{FOREGROUND_CUTOFF, RasterBuffer};
pub use raster::decode::decode_for_detail;
