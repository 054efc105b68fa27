use crate::foundation::error::{TraceError, TraceResult};

pub use kurbo::{Point, Rect};

/// Quality/performance tier selected by the caller.
///
/// A detail level scales the resample cap, the area-filter fraction, and the
/// maximum output path count together (see [`DetailProfile`]), so fidelity
/// and bounded running time stay coupled.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Detail {
    /// Smallest working buffer, strongest filtering, fewest output paths.
    Low,
    /// Mid-tier defaults.
    #[default]
    Medium,
    /// Largest working buffer and output budget.
    High,
}

impl Detail {
    /// The tuning constants for this detail level.
    pub const fn profile(self) -> DetailProfile {
        match self {
            Self::Low => DetailProfile {
                resample_cap: 100,
                min_area_fraction: 0.002,
                max_paths: 25,
            },
            Self::Medium => DetailProfile {
                resample_cap: 140,
                min_area_fraction: 0.0015,
                max_paths: 40,
            },
            Self::High => DetailProfile {
                resample_cap: 180,
                min_area_fraction: 0.001,
                max_paths: 60,
            },
        }
    }
}

/// Tuning constants attached to a [`Detail`] level.
///
/// The caps are deliberately small: bounding the resampled buffer bounds all
/// downstream tracing work.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetailProfile {
    /// Maximum length of the longer buffer dimension after resampling, px.
    pub resample_cap: u32,
    /// Fraction of the buffer area below which a contour is filtered out.
    pub min_area_fraction: f64,
    /// Maximum number of output paths after ranking.
    pub max_paths: usize,
}

/// Caller-supplied tracing options, immutable for one pipeline invocation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TraceOptions {
    /// Luminance threshold in `0..=255`; pixels brighter than this are
    /// background.
    pub threshold: u8,
    /// Contour smoothing strength in `[0, 1]`; `0` disables smoothing.
    pub smoothing: f32,
    /// Quality/performance tier.
    pub detail: Detail,
    /// Select the complement region (trace light-on-dark sources).
    pub invert: bool,
    /// Treat pixels with alpha below 128 as background regardless of
    /// luminance.
    pub remove_background: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            threshold: 128,
            smoothing: 0.5,
            detail: Detail::Medium,
            invert: false,
            remove_background: false,
        }
    }
}

impl TraceOptions {
    /// Validate option ranges that the type system does not enforce.
    pub fn validate(&self) -> TraceResult<()> {
        if !self.smoothing.is_finite() || !(0.0..=1.0).contains(&self.smoothing) {
            return Err(TraceError::validation(format!(
                "smoothing must be in [0, 1], got {}",
                self.smoothing
            )));
        }
        Ok(())
    }
}

/// Target physical footprint in millimeters.
///
/// The traced output fills 70% of this footprint (margin is left for kerf
/// and placement downstream) and is centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Footprint {
    /// Target width, mm.
    pub width_mm: f64,
    /// Target height, mm.
    pub height_mm: f64,
}

impl Footprint {
    /// Build a footprint, rejecting non-finite or non-positive extents.
    pub fn new(width_mm: f64, height_mm: f64) -> TraceResult<Self> {
        if !width_mm.is_finite() || !height_mm.is_finite() || width_mm <= 0.0 || height_mm <= 0.0 {
            return Err(TraceError::validation(format!(
                "footprint extents must be finite and positive, got {width_mm}x{height_mm} mm"
            )));
        }
        Ok(Self {
            width_mm,
            height_mm,
        })
    }
}

/// An ordered, implicitly closed boundary in resampled pixel space.
///
/// Tracing returns to its starting cell, so the closing edge from the last
/// point back to the first is implicit. Points start as integer cell
/// positions and become fractional after smoothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    /// Boundary points in walk order.
    pub points: Vec<Point>,
}

impl Contour {
    /// Wrap an ordered point sequence.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of boundary points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the contour has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounding box, or `None` for an empty contour.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x;
        let mut max_y = first.y;
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect::new(min_x, min_y, max_x, max_y))
    }
}

/// A contour annotated with its bounding-box area, in buffer px².
#[derive(Clone, Debug, PartialEq)]
pub struct RankedContour {
    /// The underlying contour.
    pub contour: Contour,
    /// Bounding-box area used for ranking. Zero when the contour survived
    /// only through the keep-everything filter fallback.
    pub area: f64,
}

/// Finished vector output in millimeter coordinates, centered on the origin.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PathData {
    /// Space-joined sequence of individually closed subpaths, ready to embed
    /// as the `d` attribute of an SVG path element.
    pub d: String,
    /// Number of closed subpaths in `d`.
    pub subpath_count: usize,
    /// Total count of path-drawing commands (`M`/`L`/`Z`) in `d`.
    pub command_count: usize,
}

/// Diagnostic counters for one pipeline invocation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TraceStats {
    /// Resampled buffer width, px.
    pub buffer_width: u32,
    /// Resampled buffer height, px.
    pub buffer_height: u32,
    /// Contours accepted by the boundary tracer.
    pub contours_traced: usize,
    /// Cumulative points across accepted contours.
    pub points_traced: usize,
    /// Contours surviving ranking and truncation.
    pub contours_kept: usize,
    /// Points across kept contours after simplification.
    pub points_output: usize,
    /// Path-drawing commands in the final output.
    pub command_count: usize,
    /// Uniform pixel-to-millimeter scale applied to the output.
    pub scale_mm_per_px: f64,
    /// Bounding box of the scaled output, mm; `None` when empty.
    pub output_bounds: Option<Rect>,
}
