use std::fmt::Write;

use crate::foundation::core::{Footprint, PathData, Point};

/// Hard ceiling on path-drawing commands across the combined output.
pub const COMMAND_BUDGET: usize = 8000;

/// Decimal places for serialized coordinates (1 µm at millimeter scale).
const COORD_PRECISION: usize = 3;

/// Serialize subpaths into combined SVG path data.
///
/// Each subpath becomes `M x y L x y ... Z`: an absolute move, a line per
/// remaining point, then an explicit close. Subpaths are joined with
/// single spaces. Subpaths with fewer than 2 points cannot form a visible
/// outline and are skipped.
pub fn to_path_data(subpaths: &[Vec<Point>]) -> PathData {
    let mut parts: Vec<String> = Vec::with_capacity(subpaths.len());
    for subpath in subpaths {
        if let Some(d) = subpath_data(subpath) {
            parts.push(d);
        }
    }
    let subpath_count = parts.len();
    let d = parts.join(" ");
    let command_count = count_path_commands(&d);
    PathData {
        d,
        subpath_count,
        command_count,
    }
}

/// Count path-drawing command letters (`M`, `L`, `Z`) in serialized data.
pub fn count_path_commands(d: &str) -> usize {
    d.chars().filter(|c| matches!(c, 'M' | 'L' | 'Z')).count()
}

fn subpath_data(points: &[Point]) -> Option<String> {
    if points.len() < 2 {
        return None;
    }
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { "L" };
        let _ = write!(
            d,
            "{}{cmd} {:.prec$} {:.prec$}",
            if i == 0 { "" } else { " " },
            p.x,
            p.y,
            prec = COORD_PRECISION,
        );
    }
    d.push_str(" Z");
    Some(d)
}

/// Wrap finished path data in a minimal standalone SVG document.
///
/// The viewport spans the full footprint in millimeters with the origin at
/// its center, matching the centered coordinates in `path.d`. Layering,
/// kerf offsets and placement transforms belong to the consuming layer, not
/// here.
pub fn document(path: &PathData, footprint: Footprint) -> String {
    let w = footprint.width_mm;
    let h = footprint.height_mm;
    let mut out = String::new();
    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="{} {} {w} {h}">"#,
        -w / 2.0,
        -h / 2.0,
    );
    let _ = writeln!(
        out,
        r#"  <path d="{}" fill="none" stroke="black" stroke-width="0.2"/>"#,
        path.d,
    );
    let _ = writeln!(out, "</svg>");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/outline/svg.rs"]
mod tests;
