use super::*;

fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    image::ImageEncoder::write_image(
        encoder,
        img.as_raw(),
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )
    .unwrap();
    buf
}

fn footprint() -> Footprint {
    Footprint::new(100.0, 100.0).unwrap()
}

#[test]
fn invalid_options_fail_before_any_work() {
    let options = TraceOptions {
        smoothing: 2.0,
        ..TraceOptions::default()
    };
    // Garbage bytes prove validation runs first: a validation error wins
    // over the decode error.
    let err = trace(b"not an image", footprint(), &options).unwrap_err();
    assert!(matches!(err, TraceError::Validation(_)));
}

#[test]
fn undecodable_bytes_surface_as_decode_errors() {
    let err = trace(b"not an image", footprint(), &TraceOptions::default()).unwrap_err();
    assert!(matches!(err, TraceError::Decode(_)));
}

#[test]
fn featureless_images_yield_no_contours() {
    let white = solid_png(40, 40, [255, 255, 255, 255]);
    let err = trace(&white, footprint(), &TraceOptions::default()).unwrap_err();
    assert!(matches!(err, TraceError::NoContours(_)));
}

#[test]
fn solid_foreground_traces_the_image_border() {
    let black = solid_png(40, 40, [0, 0, 0, 255]);
    let (path, stats) = trace_with_stats(
        &black,
        footprint(),
        &TraceOptions {
            smoothing: 0.0,
            ..TraceOptions::default()
        },
        &mut RunToCompletion,
    )
    .unwrap();
    assert_eq!(path.subpath_count, 1);
    assert_eq!(stats.contours_traced, 1);
    assert_eq!(stats.contours_kept, 1);
    // 40x40 cells orbit -> 160 points before simplification.
    assert_eq!(stats.points_traced, 160);
    assert!(stats.points_output < stats.points_traced);
}

#[test]
fn budget_guard_rejects_oversized_output() {
    use crate::outline::svg::COMMAND_BUDGET;

    let at_budget = PathData {
        d: String::new(),
        subpath_count: 1,
        command_count: COMMAND_BUDGET,
    };
    assert!(enforce_budget(&at_budget).is_ok());

    let over_budget = PathData {
        d: String::new(),
        subpath_count: 1,
        command_count: COMMAND_BUDGET + 1,
    };
    assert!(matches!(
        enforce_budget(&over_budget).unwrap_err(),
        TraceError::TooComplex(_)
    ));

    let empty = PathData {
        d: String::new(),
        subpath_count: 0,
        command_count: 0,
    };
    assert!(matches!(
        enforce_budget(&empty).unwrap_err(),
        TraceError::NoContours(_)
    ));
}

#[test]
fn stats_serialize_to_json() {
    let black = solid_png(40, 40, [0, 0, 0, 255]);
    let (_, stats) = trace_with_stats(
        &black,
        footprint(),
        &TraceOptions::default(),
        &mut RunToCompletion,
    )
    .unwrap();
    let json = serde_json::to_string(&stats).unwrap();
    assert!(json.contains("\"buffer_width\":40"));
    assert!(json.contains("\"command_count\""));
}
