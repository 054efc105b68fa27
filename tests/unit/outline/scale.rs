use super::*;

#[test]
fn tighter_axis_wins() {
    let footprint = Footprint::new(100.0, 100.0).unwrap();
    // 100x50 buffer: x allows 0.7, y allows 1.4 -> 0.7.
    assert_eq!(scale_for(100, 50, footprint), 0.7);
    // 50x100 buffer: symmetric.
    assert_eq!(scale_for(50, 100, footprint), 0.7);
}

#[test]
fn non_square_footprints_respect_both_axes() {
    let footprint = Footprint::new(100.0, 80.0).unwrap();
    // x: 70/100 = 0.7, y: 56/100 = 0.56.
    assert_eq!(scale_for(100, 100, footprint), 0.56);
}

#[test]
fn buffer_center_maps_to_the_origin() {
    let footprint = Footprint::new(100.0, 100.0).unwrap();
    let mut subpaths = vec![vec![Point::new(50.0, 25.0)]];
    fit_to_footprint(&mut subpaths, 100, 50, footprint);
    assert_eq!(subpaths[0][0], Point::new(0.0, 0.0));
}

#[test]
fn corners_land_symmetrically() {
    let footprint = Footprint::new(100.0, 100.0).unwrap();
    let mut subpaths = vec![vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 50.0),
    ]];
    let scale = fit_to_footprint(&mut subpaths, 100, 50, footprint);
    assert_eq!(scale, 0.7);
    assert_eq!(subpaths[0][0], Point::new(-35.0, -17.5));
    assert_eq!(subpaths[0][1], Point::new(35.0, 17.5));
}

#[test]
fn longer_dimension_fills_the_fraction() {
    let footprint = Footprint::new(120.0, 90.0).unwrap();
    let mut subpaths = vec![vec![Point::new(0.0, 0.0), Point::new(140.0, 140.0)]];
    let scale = fit_to_footprint(&mut subpaths, 140, 140, footprint);
    // The tighter axis is y: 0.7 * 90 / 140.
    assert!((scale - 0.45).abs() < 1e-12);
    let width = subpaths[0][1].x - subpaths[0][0].x;
    assert!((width - FILL_FRACTION * 90.0).abs() < 1e-9);
}
