use super::*;

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn collinear_runs_collapse_to_endpoints() {
    let line = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]);
    assert_eq!(simplify_contour(&line), pts(&[(0.0, 0.0), (4.0, 0.0)]));
}

#[test]
fn deviations_below_epsilon_collapse() {
    let nearly = pts(&[(0.0, 0.0), (5.0, 1.0), (10.0, 0.0)]);
    assert_eq!(simplify_contour(&nearly), pts(&[(0.0, 0.0), (10.0, 0.0)]));
}

#[test]
fn deviations_above_epsilon_survive() {
    let bent = pts(&[(0.0, 0.0), (5.0, 3.0), (10.0, 0.0)]);
    assert_eq!(simplify_contour(&bent), bent);
}

#[test]
fn recursion_keeps_every_significant_vertex() {
    let zigzag = pts(&[
        (0.0, 0.0),
        (2.0, 4.0),
        (4.0, 0.0),
        (6.0, 4.0),
        (8.0, 0.0),
    ]);
    assert_eq!(simplify_contour(&zigzag), zigzag);
}

#[test]
fn square_outline_keeps_its_corners() {
    let square = pts(&[
        (0.0, 0.0),
        (5.0, 0.0),
        (10.0, 0.0),
        (10.0, 5.0),
        (10.0, 10.0),
        (5.0, 10.0),
        (0.0, 10.0),
        (0.0, 5.0),
    ]);
    let simplified = simplify_contour(&square);
    assert_eq!(
        simplified,
        pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 5.0)])
    );
}

#[test]
fn degenerate_inputs_fall_back_to_the_original() {
    let single = pts(&[(3.0, 4.0)]);
    assert_eq!(simplify_contour(&single), single);
    let empty: Vec<Point> = Vec::new();
    assert_eq!(simplify_contour(&empty), empty);
}

#[test]
fn coincident_chord_endpoints_use_point_distance() {
    // First and last coincide; interior points farther than epsilon from
    // them must survive.
    let loop_back = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)]);
    let simplified = simplify_contour(&loop_back);
    assert!(simplified.len() >= 3);
    assert_eq!(simplified[0], Point::new(0.0, 0.0));
    assert_eq!(*simplified.last().unwrap(), Point::new(0.0, 0.0));
}
