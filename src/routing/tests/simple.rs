use super::*;

#[test]
fn vertical_first_example() {
    let start = pt(30.0, 70.0);
    let end = pt(60.0, 20.0);
    let path = route_path(start, end);

    assert_endpoints(&path, start, end);
    assert_eq!(path.primary_axis(), Some(Axis::Vertical));
    // start + 5 vertical steps + turn + 3 horizontal steps + end
    assert_eq!(path.len(), 11);
    assert_eq!(path.turn(), Some(pt(30.0, 20.0)));
    assert_eq!(path.turn_index(), Some(6));

    let points = path.points();
    for (i, expected_y) in [60.0, 50.0, 40.0, 30.0, 20.0].iter().enumerate() {
        assert_eq!(points[i + 1].x, 30.0);
        assert_close(points[i + 1].y, *expected_y);
    }
    for (i, expected_x) in [40.0, 50.0, 60.0].iter().enumerate() {
        assert_eq!(points[i + 7].y, 20.0);
        assert_close(points[i + 7].x, *expected_x);
    }
}

#[test]
fn horizontal_first_when_dx_dominates() {
    let start = pt(10.0, 50.0);
    let end = pt(80.0, 60.0);
    let path = route_path(start, end);

    assert_endpoints(&path, start, end);
    assert_eq!(path.primary_axis(), Some(Axis::Horizontal));
    assert_eq!(path.turn(), Some(pt(80.0, 50.0)));
    // start + 7 horizontal + turn + 1 vertical + end
    assert_eq!(path.len(), 11);
}

#[test]
fn turn_point_takes_primary_from_end_and_secondary_from_start() {
    let cases = [
        (pt(5.0, 5.0), pt(95.0, 40.0)),
        (pt(90.0, 10.0), pt(20.0, 85.0)),
        (pt(50.0, 50.0), pt(49.0, 0.0)),
        (pt(12.5, 33.3), pt(77.7, 34.1)),
    ];

    for (start, end) in cases {
        let path = route_path(start, end);
        let turn = path.turn().expect("non-degenerate path has a turn");
        let primary = path.primary_axis().expect("non-degenerate path has an axis");
        assert_eq!(primary.of(turn), primary.of(end));
        assert_eq!(primary.other().of(turn), primary.other().of(start));
    }
}

#[test]
fn legs_stay_on_the_grid() {
    let path = route_path(pt(3.0, 97.0), pt(88.0, 14.0));
    assert_axis_aligned(&path);
}

#[test]
fn last_step_of_each_leg_lands_exactly() {
    // Deltas that do not divide evenly and are not exactly representable.
    let start = pt(0.1, 0.7);
    let end = pt(0.3, 99.9);
    let path = route_path(start, end);
    let turn_index = path.turn_index().unwrap();
    let points = path.points();

    assert_eq!(points[turn_index - 1], path.turn().unwrap());
    assert_eq!(points[points.len() - 2], end);
}

#[test]
fn custom_step_changes_density() {
    let start = pt(0.0, 0.0);
    let end = pt(0.0, 40.0);
    let coarse = route_path_with(start, end, &RouteConfig { step: 20.0 });
    let fine = route_path_with(start, end, &RouteConfig { step: 5.0 });

    // start + n steps + turn + end
    assert_eq!(coarse.len(), 2 + 3);
    assert_eq!(fine.len(), 8 + 3);
}
