use super::*;

#[test]
fn repeated_requests_are_identical() {
    let start = pt(30.0, 70.0);
    let end = pt(61.3, 18.9);
    let reference = route_path(start, end);
    for i in 1..50 {
        assert_eq!(route_path(start, end), reference, "differs on iteration {i}");
    }
}

#[test]
fn previous_routes_do_not_influence_later_ones() {
    let a = route_path(pt(10.0, 10.0), pt(90.0, 90.0));
    let _ = route_path(pt(0.0, 100.0), pt(100.0, 0.0));
    let b = route_path(pt(10.0, 10.0), pt(90.0, 90.0));
    assert_eq!(a, b);
}

#[test]
fn serialized_form_is_stable() {
    let path = route_path(pt(0.0, 0.0), pt(0.0, 10.0));
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(
        json,
        r#"{"points":[{"x":0.0,"y":0.0},{"x":0.0,"y":10.0},{"x":0.0,"y":10.0},{"x":0.0,"y":10.0}],"turnIndex":2,"primaryAxis":"vertical"}"#
    );
}
