use rdutylog::core::viewport::{
    DEFAULT_CENTER, GeoBounds, RECENTER_PADDING, RouteViewport, ViewportCommand,
};
use rdutylog::models::location::GeoPoint;

fn route() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(41.8781, -87.6298),
        GeoPoint::new(39.7684, -86.1581),
        GeoPoint::new(36.1627, -86.7816),
    ]
}

#[test]
fn test_update_emits_single_recenter() {
    let mut vp = RouteViewport::new();

    let cmd = vp.update(route());

    let Some(ViewportCommand::Recenter { bounds, padding }) = cmd else {
        panic!("expected a recenter command");
    };
    assert_eq!(padding, RECENTER_PADDING);
    assert_eq!(bounds.south, 36.1627);
    assert_eq!(bounds.north, 41.8781);
    assert_eq!(bounds.west, -87.6298);
    assert_eq!(bounds.east, -86.1581);
}

#[test]
fn test_every_update_recomputes_bounds() {
    let mut vp = RouteViewport::new();
    vp.update(route());

    let cmd = vp.update(vec![GeoPoint::new(10.0, 20.0)]);

    let expected = GeoBounds {
        south: 10.0,
        west: 20.0,
        north: 10.0,
        east: 20.0,
    };
    assert_eq!(
        cmd,
        Some(ViewportCommand::Recenter {
            bounds: expected,
            padding: RECENTER_PADDING
        })
    );
    assert_eq!(vp.bounds(), Some(expected));
}

#[test]
fn test_empty_route_emits_nothing() {
    let mut vp = RouteViewport::new();
    vp.update(route());

    assert_eq!(vp.update(Vec::new()), None);
    assert_eq!(vp.bounds(), None);
    assert_eq!(vp.center(), DEFAULT_CENTER);
    assert_eq!(vp.start(), None);
}

#[test]
fn test_center_start_and_end() {
    let mut vp = RouteViewport::new();
    vp.update(route());

    assert_eq!(vp.center(), GeoPoint::new(39.7684, -86.1581));
    assert_eq!(vp.start(), Some(GeoPoint::new(41.8781, -87.6298)));
    assert_eq!(vp.end(), Some(GeoPoint::new(36.1627, -86.7816)));
}

#[test]
fn test_bounds_center() {
    let b = GeoBounds::from_points(&[GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 20.0)])
        .expect("non-empty");

    assert_eq!(b.center(), GeoPoint::new(5.0, 10.0));
    assert_eq!(GeoBounds::from_points(&[]), None);
}
