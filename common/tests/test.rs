use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let bounds = Bounds::new(2, 3, 10, 9);
    assert_eq!(bounds.width(), 8);
    assert_eq!(bounds.height(), 6);
    assert_eq!(bounds.top_left(), Point::new(2, 3));
    assert_eq!(bounds.top_right(), Point::new(10, 3));
    assert_eq!(bounds.bottom_right(), Point::new(10, 9));
    assert_eq!(bounds.bottom_left(), Point::new(2, 9));
}

#[test]
fn test_is_valid() {
    assert!(Bounds::new(0, 0, 1, 1).is_valid());
    assert!(!Bounds::new(0, 0, 0, 10).is_valid());
    assert!(!Bounds::new(0, 10, 10, 5).is_valid());
}

#[test]
fn test_center_truncates() {
    assert_eq!(Bounds::new(0, 0, 100, 100).center(), Point::new(50, 50));
    assert_eq!(Bounds::new(0, 0, 5, 7).center(), Point::new(2, 3));
    assert_eq!(Bounds::new(-10, -10, 11, 11).center(), Point::new(0, 0));
}

#[test]
fn test_center_full_range_does_not_overflow() {
    let bounds = Bounds::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
    assert_eq!(bounds.width(), u32::MAX as i64);
    assert_eq!(bounds.center(), Point::new(-1, -1));
}

#[test]
fn test_contains_point_is_strict() {
    let bounds = Bounds::new(0, 0, 100, 100);
    assert!(bounds.contains_point(Point::new(50, 50)));
    assert!(bounds.contains_point(Point::new(1, 99)));
    assert!(!bounds.contains_point(Point::new(0, 50)));
    assert!(!bounds.contains_point(Point::new(50, 100)));
    assert!(!bounds.contains_point(Point::new(-1, -1)));
}

#[test]
fn test_corners_order() {
    let bounds = Bounds::new(0, 0, 100, 100);
    assert_eq!(
        bounds.corners(),
        [
            Point::new(0, 0),
            Point::new(100, 0),
            Point::new(100, 100),
            Point::new(0, 100)
        ]
    );
}

#[test]
fn test_quarters_tile_parent() {
    let bounds = Bounds::new(0, 0, 101, 60);
    let [nw, ne, sw, se] = bounds.quarters();
    assert_eq!(nw, Bounds::new(0, 0, 50, 30));
    assert_eq!(ne, Bounds::new(50, 0, 101, 30));
    assert_eq!(sw, Bounds::new(0, 30, 50, 60));
    assert_eq!(se, Bounds::new(50, 30, 101, 60));

    let area: i64 = bounds.quarters().iter().map(|q| q.width() * q.height()).sum();
    assert_eq!(area, bounds.width() * bounds.height());
}

#[test]
fn test_random_point_inside() {
    let mut rng = StdRng::seed_from_u64(7);
    let bounds = Bounds::new(-20, 5, 20, 9);
    for _ in 0..1000 {
        let point = bounds.random_point_inside(&mut rng).unwrap();
        assert!(bounds.contains_point(point));
    }
    assert!(Bounds::new(0, 0, 1, 10)
        .random_point_inside(&mut rng)
        .is_none());
}

#[test]
fn test_point_conversions() {
    let point: Point = (3, -4).into();
    assert_eq!(point, Point::new(3, -4));
    let tuple: (i32, i32) = point.into();
    assert_eq!(tuple, (3, -4));
    assert_eq!(point.to_string(), "(3, -4)");
}
