#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn point_offset_from_subtracts_origin() {
    let p = Point::new(130.0, 90.0).offset_from(Point::new(100.0, 40.0));
    assert_eq!(p, Point::new(30.0, 50.0));
}

#[test]
fn rect_center() {
    let r = Rect::new(10.0, 20.0, 100.0, 60.0);
    assert_eq!(r.center(), Point::new(60.0, 50.0));
}

#[test]
fn rect_new_sets_origin_and_size() {
    let r = Rect::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(r.origin.x, 1.0);
    assert_eq!(r.origin.y, 2.0);
    assert_eq!(r.size.width, 3.0);
    assert_eq!(r.size.height, 4.0);
}
