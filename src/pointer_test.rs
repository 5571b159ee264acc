use super::*;

#[test]
fn mouse_sample_keeps_position_and_control_flag() {
    let s = PointerSample::mouse(Point::new(4.0, 5.0), true);
    assert_eq!(s.kind, PointerKind::Mouse);
    assert_eq!(s.client, Point::new(4.0, 5.0));
    assert!(s.on_control);
}

#[test]
fn single_touch_produces_sample() {
    let s = PointerSample::touch(1, Some(Point::new(1.0, 2.0)), false);
    assert_eq!(s.map(|s| s.kind), Some(PointerKind::Touch));
}

#[test]
fn multi_touch_is_ignored() {
    assert_eq!(PointerSample::touch(2, Some(Point::new(1.0, 2.0)), false), None);
    assert_eq!(PointerSample::touch(0, None, false), None);
}

#[test]
fn single_touch_without_point_is_ignored() {
    assert_eq!(PointerSample::touch(1, None, false), None);
}

#[test]
fn only_touch_prevents_default() {
    assert!(PointerKind::Touch.prevents_default());
    assert!(!PointerKind::Mouse.prevents_default());
}
