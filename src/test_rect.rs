use crate::rect::Rect;

#[test]
fn test_center_floor_division() {
    let rect = Rect::new(10i64, 10, 30, 30);
    let center = rect.center();
    assert_eq!(center[(0, 0)], 20);
    assert_eq!(center[(0, 1)], 20);

    // odd coordinate sum rounds down
    let rect = Rect::new(10i64, 10, 31, 31);
    let center = rect.center();
    assert_eq!(center[(0, 0)], 20);
    assert_eq!(center[(0, 1)], 20);
}

#[test]
fn test_center_floor_division_negative() {
    // floor division truncates toward negative infinity: -5 div 2 == -3
    let rect = Rect::new(-5i64, -5, 0, 0);
    let center = rect.center();
    assert_eq!(center[(0, 0)], -3);
    assert_eq!(center[(0, 1)], -3);

    // -11 div 2 == -6
    let rect = Rect::new(-10i64, -10, -1, -1);
    let center = rect.center();
    assert_eq!(center[(0, 0)], -6);
    assert_eq!(center[(0, 1)], -6);
}

#[test]
fn test_extent_accessors() {
    let rect = Rect::new(4i64, 8, 24, 40);
    assert_eq!(rect.width(), 20);
    assert_eq!(rect.height(), 32);
    assert_eq!(rect.get_xyxy(), [4, 8, 24, 40]);
}

#[test]
fn test_from_tlwh_round_trip() {
    let rect = Rect::from_tlwh(4i64, 8, 20, 32);
    assert_eq!(rect, Rect::new(4, 8, 24, 40));
}

#[test]
fn test_is_valid() {
    assert!(Rect::new(0i64, 0, 10, 10).is_valid());
    // zero-width
    assert!(!Rect::new(5i64, 0, 5, 10).is_valid());
    // zero-height
    assert!(!Rect::new(0i64, 5, 10, 5).is_valid());
    // inverted corners
    assert!(!Rect::new(10i64, 10, 0, 0).is_valid());
}
