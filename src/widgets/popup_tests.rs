//! Tests for widgets/popup

use super::*;

#[test]
fn test_centered_popup_basic() {
    let frame = Rect::new(0, 0, 100, 50);

    let popup = centered_popup(frame, 40, 20);

    assert_eq!(popup, Rect::new(30, 15, 40, 20));
}

#[test]
fn test_centered_popup_too_large_is_clamped() {
    let frame = Rect::new(0, 0, 100, 50);

    let popup = centered_popup(frame, 200, 100);

    assert_eq!(popup, Rect::new(0, 0, 100, 50));
}

#[test]
fn test_centered_popup_respects_frame_origin() {
    let frame = Rect::new(10, 5, 20, 10);

    let popup = centered_popup(frame, 10, 4);

    assert_eq!(popup, Rect::new(15, 8, 10, 4));
}

#[test]
fn test_top_right_popup() {
    let frame = Rect::new(0, 0, 80, 24);

    let popup = top_right_popup(frame, 30, 3, 1);

    assert_eq!(popup, Rect::new(49, 1, 30, 3));
}

#[test]
fn test_top_right_popup_clamped_to_narrow_frame() {
    let frame = Rect::new(0, 0, 10, 2);

    let popup = top_right_popup(frame, 30, 3, 1);

    assert_eq!(popup.width, 9);
    assert_eq!(popup.height, 1);
    assert_eq!(popup.x, 0);
}

#[test]
fn test_inset_rect() {
    let area = Rect::new(0, 0, 20, 10);

    let inset = inset_rect(area, 2, 1);

    assert_eq!(inset, Rect::new(2, 1, 16, 8));
}

#[test]
fn test_inset_rect_saturates() {
    let area = Rect::new(0, 0, 2, 1);

    let inset = inset_rect(area, 3, 3);

    assert_eq!(inset.width, 0);
    assert_eq!(inset.height, 0);
}
