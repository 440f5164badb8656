use photocell_sim::ui::{round_to_accuracy, Slider};
use photocell_sim::{Point, SimError};

fn cursor(slider: &Slider) -> Point {
    slider.cursor_rect().center()
}

#[test]
fn test_rounding_rules() {
    assert_eq!(round_to_accuracy(7.6, 0), 8.0);
    assert_eq!(round_to_accuracy(7.4, 0), 7.0);
    assert_eq!(round_to_accuracy(7.63, 1), 7.6);
    assert_eq!(round_to_accuracy(7.68, 1), 7.7);
    assert_eq!(round_to_accuracy(0.125, 2), 0.13);
}

#[test]
fn test_starts_at_midpoint() {
    let slider = Slider::new(280.0, 750.0, "nm", 0).unwrap();
    assert_eq!(slider.value(), 515.0);
    assert_eq!(slider.value_label(), "515 nm");
    assert!(!slider.is_dragging());
}

#[test]
fn test_rejects_empty_range() {
    for (min, max) in [(1.0, 1.0), (10.0, 0.1)] {
        let err = Slider::new(min, max, "mV", 1).unwrap_err();
        assert!(matches!(err, SimError::InvalidSliderRange { .. }));
    }
}

#[test]
fn test_drag_needs_cursor_hit() {
    let mut slider = Slider::new(0.0, 100.0, "%", 0).unwrap();
    let off_cursor = cursor(&slider) + photocell_sim::geometry::Offset::new(40, 0);
    assert!(!slider.begin_drag(off_cursor));
    slider.drag(Point::new(400, 65));
    assert_eq!(slider.value(), 50.0);
    assert_eq!(slider.end_drag(Point::new(400, 65)), None);
}

#[test]
fn test_drag_clamps_far_outside_track() {
    let mut slider = Slider::new(0.0, 100.0, "%", 0).unwrap();
    assert!(slider.begin_drag(cursor(&slider)));
    assert_eq!(slider.drag_anchor(), Some(cursor(&slider)));

    slider.drag(Point::new(-5000, 900));
    assert_eq!(slider.value(), 0.0);
    let (lo, hi) = slider.cursor_interval();
    assert_eq!(cursor(&slider).x, lo);

    assert_eq!(slider.end_drag(Point::new(5000, -900)), Some(100.0));
    assert_eq!(cursor(&slider).x, hi);
    assert!(!slider.is_dragging());
}

#[test]
fn test_value_stays_in_range_for_any_pointer() {
    let mut slider = Slider::new(0.1, 10.0, "mV", 1).unwrap();
    for x in (-2000..2000).step_by(37) {
        assert!(slider.begin_drag(cursor(&slider)));
        slider.drag(Point::new(x, 0));
        let v = slider.value();
        assert!((0.1..=10.0).contains(&v), "{v} out of range at x={x}");
        let committed = slider.end_drag(Point::new(x, 0)).unwrap();
        assert!((committed * 10.0 - (committed * 10.0).round()).abs() < 1e-9);
    }
}

#[test]
fn test_drag_maps_linearly() {
    let mut slider = Slider::new(0.0, 100.0, "%", 0).unwrap();
    let (lo, hi) = slider.cursor_interval();
    assert!(slider.begin_drag(cursor(&slider)));
    slider.drag(Point::new(lo + (hi - lo) / 4, 65));
    assert!(slider.is_dragging());
    assert_eq!(slider.value(), 25.0);
    assert_eq!(slider.end_drag(Point::new(lo + 3 * (hi - lo) / 4, 65)), Some(75.0));
}

#[test]
fn test_set_value_clamps_and_rounds() {
    let mut slider = Slider::new(0.1, 10.0, "mV", 1).unwrap();
    slider.set_value(42.0);
    assert_eq!(slider.value(), 10.0);
    slider.set_value(3.14159);
    assert_eq!(slider.value(), 3.1);
    assert_eq!(slider.value_label(), "3.1 mV");
}
