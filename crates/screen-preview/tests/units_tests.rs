use screen_preview::units::{convert, round_for_unit};
use screen_preview::*;

#[test]
fn test_to_inches() {
    assert_eq!(to_inches(2.54, Unit::Centimeter), 1.0);
    assert_eq!(to_inches(25.4, Unit::Millimeter), 1.0);
    assert_eq!(to_inches(6.1, Unit::Inch), 6.1);
}

#[test]
fn test_from_inches() {
    assert_eq!(from_inches(1.0, Unit::Centimeter), 2.54);
    assert_eq!(from_inches(1.0, Unit::Millimeter), 25.4);
    assert_eq!(from_inches(6.1, Unit::Inch), 6.1);
}

#[test]
fn test_round_trip_within_rounding() {
    for unit in Unit::ALL {
        for x in [0.1, 1.0, 2.5, 6.1, 13.3, 27.0, 65.0] {
            let back = to_inches(from_inches(x, unit), unit);
            assert!((back - x).abs() < 1e-9, "{x} {unit} came back as {back}");
        }
    }
}

#[test]
fn test_convert_rounds_for_target_unit() {
    assert_eq!(convert(6.1, Unit::Inch, Unit::Centimeter), 15.5);
    assert_eq!(convert(6.1, Unit::Inch, Unit::Millimeter), 155.0);
    assert_eq!(convert(155.0, Unit::Millimeter, Unit::Inch), 6.1);
    assert_eq!(round_for_unit(0.04, Unit::Inch), 0.0);
}

#[test]
fn test_unit_parse_and_display() {
    assert_eq!("cm".parse::<Unit>().unwrap(), Unit::Centimeter);
    assert_eq!("Inches".parse::<Unit>().unwrap(), Unit::Inch);
    assert_eq!(Unit::Millimeter.to_string(), "mm");
    assert!("ft".parse::<Unit>().is_err());
}

fn fields(sw: f64, sh: f64, dw: f64, dh: f64) -> DimensionFields {
    DimensionFields {
        screen_width: Some(sw),
        screen_height: Some(sh),
        device_width: Some(dw),
        device_height: Some(dh),
    }
}

#[test]
fn test_change_unit_converts_all_fields() {
    let mut tracker = UnitTracker::new(Unit::Inch);
    let mut dims = fields(6.1, 2.8, 6.4, 3.1);

    assert_eq!(
        tracker.change_unit(Unit::Millimeter, &mut dims),
        Some(Unit::Inch)
    );
    assert_eq!(dims, fields(155.0, 71.0, 163.0, 79.0));
    assert_eq!(tracker.current(), Some(Unit::Millimeter));

    tracker.change_unit(Unit::Centimeter, &mut dims);
    assert_eq!(dims, fields(15.5, 7.1, 16.3, 7.9));
}

#[test]
fn test_change_unit_without_history_assumes_complement() {
    // Nothing recorded: switching to inches assumes the fields were in cm
    let mut tracker = UnitTracker::default();
    assert_eq!(tracker.current(), None);
    let mut dims = fields(25.4, 12.7, 30.48, 15.24);
    assert_eq!(
        tracker.change_unit(Unit::Inch, &mut dims),
        Some(Unit::Centimeter)
    );
    assert_eq!(dims, fields(10.0, 5.0, 12.0, 6.0));
    assert_eq!(tracker.current(), Some(Unit::Inch));

    // ...and switching to anything else assumes inches
    let mut tracker = UnitTracker::default();
    let mut dims = fields(1.0, 1.0, 2.0, 2.0);
    assert_eq!(
        tracker.change_unit(Unit::Millimeter, &mut dims),
        Some(Unit::Inch)
    );
    assert_eq!(dims, fields(25.0, 25.0, 51.0, 51.0));
}

#[test]
fn test_change_unit_skips_empty_fields() {
    let mut tracker = UnitTracker::new(Unit::Inch);
    let mut dims = DimensionFields {
        screen_width: Some(2.0),
        screen_height: None,
        device_width: Some(f64::NAN),
        device_height: Some(3.0),
    };

    tracker.change_unit(Unit::Centimeter, &mut dims);

    assert_eq!(dims.screen_width, Some(5.1));
    assert_eq!(dims.screen_height, None);
    assert!(dims.device_width.is_some_and(f64::is_nan));
    assert_eq!(dims.device_height, Some(7.6));
}

#[test]
fn test_change_to_same_unit_is_noop() {
    let mut tracker = UnitTracker::new(Unit::Centimeter);
    let mut dims = fields(15.49, 7.1, 16.3, 7.9);
    assert_eq!(tracker.change_unit(Unit::Centimeter, &mut dims), None);
    assert_eq!(dims.screen_width, Some(15.49));
}
