//! Inch / centimeter / millimeter conversion
//!
//! Inches are the canonical internal unit. NaN passes through untouched,
//! so an unparsable field never turns into an error here.

use crate::constants::{CM_PER_INCH, MM_PER_INCH};
use crate::types::{DimensionFields, Unit};

/// Convert a value expressed in `unit` to inches
pub fn to_inches(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Inch => value,
        Unit::Centimeter => value / CM_PER_INCH,
        Unit::Millimeter => value / MM_PER_INCH,
    }
}

/// Convert a value in inches to `unit`
pub fn from_inches(value_in: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Inch => value_in,
        Unit::Centimeter => value_in * CM_PER_INCH,
        Unit::Millimeter => value_in * MM_PER_INCH,
    }
}

/// Round the way the form displays values: one decimal for in/cm, whole mm
pub fn round_for_unit(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Inch | Unit::Centimeter => (value * 10.0).round() / 10.0,
        Unit::Millimeter => value.round(),
    }
}

/// Convert `value` from one unit to another through inches, then round for `to`
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    round_for_unit(from_inches(to_inches(value, from), to), to)
}

/// Remembers which unit the dimension fields are currently expressed in.
///
/// Conversion is lossy after rounding, so the previous unit has to be known
/// rather than guessed from the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitTracker {
    current: Option<Unit>,
}

impl UnitTracker {
    pub fn new(initial: Unit) -> Self {
        Self {
            current: Some(initial),
        }
    }

    pub fn current(&self) -> Option<Unit> {
        self.current
    }

    /// Switch to `new_unit`, rewriting every filled field in place.
    /// Returns the unit the fields were converted from, or `None` when the
    /// unit did not change.
    pub fn change_unit(&mut self, new_unit: Unit, fields: &mut DimensionFields) -> Option<Unit> {
        let prev_unit = self.current.unwrap_or(match new_unit {
            Unit::Inch => Unit::Centimeter,
            _ => Unit::Inch,
        });
        self.current = Some(new_unit);

        if prev_unit == new_unit {
            return None;
        }

        for field in fields.iter_mut() {
            match *field {
                Some(raw) if !raw.is_nan() => {
                    *field = Some(convert(raw, prev_unit, new_unit));
                }
                _ => {}
            }
        }

        log::debug!("Converted dimension fields from {prev_unit} to {new_unit}");
        Some(prev_unit)
    }
}
