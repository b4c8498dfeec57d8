//! Units and raw-to-SI conversions.
//!
//! Conversions are pure functions of the raw float. There is no shared
//! registry and nothing to initialise.

use core::fmt;

use serde::Serialize;

/// Metres per second in one knot.
pub const KNOT_TO_METERS_PER_SECOND: f32 = 0.514_444;
/// Metres in one foot.
pub const FOOT_TO_METER: f32 = 0.3048;
/// Kilograms in one avoirdupois pound.
pub const POUND_TO_KILOGRAM: f32 = 0.453_592_4;
/// Gravitational acceleration used to turn pound-mass into newtons (m/s²).
pub const GRAVITY: f32 = 9.81;
/// Newton-metres in one foot-pound-force.
pub const FOOT_POUND_FORCE_TO_NEWTON_METER: f32 = 1.355_818;

/// SI units a [`Quantity`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    MetersPerSecond,
    Radian,
    Newton,
    NewtonMeter,
    RadianPerSecond,
    Meter,
    Unitless,
}

impl Unit {
    /// Short symbol for display.
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::MetersPerSecond => "m/s",
            Unit::Radian => "rad",
            Unit::Newton => "N",
            Unit::NewtonMeter => "N·m",
            Unit::RadianPerSecond => "rad/s",
            Unit::Meter => "m",
            Unit::Unitless => "",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A telemetry value with an explicit unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f32,
    pub unit: Unit,
}

impl Quantity {
    pub const fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (f.precision(), self.unit) {
            (Some(p), Unit::Unitless) => write!(f, "{:.p$}", self.value),
            (Some(p), unit) => write!(f, "{:.p$} {unit}", self.value),
            (None, Unit::Unitless) => write!(f, "{}", self.value),
            (None, unit) => write!(f, "{} {unit}", self.value),
        }
    }
}

/// Units the host uses on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RawUnit {
    Knots,
    Degrees,
    DegreesPerSecond,
    Feet,
    /// Pounds, read as the weight of one pound-mass under [`GRAVITY`].
    PoundsForce,
    FootPoundsForce,
    /// Dimensionless ratio or flag, passed through.
    Ratio,
}

impl RawUnit {
    /// SI unit this raw unit converts to.
    pub const fn si_unit(self) -> Unit {
        match self {
            RawUnit::Knots => Unit::MetersPerSecond,
            RawUnit::Degrees => Unit::Radian,
            RawUnit::DegreesPerSecond => Unit::RadianPerSecond,
            RawUnit::Feet => Unit::Meter,
            RawUnit::PoundsForce => Unit::Newton,
            RawUnit::FootPoundsForce => Unit::NewtonMeter,
            RawUnit::Ratio => Unit::Unitless,
        }
    }

    /// Convert a raw wire value to SI.
    pub fn to_si(self, raw: f32) -> Quantity {
        let value = match self {
            RawUnit::Knots => raw * KNOT_TO_METERS_PER_SECOND,
            RawUnit::Degrees | RawUnit::DegreesPerSecond => raw.to_radians(),
            RawUnit::Feet => raw * FOOT_TO_METER,
            RawUnit::PoundsForce => raw * POUND_TO_KILOGRAM * GRAVITY,
            RawUnit::FootPoundsForce => raw * FOOT_POUND_FORCE_TO_NEWTON_METER,
            RawUnit::Ratio => raw,
        };
        Quantity::new(value, self.si_unit())
    }

    /// Convert an SI value back to the raw wire unit.
    pub fn from_si(self, value: f32) -> f32 {
        match self {
            RawUnit::Knots => value / KNOT_TO_METERS_PER_SECOND,
            RawUnit::Degrees | RawUnit::DegreesPerSecond => value.to_degrees(),
            RawUnit::Feet => value / FOOT_TO_METER,
            RawUnit::PoundsForce => value / (POUND_TO_KILOGRAM * GRAVITY),
            RawUnit::FootPoundsForce => value / FOOT_POUND_FORCE_TO_NEWTON_METER,
            RawUnit::Ratio => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn knots_to_meters_per_second() {
        let q = RawUnit::Knots.to_si(100.0);
        assert_eq!(q.unit, Unit::MetersPerSecond);
        assert!(close(q.value, 51.4444, 1e-3), "{q}");
    }

    #[test]
    fn pounds_to_newtons_uses_fixed_gravity() {
        let q = RawUnit::PoundsForce.to_si(1000.0);
        assert_eq!(q.unit, Unit::Newton);
        assert!(close(q.value, 1000.0 * 0.453_592_4 * 9.81, 0.01), "{q}");
    }

    #[test]
    fn foot_pounds_to_newton_meters() {
        let q = RawUnit::FootPoundsForce.to_si(10.0);
        assert!(close(q.value, 13.558_18, 1e-4), "{q}");
    }

    #[test]
    fn degrees_and_feet() {
        assert!(close(RawUnit::Degrees.to_si(180.0).value, core::f32::consts::PI, 1e-6));
        assert_eq!(RawUnit::DegreesPerSecond.si_unit(), Unit::RadianPerSecond);
        assert!(close(RawUnit::Feet.to_si(1000.0).value, 304.8, 1e-3));
    }

    #[test]
    fn from_si_inverts_to_si() {
        for raw in [
            RawUnit::Knots,
            RawUnit::Degrees,
            RawUnit::DegreesPerSecond,
            RawUnit::Feet,
            RawUnit::PoundsForce,
            RawUnit::FootPoundsForce,
            RawUnit::Ratio,
        ] {
            let back = raw.from_si(raw.to_si(42.0).value);
            assert!(close(back, 42.0, 1e-3), "{raw:?} -> {back}");
        }
    }

    #[test]
    fn display_honours_precision() {
        let q = Quantity::new(51.444_4, Unit::MetersPerSecond);
        assert_eq!(format!("{q:.2}"), "51.44 m/s");
        assert_eq!(format!("{:.1}", Quantity::new(0.26, Unit::Unitless)), "0.3");
    }
}
