// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

/// Units of measure the dashboard runtime understands.
///
/// Wire ids (`as_str`) are stable and appear in source-model and export
/// payloads. Conversion works off a direct factor table with an inverse
/// fallback, so declaring `meters -> feet` also makes `feet -> meters`
/// available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    None,
    Meters,
    Miles,
    Feet,
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
    FeetPerSecond,
    Knots,
    Pounds,
    Radians,
    Degrees,
    Seconds,
    Kilograms,
    DeltaTimeSeconds,
}

impl Unit {
    /// Every unit, in declaration order. Drives catalog building and
    /// `convertible_units`.
    pub const ALL: [Unit; 15] = [
        Unit::None,
        Unit::Meters,
        Unit::Miles,
        Unit::Feet,
        Unit::MetersPerSecond,
        Unit::KilometersPerHour,
        Unit::MilesPerHour,
        Unit::FeetPerSecond,
        Unit::Knots,
        Unit::Pounds,
        Unit::Radians,
        Unit::Degrees,
        Unit::Seconds,
        Unit::Kilograms,
        Unit::DeltaTimeSeconds,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Meters => "meters",
            Self::Miles => "miles",
            Self::Feet => "feet",
            Self::MetersPerSecond => "ms",
            Self::KilometersPerHour => "kmh",
            Self::MilesPerHour => "mph",
            Self::FeetPerSecond => "fts",
            Self::Knots => "knots",
            Self::Pounds => "pounds",
            Self::Radians => "radians",
            Self::Degrees => "degrees",
            Self::Seconds => "seconds",
            Self::Kilograms => "kilograms",
            Self::DeltaTimeSeconds => "delta_t_s",
        }
    }

    /// Short symbol rendered next to values (`kts`, `km/h`). Empty for
    /// [`Unit::None`].
    pub fn symbol(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Meters => "m",
            Self::Miles => "mi",
            Self::Feet => "ft",
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "km/h",
            Self::MilesPerHour => "mph",
            Self::FeetPerSecond => "ft/s",
            Self::Knots => "kts",
            Self::Pounds => "lbs",
            Self::Radians => "rad",
            Self::Degrees => "°",
            Self::Seconds => "s",
            Self::Kilograms => "kg",
            Self::DeltaTimeSeconds => "s",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Meters => "Meters",
            Self::Miles => "Miles",
            Self::Feet => "Feet",
            Self::MetersPerSecond => "Meters per second",
            Self::KilometersPerHour => "Kilometers per hour",
            Self::MilesPerHour => "Miles per hour",
            Self::FeetPerSecond => "Feet per second",
            Self::Knots => "Knots",
            Self::Pounds => "Pounds",
            Self::Radians => "Radians",
            Self::Degrees => "Degrees",
            Self::Seconds => "Seconds",
            Self::Kilograms => "Kilograms",
            Self::DeltaTimeSeconds => "Delta time (s)",
        }
    }

    /// Multiplier taking a value in `self` to a value in `to`, if the pair
    /// is convertible. Identity is always 1.0.
    pub fn conversion_factor(self, to: Unit) -> Option<f64> {
        if self == to {
            return Some(1.0);
        }
        if let Some(factor) = direct_factor(self, to) {
            return Some(factor);
        }
        direct_factor(to, self).map(|factor| 1.0 / factor)
    }

    pub fn convert(self, value: f64, to: Unit) -> Result<f64, MissingConversion> {
        match self.conversion_factor(to) {
            Some(factor) => Ok(value * factor),
            None => Err(MissingConversion { from: self, to }),
        }
    }

    /// Units reachable from `self` through the factor table (including
    /// `self`), in declaration order.
    pub fn convertible_units(self) -> Vec<Unit> {
        Unit::ALL
            .into_iter()
            .filter(|unit| self.conversion_factor(*unit).is_some())
            .collect()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUnitError;

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown unit id")
    }
}

impl std::error::Error for ParseUnitError {}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "meters" => Ok(Self::Meters),
            "miles" => Ok(Self::Miles),
            "feet" => Ok(Self::Feet),
            "ms" => Ok(Self::MetersPerSecond),
            "kmh" => Ok(Self::KilometersPerHour),
            "mph" => Ok(Self::MilesPerHour),
            "fts" => Ok(Self::FeetPerSecond),
            "knots" => Ok(Self::Knots),
            "pounds" => Ok(Self::Pounds),
            "radians" => Ok(Self::Radians),
            "degrees" => Ok(Self::Degrees),
            "seconds" => Ok(Self::Seconds),
            "kilograms" => Ok(Self::Kilograms),
            "delta_t_s" => Ok(Self::DeltaTimeSeconds),
            _ => Err(ParseUnitError),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingConversion {
    from: Unit,
    to: Unit,
}

impl MissingConversion {
    pub fn from_unit(&self) -> Unit {
        self.from
    }

    pub fn to_unit(&self) -> Unit {
        self.to
    }
}

impl fmt::Display for MissingConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no conversion factor (from={}, to={})",
            self.from, self.to
        )
    }
}

impl std::error::Error for MissingConversion {}

fn direct_factor(from: Unit, to: Unit) -> Option<f64> {
    let factor = match (from, to) {
        (Unit::Meters, Unit::Miles) => 0.000_621_371,
        (Unit::Meters, Unit::Feet) => 3.280_84,
        (Unit::Feet, Unit::Miles) => 0.000_189_394,
        (Unit::MetersPerSecond, Unit::MilesPerHour) => 2.236_94,
        (Unit::MetersPerSecond, Unit::KilometersPerHour) => 3.6,
        (Unit::MetersPerSecond, Unit::Knots) => 1.943_84,
        (Unit::KilometersPerHour, Unit::MilesPerHour) => 0.621_371,
        (Unit::FeetPerSecond, Unit::MilesPerHour) => 0.681_818,
        (Unit::FeetPerSecond, Unit::Knots) => 0.592_484,
        (Unit::Knots, Unit::MilesPerHour) => 1.150_78,
        (Unit::Kilograms, Unit::Pounds) => 2.204_62,
        (Unit::Radians, Unit::Degrees) => 180.0 / std::f64::consts::PI,
        _ => return None,
    };
    Some(factor)
}

#[cfg(test)]
mod tests {
    use super::{MissingConversion, Unit};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn unit_roundtrips_via_str() {
        for unit in Unit::ALL {
            let parsed: Unit = unit.as_str().parse().expect("parse");
            assert_eq!(parsed, unit);
            assert_eq!(parsed.to_string(), unit.as_str());
        }
    }

    #[test]
    fn unknown_unit_id_is_rejected() {
        assert!("furlongs".parse::<Unit>().is_err());
    }

    #[test]
    fn direct_factors_convert() {
        assert_close(Unit::Meters.convert(1000.0, Unit::Miles).unwrap(), 0.621_371);
        assert_close(
            Unit::MetersPerSecond.convert(10.0, Unit::MilesPerHour).unwrap(),
            22.369_4,
        );
        assert_close(
            Unit::MetersPerSecond
                .convert(10.0, Unit::KilometersPerHour)
                .unwrap(),
            36.0,
        );
        assert_close(
            Unit::KilometersPerHour
                .convert(100.0, Unit::MilesPerHour)
                .unwrap(),
            62.137_1,
        );
        assert_close(
            Unit::Radians.convert(std::f64::consts::PI, Unit::Degrees).unwrap(),
            180.0,
        );
    }

    #[test]
    fn inverse_factors_convert() {
        assert_close(Unit::Feet.convert(100.0, Unit::Meters).unwrap(), 30.48);
        assert_close(Unit::Pounds.convert(10.0, Unit::Kilograms).unwrap(), 4.535_92);
        assert_close(
            Unit::Degrees.convert(90.0, Unit::Radians).unwrap(),
            std::f64::consts::FRAC_PI_2,
        );
        assert_close(
            Unit::KilometersPerHour
                .convert(2.0, Unit::MetersPerSecond)
                .unwrap(),
            0.555_6,
        );
    }

    #[test]
    fn identity_conversion_is_unity() {
        assert_close(Unit::Kilograms.convert(5.0, Unit::Kilograms).unwrap(), 5.0);
        assert_close(Unit::None.convert(42.0, Unit::None).unwrap(), 42.0);
    }

    #[test]
    fn missing_pair_is_an_error() {
        let err = Unit::MetersPerSecond
            .convert(1.0, Unit::Pounds)
            .unwrap_err();
        assert_eq!(
            err,
            MissingConversion {
                from: Unit::MetersPerSecond,
                to: Unit::Pounds,
            }
        );
        assert_eq!(err.to_string(), "no conversion factor (from=ms, to=pounds)");
    }

    #[test]
    fn convertible_units_include_identity_and_inverses() {
        assert_eq!(
            Unit::Meters.convertible_units(),
            vec![Unit::Meters, Unit::Miles, Unit::Feet]
        );
        assert_eq!(
            Unit::MilesPerHour.convertible_units(),
            vec![
                Unit::MetersPerSecond,
                Unit::KilometersPerHour,
                Unit::MilesPerHour,
                Unit::FeetPerSecond,
                Unit::Knots,
            ]
        );
        assert_eq!(Unit::None.convertible_units(), vec![Unit::None]);
    }
}
