//! Conversion between units through the SI pivot.
//!
//! Every conversion goes `from → SI → to`. Units are only convertible when
//! their quantity trees are equivalent; otherwise the conversion fails with
//! [`UnitError::IncompatibleQuantity`].

use crate::config::{ConversionOptions, Rounding};
use crate::errors::{UnitError, UnitResult};
use crate::quantity::Quantity;
use crate::rounding::RoundingMode;
use crate::unit::{MeasurementUnit, Unit};
use log::debug;

fn incompatible(from: &Unit, to: &Unit) -> UnitError {
    let error = UnitError::IncompatibleQuantity {
        from: from.symbol().to_string(),
        to: to.symbol().to_string(),
        from_dimension: from.quantity().dimension(),
        to_dimension: to.quantity().dimension(),
    };
    debug!("{error}");
    error
}

/// Returns true if values can be converted from `from` to `to`.
pub fn is_convertible(from: &Unit, to: &Unit) -> bool {
    from.is_convertible(to)
}

/// Converts `value` from one unit to another.
///
/// Identical units return `value` untouched, without a round trip through SI.
///
/// # Errors
///
/// Fails with `IncompatibleQuantity` if the units measure different
/// quantities, and with `NumericDomainError` if a reciprocal unit is asked
/// to convert zero.
pub fn convert(value: f64, from: &Unit, to: &Unit) -> UnitResult<f64> {
    if from == to {
        return Ok(value);
    }
    if !from.is_convertible(to) {
        return Err(incompatible(from, to));
    }
    to.from_si(from.to_si(value)?)
}

/// Converts `value` and rounds the result.
pub fn convert_rounded(
    value: f64,
    from: &Unit,
    to: &Unit,
    decimals: u32,
    mode: RoundingMode,
) -> UnitResult<f64> {
    let options = ConversionOptions {
        rounding: Some(Rounding::new(decimals, mode)),
    };
    convert_with(value, from, to, &options)
}

/// Converts `value` and post-processes it with `options`.
pub fn convert_with(
    value: f64,
    from: &Unit,
    to: &Unit,
    options: &ConversionOptions,
) -> UnitResult<f64> {
    convert(value, from, to).map(|converted| options.apply(converted))
}

/// Converts `value` into a unit of the reciprocal quantity.
///
/// A speed of 2 m/s is a pace of 0.5 s/m. `to` must measure the reciprocal
/// of what `from` measures.
///
/// # Errors
///
/// Fails with `IncompatibleQuantity` if `to` does not measure the reciprocal
/// quantity, and with `NumericDomainError` if the SI value is zero.
pub fn convert_reciprocal(value: f64, from: &Unit, to: &Unit) -> UnitResult<f64> {
    let reciprocal = Quantity::reciprocal(from.quantity());
    if !reciprocal.is_equivalent(&to.quantity()) {
        return Err(incompatible(&from.reciprocal(), to));
    }
    let si = from.to_si(value)?;
    if si == 0.0 {
        debug!("cannot invert zero {} into {}", from.symbol(), to.symbol());
        return Err(UnitError::NumericDomainError {
            unit: from.symbol().to_string(),
            value,
        });
    }
    to.from_si(1.0 / si)
}

/// The factor that converts a difference in `from` into a difference in `to`.
///
/// For linear units this is the plain multiplier between them.
pub fn conversion_factor(from: &Unit, to: &Unit) -> UnitResult<f64> {
    if !from.is_convertible(to) {
        return Err(incompatible(from, to));
    }
    to.delta_from_si(from.delta_to_si(1.0)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{
        celsius, fahrenheit, hour, joule, kelvin, kilometer, kilowatt, meter, minute, newton,
        pascal, second, square_meter,
    };
    use is_close::is_close;

    #[test]
    fn test_kilometer_to_meter() {
        assert_eq!(convert(1.0, &kilometer(), &meter()).unwrap(), 1000.0);
    }

    #[test]
    fn test_identity_is_exact() {
        let unit = kilometer().per(&hour()).unwrap();
        for value in [0.1, 1.0 / 3.0, 1e300, -7.25] {
            assert_eq!(convert(value, &unit, &unit).unwrap(), value);
        }
    }

    #[test]
    fn test_kilowatt_hour_to_joule() {
        let kwh = kilowatt().times(&hour()).unwrap();
        assert_eq!(convert(1.0, &kwh, &joule()).unwrap(), 3_600_000.0);
    }

    #[test]
    fn test_newton_per_square_meter_is_pascal() {
        let unit = newton().per(&square_meter()).unwrap();
        assert!(unit.is_convertible(&pascal()));
        assert_eq!(convert(5.0, &unit, &pascal()).unwrap(), 5.0);
    }

    #[test]
    fn test_incompatible_quantity() {
        let err = convert(1.0, &meter(), &second()).unwrap_err();
        assert!(matches!(err, UnitError::IncompatibleQuantity { .. }));
        assert!(err.to_string().contains("'m' to 's'"));
    }

    #[test]
    fn test_plain_temperatures_are_absolute() {
        assert!(is_close!(
            convert(100.0, &celsius(), &fahrenheit()).unwrap(),
            212.0
        ));
        assert!(is_close!(convert(0.0, &celsius(), &kelvin()).unwrap(), 273.15));
    }

    #[test]
    fn test_composed_temperatures_are_deltas() {
        let c_per_min = celsius().per(&minute()).unwrap();
        let k_per_s = kelvin().per(&second()).unwrap();
        assert!(is_close!(convert(60.0, &c_per_min, &k_per_s).unwrap(), 1.0));
    }

    #[test]
    fn test_rounding_is_post_processing() {
        let value = convert_rounded(1.0, &meter(), &kilometer(), 2, RoundingMode::Up).unwrap();
        assert_eq!(value, 0.01);
        let value = convert_with(
            1234.5,
            &meter(),
            &kilometer(),
            &ConversionOptions::rounded(0),
        )
        .unwrap();
        assert_eq!(value, 1.0);
    }

    #[test]
    fn test_rounding_keeps_large_results_finite() {
        let plain = convert(1e300, &kilometer(), &meter()).unwrap();
        let rounded =
            convert_rounded(1e300, &kilometer(), &meter(), 10, RoundingMode::HalfEven).unwrap();
        assert_eq!(rounded, plain);

        let options = ConversionOptions::rounded(400);
        assert_eq!(convert_with(1.5, &meter(), &meter(), &options).unwrap(), 1.5);
    }

    #[test]
    fn test_convert_reciprocal() {
        let speed = meter().per(&second()).unwrap();
        let pace = speed.reciprocal();
        assert!(is_close!(convert_reciprocal(2.0, &speed, &pace).unwrap(), 0.5));

        let pace_km = hour().per(&kilometer()).unwrap();
        // 10 m/s = 36 km/h = 1/36 h/km
        assert!(is_close!(
            convert_reciprocal(10.0, &speed, &pace_km).unwrap(),
            1.0 / 36.0
        ));
    }

    #[test]
    fn test_convert_reciprocal_errors() {
        let speed = meter().per(&second()).unwrap();
        assert!(matches!(
            convert_reciprocal(0.0, &speed, &speed.reciprocal()),
            Err(UnitError::NumericDomainError { .. })
        ));
        assert!(matches!(
            convert_reciprocal(1.0, &speed, &speed),
            Err(UnitError::IncompatibleQuantity { .. })
        ));
    }

    #[test]
    fn test_conversion_factor() {
        assert!(is_close!(
            conversion_factor(&kilometer(), &meter()).unwrap(),
            1000.0
        ));
        assert!(is_close!(
            conversion_factor(&celsius(), &fahrenheit()).unwrap(),
            1.8
        ));
        assert!(conversion_factor(&meter(), &joule()).is_err());
    }

    #[test]
    fn test_is_convertible() {
        assert!(is_convertible(&kilometer(), &meter()));
        assert!(!is_convertible(&kilometer(), &second()));
    }
}
