//! Temperature scales.
//!
//! Celsius and Fahrenheit are affine. Converting a plain value between them
//! converts an absolute temperature; inside a composite the same units carry
//! temperature differences.

use crate::defined_unit;

/// Kelvin value of 0 °C.
pub const CELSIUS_ZERO: f64 = 273.15;
/// Rankine value of 0 °F.
pub const FAHRENHEIT_ZERO: f64 = 459.67;

defined_unit!(
    /// The kelvin, SI unit of temperature.
    Kelvin,
    symbol = "K",
    system = Metric,
    quantity = Temperature,
    factor = 1.0,
);
defined_unit!(
    Celsius,
    symbol = "°C",
    system = Metric,
    quantity = Temperature,
    factor = 1.0,
    offset = CELSIUS_ZERO,
);
defined_unit!(
    Fahrenheit,
    symbol = "°F",
    system = Imperial,
    quantity = Temperature,
    factor = 5.0 / 9.0,
    offset = FAHRENHEIT_ZERO * 5.0 / 9.0,
);
defined_unit!(
    Rankine,
    symbol = "°R",
    system = Imperial,
    quantity = Temperature,
    factor = 5.0 / 9.0,
);
