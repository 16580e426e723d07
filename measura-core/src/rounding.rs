//! Rounding of converted values.

use serde::{Deserialize, Serialize};

/// How a value is rounded to a number of decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero.
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// To the nearest neighbour, ties away from zero.
    HalfUp,
    /// To the nearest neighbour, ties towards zero.
    HalfDown,
    /// To the nearest neighbour, ties to the even neighbour.
    #[default]
    HalfEven,
}

/// Rounds `value` to `decimals` places.
///
/// Non-finite values are returned unchanged, as are values too large to
/// carry `decimals` fractional digits.
///
/// ```
/// use measura_core::{round, RoundingMode};
///
/// assert_eq!(round(2.5, 0, RoundingMode::HalfEven), 2.0);
/// assert_eq!(round(2.5, 0, RoundingMode::HalfUp), 3.0);
/// assert_eq!(round(-1.25, 1, RoundingMode::Floor), -1.3);
/// ```
#[must_use]
pub fn round(value: f64, decimals: u32, mode: RoundingMode) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = value * scale;
    if !scale.is_finite() || !scaled.is_finite() {
        return value;
    }
    let rounded = match mode {
        RoundingMode::Up => scaled.abs().ceil().copysign(scaled),
        RoundingMode::Down => scaled.trunc(),
        RoundingMode::Ceiling => scaled.ceil(),
        RoundingMode::Floor => scaled.floor(),
        RoundingMode::HalfUp => scaled.round(),
        RoundingMode::HalfDown => {
            if is_tie(scaled) {
                scaled.trunc()
            } else {
                scaled.round()
            }
        }
        RoundingMode::HalfEven => scaled.round_ties_even(),
    };
    rounded / scale
}

fn is_tie(scaled: f64) -> bool {
    (scaled.fract().abs() - 0.5).abs() < f64::EPSILON
}
