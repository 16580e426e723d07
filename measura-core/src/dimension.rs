//! Physical dimensions used to normalize quantity trees.
//!
//! A [`Dimension`] stores integer exponents of the seven SI base
//! dimensions. Every [`Quantity`](crate::quantity::Quantity) tree reduces to
//! exactly one dimension, which is what makes `Force / Area` and `Pressure`
//! interchangeable even though their trees differ.
//!
//! # Base Dimensions
//!
//! - Mass (M)
//! - Length (L)
//! - Time (T)
//! - Temperature (Θ)
//! - Amount of substance (N)
//! - Electric current (I)
//! - Luminous intensity (J)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};

/// Exponents of the SI base dimensions.
///
/// Exponent arithmetic saturates at the `i16` bounds.
///
/// For example:
/// - Speed has dimensions L·T⁻¹ (length = 1, time = -1)
/// - Force has dimensions M·L·T⁻² (mass = 1, length = 1, time = -2)
/// - Pressure has dimensions M·L⁻¹·T⁻²
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Dimension {
    /// Mass exponent (M)
    pub mass: i16,
    /// Length exponent (L)
    pub length: i16,
    /// Time exponent (T)
    pub time: i16,
    /// Temperature exponent (Θ)
    pub temperature: i16,
    /// Amount of substance exponent (N)
    pub amount: i16,
    /// Electric current exponent (I)
    pub current: i16,
    /// Luminous intensity exponent (J)
    pub luminosity: i16,
}

impl Dimension {
    /// The dimensionless dimension (all exponents zero).
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    pub const MASS: Self = Self::new(1, 0, 0, 0, 0, 0, 0);
    pub const LENGTH: Self = Self::new(0, 1, 0, 0, 0, 0, 0);
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0, 0);
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 1, 0, 0, 0);
    pub const AMOUNT: Self = Self::new(0, 0, 0, 0, 1, 0, 0);
    pub const CURRENT: Self = Self::new(0, 0, 0, 0, 0, 1, 0);
    pub const LUMINOSITY: Self = Self::new(0, 0, 0, 0, 0, 0, 1);

    /// Creates a dimension with the specified exponents.
    #[must_use]
    pub const fn new(
        mass: i16,
        length: i16,
        time: i16,
        temperature: i16,
        amount: i16,
        current: i16,
        luminosity: i16,
    ) -> Self {
        Self {
            mass,
            length,
            time,
            temperature,
            amount,
            current,
            luminosity,
        }
    }

    /// Returns true if every exponent is zero.
    #[must_use]
    pub const fn is_dimensionless(&self) -> bool {
        self.mass == 0
            && self.length == 0
            && self.time == 0
            && self.temperature == 0
            && self.amount == 0
            && self.current == 0
            && self.luminosity == 0
    }

    /// The dimension of the reciprocal quantity.
    #[must_use]
    pub const fn recip(&self) -> Self {
        self.pow(-1)
    }

    /// Raises this dimension to an integer power.
    #[must_use]
    pub const fn pow(&self, exp: i16) -> Self {
        Self {
            mass: self.mass.saturating_mul(exp),
            length: self.length.saturating_mul(exp),
            time: self.time.saturating_mul(exp),
            temperature: self.temperature.saturating_mul(exp),
            amount: self.amount.saturating_mul(exp),
            current: self.current.saturating_mul(exp),
            luminosity: self.luminosity.saturating_mul(exp),
        }
    }

    const fn exponents(&self) -> [(i16, &'static str); 7] {
        [
            (self.mass, "M"),
            (self.length, "L"),
            (self.time, "T"),
            (self.temperature, "Θ"),
            (self.amount, "N"),
            (self.current, "I"),
            (self.luminosity, "J"),
        ]
    }
}

impl Mul for Dimension {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            mass: self.mass.saturating_add(rhs.mass),
            length: self.length.saturating_add(rhs.length),
            time: self.time.saturating_add(rhs.time),
            temperature: self.temperature.saturating_add(rhs.temperature),
            amount: self.amount.saturating_add(rhs.amount),
            current: self.current.saturating_add(rhs.current),
            luminosity: self.luminosity.saturating_add(rhs.luminosity),
        }
    }
}

impl Div for Dimension {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.recip()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }

        let parts: Vec<String> = self
            .exponents()
            .into_iter()
            .filter(|(exp, _)| *exp != 0)
            .map(|(exp, sym)| {
                if exp == 1 {
                    sym.to_string()
                } else {
                    format!("{sym}^{exp}")
                }
            })
            .collect();

        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionless() {
        assert!(Dimension::DIMENSIONLESS.is_dimensionless());
        assert_eq!(Dimension::default(), Dimension::DIMENSIONLESS);
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "dimensionless");
    }

    #[test]
    fn test_force_over_area_is_pressure() {
        let force = Dimension::MASS * Dimension::LENGTH / Dimension::TIME.pow(2);
        let area = Dimension::LENGTH.pow(2);
        assert_eq!(force / area, Dimension::new(1, -1, -2, 0, 0, 0, 0));
    }

    #[test]
    fn test_recip_is_involution() {
        let speed = Dimension::LENGTH / Dimension::TIME;
        assert_eq!(speed.recip().recip(), speed);
        assert!((speed * speed.recip()).is_dimensionless());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::MASS), "M");
        assert_eq!(format!("{}", Dimension::LENGTH.pow(2)), "L^2");
        assert_eq!(
            format!("{}", Dimension::MASS * Dimension::LENGTH / Dimension::TIME.pow(2)),
            "M L T^-2"
        );
    }

    #[test]
    fn test_deep_products_saturate() {
        let mut length = Dimension::LENGTH;
        for _ in 0..200 {
            length = length * Dimension::LENGTH;
        }
        assert_eq!(length.length, 201);
        assert_ne!(length, length.recip());

        let huge = Dimension::LENGTH.pow(i16::MAX);
        assert_eq!((huge * huge).length, i16::MAX);
        assert_eq!((huge.recip() / huge).length, -i16::MAX - 1);
    }
}
