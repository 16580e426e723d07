//! Linear and affine leaf units.
//!
//! Catalogue units are declared as lazily built statics with the
//! [`defined_unit!`](crate::defined_unit) and
//! [`prefixed_unit!`](crate::prefixed_unit) macros:
//!
//! ```rust
//! use measura_catalogue::{defined_unit, prefixed_unit, ScaledUnit};
//! use measura_catalogue::defined::{DefinedQuantity, System};
//! use measura_core::convert;
//!
//! const FURLONG: ScaledUnit =
//!     ScaledUnit::new("fur", System::Imperial, DefinedQuantity::Length, 201.168);
//!
//! defined_unit!(
//!     /// The furlong.
//!     Furlong = FURLONG
//! );
//! prefixed_unit!(
//!     /// A thousand furlongs.
//!     Kilofurlong,
//!     prefix = Kilo,
//!     base = FURLONG,
//! );
//!
//! let furlongs = convert(1.0, &Kilofurlong, &Furlong).unwrap();
//! assert!((furlongs - 1000.0).abs() < 1e-9);
//! ```

use measura_core::DefinedUnit;

pub use measura_core::{DefinedQuantity, System, Unit};

/// A leaf unit with `si = value * factor + offset`.
///
/// Differences ignore the offset, so one degree Celsius of difference is
/// one kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledUnit {
    symbol: &'static str,
    system: System,
    quantity: DefinedQuantity,
    factor: f64,
    offset: f64,
}

impl ScaledUnit {
    /// Creates a linear unit.
    pub const fn new(
        symbol: &'static str,
        system: System,
        quantity: DefinedQuantity,
        factor: f64,
    ) -> Self {
        Self {
            symbol,
            system,
            quantity,
            factor,
            offset: 0.0,
        }
    }

    /// Shifts the zero point of the unit by `offset` SI units.
    pub const fn with_offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl DefinedUnit for ScaledUnit {
    fn symbol(&self) -> &str {
        self.symbol
    }

    fn system(&self) -> System {
        self.system
    }

    fn quantity(&self) -> DefinedQuantity {
        self.quantity
    }

    fn to_si(&self, value: f64) -> f64 {
        value * self.factor + self.offset
    }

    fn from_si(&self, value: f64) -> f64 {
        (value - self.offset) / self.factor
    }

    fn delta_to_si(&self, delta: f64) -> f64 {
        delta * self.factor
    }

    fn delta_from_si(&self, delta: f64) -> f64 {
        delta / self.factor
    }
}

/// Declares a catalogue unit as a `LazyLock<Unit>` static.
///
/// # Usage
///
/// ```rust
/// use measura_catalogue::defined_unit;
///
/// defined_unit!(
///     /// The rankine.
///     Rankine,
///     symbol = "°R",
///     system = Imperial,
///     quantity = Temperature,
///     factor = 5.0 / 9.0,
/// );
/// ```
///
/// # Parameters
///
/// - `$name`: identifier of the static
/// - `symbol`: printed symbol, unique within the catalogue
/// - `system`: a [`System`] variant
/// - `quantity`: a [`DefinedQuantity`] variant
/// - `factor`: SI units per unit
/// - `offset` (optional): SI value of the unit's zero point
///
/// The `$name = $definition` form wraps any [`DefinedUnit`] expression.
#[macro_export]
macro_rules! defined_unit {
    (
        $(#[$meta:meta])*
        $name:ident,
        symbol = $symbol:expr,
        system = $system:ident,
        quantity = $quantity:ident,
        factor = $factor:expr
        $(, offset = $offset:expr)?
        $(,)?
    ) => {
        $crate::defined_unit!(
            $(#[$meta])*
            $name = $crate::defined::ScaledUnit::new(
                $symbol,
                $crate::defined::System::$system,
                $crate::defined::DefinedQuantity::$quantity,
                $factor,
            )$(.with_offset($offset))?
        );
    };
    (
        $(#[$meta:meta])*
        $name:ident = $definition:expr $(,)?
    ) => {
        $(#[$meta])*
        #[allow(non_upper_case_globals)]
        pub static $name: ::std::sync::LazyLock<$crate::defined::Unit> =
            ::std::sync::LazyLock::new(|| $crate::defined::Unit::defined($definition));
    };
}

/// Declares a metric-prefixed catalogue unit.
///
/// `base` is any [`DefinedUnit`] value, usually a `const` [`ScaledUnit`].
#[macro_export]
macro_rules! prefixed_unit {
    (
        $(#[$meta:meta])*
        $name:ident,
        prefix = $prefix:ident,
        base = $base:expr $(,)?
    ) => {
        $crate::defined_unit!(
            $(#[$meta])*
            $name = $crate::prefix::Prefixed::new($crate::prefix::MetricPrefix::$prefix, $base)
        );
    };
}
