//! Metric prefixes.
//!
//! A single decorator, [`Prefixed`], scales any leaf unit by a
//! [`MetricPrefix`] and prepends the prefix symbol.

use crate::defined::{DefinedQuantity, System};
use measura_core::DefinedUnit;
use std::fmt;

/// Decimal prefixes from nano to giga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricPrefix {
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
}

impl MetricPrefix {
    pub const ALL: [MetricPrefix; 10] = [
        MetricPrefix::Nano,
        MetricPrefix::Micro,
        MetricPrefix::Milli,
        MetricPrefix::Centi,
        MetricPrefix::Deci,
        MetricPrefix::Deca,
        MetricPrefix::Hecto,
        MetricPrefix::Kilo,
        MetricPrefix::Mega,
        MetricPrefix::Giga,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            MetricPrefix::Nano => "n",
            MetricPrefix::Micro => "µ",
            MetricPrefix::Milli => "m",
            MetricPrefix::Centi => "c",
            MetricPrefix::Deci => "d",
            MetricPrefix::Deca => "da",
            MetricPrefix::Hecto => "h",
            MetricPrefix::Kilo => "k",
            MetricPrefix::Mega => "M",
            MetricPrefix::Giga => "G",
        }
    }

    /// Multiplier applied to the base unit.
    pub const fn factor(self) -> f64 {
        match self {
            MetricPrefix::Nano => 1e-9,
            MetricPrefix::Micro => 1e-6,
            MetricPrefix::Milli => 1e-3,
            MetricPrefix::Centi => 1e-2,
            MetricPrefix::Deci => 1e-1,
            MetricPrefix::Deca => 1e1,
            MetricPrefix::Hecto => 1e2,
            MetricPrefix::Kilo => 1e3,
            MetricPrefix::Mega => 1e6,
            MetricPrefix::Giga => 1e9,
        }
    }
}

impl fmt::Display for MetricPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A leaf unit scaled by a metric prefix, such as `km` over `m`.
///
/// The prefix is applied before the base conversion, so an affine base keeps
/// its zero point in SI.
#[derive(Debug, Clone)]
pub struct Prefixed<U> {
    prefix: MetricPrefix,
    base: U,
    symbol: String,
}

impl<U: DefinedUnit> Prefixed<U> {
    pub fn new(prefix: MetricPrefix, base: U) -> Self {
        let symbol = format!("{}{}", prefix.symbol(), base.symbol());
        Self {
            prefix,
            base,
            symbol,
        }
    }

    pub fn prefix(&self) -> MetricPrefix {
        self.prefix
    }

    pub fn base(&self) -> &U {
        &self.base
    }
}

impl<U: DefinedUnit> DefinedUnit for Prefixed<U> {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn system(&self) -> System {
        self.base.system()
    }

    fn quantity(&self) -> DefinedQuantity {
        self.base.quantity()
    }

    fn to_si(&self, value: f64) -> f64 {
        self.base.to_si(value * self.prefix.factor())
    }

    fn from_si(&self, value: f64) -> f64 {
        self.base.from_si(value) / self.prefix.factor()
    }

    fn delta_to_si(&self, delta: f64) -> f64 {
        self.base.delta_to_si(delta * self.prefix.factor())
    }

    fn delta_from_si(&self, delta: f64) -> f64 {
        self.base.delta_from_si(delta) / self.prefix.factor()
    }
}
