//! Units of mass.

use crate::defined::{DefinedQuantity, ScaledUnit, System};
use crate::{defined_unit, prefixed_unit};

pub(crate) const GRAM: ScaledUnit =
    ScaledUnit::new("g", System::Metric, DefinedQuantity::Weight, 1e-3);

defined_unit!(Gram = GRAM);
prefixed_unit!(
    /// The kilogram, SI unit of mass.
    Kilogram,
    prefix = Kilo,
    base = GRAM,
);
prefixed_unit!(Milligram, prefix = Milli, base = GRAM);
prefixed_unit!(Microgram, prefix = Micro, base = GRAM);
defined_unit!(
    Tonne,
    symbol = "t",
    system = Metric,
    quantity = Weight,
    factor = 1000.0,
);

defined_unit!(
    /// The avoirdupois pound.
    Pound,
    symbol = "lb",
    system = Imperial,
    quantity = Weight,
    factor = 0.45359237,
);
defined_unit!(
    Ounce,
    symbol = "oz",
    system = Imperial,
    quantity = Weight,
    factor = 0.028349523125,
);
defined_unit!(
    Stone,
    symbol = "st",
    system = UkImperial,
    quantity = Weight,
    factor = 6.35029318,
);
defined_unit!(
    LongTon,
    symbol = "long tn",
    system = UkImperial,
    quantity = Weight,
    factor = 1016.0469088,
);
defined_unit!(
    ShortTon,
    symbol = "sh tn",
    system = UsCustomary,
    quantity = Weight,
    factor = 907.18474,
);
