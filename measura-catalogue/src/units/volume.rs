//! Units of volume.
//!
//! Gallons, pints and fluid ounces differ between the UK and US systems and
//! are declared once per system.

use crate::defined::{DefinedQuantity, ScaledUnit, System};
use crate::{defined_unit, prefixed_unit};

pub(crate) const LITER: ScaledUnit =
    ScaledUnit::new("L", System::Metric, DefinedQuantity::Volume, 1e-3);

defined_unit!(
    CubicMeter,
    symbol = "m³",
    system = Metric,
    quantity = Volume,
    factor = 1.0,
);
defined_unit!(
    /// The litre, one cubic decimetre.
    Liter = LITER
);
prefixed_unit!(Deciliter, prefix = Deci, base = LITER);
prefixed_unit!(Centiliter, prefix = Centi, base = LITER);
prefixed_unit!(Milliliter, prefix = Milli, base = LITER);

defined_unit!(
    CubicInch,
    symbol = "in³",
    system = Imperial,
    quantity = Volume,
    factor = 1.6387064e-5,
);
defined_unit!(
    CubicFoot,
    symbol = "ft³",
    system = Imperial,
    quantity = Volume,
    factor = 0.028316846592,
);

defined_unit!(
    UkGallon,
    symbol = "imp gal",
    system = UkImperial,
    quantity = Volume,
    factor = 4.54609e-3,
);
defined_unit!(
    UkPint,
    symbol = "imp pt",
    system = UkImperial,
    quantity = Volume,
    factor = 5.6826125e-4,
);
defined_unit!(
    UkFluidOunce,
    symbol = "imp fl oz",
    system = UkImperial,
    quantity = Volume,
    factor = 2.84130625e-5,
);

defined_unit!(
    /// The US liquid gallon, 231 cubic inches.
    UsGallon,
    symbol = "US gal",
    system = UsCustomary,
    quantity = Volume,
    factor = 3.785411784e-3,
);
defined_unit!(
    UsPint,
    symbol = "US pt",
    system = UsCustomary,
    quantity = Volume,
    factor = 4.73176473e-4,
);
defined_unit!(
    UsFluidOunce,
    symbol = "US fl oz",
    system = UsCustomary,
    quantity = Volume,
    factor = 2.95735295625e-5,
);
