//! Units of pressure.

use crate::defined::{DefinedQuantity, ScaledUnit, System};
use crate::{defined_unit, prefixed_unit};

pub(crate) const PASCAL: ScaledUnit =
    ScaledUnit::new("Pa", System::Metric, DefinedQuantity::Pressure, 1.0);
pub(crate) const BAR: ScaledUnit =
    ScaledUnit::new("bar", System::Metric, DefinedQuantity::Pressure, 1e5);

defined_unit!(
    /// The pascal, one newton per square metre.
    Pascal = PASCAL
);
prefixed_unit!(Hectopascal, prefix = Hecto, base = PASCAL);
prefixed_unit!(Kilopascal, prefix = Kilo, base = PASCAL);
prefixed_unit!(Megapascal, prefix = Mega, base = PASCAL);
defined_unit!(Bar = BAR);
prefixed_unit!(Millibar, prefix = Milli, base = BAR);
defined_unit!(
    /// The standard atmosphere.
    Atmosphere,
    symbol = "atm",
    system = MetricAndImperial,
    quantity = Pressure,
    factor = 101_325.0,
);
defined_unit!(
    PoundPerSquareInch,
    symbol = "psi",
    system = Imperial,
    quantity = Pressure,
    factor = 6894.757293168361,
);
defined_unit!(
    InchOfMercury,
    symbol = "inHg",
    system = Imperial,
    quantity = Pressure,
    factor = 3386.389,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Newton, PoundForce, SquareInch, SquareMeter};
    use is_close::is_close;
    use measura_core::convert;

    #[test]
    fn test_pressure_conversions() {
        assert!(is_close!(convert(1.0, &Atmosphere, &Hectopascal).unwrap(), 1013.25));
        assert!(is_close!(convert(1.0, &Bar, &Kilopascal).unwrap(), 100.0));
        assert!(is_close!(convert(1013.25, &Millibar, &Atmosphere).unwrap(), 1.0));
    }

    #[test]
    fn test_newton_per_square_meter_is_pascal() {
        let composed = Newton.per(&SquareMeter).unwrap();
        assert!(composed.is_convertible(&Pascal));
        assert!(is_close!(convert(7.0, &composed, &Pascal).unwrap(), 7.0));
    }

    #[test]
    fn test_pound_force_per_square_inch_is_psi() {
        let composed = PoundForce.per(&SquareInch).unwrap();
        assert!(is_close!(convert(1.0, &composed, &PoundPerSquareInch).unwrap(), 1.0));
    }
}
