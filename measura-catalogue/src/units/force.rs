//! Units of force.

use crate::defined::{DefinedQuantity, ScaledUnit, System};
use crate::{defined_unit, prefixed_unit};

/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f64 = 9.80665;

pub(crate) const NEWTON: ScaledUnit =
    ScaledUnit::new("N", System::Metric, DefinedQuantity::Force, 1.0);

defined_unit!(
    /// The newton, SI unit of force.
    Newton = NEWTON
);
prefixed_unit!(Kilonewton, prefix = Kilo, base = NEWTON);
defined_unit!(
    Dyne,
    symbol = "dyn",
    system = Metric,
    quantity = Force,
    factor = 1e-5,
);
defined_unit!(
    KilogramForce,
    symbol = "kgf",
    system = Metric,
    quantity = Force,
    factor = STANDARD_GRAVITY,
);
defined_unit!(
    /// The pound-force, one pound under standard gravity.
    PoundForce,
    symbol = "lbf",
    system = Imperial,
    quantity = Force,
    factor = 0.45359237 * STANDARD_GRAVITY,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Kilogram, Meter, Second};
    use is_close::is_close;
    use measura_core::convert;

    #[test]
    fn test_force_conversions() {
        assert!(is_close!(convert(1.0, &Kilonewton, &Newton).unwrap(), 1000.0));
        assert!(is_close!(convert(1.0, &Newton, &Dyne).unwrap(), 100_000.0));
        assert!(is_close!(convert(1.0, &PoundForce, &Newton).unwrap(), 4.4482216152605));
    }

    #[test]
    fn test_newton_from_base_units() {
        let acceleration = Meter.per(&Second.times(&Second).unwrap()).unwrap();
        let force = Kilogram.times(&acceleration).unwrap();
        assert!(force.is_convertible(&Newton));
        assert!(is_close!(convert(3.0, &force, &Newton).unwrap(), 3.0));
    }
}
