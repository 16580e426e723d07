//! Units of power.

use crate::defined::{DefinedQuantity, ScaledUnit, System};
use crate::units::time::SECONDS_PER_HOUR;
use crate::{defined_unit, prefixed_unit};

pub(crate) const WATT: ScaledUnit =
    ScaledUnit::new("W", System::Metric, DefinedQuantity::Power, 1.0);

defined_unit!(
    /// The watt, one joule per second.
    Watt = WATT
);
prefixed_unit!(Milliwatt, prefix = Milli, base = WATT);
prefixed_unit!(Kilowatt, prefix = Kilo, base = WATT);
prefixed_unit!(Megawatt, prefix = Mega, base = WATT);
prefixed_unit!(Gigawatt, prefix = Giga, base = WATT);
defined_unit!(
    /// Mechanical horsepower, 550 ft⋅lbf/s.
    Horsepower,
    symbol = "hp",
    system = Imperial,
    quantity = Power,
    factor = 745.69987158227022,
);
defined_unit!(
    MetricHorsepower,
    symbol = "PS",
    system = Metric,
    quantity = Power,
    factor = 735.49875,
);
defined_unit!(
    BtuPerHour,
    symbol = "BTU/h",
    system = Imperial,
    quantity = Power,
    factor = 1055.05585262 / SECONDS_PER_HOUR,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Joule, Second};
    use is_close::is_close;
    use measura_core::convert;

    #[test]
    fn test_power_conversions() {
        assert!(is_close!(convert(1.0, &Gigawatt, &Megawatt).unwrap(), 1000.0));
        assert!(is_close!(convert(1.0, &Horsepower, &Watt).unwrap(), 745.69987158227022));
        assert!(is_close!(convert(1.0, &Kilowatt, &BtuPerHour).unwrap(), 3412.141633127942));
    }

    #[test]
    fn test_joule_per_second_is_watt() {
        let composed = Joule.per(&Second).unwrap();
        assert!(composed.is_convertible(&Watt));
        assert!(is_close!(convert(42.0, &composed, &Watt).unwrap(), 42.0));
    }
}
