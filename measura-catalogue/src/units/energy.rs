//! Units of energy.

use crate::defined::{DefinedQuantity, ScaledUnit, System};
use crate::units::time::SECONDS_PER_HOUR;
use crate::{defined_unit, prefixed_unit};

pub(crate) const JOULE: ScaledUnit =
    ScaledUnit::new("J", System::Metric, DefinedQuantity::Energy, 1.0);
pub(crate) const CALORIE: ScaledUnit =
    ScaledUnit::new("cal", System::Metric, DefinedQuantity::Energy, 4.184);
pub(crate) const WATT_HOUR: ScaledUnit = ScaledUnit::new(
    "Wh",
    System::Metric,
    DefinedQuantity::Energy,
    SECONDS_PER_HOUR,
);

defined_unit!(
    /// The joule, SI unit of energy.
    Joule = JOULE
);
prefixed_unit!(Kilojoule, prefix = Kilo, base = JOULE);
prefixed_unit!(Megajoule, prefix = Mega, base = JOULE);
defined_unit!(
    /// The thermochemical calorie.
    Calorie = CALORIE
);
prefixed_unit!(Kilocalorie, prefix = Kilo, base = CALORIE);
defined_unit!(WattHour = WATT_HOUR);
prefixed_unit!(KilowattHour, prefix = Kilo, base = WATT_HOUR);
defined_unit!(
    /// The international table British thermal unit.
    BritishThermalUnit,
    symbol = "BTU",
    system = Imperial,
    quantity = Energy,
    factor = 1055.05585262,
);
defined_unit!(
    FootPound,
    symbol = "ft⋅lbf",
    system = Imperial,
    quantity = Energy,
    factor = 1.3558179483314004,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Hour, Kilowatt};
    use is_close::is_close;
    use measura_core::convert;

    #[test]
    fn test_energy_conversions() {
        assert_eq!(convert(1.0, &KilowattHour, &Joule).unwrap(), 3_600_000.0);
        assert!(is_close!(convert(1.0, &Kilocalorie, &Kilojoule).unwrap(), 4.184));
        assert!(is_close!(
            convert(1.0, &BritishThermalUnit, &Joule).unwrap(),
            1055.05585262
        ));
    }

    #[test]
    fn test_kilowatt_hour_leaf_and_product_agree() {
        let product = Kilowatt.times(&Hour).unwrap();
        assert_eq!(convert(1.0, &product, &Joule).unwrap(), 3_600_000.0);
        assert!(is_close!(convert(2.5, &product, &KilowattHour).unwrap(), 2.5));
    }
}
