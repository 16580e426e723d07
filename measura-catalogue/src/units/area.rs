//! Units of area.
//!
//! Squared units are catalogue leaves rather than products, so `km²` is a
//! single unit with its own factor.

use crate::defined_unit;

defined_unit!(
    SquareMeter,
    symbol = "m²",
    system = Metric,
    quantity = Area,
    factor = 1.0,
);
defined_unit!(
    SquareCentimeter,
    symbol = "cm²",
    system = Metric,
    quantity = Area,
    factor = 1e-4,
);
defined_unit!(
    SquareKilometer,
    symbol = "km²",
    system = Metric,
    quantity = Area,
    factor = 1e6,
);
defined_unit!(
    Hectare,
    symbol = "ha",
    system = Metric,
    quantity = Area,
    factor = 1e4,
);
defined_unit!(
    SquareInch,
    symbol = "in²",
    system = Imperial,
    quantity = Area,
    factor = 0.00064516,
);
defined_unit!(
    SquareFoot,
    symbol = "ft²",
    system = Imperial,
    quantity = Area,
    factor = 0.09290304,
);
defined_unit!(
    SquareYard,
    symbol = "yd²",
    system = Imperial,
    quantity = Area,
    factor = 0.83612736,
);
defined_unit!(
    Acre,
    symbol = "ac",
    system = Imperial,
    quantity = Area,
    factor = 4046.8564224,
);
defined_unit!(
    SquareMile,
    symbol = "mi²",
    system = Imperial,
    quantity = Area,
    factor = 2_589_988.110336,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Foot, Meter};
    use is_close::is_close;
    use measura_core::convert;

    #[test]
    fn test_area_conversions() {
        assert!(is_close!(convert(1.0, &SquareFoot, &SquareInch).unwrap(), 144.0));
        assert!(is_close!(convert(1.0, &SquareMile, &Acre).unwrap(), 640.0));
        assert!(is_close!(convert(1.0, &SquareKilometer, &Hectare).unwrap(), 100.0));
    }

    #[test]
    fn test_square_leaf_matches_product() {
        let product = Foot.times(&Foot).unwrap();
        assert!(product.is_convertible(&SquareFoot));
        assert!(is_close!(convert(1.0, &product, &SquareFoot).unwrap(), 1.0));

        let square_meter = Meter.times(&Meter).unwrap();
        assert!(is_close!(
            convert(1.0, &Hectare, &square_meter).unwrap(),
            10_000.0
        ));
    }
}
