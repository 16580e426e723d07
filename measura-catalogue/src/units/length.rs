//! Units of length.

use crate::defined::{DefinedQuantity, ScaledUnit, System};
use crate::{defined_unit, prefixed_unit};

pub(crate) const METER: ScaledUnit =
    ScaledUnit::new("m", System::Metric, DefinedQuantity::Length, 1.0);

defined_unit!(
    /// The metre, SI unit of length.
    Meter = METER
);
prefixed_unit!(Kilometer, prefix = Kilo, base = METER);
prefixed_unit!(Decimeter, prefix = Deci, base = METER);
prefixed_unit!(Centimeter, prefix = Centi, base = METER);
prefixed_unit!(Millimeter, prefix = Milli, base = METER);
prefixed_unit!(Micrometer, prefix = Micro, base = METER);
prefixed_unit!(Nanometer, prefix = Nano, base = METER);

defined_unit!(
    /// The international inch, exactly 25.4 mm.
    Inch,
    symbol = "in",
    system = Imperial,
    quantity = Length,
    factor = 0.0254,
);
defined_unit!(
    Foot,
    symbol = "ft",
    system = Imperial,
    quantity = Length,
    factor = 0.3048,
);
defined_unit!(
    Yard,
    symbol = "yd",
    system = Imperial,
    quantity = Length,
    factor = 0.9144,
);
defined_unit!(
    Mile,
    symbol = "mi",
    system = Imperial,
    quantity = Length,
    factor = 1609.344,
);
defined_unit!(
    /// The international nautical mile, used alongside both systems.
    NauticalMile,
    symbol = "nmi",
    system = MetricAndImperial,
    quantity = Length,
    factor = 1852.0,
);

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;
    use measura_core::{convert, MeasurementUnit};

    #[test]
    fn test_kilometer_to_meter() {
        assert_eq!(convert(1.0, &Kilometer, &Meter).unwrap(), 1000.0);
    }

    #[test]
    fn test_imperial_lengths() {
        assert!(is_close!(convert(1.0, &Foot, &Inch).unwrap(), 12.0));
        assert!(is_close!(convert(1.0, &Yard, &Foot).unwrap(), 3.0));
        assert!(is_close!(convert(1.0, &Mile, &Yard).unwrap(), 1760.0));
        assert!(is_close!(convert(1.0, &Mile, &Kilometer).unwrap(), 1.609344));
    }

    #[test]
    fn test_prefixed_symbols() {
        assert_eq!(Centimeter.symbol(), "cm");
        assert_eq!(Micrometer.symbol(), "µm");
        assert!(is_close!(convert(2.5, &Centimeter, &Millimeter).unwrap(), 25.0));
    }

    #[test]
    fn test_nautical_mile_narrows_to_either_system() {
        assert!(NauticalMile.metric().is_ok());
        assert!(NauticalMile.us_customary().is_ok());
        assert!(Mile.metric().is_err());
    }
}
