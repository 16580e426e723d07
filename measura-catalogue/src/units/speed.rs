//! Units of speed.
//!
//! These are catalogue leaves. The same speeds can also be composed, for
//! example `Kilometer.per(&Hour)`, and the two forms convert into each other.

use crate::defined_unit;
use crate::units::time::SECONDS_PER_HOUR;

defined_unit!(
    MeterPerSecond,
    symbol = "m/s",
    system = Metric,
    quantity = Speed,
    factor = 1.0,
);
defined_unit!(
    KilometerPerHour,
    symbol = "km/h",
    system = Metric,
    quantity = Speed,
    factor = 1000.0 / SECONDS_PER_HOUR,
);
defined_unit!(
    MilePerHour,
    symbol = "mph",
    system = Imperial,
    quantity = Speed,
    factor = 1609.344 / SECONDS_PER_HOUR,
);
defined_unit!(
    FootPerSecond,
    symbol = "ft/s",
    system = Imperial,
    quantity = Speed,
    factor = 0.3048,
);
defined_unit!(
    /// One nautical mile per hour.
    Knot,
    symbol = "kn",
    system = MetricAndImperial,
    quantity = Speed,
    factor = 1852.0 / SECONDS_PER_HOUR,
);
