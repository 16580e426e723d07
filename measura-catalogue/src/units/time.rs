//! Units of time.
//!
//! Time units are shared by every system.

use crate::defined::{DefinedQuantity, ScaledUnit, System};
use crate::{defined_unit, prefixed_unit};

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;
/// Seconds per hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;
/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;

pub(crate) const SECOND: ScaledUnit =
    ScaledUnit::new("s", System::MetricAndImperial, DefinedQuantity::Time, 1.0);

defined_unit!(
    /// The second, SI unit of time.
    Second = SECOND
);
prefixed_unit!(Millisecond, prefix = Milli, base = SECOND);
prefixed_unit!(Microsecond, prefix = Micro, base = SECOND);
prefixed_unit!(Nanosecond, prefix = Nano, base = SECOND);
defined_unit!(
    Minute,
    symbol = "min",
    system = MetricAndImperial,
    quantity = Time,
    factor = SECONDS_PER_MINUTE,
);
defined_unit!(
    Hour,
    symbol = "h",
    system = MetricAndImperial,
    quantity = Time,
    factor = SECONDS_PER_HOUR,
);
defined_unit!(
    Day,
    symbol = "d",
    system = MetricAndImperial,
    quantity = Time,
    factor = SECONDS_PER_DAY,
);
defined_unit!(
    Week,
    symbol = "wk",
    system = MetricAndImperial,
    quantity = Time,
    factor = 7.0 * SECONDS_PER_DAY,
);

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;
    use measura_core::{convert, MeasurementUnit};

    #[test]
    fn test_time_conversions() {
        assert_eq!(convert(1.0, &Hour, &Minute).unwrap(), 60.0);
        assert_eq!(convert(1.0, &Week, &Day).unwrap(), 7.0);
        assert!(is_close!(
            convert(1.0, &Second, &Millisecond).unwrap(),
            1000.0
        ));
    }

    #[test]
    fn test_time_is_in_every_system() {
        for system in System::MetricAndImperial.narrowings() {
            assert_eq!(Hour.narrow(system).unwrap().system(), system);
        }
    }
}
