use super::{combined_system, compose_symbol, concat, Memo};
use crate::errors::UnitResult;
use crate::quantity::Quantity;
use crate::system::System;
use crate::unit::{LeafUnit, MeasurementUnit, Unit};
use std::fmt;
use std::sync::Arc;

/// The quotient of two units, such as `m/s`.
pub struct DividedUnit {
    numerator: Unit,
    denominator: Unit,
    system: System,
    memo: Memo,
}

impl DividedUnit {
    /// Builds `numerator / denominator` without rewriting the operands.
    ///
    /// Fails with `IncompatibleSystem` if the operands share no system.
    pub fn new(numerator: Unit, denominator: Unit) -> UnitResult<Self> {
        let system = combined_system(&numerator, &denominator)?;
        Ok(Self {
            numerator,
            denominator,
            system,
            memo: Memo::default(),
        })
    }

    pub fn numerator(&self) -> &Unit {
        &self.numerator
    }

    pub fn denominator(&self) -> &Unit {
        &self.denominator
    }

    /// The same fraction turned upside down.
    pub fn inverted(&self) -> Self {
        Self {
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
            system: self.system,
            memo: Memo::default(),
        }
    }

    pub fn numerator_units(&self) -> &[LeafUnit] {
        self.memo.numerator_units(|| {
            concat(
                self.numerator.numerator_units(),
                self.denominator.denominator_units(),
            )
        })
    }

    pub fn denominator_units(&self) -> &[LeafUnit] {
        self.memo.denominator_units(|| {
            concat(
                self.numerator.denominator_units(),
                self.denominator.numerator_units(),
            )
        })
    }

    pub(crate) fn narrowed(&self, system: System) -> UnitResult<Unit> {
        self.memo.narrowed(system, || {
            let unit = DividedUnit::new(
                self.numerator.narrow(system)?,
                self.denominator.narrow(system)?,
            )?;
            Ok(Unit::Divided(Arc::new(unit)))
        })
    }
}

impl MeasurementUnit for DividedUnit {
    fn symbol(&self) -> &str {
        self.memo
            .symbol(|| compose_symbol(self.numerator_units(), self.denominator_units()))
    }

    fn system(&self) -> System {
        self.system
    }

    fn quantity(&self) -> Quantity {
        Quantity::dividing(self.numerator.quantity(), self.denominator.quantity())
    }

    fn to_si(&self, value: f64) -> UnitResult<f64> {
        self.delta_to_si(value)
    }

    fn from_si(&self, value: f64) -> UnitResult<f64> {
        self.delta_from_si(value)
    }

    fn delta_to_si(&self, delta: f64) -> UnitResult<f64> {
        self.numerator
            .delta_to_si(self.denominator.delta_from_si(delta)?)
    }

    fn delta_from_si(&self, delta: f64) -> UnitResult<f64> {
        self.numerator
            .delta_from_si(self.denominator.delta_to_si(delta)?)
    }
}

impl PartialEq for DividedUnit {
    fn eq(&self, other: &Self) -> bool {
        self.system == other.system
            && self.numerator == other.numerator
            && self.denominator == other.denominator
    }
}

impl fmt::Debug for DividedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DividedUnit")
            .field("numerator", &self.numerator)
            .field("denominator", &self.denominator)
            .field("system", &self.system)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{celsius, fahrenheit, hour, kilometer, meter, second, watt};
    use crate::quantity::DefinedQuantity;
    use is_close::is_close;

    fn divided(numerator: Unit, denominator: Unit) -> DividedUnit {
        DividedUnit::new(numerator.as_undefined(), denominator.as_undefined()).unwrap()
    }

    #[test]
    fn test_kilometer_per_hour() {
        let kmh = divided(kilometer(), hour());
        assert_eq!(kmh.symbol(), "km/h");
        assert_eq!(kmh.system(), System::Metric);
        assert!(is_close!(kmh.to_si(36.0).unwrap(), 10.0));
        assert!(is_close!(kmh.from_si(10.0).unwrap(), 36.0));
        assert_eq!(kmh.quantity().resolve(), Some(DefinedQuantity::Speed));
    }

    #[test]
    fn test_temperature_rates_use_deltas() {
        // A thermal resistance of 1 °C/W is 1 K/W, not 274.15 K/W.
        let per_watt = divided(celsius(), watt());
        assert!(is_close!(per_watt.to_si(1.0).unwrap(), 1.0));

        let fahrenheit_per_watt = divided(fahrenheit(), watt());
        assert!(is_close!(fahrenheit_per_watt.to_si(9.0).unwrap(), 5.0));
    }

    #[test]
    fn test_inverted_swaps_parts() {
        let speed = divided(meter(), second());
        let pace = speed.inverted();
        assert_eq!(pace.symbol(), "s/m");
        assert_eq!(pace.system(), speed.system());
        assert!(is_close!(pace.to_si(2.0).unwrap(), 2.0));
    }

    #[test]
    fn test_nested_units_flatten_into_symbol() {
        let speed = Unit::Divided(Arc::new(divided(meter(), second())));
        let acceleration = DividedUnit::new(speed, second().as_undefined()).unwrap();
        assert_eq!(acceleration.symbol(), "m/s2");
        assert_eq!(
            acceleration.quantity().resolve(),
            Some(DefinedQuantity::Acceleration)
        );
    }

    #[test]
    fn test_narrowing_metric_and_imperial_operands() {
        let per_second = divided(second(), hour());
        assert_eq!(per_second.system(), System::MetricAndImperial);
        let metric = per_second.narrowed(System::Metric).unwrap();
        assert_eq!(metric.system(), System::Metric);
        assert!(is_close!(metric.to_si(1.0).unwrap(), 1.0 / 3600.0));
    }
}
