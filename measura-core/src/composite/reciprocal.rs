use super::{compose_symbol, invert_value, Memo};
use crate::errors::UnitResult;
use crate::quantity::Quantity;
use crate::system::System;
use crate::unit::{LeafUnit, MeasurementUnit, Unit};
use std::fmt;
use std::sync::Arc;

/// One over a unit, such as `1/s`.
///
/// A value `v` in `1/X` is converted by converting `1/v` in `X` and
/// inverting the result, so a zero value fails with `NumericDomainError`
/// instead of producing an infinity.
pub struct ReciprocalUnit {
    inverse: Unit,
    memo: Memo,
}

impl ReciprocalUnit {
    pub fn new(inverse: Unit) -> Self {
        Self {
            inverse,
            memo: Memo::default(),
        }
    }

    /// The unit this is the reciprocal of.
    pub fn inverse(&self) -> &Unit {
        &self.inverse
    }

    pub fn numerator_units(&self) -> &[LeafUnit] {
        self.inverse.denominator_units()
    }

    pub fn denominator_units(&self) -> &[LeafUnit] {
        self.inverse.numerator_units()
    }

    pub(crate) fn narrowed(&self, system: System) -> UnitResult<Unit> {
        self.memo.narrowed(system, || {
            let unit = ReciprocalUnit::new(self.inverse.narrow(system)?);
            Ok(Unit::Reciprocal(Arc::new(unit)))
        })
    }
}

impl MeasurementUnit for ReciprocalUnit {
    fn symbol(&self) -> &str {
        self.memo
            .symbol(|| compose_symbol(self.numerator_units(), self.denominator_units()))
    }

    fn system(&self) -> System {
        self.inverse.system()
    }

    fn quantity(&self) -> Quantity {
        Quantity::reciprocal(self.inverse.quantity())
    }

    fn to_si(&self, value: f64) -> UnitResult<f64> {
        self.delta_to_si(value)
    }

    fn from_si(&self, value: f64) -> UnitResult<f64> {
        self.delta_from_si(value)
    }

    fn delta_to_si(&self, delta: f64) -> UnitResult<f64> {
        let inverse = invert_value(self.symbol(), delta)?;
        invert_value(self.symbol(), self.inverse.delta_to_si(inverse)?)
    }

    fn delta_from_si(&self, delta: f64) -> UnitResult<f64> {
        let inverse = invert_value(self.symbol(), delta)?;
        invert_value(self.symbol(), self.inverse.delta_from_si(inverse)?)
    }
}

impl PartialEq for ReciprocalUnit {
    fn eq(&self, other: &Self) -> bool {
        self.inverse == other.inverse
    }
}

impl fmt::Debug for ReciprocalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReciprocalUnit")
            .field("inverse", &self.inverse)
            .finish()
    }
}
