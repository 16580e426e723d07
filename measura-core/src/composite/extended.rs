use super::Memo;
use crate::errors::UnitResult;
use crate::quantity::Quantity;
use crate::system::System;
use crate::unit::{same_leaf, LeafUnit, MeasurementUnit, NarrowedUnit, Unit};
use std::fmt;
use std::sync::Arc;

/// A leaf unit lifted into the composition algebra.
///
/// The wrapped leaf keeps its own conversions; only the quantity changes
/// from `Base` to `Extended`, marking the leaf as a factor of an open
/// composite.
pub struct ExtendedUnit {
    wrapped: LeafUnit,
    memo: Memo,
}

impl ExtendedUnit {
    pub fn new(wrapped: LeafUnit) -> Self {
        Self {
            wrapped,
            memo: Memo::default(),
        }
    }

    pub fn wrapped(&self) -> &LeafUnit {
        &self.wrapped
    }

    pub fn numerator_units(&self) -> &[LeafUnit] {
        std::slice::from_ref(&self.wrapped)
    }

    pub fn denominator_units(&self) -> &[LeafUnit] {
        &[]
    }

    pub(crate) fn narrowed(&self, system: System) -> UnitResult<Unit> {
        self.memo.narrowed(system, || {
            let leaf = NarrowedUnit::new(self.wrapped.clone(), system)?;
            Ok(Unit::Extended(Arc::new(ExtendedUnit::new(Arc::new(leaf)))))
        })
    }
}

impl MeasurementUnit for ExtendedUnit {
    fn symbol(&self) -> &str {
        self.wrapped.symbol()
    }

    fn system(&self) -> System {
        self.wrapped.system()
    }

    fn quantity(&self) -> Quantity {
        Quantity::Extended(self.wrapped.quantity())
    }

    fn to_si(&self, value: f64) -> UnitResult<f64> {
        Ok(self.wrapped.to_si(value))
    }

    fn from_si(&self, value: f64) -> UnitResult<f64> {
        Ok(self.wrapped.from_si(value))
    }

    fn delta_to_si(&self, delta: f64) -> UnitResult<f64> {
        Ok(self.wrapped.delta_to_si(delta))
    }

    fn delta_from_si(&self, delta: f64) -> UnitResult<f64> {
        Ok(self.wrapped.delta_from_si(delta))
    }
}

impl PartialEq for ExtendedUnit {
    fn eq(&self, other: &Self) -> bool {
        same_leaf(&self.wrapped, &other.wrapped)
    }
}

impl fmt::Debug for ExtendedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedUnit")
            .field("wrapped", &self.wrapped)
            .finish()
    }
}
