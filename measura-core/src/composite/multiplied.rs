use super::{combined_system, compose_symbol, concat, Memo};
use crate::errors::UnitResult;
use crate::quantity::Quantity;
use crate::system::System;
use crate::unit::{LeafUnit, MeasurementUnit, Unit};
use std::fmt;
use std::sync::Arc;

/// The product of two units, such as `kW⋅h`.
pub struct MultipliedUnit {
    left: Unit,
    right: Unit,
    system: System,
    memo: Memo,
}

impl MultipliedUnit {
    /// Builds `left × right` without rewriting the operands.
    ///
    /// Fails with `IncompatibleSystem` if the operands share no system.
    pub fn new(left: Unit, right: Unit) -> UnitResult<Self> {
        let system = combined_system(&left, &right)?;
        Ok(Self {
            left,
            right,
            system,
            memo: Memo::default(),
        })
    }

    pub fn left(&self) -> &Unit {
        &self.left
    }

    pub fn right(&self) -> &Unit {
        &self.right
    }

    pub fn numerator_units(&self) -> &[LeafUnit] {
        self.memo.numerator_units(|| {
            concat(self.left.numerator_units(), self.right.numerator_units())
        })
    }

    pub fn denominator_units(&self) -> &[LeafUnit] {
        self.memo.denominator_units(|| {
            concat(self.left.denominator_units(), self.right.denominator_units())
        })
    }

    pub(crate) fn narrowed(&self, system: System) -> UnitResult<Unit> {
        self.memo.narrowed(system, || {
            let unit = MultipliedUnit::new(self.left.narrow(system)?, self.right.narrow(system)?)?;
            Ok(Unit::Multiplied(Arc::new(unit)))
        })
    }
}

impl MeasurementUnit for MultipliedUnit {
    fn symbol(&self) -> &str {
        self.memo
            .symbol(|| compose_symbol(self.numerator_units(), self.denominator_units()))
    }

    fn system(&self) -> System {
        self.system
    }

    fn quantity(&self) -> Quantity {
        Quantity::multiplying(self.left.quantity(), self.right.quantity())
    }

    fn to_si(&self, value: f64) -> UnitResult<f64> {
        self.delta_to_si(value)
    }

    fn from_si(&self, value: f64) -> UnitResult<f64> {
        self.delta_from_si(value)
    }

    fn delta_to_si(&self, delta: f64) -> UnitResult<f64> {
        self.left.delta_to_si(self.right.delta_to_si(delta)?)
    }

    fn delta_from_si(&self, delta: f64) -> UnitResult<f64> {
        self.left.delta_from_si(self.right.delta_from_si(delta)?)
    }
}

impl PartialEq for MultipliedUnit {
    fn eq(&self, other: &Self) -> bool {
        self.system == other.system && self.left == other.left && self.right == other.right
    }
}

impl fmt::Debug for MultipliedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipliedUnit")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("system", &self.system)
            .finish()
    }
}
