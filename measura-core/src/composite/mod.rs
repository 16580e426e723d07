//! Composite units built by the composition operators.
//!
//! Each composite owns shared handles to its operands and derives its
//! system, quantity tree, symbol and SI conversion from them. Derived members
//! are memoized once per instance.
//!
//! Composites always convert their operands with the delta conversions, so
//! an affine leaf such as degrees Celsius contributes a temperature
//! difference rather than an absolute temperature.

mod divided;
mod extended;
mod multiplied;
mod reciprocal;

pub use divided::DividedUnit;
pub use extended::ExtendedUnit;
pub use multiplied::MultipliedUnit;
pub use reciprocal::ReciprocalUnit;

use crate::errors::{UnitError, UnitResult};
use crate::system::System;
use crate::unit::{LeafUnit, MeasurementUnit, Unit};
use log::debug;
use std::sync::OnceLock;

/// Lazily derived members of a composite.
#[derive(Default)]
pub(crate) struct Memo {
    symbol: OnceLock<String>,
    numerator_units: OnceLock<Vec<LeafUnit>>,
    denominator_units: OnceLock<Vec<LeafUnit>>,
    narrowed: [OnceLock<Unit>; 7],
}

impl Memo {
    pub(crate) fn symbol(&self, build: impl FnOnce() -> String) -> &str {
        self.symbol.get_or_init(build)
    }

    pub(crate) fn numerator_units(&self, build: impl FnOnce() -> Vec<LeafUnit>) -> &[LeafUnit] {
        self.numerator_units.get_or_init(build)
    }

    pub(crate) fn denominator_units(&self, build: impl FnOnce() -> Vec<LeafUnit>) -> &[LeafUnit] {
        self.denominator_units.get_or_init(build)
    }

    /// Returns the memoized narrowing to `system`, building it on first use.
    ///
    /// Callers must not ask for their own system, or the cached unit would
    /// hold a strong reference back to its owner.
    pub(crate) fn narrowed(
        &self,
        system: System,
        build: impl FnOnce() -> UnitResult<Unit>,
    ) -> UnitResult<Unit> {
        let slot = &self.narrowed[system.index()];
        if let Some(unit) = slot.get() {
            return Ok(unit.clone());
        }
        let unit = build()?;
        Ok(slot.get_or_init(|| unit).clone())
    }
}

/// The meet of two operand systems.
pub(crate) fn combined_system(left: &Unit, right: &Unit) -> UnitResult<System> {
    left.system().meet(right.system()).ok_or_else(|| {
        debug!(
            "no common system for {} ({}) and {} ({})",
            left.symbol(),
            left.system(),
            right.symbol(),
            right.system()
        );
        UnitError::IncompatibleSystem {
            left: left.symbol().to_string(),
            right: right.symbol().to_string(),
            left_system: left.system(),
            right_system: right.system(),
        }
    })
}

pub(crate) fn concat(first: &[LeafUnit], second: &[LeafUnit]) -> Vec<LeafUnit> {
    first.iter().chain(second).cloned().collect()
}

/// Prints a composed symbol such as `kg⋅m/s2`.
///
/// Repeated leaves collapse into a trailing exponent and an empty numerator
/// prints as `1`.
pub(crate) fn compose_symbol(numerator: &[LeafUnit], denominator: &[LeafUnit]) -> String {
    fn product(leaves: &[LeafUnit]) -> String {
        let mut groups: Vec<(&str, usize)> = Vec::new();
        for leaf in leaves {
            match groups.iter_mut().find(|(symbol, _)| *symbol == leaf.symbol()) {
                Some((_, count)) => *count += 1,
                None => groups.push((leaf.symbol(), 1)),
            }
        }
        groups
            .into_iter()
            .map(|(symbol, count)| {
                if count == 1 {
                    symbol.to_string()
                } else {
                    format!("{symbol}{count}")
                }
            })
            .collect::<Vec<_>>()
            .join("⋅")
    }

    match (numerator.is_empty(), denominator.is_empty()) {
        (true, true) => "1".to_string(),
        (false, true) => product(numerator),
        (true, false) => format!("1/{}", product(denominator)),
        (false, false) => format!("{}/{}", product(numerator), product(denominator)),
    }
}

/// Takes the reciprocal of an intermediate value, refusing zero.
pub(crate) fn invert_value(unit: &str, value: f64) -> UnitResult<f64> {
    if value == 0.0 {
        debug!("reciprocal of zero requested in {unit}");
        return Err(UnitError::NumericDomainError {
            unit: unit.to_string(),
            value,
        });
    }
    Ok(1.0 / value)
}
