//! The rewrite table behind `per`, `times` and `reciprocal`.
//!
//! Leaf operands are first lifted into the algebra with [`lift`]. What is
//! left has one of three shapes:
//!
//! - *plain*: an extended leaf or a product
//! - *reciprocal*: `1/R`
//! - *divided*: `N/D`
//!
//! Every pairing of shapes maps to exactly one rule, and every rule produces
//! a plain, reciprocal or divided unit again. Products never contain a
//! fraction at the top level, and fractions never nest at the top level.
//!
//! # Division
//!
//! | numerator \ denominator | plain `d` | `1/R` | `Dn/Dd` |
//! |---|---|---|---|
//! | plain `n` | `n/d` | `n⋅R` | `(n × Dd)/Dn` |
//! | `1/L` | `1/(L × d)` | `R/L` | `Dd per (L × Dn)` |
//! | `Nn/Nd` | `Nn/(Nd × d)` | `(Nn × R)/Nd` | `(Nn × Dd)/(Nd × Dn)` |
//!
//! # Multiplication
//!
//! | left \ right | plain `r` | `1/R` | `Dn/Dd` |
//! |---|---|---|---|
//! | plain `l` | `l⋅r` | `l/R` | `(l × Dn)/Dd` |
//! | `1/L` | `r/L` | `1/(L × R)` | `Dn/(L × Dd)` |
//! | `Nn/Nd` | `(Nn × r)/Nd` | `Nn/(Nd × R)` | `(Nn × Dn)/(Nd × Dd)` |

use crate::composite::{DividedUnit, ExtendedUnit, MultipliedUnit, ReciprocalUnit};
use crate::errors::UnitResult;
use crate::unit::{MeasurementUnit, Unit};
use log::trace;
use std::sync::Arc;

/// An operand after lifting.
enum Operand {
    Plain(Unit),
    Reciprocal(Unit),
    Divided(Unit, Unit),
}

impl Operand {
    fn of(unit: &Unit) -> Self {
        match unit {
            Unit::Defined(_) => Operand::Plain(lift(unit)),
            Unit::Extended(_) | Unit::Multiplied(_) => Operand::Plain(unit.clone()),
            Unit::Reciprocal(reciprocal) => Operand::Reciprocal(reciprocal.inverse().clone()),
            Unit::Divided(divided) => Operand::Divided(
                divided.numerator().clone(),
                divided.denominator().clone(),
            ),
        }
    }
}

fn divided(numerator: Unit, denominator: Unit) -> UnitResult<Unit> {
    Ok(Unit::Divided(Arc::new(DividedUnit::new(
        numerator,
        denominator,
    )?)))
}

fn multiplied(left: Unit, right: Unit) -> UnitResult<Unit> {
    Ok(Unit::Multiplied(Arc::new(MultipliedUnit::new(left, right)?)))
}

/// Lifts a leaf into the algebra by wrapping it in an [`ExtendedUnit`].
///
/// Composites are already part of the algebra and are returned unchanged.
pub fn lift(unit: &Unit) -> Unit {
    match unit {
        Unit::Defined(leaf) => Unit::Extended(Arc::new(ExtendedUnit::new(leaf.clone()))),
        other => other.clone(),
    }
}

/// One over `unit`, in canonical shape.
///
/// The reciprocal of a reciprocal is its inverse and the reciprocal of a
/// fraction is the fraction turned upside down.
pub fn reciprocal(unit: &Unit) -> Unit {
    match unit {
        Unit::Defined(_) => Unit::Reciprocal(Arc::new(ReciprocalUnit::new(lift(unit)))),
        Unit::Extended(_) | Unit::Multiplied(_) => {
            Unit::Reciprocal(Arc::new(ReciprocalUnit::new(unit.clone())))
        }
        Unit::Reciprocal(reciprocal) => reciprocal.inverse().clone(),
        Unit::Divided(divided) => Unit::Divided(Arc::new(divided.inverted())),
    }
}

/// Divides `numerator` by `denominator`.
///
/// Fails with `IncompatibleSystem` if the operands share no measurement
/// system.
pub fn per(numerator: &Unit, denominator: &Unit) -> UnitResult<Unit> {
    let result = match (Operand::of(numerator), Operand::of(denominator)) {
        (Operand::Plain(n), Operand::Plain(d)) => divided(n, d),
        (Operand::Plain(n), Operand::Reciprocal(r)) => multiplied(n, r),
        (Operand::Plain(n), Operand::Divided(dn, dd)) => divided(times(&n, &dd)?, dn),
        (Operand::Reciprocal(l), Operand::Plain(d)) => Ok(reciprocal(&times(&l, &d)?)),
        (Operand::Reciprocal(l), Operand::Reciprocal(r)) => divided(r, l),
        (Operand::Reciprocal(l), Operand::Divided(dn, dd)) => per(&dd, &times(&l, &dn)?),
        (Operand::Divided(nn, nd), Operand::Plain(d)) => divided(nn, times(&nd, &d)?),
        (Operand::Divided(nn, nd), Operand::Reciprocal(r)) => divided(times(&nn, &r)?, nd),
        (Operand::Divided(nn, nd), Operand::Divided(dn, dd)) => {
            divided(times(&nn, &dd)?, times(&nd, &dn)?)
        }
    }?;
    trace!(
        "{} per {} ({:?} by {:?}) -> {} ({:?})",
        numerator.symbol(),
        denominator.symbol(),
        numerator.shape(),
        denominator.shape(),
        result.symbol(),
        result.shape()
    );
    Ok(result)
}

/// Multiplies `left` by `right`.
///
/// Fails with `IncompatibleSystem` if the operands share no measurement
/// system.
pub fn times(left: &Unit, right: &Unit) -> UnitResult<Unit> {
    let result = match (Operand::of(left), Operand::of(right)) {
        (Operand::Plain(l), Operand::Plain(r)) => multiplied(l, r),
        (Operand::Plain(l), Operand::Reciprocal(r)) => divided(l, r),
        (Operand::Plain(l), Operand::Divided(dn, dd)) => divided(times(&l, &dn)?, dd),
        (Operand::Reciprocal(l), Operand::Plain(r)) => divided(r, l),
        (Operand::Reciprocal(l), Operand::Reciprocal(r)) => Ok(reciprocal(&times(&l, &r)?)),
        (Operand::Reciprocal(l), Operand::Divided(dn, dd)) => divided(dn, times(&l, &dd)?),
        (Operand::Divided(nn, nd), Operand::Plain(r)) => divided(times(&nn, &r)?, nd),
        (Operand::Divided(nn, nd), Operand::Reciprocal(r)) => divided(nn, times(&nd, &r)?),
        (Operand::Divided(nn, nd), Operand::Divided(dn, dd)) => {
            divided(times(&nn, &dn)?, times(&nd, &dd)?)
        }
    }?;
    trace!(
        "{} times {} ({:?} by {:?}) -> {} ({:?})",
        left.symbol(),
        right.symbol(),
        left.shape(),
        right.shape(),
        result.symbol(),
        result.shape()
    );
    Ok(result)
}
