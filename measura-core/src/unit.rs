//! The unit contract and the [`Unit`] handle.
//!
//! Two traits describe units:
//!
//! - [`DefinedUnit`] is implemented by leaf units from a catalogue. Their
//!   conversions are plain functions of `f64` and cannot fail.
//! - [`MeasurementUnit`] is the full contract shared by leaves and
//!   composites. Conversions return [`UnitResult`] because a reciprocal can
//!   hit zero.
//!
//! [`Unit`] is a cheap-to-clone handle over either kind. It is the type the
//! composition operators and the conversion facade work with.

use crate::composite::{DividedUnit, ExtendedUnit, MultipliedUnit, ReciprocalUnit};
use crate::dispatch;
use crate::errors::{UnitError, UnitResult};
use crate::quantity::{DefinedQuantity, Quantity};
use crate::system::System;
use log::debug;
use std::fmt;
use std::sync::Arc;

/// A unit from the closed catalogue, with a fixed SI conversion.
///
/// `to_si`/`from_si` convert absolute values. The delta variants convert
/// differences and default to the difference of two absolute conversions,
/// which is exact for linear units. Affine units (temperature scales)
/// should override them.
pub trait DefinedUnit: fmt::Debug + Send + Sync {
    fn symbol(&self) -> &str;

    fn system(&self) -> System;

    fn quantity(&self) -> DefinedQuantity;

    fn to_si(&self, value: f64) -> f64;

    fn from_si(&self, value: f64) -> f64;

    fn delta_to_si(&self, delta: f64) -> f64 {
        self.to_si(delta) - self.to_si(0.0)
    }

    fn delta_from_si(&self, delta: f64) -> f64 {
        self.from_si(delta) - self.from_si(0.0)
    }
}

/// A shared leaf unit.
pub type LeafUnit = Arc<dyn DefinedUnit>;

/// The contract every unit satisfies, leaf or composite.
pub trait MeasurementUnit {
    fn symbol(&self) -> &str;

    fn system(&self) -> System;

    fn quantity(&self) -> Quantity;

    fn to_si(&self, value: f64) -> UnitResult<f64>;

    fn from_si(&self, value: f64) -> UnitResult<f64>;

    fn delta_to_si(&self, delta: f64) -> UnitResult<f64>;

    fn delta_from_si(&self, delta: f64) -> UnitResult<f64>;
}

/// Returns true if two leaves are the same unit.
pub(crate) fn same_leaf(a: &LeafUnit, b: &LeafUnit) -> bool {
    Arc::ptr_eq(a, b)
        || (a.symbol() == b.symbol() && a.system() == b.system() && a.quantity() == b.quantity())
}

/// A leaf unit re-tagged with a narrower system.
///
/// Conversions are unchanged: an imperial pound-force is the same force
/// whether it is read as UK imperial or US customary.
#[derive(Debug)]
pub struct NarrowedUnit {
    inner: LeafUnit,
    system: System,
}

impl NarrowedUnit {
    pub fn new(inner: LeafUnit, system: System) -> UnitResult<Self> {
        if !inner.system().includes(system) {
            return Err(UnitError::UnsupportedSystemNarrowing {
                unit: inner.symbol().to_string(),
                from: inner.system(),
                to: system,
            });
        }
        Ok(Self { inner, system })
    }

    pub fn inner(&self) -> &LeafUnit {
        &self.inner
    }
}

impl DefinedUnit for NarrowedUnit {
    fn symbol(&self) -> &str {
        self.inner.symbol()
    }

    fn system(&self) -> System {
        self.system
    }

    fn quantity(&self) -> DefinedQuantity {
        self.inner.quantity()
    }

    fn to_si(&self, value: f64) -> f64 {
        self.inner.to_si(value)
    }

    fn from_si(&self, value: f64) -> f64 {
        self.inner.from_si(value)
    }

    fn delta_to_si(&self, delta: f64) -> f64 {
        self.inner.delta_to_si(delta)
    }

    fn delta_from_si(&self, delta: f64) -> f64 {
        self.inner.delta_from_si(delta)
    }
}

/// The shape of a unit as seen by the composition operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A leaf unit that has not been lifted into the algebra.
    Defined,
    /// An extended leaf or a product.
    Plain,
    Reciprocal,
    Divided,
}

/// A leaf or composite unit.
///
/// Cloning is cheap: every variant is reference counted and immutable.
///
/// ```
/// use measura_core::{DefinedQuantity, DefinedUnit, MeasurementUnit, System, Unit};
///
/// #[derive(Debug)]
/// struct Meter;
///
/// impl DefinedUnit for Meter {
///     fn symbol(&self) -> &str { "m" }
///     fn system(&self) -> System { System::Metric }
///     fn quantity(&self) -> DefinedQuantity { DefinedQuantity::Length }
///     fn to_si(&self, value: f64) -> f64 { value }
///     fn from_si(&self, value: f64) -> f64 { value }
/// }
///
/// let meter = Unit::defined(Meter);
/// let per_meter = meter.reciprocal();
/// assert_eq!(per_meter.symbol(), "1/m");
/// ```
#[derive(Clone)]
pub enum Unit {
    Defined(LeafUnit),
    Extended(Arc<ExtendedUnit>),
    Multiplied(Arc<MultipliedUnit>),
    Divided(Arc<DividedUnit>),
    Reciprocal(Arc<ReciprocalUnit>),
}

impl Unit {
    /// Wraps a catalogue leaf.
    pub fn defined<U: DefinedUnit + 'static>(unit: U) -> Self {
        Unit::Defined(Arc::new(unit))
    }

    pub fn shape(&self) -> Shape {
        match self {
            Unit::Defined(_) => Shape::Defined,
            Unit::Extended(_) | Unit::Multiplied(_) => Shape::Plain,
            Unit::Reciprocal(_) => Shape::Reciprocal,
            Unit::Divided(_) => Shape::Divided,
        }
    }

    /// The leaf behind a `Defined` unit.
    pub fn as_defined(&self) -> Option<&LeafUnit> {
        match self {
            Unit::Defined(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// Returns true if this unit is a leaf that has not been composed.
    pub fn is_defined(&self) -> bool {
        matches!(self, Unit::Defined(_))
    }

    /// Lifts a leaf into the composition algebra. Composites are returned as is.
    pub fn as_undefined(&self) -> Unit {
        dispatch::lift(self)
    }

    /// Divides this unit by `denominator`.
    pub fn per(&self, denominator: &Unit) -> UnitResult<Unit> {
        dispatch::per(self, denominator)
    }

    /// Multiplies this unit by `right`.
    pub fn times(&self, right: &Unit) -> UnitResult<Unit> {
        dispatch::times(self, right)
    }

    pub fn reciprocal(&self) -> Unit {
        dispatch::reciprocal(self)
    }

    /// Leaves contributing to the numerator, in order.
    pub fn numerator_units(&self) -> &[LeafUnit] {
        match self {
            Unit::Defined(leaf) => std::slice::from_ref(leaf),
            Unit::Extended(unit) => unit.numerator_units(),
            Unit::Multiplied(unit) => unit.numerator_units(),
            Unit::Divided(unit) => unit.numerator_units(),
            Unit::Reciprocal(unit) => unit.numerator_units(),
        }
    }

    /// Leaves contributing to the denominator, in order.
    pub fn denominator_units(&self) -> &[LeafUnit] {
        match self {
            Unit::Defined(_) => &[],
            Unit::Extended(unit) => unit.denominator_units(),
            Unit::Multiplied(unit) => unit.denominator_units(),
            Unit::Divided(unit) => unit.denominator_units(),
            Unit::Reciprocal(unit) => unit.denominator_units(),
        }
    }

    /// Returns true if both units are built from the same leaves, ignoring
    /// how the products and fractions are grouped.
    pub fn has_same_composition(&self, other: &Unit) -> bool {
        fn sorted(leaves: &[LeafUnit]) -> Vec<(&str, System)> {
            let mut keys: Vec<_> = leaves.iter().map(|l| (l.symbol(), l.system())).collect();
            keys.sort_by(|a, b| a.0.cmp(b.0).then(a.1.index().cmp(&b.1.index())));
            keys
        }

        sorted(self.numerator_units()) == sorted(other.numerator_units())
            && sorted(self.denominator_units()) == sorted(other.denominator_units())
    }

    /// Returns true if values can be converted between the two units.
    pub fn is_convertible(&self, other: &Unit) -> bool {
        self.quantity().is_equivalent(&other.quantity())
    }

    /// Converts `value` from this unit to `other`.
    pub fn convert_to(&self, value: f64, other: &Unit) -> UnitResult<f64> {
        crate::conversion::convert(value, self, other)
    }

    /// Re-expresses this unit in a narrower measurement system.
    ///
    /// Narrowing a composite narrows both operands. Narrowing to the unit's
    /// own system returns the unit itself.
    pub fn narrow(&self, system: System) -> UnitResult<Unit> {
        let current = self.system();
        if !current.includes(system) {
            debug!("cannot narrow {} from {current} to {system}", self.symbol());
            return Err(UnitError::UnsupportedSystemNarrowing {
                unit: self.symbol().to_string(),
                from: current,
                to: system,
            });
        }
        if current == system {
            return Ok(self.clone());
        }
        match self {
            Unit::Defined(leaf) => Ok(Unit::defined(NarrowedUnit::new(leaf.clone(), system)?)),
            Unit::Extended(unit) => unit.narrowed(system),
            Unit::Multiplied(unit) => unit.narrowed(system),
            Unit::Divided(unit) => unit.narrowed(system),
            Unit::Reciprocal(unit) => unit.narrowed(system),
        }
    }

    pub fn metric(&self) -> UnitResult<Unit> {
        self.narrow(System::Metric)
    }

    pub fn imperial(&self) -> UnitResult<Unit> {
        self.narrow(System::Imperial)
    }

    pub fn uk_imperial(&self) -> UnitResult<Unit> {
        self.narrow(System::UkImperial)
    }

    pub fn us_customary(&self) -> UnitResult<Unit> {
        self.narrow(System::UsCustomary)
    }

    pub fn metric_and_uk_imperial(&self) -> UnitResult<Unit> {
        self.narrow(System::MetricAndUkImperial)
    }

    pub fn metric_and_us_customary(&self) -> UnitResult<Unit> {
        self.narrow(System::MetricAndUsCustomary)
    }

    pub fn metric_and_imperial(&self) -> UnitResult<Unit> {
        self.narrow(System::MetricAndImperial)
    }

    fn as_measurement_unit(&self) -> &dyn MeasurementUnit {
        match self {
            Unit::Defined(_) => self,
            Unit::Extended(unit) => unit.as_ref(),
            Unit::Multiplied(unit) => unit.as_ref(),
            Unit::Divided(unit) => unit.as_ref(),
            Unit::Reciprocal(unit) => unit.as_ref(),
        }
    }
}

impl MeasurementUnit for Unit {
    fn symbol(&self) -> &str {
        match self {
            Unit::Defined(leaf) => leaf.symbol(),
            _ => self.as_measurement_unit().symbol(),
        }
    }

    fn system(&self) -> System {
        match self {
            Unit::Defined(leaf) => leaf.system(),
            _ => self.as_measurement_unit().system(),
        }
    }

    fn quantity(&self) -> Quantity {
        match self {
            Unit::Defined(leaf) => Quantity::Base(leaf.quantity()),
            _ => self.as_measurement_unit().quantity(),
        }
    }

    fn to_si(&self, value: f64) -> UnitResult<f64> {
        match self {
            Unit::Defined(leaf) => Ok(leaf.to_si(value)),
            _ => self.as_measurement_unit().to_si(value),
        }
    }

    fn from_si(&self, value: f64) -> UnitResult<f64> {
        match self {
            Unit::Defined(leaf) => Ok(leaf.from_si(value)),
            _ => self.as_measurement_unit().from_si(value),
        }
    }

    fn delta_to_si(&self, delta: f64) -> UnitResult<f64> {
        match self {
            Unit::Defined(leaf) => Ok(leaf.delta_to_si(delta)),
            _ => self.as_measurement_unit().delta_to_si(delta),
        }
    }

    fn delta_from_si(&self, delta: f64) -> UnitResult<f64> {
        match self {
            Unit::Defined(leaf) => Ok(leaf.delta_from_si(delta)),
            _ => self.as_measurement_unit().delta_from_si(delta),
        }
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Unit::Defined(a), Unit::Defined(b)) => same_leaf(a, b),
            (Unit::Extended(a), Unit::Extended(b)) => Arc::ptr_eq(a, b) || a == b,
            (Unit::Multiplied(a), Unit::Multiplied(b)) => Arc::ptr_eq(a, b) || a == b,
            (Unit::Divided(a), Unit::Divided(b)) => Arc::ptr_eq(a, b) || a == b,
            (Unit::Reciprocal(a), Unit::Reciprocal(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("symbol", &self.symbol())
            .field("shape", &self.shape())
            .field("system", &self.system())
            .finish()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
