//! Quantity trees describing what a unit measures.
//!
//! Leaf units declare a [`DefinedQuantity`] from a closed set. Composite
//! units build a [`Quantity`] tree over those: `Newton per SquareMeter`
//! measures `Dividing(Extended(Force), Extended(Area))` while `Pascal`
//! measures `Base(Pressure)`. Trees compare structurally, so conversion
//! compatibility is decided on the [normalized](Quantity::normalized) form
//! and ultimately on the [`Dimension`] each tree reduces to.

use crate::dimension::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical quantity from the closed catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefinedQuantity {
    Dimensionless,
    Length,
    Area,
    Volume,
    Weight,
    Time,
    Temperature,
    Amount,
    ElectricCurrent,
    LuminousIntensity,
    Speed,
    Acceleration,
    Force,
    Pressure,
    Energy,
    Power,
    Density,
    Frequency,
    ElectricCharge,
    Voltage,
    VolumetricFlow,
    MassFlowRate,
}

impl DefinedQuantity {
    pub const ALL: [DefinedQuantity; 22] = [
        DefinedQuantity::Dimensionless,
        DefinedQuantity::Length,
        DefinedQuantity::Area,
        DefinedQuantity::Volume,
        DefinedQuantity::Weight,
        DefinedQuantity::Time,
        DefinedQuantity::Temperature,
        DefinedQuantity::Amount,
        DefinedQuantity::ElectricCurrent,
        DefinedQuantity::LuminousIntensity,
        DefinedQuantity::Speed,
        DefinedQuantity::Acceleration,
        DefinedQuantity::Force,
        DefinedQuantity::Pressure,
        DefinedQuantity::Energy,
        DefinedQuantity::Power,
        DefinedQuantity::Density,
        DefinedQuantity::Frequency,
        DefinedQuantity::ElectricCharge,
        DefinedQuantity::Voltage,
        DefinedQuantity::VolumetricFlow,
        DefinedQuantity::MassFlowRate,
    ];

    /// The SI dimension of this quantity.
    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            DefinedQuantity::Dimensionless => Dimension::DIMENSIONLESS,
            DefinedQuantity::Length => Dimension::LENGTH,
            DefinedQuantity::Area => Dimension::new(0, 2, 0, 0, 0, 0, 0),
            DefinedQuantity::Volume => Dimension::new(0, 3, 0, 0, 0, 0, 0),
            DefinedQuantity::Weight => Dimension::MASS,
            DefinedQuantity::Time => Dimension::TIME,
            DefinedQuantity::Temperature => Dimension::TEMPERATURE,
            DefinedQuantity::Amount => Dimension::AMOUNT,
            DefinedQuantity::ElectricCurrent => Dimension::CURRENT,
            DefinedQuantity::LuminousIntensity => Dimension::LUMINOSITY,
            DefinedQuantity::Speed => Dimension::new(0, 1, -1, 0, 0, 0, 0),
            DefinedQuantity::Acceleration => Dimension::new(0, 1, -2, 0, 0, 0, 0),
            DefinedQuantity::Force => Dimension::new(1, 1, -2, 0, 0, 0, 0),
            DefinedQuantity::Pressure => Dimension::new(1, -1, -2, 0, 0, 0, 0),
            DefinedQuantity::Energy => Dimension::new(1, 2, -2, 0, 0, 0, 0),
            DefinedQuantity::Power => Dimension::new(1, 2, -3, 0, 0, 0, 0),
            DefinedQuantity::Density => Dimension::new(1, -3, 0, 0, 0, 0, 0),
            DefinedQuantity::Frequency => Dimension::new(0, 0, -1, 0, 0, 0, 0),
            DefinedQuantity::ElectricCharge => Dimension::new(0, 0, 1, 0, 0, 1, 0),
            DefinedQuantity::Voltage => Dimension::new(1, 2, -3, 0, 0, -1, 0),
            DefinedQuantity::VolumetricFlow => Dimension::new(0, 3, -1, 0, 0, 0, 0),
            DefinedQuantity::MassFlowRate => Dimension::new(1, 0, -1, 0, 0, 0, 0),
        }
    }

    /// The catalogue quantity with the given dimension, if there is one.
    pub fn from_dimension(dimension: Dimension) -> Option<DefinedQuantity> {
        DefinedQuantity::ALL
            .into_iter()
            .find(|quantity| quantity.dimension() == dimension)
    }
}

impl fmt::Display for DefinedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The quantity measured by a unit, as a tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// The quantity declared by a leaf unit.
    Base(DefinedQuantity),
    Multiplying(Box<Quantity>, Box<Quantity>),
    Dividing(Box<Quantity>, Box<Quantity>),
    Reciprocal(Box<Quantity>),
    /// A defined quantity lifted into the open algebra.
    Extended(DefinedQuantity),
}

impl Quantity {
    #[must_use]
    pub fn multiplying(left: Quantity, right: Quantity) -> Self {
        Quantity::Multiplying(Box::new(left), Box::new(right))
    }

    #[must_use]
    pub fn dividing(numerator: Quantity, denominator: Quantity) -> Self {
        Quantity::Dividing(Box::new(numerator), Box::new(denominator))
    }

    #[must_use]
    pub fn reciprocal(inner: Quantity) -> Self {
        Quantity::Reciprocal(Box::new(inner))
    }

    /// Reduces the tree to the exponents of the SI base dimensions.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        match self {
            Quantity::Base(quantity) | Quantity::Extended(quantity) => quantity.dimension(),
            Quantity::Multiplying(left, right) => left.dimension() * right.dimension(),
            Quantity::Dividing(numerator, denominator) => {
                numerator.dimension() / denominator.dimension()
            }
            Quantity::Reciprocal(inner) => inner.dimension().recip(),
        }
    }

    /// Rewrites the tree into canonical form.
    ///
    /// In canonical form `Extended` nodes are replaced by `Base`, there is at
    /// most one `Dividing` node and it is the root, and a `Reciprocal` node
    /// can only appear at the root wrapping a product or a base.
    #[must_use]
    pub fn normalized(&self) -> Quantity {
        match self {
            Quantity::Base(quantity) | Quantity::Extended(quantity) => Quantity::Base(*quantity),
            Quantity::Multiplying(left, right) => multiply(left.normalized(), right.normalized()),
            Quantity::Dividing(numerator, denominator) => {
                divide(numerator.normalized(), denominator.normalized())
            }
            Quantity::Reciprocal(inner) => invert(inner.normalized()),
        }
    }

    /// Returns true if both trees measure the same thing.
    ///
    /// Structurally equal normalized trees are always equivalent; beyond that,
    /// regrouped products and catalogue synonyms (`Force / Area` and
    /// `Pressure`) are equivalent because they share a dimension.
    #[must_use]
    pub fn is_equivalent(&self, other: &Quantity) -> bool {
        self.normalized() == other.normalized() || self.dimension() == other.dimension()
    }

    /// The catalogue quantity this tree is equivalent to, if any.
    #[must_use]
    pub fn resolve(&self) -> Option<DefinedQuantity> {
        DefinedQuantity::from_dimension(self.dimension())
    }

    fn is_composite(&self) -> bool {
        !matches!(self, Quantity::Base(_) | Quantity::Extended(_))
    }
}

fn invert(quantity: Quantity) -> Quantity {
    match quantity {
        Quantity::Reciprocal(inner) => *inner,
        Quantity::Dividing(numerator, denominator) => Quantity::Dividing(denominator, numerator),
        other => Quantity::reciprocal(other),
    }
}

fn multiply(left: Quantity, right: Quantity) -> Quantity {
    match (left, right) {
        (Quantity::Reciprocal(l), Quantity::Reciprocal(r)) => {
            invert(multiply(*l, *r))
        }
        (Quantity::Reciprocal(l), right) => divide(right, *l),
        (left, Quantity::Reciprocal(r)) => divide(left, *r),
        (Quantity::Dividing(ln, ld), Quantity::Dividing(rn, rd)) => {
            Quantity::dividing(multiply(*ln, *rn), multiply(*ld, *rd))
        }
        (Quantity::Dividing(numerator, denominator), right) => {
            Quantity::dividing(multiply(*numerator, right), *denominator)
        }
        (left, Quantity::Dividing(numerator, denominator)) => {
            Quantity::dividing(multiply(left, *numerator), *denominator)
        }
        (left, right) => Quantity::multiplying(left, right),
    }
}

fn divide(numerator: Quantity, denominator: Quantity) -> Quantity {
    match (numerator, denominator) {
        (numerator, Quantity::Reciprocal(inner)) => multiply(numerator, *inner),
        (Quantity::Reciprocal(inner), denominator) => invert(multiply(*inner, denominator)),
        (Quantity::Dividing(nn, nd), Quantity::Dividing(dn, dd)) => {
            Quantity::dividing(multiply(*nn, *dd), multiply(*nd, *dn))
        }
        (Quantity::Dividing(nn, nd), denominator) => {
            Quantity::dividing(*nn, multiply(*nd, denominator))
        }
        (numerator, Quantity::Dividing(dn, dd)) => {
            Quantity::dividing(multiply(numerator, *dd), *dn)
        }
        (numerator, denominator) => Quantity::dividing(numerator, denominator),
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn operand(f: &mut fmt::Formatter<'_>, quantity: &Quantity) -> fmt::Result {
            if quantity.is_composite() {
                write!(f, "({quantity})")
            } else {
                write!(f, "{quantity}")
            }
        }

        match self {
            Quantity::Base(quantity) | Quantity::Extended(quantity) => write!(f, "{quantity}"),
            Quantity::Multiplying(left, right) => {
                operand(f, left)?;
                write!(f, "⋅")?;
                operand(f, right)
            }
            Quantity::Dividing(numerator, denominator) => {
                operand(f, numerator)?;
                write!(f, "/")?;
                operand(f, denominator)
            }
            Quantity::Reciprocal(inner) => {
                write!(f, "1/")?;
                operand(f, inner)
            }
        }
    }
}
