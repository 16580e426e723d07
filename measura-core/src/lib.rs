//! Composable physical units with conversion through SI.
//!
//! Leaf units come from a catalogue (see the `measura-catalogue` crate) and
//! implement [`DefinedUnit`]. They are combined with [`Unit::per`],
//! [`Unit::times`] and [`Unit::reciprocal`] into composites whose quantity,
//! system and SI conversion are derived from their operands.
//!
//! # Module Structure
//!
//! - [`dimension`]: exponent vectors over the SI base dimensions
//! - [`quantity`]: quantity trees and their normalization
//! - [`system`]: the measurement-system lattice
//! - [`unit`]: the unit contract and the [`Unit`] handle
//! - [`composite`]: divided, multiplied, reciprocal and extended units
//! - [`dispatch`]: the rewrite tables behind `per` and `times`
//! - [`conversion`]: conversion between units
//! - [`rounding`] and [`config`]: post-processing of converted values

pub mod composite;
pub mod config;
pub mod conversion;
pub mod dimension;
pub mod dispatch;
pub mod errors;
pub mod quantity;
pub mod rounding;
pub mod system;
pub mod unit;

#[cfg(test)]
mod fixtures;

pub use config::{ConversionOptions, Rounding};
pub use conversion::{
    conversion_factor, convert, convert_reciprocal, convert_rounded, convert_with,
    is_convertible,
};
pub use dimension::Dimension;
pub use errors::{UnitError, UnitResult};
pub use quantity::{DefinedQuantity, Quantity};
pub use rounding::{round, RoundingMode};
pub use system::System;
pub use unit::{DefinedUnit, LeafUnit, MeasurementUnit, NarrowedUnit, Shape, Unit};
