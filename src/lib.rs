//! Composable physical units with conversion through SI.
//!
//! This crate bundles the unit algebra from [`measura_core`] with the
//! predefined units of [`measura_catalogue`], and adds bulk conversion of
//! `ndarray` arrays.
//!
//! # Quick Start
//!
//! ```
//! use measura::units::{Hour, Kilometer, Meter, Second};
//! use measura::{convert, Unit};
//!
//! // Compose units with `per` and `times`
//! let kmh: Unit = Kilometer.per(&Hour).unwrap();
//! let ms = Meter.per(&Second).unwrap();
//!
//! let speed = convert(90.0, &kmh, &ms).unwrap();
//! assert!((speed - 25.0).abs() < 1e-12);
//!
//! // Units of different quantities do not convert
//! assert!(convert(1.0, &kmh, &Meter).is_err());
//! ```
//!
//! A unit can be re-expressed in a narrower measurement system:
//!
//! ```
//! use measura::units::{PoundForce, SquareInch};
//! use measura::{MeasurementUnit, System};
//!
//! let psi = PoundForce.per(&SquareInch).unwrap();
//! assert_eq!(psi.system(), System::Imperial);
//! assert_eq!(psi.uk_imperial().unwrap().system(), System::UkImperial);
//! assert!(psi.metric().is_err());
//! ```

pub mod array;

pub use measura_catalogue::{
    defined_unit, prefixed_unit, units, MetricPrefix, Prefixed, ScaledUnit, UnitCatalogue,
    UNIT_CATALOGUE,
};
pub use measura_core::*;

pub use array::{convert_array, convert_array_with};
