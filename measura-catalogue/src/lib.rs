//! Predefined leaf units for measura.
//!
//! Each unit is a static [`Unit`](measura_core::Unit) that can be composed
//! and converted directly:
//!
//! ```
//! use measura_catalogue::units::{Kilowatt, Hour, Joule};
//! use measura_core::convert;
//!
//! let kwh = Kilowatt.times(&Hour).unwrap();
//! assert_eq!(convert(1.0, &kwh, &Joule).unwrap(), 3_600_000.0);
//! ```
//!
//! # Module Structure
//!
//! - [`defined`]: [`ScaledUnit`] and the declaration macros
//! - [`prefix`]: the [`Prefixed`] metric-prefix decorator
//! - [`units`]: the units, one module per quantity
//! - [`registry`]: symbol lookup over every predefined unit

pub mod defined;
pub mod prefix;
pub mod registry;
pub mod units;

pub use defined::ScaledUnit;
pub use prefix::{MetricPrefix, Prefixed};
pub use registry::{UnitCatalogue, UNIT_CATALOGUE};
