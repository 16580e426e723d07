//! Catalogue units, grouped by quantity.
//!
//! Every unit is a `LazyLock<Unit>` static and can be used wherever a
//! `&Unit` is expected:
//!
//! ```
//! use measura_catalogue::units::{Hour, Kilometer, Meter, Second};
//! use measura_core::convert;
//!
//! let kmh = Kilometer.per(&Hour).unwrap();
//! let ms = Meter.per(&Second).unwrap();
//! let value = convert(36.0, &kmh, &ms).unwrap();
//! assert!((value - 10.0).abs() < 1e-12);
//! ```

pub mod area;
pub mod energy;
pub mod force;
pub mod length;
pub mod power;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;
pub mod weight;

pub use area::*;
pub use energy::*;
pub use force::*;
pub use length::*;
pub use power::*;
pub use pressure::*;
pub use speed::*;
pub use temperature::*;
pub use time::*;
pub use volume::*;
pub use weight::*;
