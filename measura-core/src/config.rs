//! Conversion options.
//!
//! Options can be built in code or loaded from TOML:
//!
//! ```
//! use measura_core::{ConversionOptions, RoundingMode};
//!
//! let options = ConversionOptions::from_toml_str(
//!     r#"
//!     [rounding]
//!     decimals = 2
//!     mode = "half_up"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(options.apply(1.006), 1.01);
//! assert_eq!(options.rounding.unwrap().mode, RoundingMode::HalfUp);
//! ```

use crate::errors::{UnitError, UnitResult};
use crate::rounding::{round, RoundingMode};
use serde::{Deserialize, Serialize};

/// Rounding applied after a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rounding {
    /// Number of decimal places to keep.
    pub decimals: u32,
    #[serde(default)]
    pub mode: RoundingMode,
}

impl Rounding {
    pub fn new(decimals: u32, mode: RoundingMode) -> Self {
        Self { decimals, mode }
    }
}

/// Options controlling [`convert_with`](crate::conversion::convert_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Rounding of the converted value. `None` keeps full precision.
    pub rounding: Option<Rounding>,
}

impl ConversionOptions {
    /// Options that round to `decimals` places with the default mode.
    pub fn rounded(decimals: u32) -> Self {
        Self {
            rounding: Some(Rounding::new(decimals, RoundingMode::default())),
        }
    }

    pub fn from_toml_str(input: &str) -> UnitResult<Self> {
        toml::from_str(input).map_err(|e| UnitError::InvalidConfig(e.to_string()))
    }

    pub fn to_toml_string(&self) -> UnitResult<String> {
        toml::to_string(self).map_err(|e| UnitError::InvalidConfig(e.to_string()))
    }

    /// Post-processes a converted value.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        match self.rounding {
            Some(rounding) => round(value, rounding.decimals, rounding.mode),
            None => value,
        }
    }
}
