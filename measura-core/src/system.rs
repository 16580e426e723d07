//! The measurement-system lattice.
//!
//! Every system is a non-empty set of three atoms: metric, UK imperial and
//! US customary. `Imperial` is the set of units shared by the UK and US
//! systems, and the `MetricAnd*` tags are unions with the metric system.
//!
//! ```text
//!              MetricAndImperial
//!             /        |        \
//!   MetricAndUk    Imperial    MetricAndUs
//!     |      \    /        \    /      |
//!     |       UkImperial   UsCustomary |
//!      \_____________ Metric _________/
//! ```
//!
//! A unit can be narrowed to any system it [includes](System::includes), and
//! a composite takes the [meet](System::meet) of its operands.

use serde::{Deserialize, Serialize};
use std::fmt;

const METRIC: u8 = 0b001;
const UK: u8 = 0b010;
const US: u8 = 0b100;

/// A measurement-system tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum System {
    Metric,
    Imperial,
    UkImperial,
    UsCustomary,
    MetricAndUkImperial,
    MetricAndImperial,
    MetricAndUsCustomary,
}

impl System {
    /// All systems, in index order.
    pub const ALL: [System; 7] = [
        System::Metric,
        System::Imperial,
        System::UkImperial,
        System::UsCustomary,
        System::MetricAndUkImperial,
        System::MetricAndImperial,
        System::MetricAndUsCustomary,
    ];

    const fn atoms(self) -> u8 {
        match self {
            System::Metric => METRIC,
            System::Imperial => UK | US,
            System::UkImperial => UK,
            System::UsCustomary => US,
            System::MetricAndUkImperial => METRIC | UK,
            System::MetricAndImperial => METRIC | UK | US,
            System::MetricAndUsCustomary => METRIC | US,
        }
    }

    const fn from_atoms(atoms: u8) -> Option<System> {
        match atoms {
            METRIC => Some(System::Metric),
            UK => Some(System::UkImperial),
            US => Some(System::UsCustomary),
            0b110 => Some(System::Imperial),
            0b011 => Some(System::MetricAndUkImperial),
            0b101 => Some(System::MetricAndUsCustomary),
            0b111 => Some(System::MetricAndImperial),
            _ => None,
        }
    }

    /// Position of this system in [`System::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            System::Metric => 0,
            System::Imperial => 1,
            System::UkImperial => 2,
            System::UsCustomary => 3,
            System::MetricAndUkImperial => 4,
            System::MetricAndImperial => 5,
            System::MetricAndUsCustomary => 6,
        }
    }

    /// Returns true if a unit in this system may be narrowed to `other`.
    ///
    /// Every system includes itself.
    #[must_use]
    pub const fn includes(self, other: System) -> bool {
        other.atoms() & !self.atoms() == 0
    }

    /// The largest system included by both `self` and `other`, if any.
    ///
    /// ```
    /// use measura_core::System;
    ///
    /// assert_eq!(
    ///     System::MetricAndUkImperial.meet(System::Imperial),
    ///     Some(System::UkImperial)
    /// );
    /// assert_eq!(System::Metric.meet(System::UsCustomary), None);
    /// ```
    #[must_use]
    pub const fn meet(self, other: System) -> Option<System> {
        System::from_atoms(self.atoms() & other.atoms())
    }

    /// The systems this one can be narrowed to, excluding itself.
    pub fn narrowings(self) -> impl Iterator<Item = System> {
        System::ALL
            .into_iter()
            .filter(move |other| *other != self && self.includes(*other))
    }

    /// Returns true if the system contains metric units.
    #[must_use]
    pub const fn is_metric(self) -> bool {
        self.atoms() & METRIC != 0
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            System::Metric => "Metric",
            System::Imperial => "Imperial",
            System::UkImperial => "UK Imperial",
            System::UsCustomary => "US Customary",
            System::MetricAndUkImperial => "Metric and UK Imperial",
            System::MetricAndImperial => "Metric and Imperial",
            System::MetricAndUsCustomary => "Metric and US Customary",
        };
        write!(f, "{name}")
    }
}
