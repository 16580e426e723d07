//! Leaf units for the algebra's own tests.
//!
//! The real catalogue lives in `measura-catalogue`, which depends on this
//! crate. These stand-ins rely on the default delta conversions.

use crate::quantity::DefinedQuantity;
use crate::system::System;
use crate::unit::{DefinedUnit, Unit};

#[derive(Debug)]
pub(crate) struct TestUnit {
    symbol: &'static str,
    system: System,
    quantity: DefinedQuantity,
    factor: f64,
    offset: f64,
}

impl DefinedUnit for TestUnit {
    fn symbol(&self) -> &str {
        self.symbol
    }

    fn system(&self) -> System {
        self.system
    }

    fn quantity(&self) -> DefinedQuantity {
        self.quantity
    }

    fn to_si(&self, value: f64) -> f64 {
        value * self.factor + self.offset
    }

    fn from_si(&self, value: f64) -> f64 {
        (value - self.offset) / self.factor
    }
}

fn affine(
    symbol: &'static str,
    system: System,
    quantity: DefinedQuantity,
    factor: f64,
    offset: f64,
) -> Unit {
    Unit::defined(TestUnit {
        symbol,
        system,
        quantity,
        factor,
        offset,
    })
}

fn linear(symbol: &'static str, system: System, quantity: DefinedQuantity, factor: f64) -> Unit {
    affine(symbol, system, quantity, factor, 0.0)
}

pub(crate) fn meter() -> Unit {
    linear("m", System::Metric, DefinedQuantity::Length, 1.0)
}

pub(crate) fn kilometer() -> Unit {
    linear("km", System::Metric, DefinedQuantity::Length, 1000.0)
}

pub(crate) fn foot() -> Unit {
    linear("ft", System::Imperial, DefinedQuantity::Length, 0.3048)
}

pub(crate) fn yard() -> Unit {
    linear("yd", System::Imperial, DefinedQuantity::Length, 0.9144)
}

pub(crate) fn kilogram() -> Unit {
    linear("kg", System::Metric, DefinedQuantity::Weight, 1.0)
}

pub(crate) fn second() -> Unit {
    linear("s", System::MetricAndImperial, DefinedQuantity::Time, 1.0)
}

pub(crate) fn minute() -> Unit {
    linear("min", System::MetricAndImperial, DefinedQuantity::Time, 60.0)
}

pub(crate) fn hour() -> Unit {
    linear("h", System::MetricAndImperial, DefinedQuantity::Time, 3600.0)
}

pub(crate) fn watt() -> Unit {
    linear("W", System::Metric, DefinedQuantity::Power, 1.0)
}

pub(crate) fn kilowatt() -> Unit {
    linear("kW", System::Metric, DefinedQuantity::Power, 1000.0)
}

pub(crate) fn joule() -> Unit {
    linear("J", System::Metric, DefinedQuantity::Energy, 1.0)
}

pub(crate) fn newton() -> Unit {
    linear("N", System::Metric, DefinedQuantity::Force, 1.0)
}

pub(crate) fn pound_force() -> Unit {
    linear(
        "lbf",
        System::Imperial,
        DefinedQuantity::Force,
        4.4482216152605,
    )
}

pub(crate) fn pascal() -> Unit {
    linear("Pa", System::Metric, DefinedQuantity::Pressure, 1.0)
}

pub(crate) fn square_meter() -> Unit {
    linear("m²", System::Metric, DefinedQuantity::Area, 1.0)
}

pub(crate) fn square_inch() -> Unit {
    linear("in²", System::Imperial, DefinedQuantity::Area, 0.00064516)
}

pub(crate) fn kelvin() -> Unit {
    linear("K", System::Metric, DefinedQuantity::Temperature, 1.0)
}

pub(crate) fn celsius() -> Unit {
    affine(
        "°C",
        System::Metric,
        DefinedQuantity::Temperature,
        1.0,
        273.15,
    )
}

pub(crate) fn fahrenheit() -> Unit {
    affine(
        "°F",
        System::Imperial,
        DefinedQuantity::Temperature,
        5.0 / 9.0,
        459.67 * 5.0 / 9.0,
    )
}
