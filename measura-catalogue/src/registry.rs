//! Catalogue of the predefined units.
//!
//! Units are looked up by their exact symbol. There is no parsing: `km/h`
//! finds the [`KilometerPerHour`](crate::units::KilometerPerHour) leaf, and a
//! composite such as kilometres per hour built from two leaves has to be
//! composed with [`Unit::per`].

use crate::defined::{DefinedQuantity, System, Unit};
use crate::units::*;
use log::warn;
use measura_core::MeasurementUnit;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The global unit catalogue.
pub static UNIT_CATALOGUE: LazyLock<UnitCatalogue> = LazyLock::new(UnitCatalogue::new);

/// Registry of catalogue units keyed by symbol.
#[derive(Debug)]
pub struct UnitCatalogue {
    /// Units in registration order.
    units: Vec<Unit>,
    /// Map from symbol to position in `units`.
    symbols: HashMap<String, usize>,
}

impl Default for UnitCatalogue {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitCatalogue {
    /// Creates a catalogue populated with every predefined unit.
    pub fn new() -> Self {
        let mut catalogue = Self::empty();
        catalogue.register_length_units();
        catalogue.register_area_units();
        catalogue.register_volume_units();
        catalogue.register_weight_units();
        catalogue.register_time_units();
        catalogue.register_temperature_units();
        catalogue.register_speed_units();
        catalogue.register_force_units();
        catalogue.register_pressure_units();
        catalogue.register_energy_units();
        catalogue.register_power_units();
        catalogue
    }

    /// Creates a catalogue with no units.
    pub fn empty() -> Self {
        Self {
            units: Vec::new(),
            symbols: HashMap::new(),
        }
    }

    /// Adds a unit. A unit whose symbol is already taken is ignored.
    pub fn register(&mut self, unit: &Unit) {
        let symbol = unit.symbol();
        if self.symbols.contains_key(symbol) {
            warn!("unit symbol '{symbol}' is already registered, ignoring");
            return;
        }
        self.symbols.insert(symbol.to_string(), self.units.len());
        self.units.push(unit.clone());
    }

    fn register_all(&mut self, units: &[&LazyLock<Unit>]) {
        for unit in units {
            self.register(unit);
        }
    }

    /// Looks up a unit by its exact symbol.
    pub fn lookup(&self, symbol: &str) -> Option<Unit> {
        self.symbols.get(symbol).map(|&index| self.units[index].clone())
    }

    /// All units measuring `quantity`, in registration order.
    pub fn units_of(&self, quantity: DefinedQuantity) -> Vec<Unit> {
        self.units
            .iter()
            .filter(|unit| unit.quantity().resolve() == Some(quantity))
            .cloned()
            .collect()
    }

    /// All units usable in `system`, that is, units whose own system
    /// includes it.
    pub fn in_system(&self, system: System) -> Vec<Unit> {
        self.units
            .iter()
            .filter(|unit| unit.system().includes(system))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn register_length_units(&mut self) {
        self.register_all(&[
            &Meter,
            &Kilometer,
            &Decimeter,
            &Centimeter,
            &Millimeter,
            &Micrometer,
            &Nanometer,
            &Inch,
            &Foot,
            &Yard,
            &Mile,
            &NauticalMile,
        ]);
    }

    fn register_area_units(&mut self) {
        self.register_all(&[
            &SquareMeter,
            &SquareCentimeter,
            &SquareKilometer,
            &Hectare,
            &SquareInch,
            &SquareFoot,
            &SquareYard,
            &Acre,
            &SquareMile,
        ]);
    }

    fn register_volume_units(&mut self) {
        self.register_all(&[
            &CubicMeter,
            &Liter,
            &Deciliter,
            &Centiliter,
            &Milliliter,
            &CubicInch,
            &CubicFoot,
            &UkGallon,
            &UkPint,
            &UkFluidOunce,
            &UsGallon,
            &UsPint,
            &UsFluidOunce,
        ]);
    }

    fn register_weight_units(&mut self) {
        self.register_all(&[
            &Gram,
            &Kilogram,
            &Milligram,
            &Microgram,
            &Tonne,
            &Pound,
            &Ounce,
            &Stone,
            &LongTon,
            &ShortTon,
        ]);
    }

    fn register_time_units(&mut self) {
        self.register_all(&[
            &Second,
            &Millisecond,
            &Microsecond,
            &Nanosecond,
            &Minute,
            &Hour,
            &Day,
            &Week,
        ]);
    }

    fn register_temperature_units(&mut self) {
        self.register_all(&[&Kelvin, &Celsius, &Fahrenheit, &Rankine]);
    }

    fn register_speed_units(&mut self) {
        self.register_all(&[
            &MeterPerSecond,
            &KilometerPerHour,
            &MilePerHour,
            &FootPerSecond,
            &Knot,
        ]);
    }

    fn register_force_units(&mut self) {
        self.register_all(&[&Newton, &Kilonewton, &Dyne, &KilogramForce, &PoundForce]);
    }

    fn register_pressure_units(&mut self) {
        self.register_all(&[
            &Pascal,
            &Hectopascal,
            &Kilopascal,
            &Megapascal,
            &Bar,
            &Millibar,
            &Atmosphere,
            &PoundPerSquareInch,
            &InchOfMercury,
        ]);
    }

    fn register_energy_units(&mut self) {
        self.register_all(&[
            &Joule,
            &Kilojoule,
            &Megajoule,
            &Calorie,
            &Kilocalorie,
            &WattHour,
            &KilowattHour,
            &BritishThermalUnit,
            &FootPound,
        ]);
    }

    fn register_power_units(&mut self) {
        self.register_all(&[
            &Watt,
            &Milliwatt,
            &Kilowatt,
            &Megawatt,
            &Gigawatt,
            &Horsepower,
            &MetricHorsepower,
            &BtuPerHour,
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use measura_core::convert;

    #[test]
    fn test_lookup() {
        let km = UNIT_CATALOGUE.lookup("km").unwrap();
        let m = UNIT_CATALOGUE.lookup("m").unwrap();
        assert_eq!(convert(1.0, &km, &m).unwrap(), 1000.0);
        assert_eq!(km, *Kilometer);
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(UNIT_CATALOGUE.lookup("KM").is_none());
        assert!(UNIT_CATALOGUE.lookup(" km").is_none());
        assert!(UNIT_CATALOGUE.lookup("kilometre").is_none());
    }

    #[test]
    fn test_symbols_are_unique() {
        assert_eq!(UNIT_CATALOGUE.len(), UNIT_CATALOGUE.symbols.len());
        assert!(!UNIT_CATALOGUE.is_empty());
    }

    #[test]
    fn test_duplicate_registration_is_ignored() {
        let mut catalogue = UnitCatalogue::empty();
        catalogue.register(&Meter);
        catalogue.register(&Meter);
        assert_eq!(catalogue.len(), 1);
    }

    #[test]
    fn test_units_of() {
        let temperatures = UNIT_CATALOGUE.units_of(DefinedQuantity::Temperature);
        let symbols: Vec<_> = temperatures.iter().map(|u| u.symbol()).collect();
        assert_eq!(symbols, ["K", "°C", "°F", "°R"]);
        assert!(UNIT_CATALOGUE
            .units_of(DefinedQuantity::Pressure)
            .iter()
            .any(|u| u.symbol() == "psi"));
    }

    #[test]
    fn test_in_system() {
        let uk = UNIT_CATALOGUE.in_system(System::UkImperial);
        assert!(uk.iter().any(|u| u.symbol() == "imp gal"));
        assert!(uk.iter().any(|u| u.symbol() == "ft"));
        assert!(uk.iter().any(|u| u.symbol() == "s"));
        assert!(!uk.iter().any(|u| u.symbol() == "US gal"));
        assert!(!uk.iter().any(|u| u.symbol() == "m"));
    }

    #[test]
    fn test_every_unit_round_trips() {
        for unit in UNIT_CATALOGUE.iter() {
            let value = 12.5;
            let back = unit.from_si(unit.to_si(value).unwrap()).unwrap();
            assert!(
                (back - value).abs() < 1e-9,
                "{} round trip gave {back}",
                unit.symbol()
            );
        }
    }
}
