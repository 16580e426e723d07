use measura::units::{Celsius, Fahrenheit, Kilometer, Mile};
use measura::{convert_array_with, convert_rounded, convert_with, ConversionOptions, RoundingMode};
use ndarray::array;

const OPTIONS: &str = r#"
[rounding]
decimals = 1
mode = "half_up"
"#;

#[test]
fn test_options_from_toml() {
    let options = ConversionOptions::from_toml_str(OPTIONS).unwrap();
    let value = convert_with(100.0, &Kilometer, &Mile, &options).unwrap();
    assert_eq!(value, 62.1);
}

#[test]
fn test_options_deserialize_inside_larger_config() {
    #[derive(serde::Deserialize)]
    struct Settings {
        conversion: ConversionOptions,
    }

    let settings: Settings = toml::from_str(
        r#"
        [conversion.rounding]
        decimals = 0
        mode = "ceiling"
        "#,
    )
    .unwrap();
    let value = convert_with(1.0, &Kilometer, &Mile, &settings.conversion).unwrap();
    assert_eq!(value, 1.0);
}

#[test]
fn test_rounded_temperatures() {
    let value = convert_rounded(36.6, &Celsius, &Fahrenheit, 1, RoundingMode::HalfEven).unwrap();
    assert_eq!(value, 97.9);
}

#[test]
fn test_bulk_with_options() {
    let options = ConversionOptions::from_toml_str(OPTIONS).unwrap();
    let miles = convert_array_with(array![1.0, 10.0, 42.195].view(), &Kilometer, &Mile, &options)
        .unwrap();
    assert_eq!(miles, array![0.6, 6.2, 26.2]);
}
