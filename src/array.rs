//! Bulk conversion of `ndarray` arrays.

use log::debug;
use measura_core::{convert, ConversionOptions, MeasurementUnit, Unit, UnitResult};
use ndarray::{Array1, ArrayView1};

/// Converts every element of `values` from one unit to another.
///
/// Fails on the first element that cannot be converted.
///
/// ```
/// use measura::array::convert_array;
/// use measura::units::{Kilometer, Meter};
/// use ndarray::array;
///
/// let meters = convert_array(array![1.0, 2.5].view(), &Kilometer, &Meter).unwrap();
/// assert_eq!(meters, array![1000.0, 2500.0]);
/// ```
pub fn convert_array(
    values: ArrayView1<'_, f64>,
    from: &Unit,
    to: &Unit,
) -> UnitResult<Array1<f64>> {
    convert_array_with(values, from, to, &ConversionOptions::default())
}

/// Converts every element of `values` and post-processes each result with
/// `options`.
pub fn convert_array_with(
    values: ArrayView1<'_, f64>,
    from: &Unit,
    to: &Unit,
    options: &ConversionOptions,
) -> UnitResult<Array1<f64>> {
    let converted = values
        .iter()
        .map(|&value| convert(value, from, to).map(|v| options.apply(v)))
        .collect::<UnitResult<Vec<f64>>>()
        .inspect_err(|e| {
            debug!(
                "bulk conversion from {} to {} failed: {e}",
                from.symbol(),
                to.symbol()
            )
        })?;
    Ok(Array1::from_vec(converted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;
    use measura_catalogue::units::{Celsius, Fahrenheit, Meter, Second};
    use measura_core::{RoundingMode, Rounding, UnitError};
    use ndarray::array;

    #[test]
    fn test_convert_temperatures() {
        let values = array![0.0, 100.0, -40.0];
        let converted = convert_array(values.view(), &Celsius, &Fahrenheit).unwrap();
        let expected = [32.0, 212.0, -40.0];
        for (actual, expected) in converted.iter().zip(expected) {
            assert!(is_close!(*actual, expected));
        }
    }

    #[test]
    fn test_empty_array() {
        let values = Array1::<f64>::zeros(0);
        let converted = convert_array(values.view(), &Meter, &Meter).unwrap();
        assert!(converted.is_empty());
    }

    #[test]
    fn test_incompatible_units() {
        let values = array![1.0];
        assert!(matches!(
            convert_array(values.view(), &Meter, &Second),
            Err(UnitError::IncompatibleQuantity { .. })
        ));
    }

    #[test]
    fn test_fails_on_first_error() {
        let per_second = Second.reciprocal();
        let values = array![1.0, 0.0, 2.0];
        assert!(matches!(
            convert_array(values.view(), &per_second, &per_second.metric().unwrap()),
            Err(UnitError::NumericDomainError { .. })
        ));
    }

    #[test]
    fn test_with_rounding() {
        let options = ConversionOptions {
            rounding: Some(Rounding::new(1, RoundingMode::HalfUp)),
        };
        let values = array![0.0, 37.0];
        let converted = convert_array_with(values.view(), &Celsius, &Fahrenheit, &options).unwrap();
        assert_eq!(converted, array![32.0, 98.6]);
    }

    #[test]
    fn test_strided_view() {
        let values = array![1.0, 2.0, 3.0, 4.0];
        let every_other = values.slice(ndarray::s![..;2]);
        let converted = convert_array(every_other, &Meter, &Meter).unwrap();
        assert_eq!(converted, array![1.0, 3.0]);
    }
}
