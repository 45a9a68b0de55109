use crate::errors::SeriesError;

/// Value every indexed series starts at.
pub const INDEX_BASE: f64 = 100.0;

/// Rescale `series` so its first element becomes 100.
///
/// `out[i] = series[i] / series[0] * 100`.
pub fn normalize(series: &[f64]) -> Result<Vec<f64>, SeriesError> {
    let base = *series.first().ok_or(SeriesError::EmptyInput)?;
    if base == 0.0 {
        return Err(SeriesError::DivisionByZero);
    }
    Ok(series.iter().map(|v| v / base * INDEX_BASE).collect())
}

/// Rescale a series that may contain gaps.
///
/// The base is the first present value; gaps stay gaps. Fails with
/// `EmptyInput` when no value is present at all.
pub fn normalize_gapped(series: &[Option<f64>]) -> Result<Vec<Option<f64>>, SeriesError> {
    let base = series
        .iter()
        .find_map(|v| *v)
        .ok_or(SeriesError::EmptyInput)?;
    if base == 0.0 {
        return Err(SeriesError::DivisionByZero);
    }
    Ok(series
        .iter()
        .map(|v| v.map(|v| v / base * INDEX_BASE))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scenario() {
        assert_eq!(normalize(&[50.0, 75.0, 100.0]).unwrap(), vec![100.0, 150.0, 200.0]);
    }

    #[test]
    fn test_normalize_single_value() {
        assert_eq!(normalize(&[42.0]).unwrap(), vec![100.0]);
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(&[]), Err(SeriesError::EmptyInput));
    }

    #[test]
    fn test_normalize_zero_base() {
        assert_eq!(normalize(&[0.0, 5.0]), Err(SeriesError::DivisionByZero));
    }

    #[test]
    fn test_normalize_negative_base_keeps_direction_of_ratio() {
        assert_eq!(normalize(&[-2.0, -4.0]).unwrap(), vec![100.0, 200.0]);
    }

    #[test]
    fn test_gapped_uses_first_present_value() {
        let out = normalize_gapped(&[None, Some(50.0), None, Some(100.0)]).unwrap();
        assert_eq!(out, vec![None, Some(100.0), None, Some(200.0)]);
    }

    #[test]
    fn test_gapped_all_gaps() {
        assert_eq!(normalize_gapped(&[None, None]), Err(SeriesError::EmptyInput));
        assert_eq!(normalize_gapped(&[]), Err(SeriesError::EmptyInput));
    }

    #[test]
    fn test_gapped_zero_base() {
        assert_eq!(
            normalize_gapped(&[None, Some(0.0), Some(3.0)]),
            Err(SeriesError::DivisionByZero)
        );
    }
}
