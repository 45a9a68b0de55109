use std::collections::HashMap;

use tickerboard_market_data::TimeSeries;

/// Re-index `source` onto `target_labels`.
///
/// The result has exactly one slot per target label, in target order. A slot
/// holds the source value for that label, or `None` when the source has no
/// bar there (or has a null close for it). `None` is the only gap marker; gaps
/// are never filled with zero.
pub fn align<S: AsRef<str>>(target_labels: &[S], source: &TimeSeries) -> Vec<Option<f64>> {
    let mut lookup: HashMap<&str, Option<f64>> = HashMap::with_capacity(source.len());
    for point in source.points() {
        lookup.insert(point.label.as_str(), point.value);
    }

    target_labels
        .iter()
        .map(|label| lookup.get(label.as_ref()).copied().flatten())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(days: &[&str]) -> Vec<String> {
        days.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_fills_missing_label_with_gap() {
        let target = labels(&["2025-01-01", "2025-01-02", "2025-01-03"]);
        let source = TimeSeries::from_pairs(["2025-01-01", "2025-01-03"], [Some(10.0), Some(12.0)]);

        assert_eq!(align(&target, &source), vec![Some(10.0), None, Some(12.0)]);
    }

    #[test]
    fn test_empty_target() {
        let source = TimeSeries::from_pairs(["2025-01-01"], [Some(1.0)]);
        let target: Vec<String> = Vec::new();
        assert!(align(&target, &source).is_empty());
    }

    #[test]
    fn test_empty_source() {
        let target = labels(&["2025-01-01", "2025-01-02"]);
        assert_eq!(align(&target, &TimeSeries::default()), vec![None, None]);
    }

    #[test]
    fn test_extra_source_labels_ignored() {
        let target = ["2025-01-02"];
        let source = TimeSeries::from_pairs(
            ["2024-12-31", "2025-01-02", "2025-01-06"],
            [Some(1.0), Some(2.0), Some(3.0)],
        );
        assert_eq!(align(&target, &source), vec![Some(2.0)]);
    }

    #[test]
    fn test_null_source_value_stays_gap() {
        let target = ["2025-01-01", "2025-01-02"];
        let source = TimeSeries::from_pairs(["2025-01-01", "2025-01-02"], [None, Some(5.0)]);
        assert_eq!(align(&target, &source), vec![None, Some(5.0)]);
    }

    #[test]
    fn test_inputs_untouched() {
        let target = labels(&["2025-01-02", "2025-01-01"]);
        let source = TimeSeries::from_pairs(["2025-01-01", "2025-01-02"], [Some(1.0), Some(2.0)]);
        let before = source.clone();

        // Target order is kept even when it is not ascending.
        assert_eq!(align(&target, &source), vec![Some(2.0), Some(1.0)]);
        assert_eq!(source, before);
        assert_eq!(target, labels(&["2025-01-02", "2025-01-01"]));
    }
}
