use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One bar of a series: a `YYYY-MM-DD` label and its closing value.
///
/// `value` is `None` when the upstream reported a null close for that bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: Option<f64>,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered series with unique labels, ascending.
///
/// ISO dates sort lexicographically in date order, so ordering is done on the
/// label string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<SeriesPoint>,
}

impl TimeSeries {
    /// Build a series from points in any order.
    ///
    /// When two points share a label the one that comes later in the input
    /// wins.
    pub fn from_points(points: impl IntoIterator<Item = SeriesPoint>) -> Self {
        let by_label: BTreeMap<String, Option<f64>> = points
            .into_iter()
            .map(|point| (point.label, point.value))
            .collect();
        Self {
            points: by_label
                .into_iter()
                .map(|(label, value)| SeriesPoint { label, value })
                .collect(),
        }
    }

    /// Zip parallel label and value lists. Extra entries on either side are
    /// dropped.
    pub fn from_pairs<L: Into<String>>(
        labels: impl IntoIterator<Item = L>,
        values: impl IntoIterator<Item = Option<f64>>,
    ) -> Self {
        Self::from_points(
            labels
                .into_iter()
                .zip(values)
                .map(|(label, value)| SeriesPoint::new(label, value)),
        )
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
