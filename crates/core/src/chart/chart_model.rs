use serde::{Deserialize, Serialize};

use crate::series::INDEX_BASE;

/// How chart values are read.
///
/// Derived from the comparison toggle, never set on its own: showing the
/// reference series switches to `Indexed` so two differently priced series
/// share one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Raw prices, ticks as currency.
    #[default]
    Absolute,
    /// Percent of the first value, ticks as change from 100.
    Indexed,
}

impl DisplayMode {
    pub fn for_comparison(comparison: bool) -> Self {
        if comparison {
            Self::Indexed
        } else {
            Self::Absolute
        }
    }

    /// Y axis tick label for `value`.
    pub fn format_tick(&self, value: f64) -> String {
        match self {
            Self::Absolute => format!("€{:.2}", value),
            Self::Indexed => format!("{:.1}%", value - INDEX_BASE),
        }
    }
}

/// Line colours of one dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStyle {
    pub border_color: String,
    pub background_color: String,
    pub tension: f64,
}

impl DatasetStyle {
    pub fn primary() -> Self {
        Self {
            border_color: "#4caf50".to_string(),
            background_color: "rgba(76,175,80,0.1)".to_string(),
            tension: 0.3,
        }
    }

    pub fn reference() -> Self {
        Self {
            border_color: "rgba(0,100,200,0.4)".to_string(),
            background_color: "rgba(0,100,200,0.1)".to_string(),
            tension: 0.3,
        }
    }
}

/// One line on the chart. `None` entries are drawn as gaps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub style: DatasetStyle,
}

impl ChartDataset {
    pub fn new(label: impl Into<String>, data: Vec<Option<f64>>, style: DatasetStyle) -> Self {
        Self {
            label: label.into(),
            data,
            style,
        }
    }
}

/// Everything a presenter needs for one redraw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub labels: Vec<String>,
    pub primary: ChartDataset,
    pub reference: Option<ChartDataset>,
    pub mode: DisplayMode,
}

impl ChartFrame {
    pub fn format_tick(&self, value: f64) -> String {
        self.mode.format_tick(value)
    }

    /// Convert to the `{labels, datasets}` document the drawing surface
    /// consumes.
    pub fn to_chart_config(&self) -> ChartConfig {
        let mut datasets = vec![ConfigDataset::from(&self.primary)];
        if let Some(reference) = &self.reference {
            datasets.push(ConfigDataset::from(reference));
        }
        ChartConfig {
            labels: self.labels.clone(),
            datasets,
        }
    }
}

/// Serialized form of a [`ChartFrame`] for the drawing surface.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
    pub labels: Vec<String>,
    pub datasets: Vec<ConfigDataset>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfigDataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    #[serde(flatten)]
    pub style: DatasetStyle,
}

impl From<&ChartDataset> for ConfigDataset {
    fn from(dataset: &ChartDataset) -> Self {
        Self {
            label: dataset.label.clone(),
            data: dataset.data.clone(),
            style: dataset.style.clone(),
        }
    }
}
