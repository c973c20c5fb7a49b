//! Chart Projection
//!
//! Maps the record list into the labels and series of a line chart.
//! Points line up positionally with the records and are read with the same
//! coercion as the averages. A missing, `null` or non-numeric value becomes
//! a gap (`null`) and is left to the renderer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::records::{coerce_number, UserRecord};

/// Field used for the x-axis labels
pub const LABEL_FIELD: &str = "firstName";

/// One plotted series: (field, legend label, line color)
pub const SERIES: [(&str, &str, &str); 3] = [
    ("age", "Age", "rgba(75,192,192,1)"),
    ("height", "Height", "rgba(255,99,132,1)"),
    ("weight", "Weight", "rgba(54,162,235,1)"),
];

/// Line chart input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// A single line series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub border_color: String,
    pub fill: bool,
}

impl ChartData {
    /// Number of points on the x-axis
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Plotted value of one cell. Unlike the averages, absent and `null`
/// cells are gaps rather than zeros.
fn point(value: Option<&Value>) -> Option<f64> {
    match value {
        None | Some(Value::Null) => None,
        Some(v) => coerce_number(v),
    }
}

/// Build the age/height/weight chart for `records`
pub fn project(records: &[UserRecord]) -> ChartData {
    let labels = records.iter().map(|r| r.text(LABEL_FIELD)).collect();

    let datasets = SERIES
        .iter()
        .map(|(field, label, color)| Dataset {
            label: label.to_string(),
            data: records
                .iter()
                .map(|r| point(r.get(field)))
                .collect(),
            border_color: color.to_string(),
            fill: false,
        })
        .collect();

    ChartData { labels, datasets }
}
