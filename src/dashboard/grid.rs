//! Grids
//!
//! Row/column bundles handed to the grid widget, plus the static
//! location grid.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::columns::ColumnDefinition;
use crate::records::UserRecord;

/// Layout mode of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DomLayout {
    /// Container has a fixed size and scrolls
    Normal,
    /// Grid grows to fit all rows
    AutoHeight,
}

/// Rows and column definitions for one grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataGrid {
    pub title: String,
    pub column_defs: Vec<ColumnDefinition>,
    pub row_data: Vec<Map<String, Value>>,
    pub dom_layout: DomLayout,
}

impl DataGrid {
    pub fn row_count(&self) -> usize {
        self.row_data.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_defs.len()
    }

    /// Cell text of every row, in column order
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        self.row_data
            .iter()
            .map(|row| {
                self.column_defs
                    .iter()
                    .map(|col| {
                        row.get(&col.field)
                            .map(crate::records::display_value)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }

    /// Keep only the columns whose field is in `fields`, and drop the
    /// other keys from every row.
    pub fn select_columns(&mut self, fields: &[String]) {
        self.column_defs.retain(|c| fields.contains(&c.field));
        let kept: Vec<&str> = self.column_defs.iter().map(|c| c.field.as_str()).collect();
        for row in &mut self.row_data {
            row.retain(|key, _| kept.contains(&key.as_str()));
        }
    }
}

/// A hardcoded location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRow {
    pub city: &'static str,
    pub state: &'static str,
    pub country: &'static str,
}

pub const LOCATIONS: [LocationRow; 3] = [
    LocationRow {
        city: "New York",
        state: "NY",
        country: "USA",
    },
    LocationRow {
        city: "San Francisco",
        state: "CA",
        country: "USA",
    },
    LocationRow {
        city: "Berlin",
        state: "BE",
        country: "Germany",
    },
];

impl LocationRow {
    fn to_row(self) -> Map<String, Value> {
        let mut row = Map::new();
        row.insert("city".into(), Value::from(self.city));
        row.insert("state".into(), Value::from(self.state));
        row.insert("country".into(), Value::from(self.country));
        row
    }
}

/// The static City/State/Country grid
pub fn location_grid() -> DataGrid {
    DataGrid {
        title: "Location Grid".to_string(),
        column_defs: vec![
            ColumnDefinition::new("City", "city"),
            ColumnDefinition::new("State", "state"),
            ColumnDefinition::new("Country", "country"),
        ],
        row_data: LOCATIONS.iter().map(|l| l.to_row()).collect(),
        dom_layout: DomLayout::Normal,
    }
}

/// Full-width grid of the fetched records with inferred columns
pub fn user_grid(records: &[UserRecord]) -> DataGrid {
    DataGrid {
        title: "Raw User Table (All Keys from API)".to_string(),
        column_defs: crate::columns::infer_columns(records),
        row_data: records.iter().map(|r| r.fields().clone()).collect(),
        dom_layout: DomLayout::AutoHeight,
    }
}
