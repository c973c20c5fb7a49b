//! Dashboard View
//!
//! Composes the aggregator, chart projector and column inferrer into the
//! fixed page layout:
//!
//! - three metric tiles (average age, height, weight)
//! - one line chart
//! - the static location grid
//! - the full-width grid of raw fetched records
//!
//! The view is rebuilt from a record snapshot on every request.

mod grid;

pub use grid::{location_grid, user_grid, DataGrid, DomLayout, LocationRow, LOCATIONS};

use serde::{Deserialize, Serialize};

use crate::aggregate::average;
use crate::chart::{project, ChartData};
use crate::records::UserRecord;
use crate::store::LoadPhase;

/// Page heading
pub const TITLE: &str = "User Table & Chart";

/// (field, tile title, unit) for each metric tile
const TILES: [(&str, &str, Option<&str>); 3] = [
    ("age", "Avg Age", None),
    ("height", "Avg Height", Some("cm")),
    ("weight", "Avg Weight", Some("kg")),
];

/// A single averaged metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTile {
    pub title: String,
    pub field: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MetricTile {
    /// Value with its unit, as shown on the tile
    pub fn display(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.to_string(),
        }
    }
}

/// The whole page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    pub phase: LoadPhase,
    pub tiles: Vec<MetricTile>,
    pub chart: ChartData,
    pub location_grid: DataGrid,
    pub user_grid: DataGrid,
}

/// Build the page for the current record list
pub fn build_dashboard(records: &[UserRecord], phase: LoadPhase) -> Dashboard {
    let tiles = TILES
        .iter()
        .map(|(field, title, unit)| MetricTile {
            title: title.to_string(),
            field: field.to_string(),
            value: average(field, records),
            unit: unit.map(str::to_string),
        })
        .collect();

    Dashboard {
        title: TITLE.to_string(),
        phase,
        tiles,
        chart: project(records),
        location_grid: location_grid(),
        user_grid: user_grid(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::record;
    use serde_json::json;

    fn sample_users() -> Vec<UserRecord> {
        vec![
            record(json!({"id": 1, "firstName": "Emily", "age": 28, "height": 193.24, "weight": 63.16})),
            record(json!({"id": 2, "firstName": "Michael", "age": 35, "height": 193.31, "weight": 78.89})),
            record(json!({"id": 3, "firstName": "Sophia", "age": 42, "height": 177.72, "weight": 52.6})),
        ]
    }

    #[test]
    fn test_empty_dashboard() {
        let view = build_dashboard(&[], LoadPhase::Pending);

        assert_eq!(view.title, TITLE);
        assert_eq!(view.tiles.len(), 3);
        assert!(view.tiles.iter().all(|t| t.value == 0.0));
        assert!(view.chart.is_empty());
        assert_eq!(view.user_grid.row_count(), 0);
        assert_eq!(view.user_grid.column_count(), 0);
        assert_eq!(view.location_grid.row_count(), 3);
    }

    #[test]
    fn test_loaded_dashboard() {
        let users = sample_users();
        let view = build_dashboard(&users, LoadPhase::Loaded);

        assert_eq!(view.tiles[0].title, "Avg Age");
        assert_eq!(view.tiles[0].value, 35.0);
        assert_eq!(view.tiles[1].display(), "188.1 cm");
        assert_eq!(view.tiles[2].display(), "64.9 kg");

        assert_eq!(view.chart.len(), users.len());
        for dataset in &view.chart.datasets {
            assert_eq!(dataset.data.len(), users.len());
        }
        assert_eq!(view.user_grid.row_count(), users.len());
        assert_eq!(view.user_grid.column_count(), 5);
        assert_eq!(view.location_grid.row_count(), 3);
    }

    #[test]
    fn test_tile_display_without_unit() {
        let tile = MetricTile {
            title: "Avg Age".into(),
            field: "age".into(),
            value: 22.5,
            unit: None,
        };
        assert_eq!(tile.display(), "22.5");
    }
}
