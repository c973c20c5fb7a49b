//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the page types
//! as served by `/api/v1/dashboard`.

use leptos::*;
use serde_json::{Map, Value};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Page on screen; an empty pending page until the first response
    pub dashboard: RwSignal<DashboardView>,
    /// Request in flight
    pub loading: RwSignal<bool>,
}

/// Load phase of the server's user list
#[derive(Clone, Copy, Debug, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoadPhase {
    Pending,
    Loaded,
    Failed,
}

/// The whole page
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct DashboardView {
    pub title: String,
    pub phase: LoadPhase,
    pub tiles: Vec<MetricTile>,
    pub chart: ChartData,
    pub location_grid: DataGrid,
    pub user_grid: DataGrid,
}

/// An averaged metric
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct MetricTile {
    pub title: String,
    pub field: String,
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

impl MetricTile {
    pub fn display(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.to_string(),
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub border_color: String,
    #[serde(default)]
    pub fill: bool,
}

#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub header_name: String,
    pub field: String,
}

#[derive(Clone, Copy, Debug, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DomLayout {
    Normal,
    AutoHeight,
}

#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataGrid {
    pub title: String,
    pub column_defs: Vec<ColumnDefinition>,
    pub row_data: Vec<Map<String, Value>>,
    pub dom_layout: DomLayout,
}

impl DataGrid {
    /// Text of one cell; nested values are shown as JSON
    pub fn cell_text(row: &Map<String, Value>, field: &str) -> String {
        match row.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

const TITLE: &str = "User Table & Chart";

/// (field, title, unit) of each tile
const TILES: [(&str, &str, Option<&str>); 3] = [
    ("age", "Avg Age", None),
    ("height", "Avg Height", Some("cm")),
    ("weight", "Avg Weight", Some("kg")),
];

/// (legend label, line color) of each chart series
const SERIES: [(&str, &str); 3] = [
    ("Age", "rgba(75,192,192,1)"),
    ("Height", "rgba(255,99,132,1)"),
    ("Weight", "rgba(54,162,235,1)"),
];

/// (city, state, country) rows of the location grid
const LOCATIONS: [(&str, &str, &str); 3] = [
    ("New York", "NY", "USA"),
    ("San Francisco", "CA", "USA"),
    ("Berlin", "BE", "Germany"),
];

impl ColumnDefinition {
    fn new(header_name: &str, field: &str) -> Self {
        Self {
            header_name: header_name.to_string(),
            field: field.to_string(),
        }
    }
}

impl DashboardView {
    /// The page as it looks with no users: zero tiles, an empty chart, the
    /// location grid and an empty user grid
    pub fn empty() -> Self {
        let tiles = TILES
            .iter()
            .map(|(field, title, unit)| MetricTile {
                title: title.to_string(),
                field: field.to_string(),
                value: 0.0,
                unit: unit.map(str::to_string),
            })
            .collect();

        let location_rows = LOCATIONS
            .iter()
            .map(|(city, state, country)| {
                let mut row = Map::new();
                row.insert("city".into(), Value::from(*city));
                row.insert("state".into(), Value::from(*state));
                row.insert("country".into(), Value::from(*country));
                row
            })
            .collect();

        Self {
            title: TITLE.to_string(),
            phase: LoadPhase::Pending,
            tiles,
            chart: ChartData {
                labels: Vec::new(),
                datasets: SERIES
                    .iter()
                    .map(|(label, color)| Dataset {
                        label: label.to_string(),
                        data: Vec::new(),
                        border_color: color.to_string(),
                        fill: false,
                    })
                    .collect(),
            },
            location_grid: DataGrid {
                title: "Location Grid".to_string(),
                column_defs: vec![
                    ColumnDefinition::new("City", "city"),
                    ColumnDefinition::new("State", "state"),
                    ColumnDefinition::new("Country", "country"),
                ],
                row_data: location_rows,
                dom_layout: DomLayout::Normal,
            },
            user_grid: DataGrid {
                title: "Raw User Table (All Keys from API)".to_string(),
                column_defs: Vec::new(),
                row_data: Vec::new(),
                dom_layout: DomLayout::AutoHeight,
            },
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        dashboard: create_rw_signal(DashboardView::empty()),
        loading: create_rw_signal(false),
    };

    provide_context(state);
}

impl GlobalState {
    /// Publish a page, skipping identical ones so polling does not re-render
    pub fn set_dashboard(&self, view: DashboardView) {
        let changed = self.dashboard.with_untracked(|current| *current != view);
        if changed {
            self.dashboard.set(view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "title": "User Table & Chart",
        "phase": "loaded",
        "tiles": [
            {"title": "Avg Age", "field": "age", "value": 22.5},
            {"title": "Avg Height", "field": "height", "value": 170.1, "unit": "cm"}
        ],
        "chart": {
            "labels": ["Emily", ""],
            "datasets": [{"label": "Age", "data": [20, null], "borderColor": "rgba(75,192,192,1)", "fill": false}]
        },
        "location_grid": {
            "title": "Location Grid",
            "columnDefs": [{"headerName": "City", "field": "city"}],
            "rowData": [{"city": "Berlin"}],
            "domLayout": "normal"
        },
        "user_grid": {
            "title": "Raw User Table (All Keys from API)",
            "columnDefs": [{"headerName": "id", "field": "id"}, {"headerName": "hair", "field": "hair"}],
            "rowData": [{"id": 1, "hair": {"color": "Brown"}}],
            "domLayout": "autoHeight"
        }
    }"#;

    #[test]
    fn test_parse_dashboard() {
        let view: DashboardView = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(view.phase, LoadPhase::Loaded);
        assert_eq!(view.tiles[0].display(), "22.5");
        assert_eq!(view.tiles[1].display(), "170.1 cm");
        assert_eq!(view.chart.datasets[0].data, vec![Some(20.0), None]);
        assert_eq!(view.user_grid.dom_layout, DomLayout::AutoHeight);
    }

    #[test]
    fn test_empty_page() {
        let view = DashboardView::empty();
        assert_eq!(view.title, "User Table & Chart");
        assert_eq!(view.phase, LoadPhase::Pending);
        assert_eq!(view.tiles.len(), 3);
        assert!(view.tiles.iter().all(|t| t.value == 0.0));
        assert_eq!(view.tiles[2].display(), "0 kg");
        assert!(view.chart.labels.is_empty());
        assert_eq!(view.chart.datasets.len(), 3);
        assert!(view.chart.datasets.iter().all(|d| d.data.is_empty()));
        assert_eq!(view.location_grid.row_data.len(), 3);
        assert_eq!(view.location_grid.dom_layout, DomLayout::Normal);
        assert_eq!(DataGrid::cell_text(&view.location_grid.row_data[1], "city"), "San Francisco");
        assert!(view.user_grid.column_defs.is_empty());
        assert!(view.user_grid.row_data.is_empty());
    }

    #[test]
    fn test_failed_page_shows_same_content_as_empty_page() {
        let failed = r#"{
            "title": "User Table & Chart",
            "phase": "failed",
            "tiles": [
                {"title": "Avg Age", "field": "age", "value": 0.0},
                {"title": "Avg Height", "field": "height", "value": 0.0, "unit": "cm"},
                {"title": "Avg Weight", "field": "weight", "value": 0.0, "unit": "kg"}
            ],
            "chart": {
                "labels": [],
                "datasets": [
                    {"label": "Age", "data": [], "borderColor": "rgba(75,192,192,1)", "fill": false},
                    {"label": "Height", "data": [], "borderColor": "rgba(255,99,132,1)", "fill": false},
                    {"label": "Weight", "data": [], "borderColor": "rgba(54,162,235,1)", "fill": false}
                ]
            },
            "location_grid": {
                "title": "Location Grid",
                "columnDefs": [
                    {"headerName": "City", "field": "city"},
                    {"headerName": "State", "field": "state"},
                    {"headerName": "Country", "field": "country"}
                ],
                "rowData": [
                    {"city": "New York", "state": "NY", "country": "USA"},
                    {"city": "San Francisco", "state": "CA", "country": "USA"},
                    {"city": "Berlin", "state": "BE", "country": "Germany"}
                ],
                "domLayout": "normal"
            },
            "user_grid": {
                "title": "Raw User Table (All Keys from API)",
                "columnDefs": [],
                "rowData": [],
                "domLayout": "autoHeight"
            }
        }"#;

        let view: DashboardView = serde_json::from_str(failed).unwrap();
        assert_eq!(view.phase, LoadPhase::Failed);
        assert_eq!(
            view,
            DashboardView {
                phase: LoadPhase::Failed,
                ..DashboardView::empty()
            }
        );
    }

    #[test]
    fn test_cell_text() {
        let view: DashboardView = serde_json::from_str(SAMPLE).unwrap();
        let row = &view.user_grid.row_data[0];
        assert_eq!(DataGrid::cell_text(row, "id"), "1");
        assert_eq!(DataGrid::cell_text(row, "hair"), r#"{"color":"Brown"}"#);
        assert_eq!(DataGrid::cell_text(row, "missing"), "");
    }
}
