//! Metric Card Component
//!
//! Displays a single averaged metric.

use leptos::*;

use crate::state::global::MetricTile;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Tile to display
    tile: MetricTile,
) -> impl IntoView {
    let value = tile.display();

    view! {
        <div class="bg-gray-100 rounded-lg p-5 min-w-[120px]">
            <h4 class="text-gray-600 text-sm font-semibold">{tile.title}</h4>
            <p class="text-2xl font-bold mt-2">{value}</p>
        </div>
    }
}
