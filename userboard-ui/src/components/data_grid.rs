//! Data Grid Component
//!
//! Table bound to column definitions and rows. Fixed-size grids scroll;
//! auto-height grids grow with their rows.

use leptos::*;

use crate::state::global::{DataGrid as Grid, DomLayout};

/// Container size of a fixed-layout grid
const FIXED_STYLE: &str = "height: 300px; width: 600px;";

/// Data grid component
#[component]
pub fn DataGrid(
    /// Rows and columns to render
    grid: Grid,
) -> impl IntoView {
    let container_style = match grid.dom_layout {
        DomLayout::Normal => FIXED_STYLE,
        DomLayout::AutoHeight => "width: 100%;",
    };

    let header = grid
        .column_defs
        .iter()
        .map(|col| {
            view! {
                <th class="px-3 py-2 text-left font-semibold text-gray-700 border-b border-gray-300 whitespace-nowrap">
                    {col.header_name.clone()}
                </th>
            }
        })
        .collect_view();

    let body = grid
        .row_data
        .iter()
        .map(|row| {
            let cells = grid
                .column_defs
                .iter()
                .map(|col| {
                    view! {
                        <td class="px-3 py-2 border-b border-gray-200 whitespace-nowrap">
                            {Grid::cell_text(row, &col.field)}
                        </td>
                    }
                })
                .collect_view();
            view! { <tr class="hover:bg-gray-50">{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="overflow-auto border border-gray-300 rounded mt-5" style=container_style>
            <table class="min-w-full text-sm">
                <thead class="bg-gray-100 sticky top-0">
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
