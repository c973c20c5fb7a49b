//! Dashboard Page
//!
//! Metric tiles, the age/height/weight chart, the location grid and the
//! raw user grid.

use leptos::*;

use crate::api;
use crate::components::{Chart, DataGrid, MetricCard};
use crate::state::{GlobalState, LoadPhase};

/// Delay between requests while the server is still fetching users
const POLL_INTERVAL_MS: u32 = 1000;

/// Request the page, and again after a delay while the server's user
/// fetch is still pending. Stops once the phase settles.
fn refresh(state: GlobalState) {
    spawn_local(async move {
        state.loading.set(true);
        let result = api::fetch_dashboard().await;
        state.loading.set(false);

        match result {
            Ok(view) => {
                let pending = view.phase == LoadPhase::Pending;
                if view.phase == LoadPhase::Failed {
                    web_sys::console::error_1(&"Server could not fetch users".into());
                }
                state.set_dashboard(view);

                if pending {
                    gloo_timers::callback::Timeout::new(POLL_INTERVAL_MS, move || refresh(state))
                        .forget();
                }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch dashboard: {}", e).into());
            }
        }
    });
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Render the empty page now, fetch once on mount
    refresh(state);

    let dashboard = state.dashboard;
    let chart_data = Signal::derive(move || dashboard.with(|d| d.chart.clone()));

    view! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold">{move || dashboard.with(|d| d.title.clone())}</h1>

            {move || {
                let page = dashboard.get();
                let location_title = page.location_grid.title.clone();
                let user_title = page.user_grid.title.clone();
                let tiles = page
                    .tiles
                    .into_iter()
                    .map(|tile| view! { <MetricCard tile=tile /> })
                    .collect_view();

                view! {
                    // Metric tiles
                    <div class="flex gap-5 my-8">{tiles}</div>

                    // Chart
                    <section class="mt-5">
                        <Chart data=chart_data />
                    </section>

                    // Location grid
                    <section class="mt-16">
                        <h2 class="text-2xl font-semibold">{location_title}</h2>
                        <DataGrid grid=page.location_grid />
                    </section>

                    // Raw user grid
                    <section class="mt-16">
                        <h2 class="text-2xl font-semibold">{user_title}</h2>
                        <DataGrid grid=page.user_grid />
                    </section>
                }
            }}
        </div>
    }
}
