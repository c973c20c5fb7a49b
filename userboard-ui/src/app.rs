//! App Root Component
//!
//! Main application component with global providers.

use leptos::*;

use crate::api;
use crate::pages::Dashboard;
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <div class="min-h-screen bg-white text-gray-900 flex flex-col">
            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <Dashboard />
            </main>

            <Footer />
        </div>
    }
}

/// Footer with the API base and a spinner while a request is in flight
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let api_base = api::get_api_base();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-100 border-t border-gray-300 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-500">{api_base}</div>

                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-gray-600">
                                <span class="inline-block loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
