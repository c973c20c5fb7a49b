//! Userboard Dashboard
//!
//! Single-page user dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Average age, height and weight tiles
//! - Age/height/weight line chart
//! - Static location grid
//! - Raw user grid with columns taken from the API
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads the composed page from the Userboard API over HTTP.
//! Serve it with `trunk serve --port 8087`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
