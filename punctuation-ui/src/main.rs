//! Punctuation Analyzer
//!
//! Browser front end for the punctuation analysis service, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - CSV file picker and upload trigger
//! - Results list of all 18 punctuation categories
//! - Bar chart of the distribution
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The upload state machine, normalization and chart derivation
//! come from the `punctuation-analyzer` core; this crate adds the DOM, the
//! canvas and the `fetch` backend.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
