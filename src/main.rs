//! NutriScope Dashboard
//!
//! Diet analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Bar, pie, scatter and heatmap views over precomputed nutrition analytics
//! - Client-side filtering by diet type
//! - Manual refresh against a configurable analytics endpoint
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It issues a single GET against a read-only analytics endpoint;
//! all filtering happens in memory on the client.

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
