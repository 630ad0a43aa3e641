//! Settings Page
//!
//! Endpoint configuration for the dashboard.

use leptos::*;

use crate::api;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your NutriScope dashboard"</p>
            </div>

            // Analytics endpoint
            <EndpointSettings />

            // About
            <AboutSection />
        </div>
    }
}

/// Briefly show the saved confirmation (auto-clears after timeout)
fn flash_saved(set_saved: WriteSignal<bool>) {
    set_saved.set(true);

    gloo_timers::callback::Timeout::new(3000, move || {
        set_saved.set(false);
    }).forget();
}

/// Analytics endpoint override, persisted in local storage
#[component]
fn EndpointSettings() -> impl IntoView {
    let (endpoint, set_endpoint) = create_signal(api::get_endpoint());
    let (saved, set_saved) = create_signal(false);

    let save_endpoint = move |_| {
        api::set_endpoint(&endpoint.get());
        flash_saved(set_saved);
    };

    let reset_endpoint = move |_| {
        api::reset_endpoint();
        set_endpoint.set(api::get_endpoint());
        flash_saved(set_saved);
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Analytics Endpoint"</h2>

            <div class="space-y-4">
                // Endpoint URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Endpoint URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || endpoint.get()
                            on:input=move |ev| set_endpoint.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=save_endpoint
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                        <button
                            on:click=reset_endpoint
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500
                                   rounded-lg font-medium transition-colors"
                        >
                            "Reset"
                        </button>
                    </div>
                </div>

                // Saved confirmation
                {move || {
                    if saved.get() {
                        view! {
                            <p class="text-sm text-green-400">"✓ Saved"</p>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}

                <p class="text-xs text-gray-500">
                    "The dashboard issues a single GET against this URL on every refresh."
                </p>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About NutriScope"</h2>

            <div class="space-y-4 text-gray-300">
                <p>
                    "NutriScope is a client-side dashboard over precomputed diet analytics. "
                    "All charts render in the browser; filtering never leaves the page."
                </p>

                <div class="grid md:grid-cols-2 gap-4 text-sm">
                    <div class="p-4 bg-gray-700 rounded-lg">
                        <h3 class="font-medium text-white mb-2">"Built With"</h3>
                        <ul class="space-y-1 text-gray-400">
                            <li>"• Rust (compiled to WASM)"</li>
                            <li>"• Leptos (UI framework)"</li>
                            <li>"• HTML5 Canvas (charts)"</li>
                        </ul>
                    </div>

                    <div class="p-4 bg-gray-700 rounded-lg">
                        <h3 class="font-medium text-white mb-2">"Views"</h3>
                        <ul class="space-y-1 text-gray-400">
                            <li>"• Average macronutrients per diet"</li>
                            <li>"• Recipe counts per diet"</li>
                            <li>"• Protein vs carbs scatter"</li>
                            <li>"• Macronutrient correlation heatmap"</li>
                        </ul>
                    </div>
                </div>

                <p class="text-sm text-gray-400">
                    "Version " {env!("CARGO_PKG_VERSION")} " • Made with 🦀"
                </p>
            </div>
        </section>
    }
}
