//! Filter Bar Component
//!
//! Diet-type controls for the dashboard: a free-text filter, a dropdown
//! built from the frozen diet-type cache, and the refresh button.

use leptos::*;

use crate::state::global::DashboardState;

/// Filter controls for the dashboard
///
/// Edits to the controls are not applied immediately; `on_refresh` (the
/// refresh button) starts the pass that samples them.
#[component]
pub fn FilterBar(
    on_refresh: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let filter_text = state.filter_text;
    let filter_select = state.filter_select;
    let diet_types = state.diet_types;

    view! {
        <div class="flex flex-col md:flex-row md:items-end gap-4">
            // Free-text filter, wins over the dropdown when non-empty
            <div class="flex-1">
                <label class="block text-sm text-gray-400 mb-2">"Filter by diet type"</label>
                <input
                    type="text"
                    placeholder="e.g. keto"
                    prop:value=move || filter_text.get()
                    on:input=move |ev| filter_text.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Dropdown over the diet types frozen at first load
            <div class="flex-1">
                <label class="block text-sm text-gray-400 mb-2">"Diet type"</label>
                <select
                    on:change=move |ev| filter_select.set(event_target_value(&ev))
                    prop:value=move || filter_select.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="all">"All Diet Types"</option>

                    {move || {
                        diet_types.get()
                            .into_iter()
                            .map(|diet| {
                                let value = diet.to_lowercase();
                                view! {
                                    <option value=value>{diet}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <button
                on:click=on_refresh
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                       font-semibold transition-colors"
            >
                "Refresh"
            </button>
        </div>
    }
}
