//! Dashboard Page
//!
//! The four analytics widgets plus the diet-type filter bar, tied together
//! by the refresh pass.

use leptos::*;

use crate::api;
use crate::components::{BarChart, FilterBar, Heatmap, PieChart, ScatterPlot};
use crate::state::filter::{effective_diet_type, prepare_update};
use crate::state::global::DashboardState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Fetch initial data on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        spawn_refresh(state_for_effect.clone());
    });

    let state_for_refresh = state;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Diet analytics at a glance"</p>
            </div>

            // Filter controls
            <section class="bg-gray-800 rounded-xl p-6">
                <FilterBar on_refresh=move |_| spawn_refresh(state_for_refresh.clone()) />
            </section>

            // Widget grid
            <div class="grid lg:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Average Macronutrients"</h2>
                    <BarChart />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Recipes by Diet Type"</h2>
                    <PieChart />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Protein vs Carbs"</h2>
                    <ScatterPlot />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Macronutrient Correlation"</h2>
                    <Heatmap />
                </section>
            </div>
        </div>
    }
}

/// Run one fetch -> filter -> render pass
///
/// Every trigger spawns an independent task. Overlapping passes are not
/// deduplicated; the last one to complete wins. On failure the pass is
/// abandoned and every widget keeps its previous rendering.
fn spawn_refresh(state: DashboardState) {
    spawn_local(async move {
        state.loading.set(true);

        match api::fetch_analytics().await {
            Ok(payload) => {
                if let Some(message) = &payload.message {
                    web_sys::console::log_1(&message.as_str().into());
                }

                state.freeze_diet_types(&payload);

                // Sample the controls after the fetch resolves; edits made
                // while the request was in flight count for this pass
                let diet = effective_diet_type(
                    &state.filter_text.get(),
                    &state.filter_select.get(),
                );
                state.apply_update(prepare_update(&payload, &diet));

                state.last_updated.set(Some(chrono::Utc::now().timestamp_millis()));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch analytics: {}", e).into());
            }
        }

        state.loading.set(false);
    });
}
