//! Results Panel Component
//!
//! Label/value list of every category plus the distribution chart. Hidden
//! until the first successful analysis.

use leptos::*;

use crate::components::Chart;
use crate::state::global::GlobalState;

/// Results list and chart
#[component]
pub fn ResultsPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let rows = move || {
        state
            .upload
            .with(|s| s.counts().copied())
            .map(|counts| {
                counts
                    .iter()
                    .map(|(category, value)| {
                        view! {
                            <div class="flex justify-between text-gray-300 border-b py-2">
                                <span class="capitalize">{category.label()}</span>
                                <span class="font-semibold">{value.to_string()}</span>
                            </div>
                        }
                    })
                    .collect_view()
            })
    };

    view! {
        <Show when=move || state.upload.with(|s| s.counts().is_some())>
            <div class="mt-10 w-full max-w-2xl bg-gray-800 p-6 rounded-lg shadow-lg">
                <h2 class="text-2xl font-semibold text-white mb-4">
                    "Punctuation Count Results"
                </h2>
                <div class="flex flex-col gap-4">{rows}</div>
                <div class="mt-6">
                    <h3 class="text-xl font-medium text-gray-200 mb-4">
                        "Punctuation Distribution"
                    </h3>
                    <Chart />
                </div>
            </div>
        </Show>
    }
}
