//! App Root Component

use leptos::*;

use crate::components::{ResultsPanel, UploadForm};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen p-8 bg-gray-900 text-gray-200">
            <h1 class="text-4xl font-bold text-white mb-8">"Punctuation Analyzer"</h1>

            <UploadForm />

            <ResultsPanel />
        </div>
    }
}
