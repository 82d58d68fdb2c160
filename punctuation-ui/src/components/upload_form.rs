//! Upload Form Component
//!
//! File picker and the upload trigger.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::components::InlineLoading;
use crate::state::global::GlobalState;

/// File picker plus "Upload and Analyze" button
#[component]
pub fn UploadForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The accept filter is only a hint to the picker; any file is accepted
    let on_file_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        if let Some(file) = file {
            state.select_file(file);
        }
    };

    let on_upload = move |_| state.upload_and_analyze();

    view! {
        <div class="flex flex-col items-center gap-4 w-full max-w-lg">
            <input
                type="file"
                accept=".csv"
                on:change=on_file_change
                class="block w-full text-sm text-gray-300 border border-gray-600 rounded-lg
                       cursor-pointer bg-gray-800 focus:outline-none hover:bg-gray-700
                       hover:shadow-lg transition"
            />
            <button
                on:click=on_upload
                disabled=move || !state.trigger_enabled()
                class=move || {
                    let base = "px-6 py-2 rounded-lg text-white font-semibold flex items-center gap-2";
                    if state.trigger_enabled() {
                        format!("{} bg-blue-600 hover:bg-blue-500 hover:shadow-md transition", base)
                    } else {
                        format!("{} bg-gray-600 cursor-not-allowed", base)
                    }
                }
            >
                {move || state.is_loading().then(|| view! { <InlineLoading /> })}
                {move || state.upload.with(|s| s.trigger_label())}
            </button>
        </div>
    }
}
