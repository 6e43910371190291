use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-emerald-200 border-t-emerald-600"
            role="status"
            aria-live="polite"
            aria-label="Carregando"
        ></div>
    }
}
