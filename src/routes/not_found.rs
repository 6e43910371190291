//! Minimal 404 page for unknown routes.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-slate-50 text-center px-4">
            <h1 class="text-7xl font-black text-slate-200 select-none">"404"</h1>
            <p class="mt-2 text-xl font-semibold text-slate-900">"Página não encontrada"</p>
            <p class="mt-2 text-sm text-slate-600 max-w-sm">
                "O recurso solicitado não existe ou você não tem permissão para acessá-lo."
            </p>
            <div class="mt-6 flex items-center gap-4">
                <A
                    href=paths::LOGIN
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-emerald-700 rounded-lg hover:bg-emerald-800"
                >
                    "Ir para o início"
                </A>
                <button
                    type="button"
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-slate-700 bg-white border border-slate-200 rounded-lg hover:bg-slate-100"
                    on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            if let Ok(history) = window.history() {
                                let _ = history.back();
                            }
                        }
                    }
                >
                    "Voltar"
                </button>
            </div>
        </div>
    }
}
