//! Student landing page: greeting plus two stat cards. The two queries are
//! independent; each card renders, errors, or spins on its own.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::{RequireRole, state::use_auth};
use crate::features::events::client;
use crate::features::events::types::count_open;
use crate::routes::policy;
use leptos::prelude::*;

#[component]
pub fn HomeAlunoPage() -> impl IntoView {
    view! {
        <RequireRole permitted=policy::STUDENTS>
            <AppShell>
                <HomeAlunoContent />
            </AppShell>
        </RequireRole>
    }
}

#[component]
fn HomeAlunoContent() -> impl IntoView {
    let auth = use_auth();
    let greeting =
        Signal::derive(move || auth.display_name().unwrap_or_else(|| "Aluno".to_string()));

    let open_events = LocalResource::new(move || async move { client::list_event_flags().await });
    let my_registrations = LocalResource::new(move || {
        let user_id = auth.user_id();
        async move {
            match user_id {
                Some(id) => client::count_registrations(&id).await,
                None => Ok(0),
            }
        }
    });

    view! {
        <div class="flex items-center justify-between gap-4">
            <div>
                <h2 class="text-2xl font-semibold text-slate-900">
                    {move || format!("Olá, {}", greeting.get())}
                </h2>
                <p class="text-sm text-slate-600">
                    "Acompanhe os eventos disponíveis no Ifpass."
                </p>
            </div>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <div class="p-6 bg-white rounded-xl border border-emerald-100 shadow-sm">
                <h3 class="text-sm font-semibold text-slate-500 uppercase tracking-wider mb-4">
                    "Eventos com inscrições abertas"
                </h3>
                {move || match open_events.get() {
                    Some(Ok(flags)) => {
                        view! {
                            <p class="text-3xl font-bold text-emerald-700">{count_open(&flags)}</p>
                        }
                            .into_any()
                    }
                    Some(Err(_)) => {
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message="Erro ao carregar dados.".to_string()
                            />
                        }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </div>

            <div class="p-6 bg-white rounded-xl border border-emerald-100 shadow-sm">
                <h3 class="text-sm font-semibold text-slate-500 uppercase tracking-wider mb-4">
                    "Minhas inscrições"
                </h3>
                {move || match my_registrations.get() {
                    Some(Ok(count)) => {
                        view! { <p class="text-3xl font-bold text-emerald-700">{count}</p> }
                            .into_any()
                    }
                    Some(Err(_)) => {
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message="Erro ao carregar dados.".to_string()
                            />
                        }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </div>
        </div>
    }
}
