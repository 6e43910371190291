//! Events list. Staff review it, students register through it; the derived
//! status decides whether the register action is offered at all.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{RequireRole, state::use_auth};
use crate::features::events::client;
use crate::features::events::types::{Event, format_event_date};
use crate::routes::policy;
use leptos::prelude::*;

#[component]
pub fn EventosPage() -> impl IntoView {
    view! {
        <RequireRole permitted=policy::EVENT_VIEWERS>
            <AppShell>
                <EventosContent />
            </AppShell>
        </RequireRole>
    }
}

#[component]
fn EventosContent() -> impl IntoView {
    let auth = use_auth();
    let events = LocalResource::new(move || async move { client::list_events().await });
    let (feedback, set_feedback) = signal::<Option<(AlertKind, String)>>(None);

    let register_action = Action::new_local(move |input: &(String, i64)| {
        let (user_id, event_id) = input.clone();
        async move { client::register(&user_id, event_id).await }
    });

    // Seat accounting lives backend-side, so a confirmed insert refetches
    // the list instead of patching counts locally.
    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    set_feedback.set(Some((
                        AlertKind::Success,
                        "Inscrição realizada com sucesso.".to_string(),
                    )));
                    events.refetch();
                }
                Err(_) => {
                    set_feedback.set(Some((
                        AlertKind::Error,
                        "Erro ao realizar inscrição.".to_string(),
                    )));
                }
            }
        }
    });

    view! {
        <div class="flex items-center justify-between gap-4">
            <div>
                <h2 class="text-2xl font-semibold text-slate-900">"Eventos"</h2>
                <p class="text-sm text-slate-600">
                    "Confira os eventos disponíveis no Ifpass."
                </p>
            </div>
        </div>

        {move || {
            feedback
                .get()
                .map(|(kind, message)| view! { <Alert kind=kind message=message /> })
        }}

        <div class="bg-white rounded-xl border border-emerald-100 shadow-sm">
            <div class="px-4 py-3 border-b border-emerald-100">
                <h3 class="text-base font-semibold text-slate-900">"Lista de eventos"</h3>
            </div>

            <div class="p-4">
                {move || match events.get() {
                    Some(Ok(list)) if list.is_empty() => {
                        view! {
                            <p class="text-sm text-slate-600">
                                "Nenhum evento cadastrado no momento."
                            </p>
                        }
                            .into_any()
                    }
                    Some(Ok(list)) => {
                        view! {
                            <div class="space-y-4">
                                <For
                                    each=move || list.clone()
                                    key=|event| event.id
                                    children=move |event: Event| {
                                        let status = event.status();
                                        let event_id = event.id;
                                        let on_register = move |_| {
                                            if let Some(user_id) = auth.user_id() {
                                                register_action.dispatch((user_id, event_id));
                                            }
                                        };

                                        view! {
                                            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-3 rounded-xl border border-emerald-100 bg-white px-4 py-3 shadow-sm">
                                                <div class="space-y-1">
                                                    <h4 class="text-base font-semibold text-emerald-700">
                                                        {event.titulo.clone()}
                                                    </h4>
                                                    <p class="text-xs text-slate-500">
                                                        "Data: "
                                                        <span class="font-medium text-slate-700">
                                                            {format_event_date(event.data.as_deref())}
                                                        </span>
                                                    </p>
                                                    <p class="text-xs text-slate-500">
                                                        "Vagas: "
                                                        <span class="font-medium text-slate-700">
                                                            {event.seats_label()}
                                                        </span>
                                                    </p>
                                                </div>

                                                <div class="flex flex-col items-end gap-2">
                                                    <span class=format!(
                                                        "inline-flex items-center rounded-full px-3 py-1 text-xs font-medium {}",
                                                        status.badge_class(),
                                                    )>{status.label()}</span>

                                                    <Show when=move || status.is_open()>
                                                        <Button
                                                            disabled=register_action.pending()
                                                            {..}
                                                            on:click=on_register
                                                        >
                                                            "Inscrever-se"
                                                        </Button>
                                                    </Show>
                                                </div>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        }
                            .into_any()
                    }
                    Some(Err(_)) => {
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message="Erro ao carregar eventos.".to_string()
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
