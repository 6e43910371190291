//! Users table for staff. Deletes ask for confirmation and only drop the row
//! from the displayed list after the backend confirms.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireRole;
use crate::features::users::client;
use crate::features::users::types::{UserRecord, remove_user};
use crate::routes::policy;
use leptos::{prelude::*, task::spawn_local};

#[component]
pub fn UsuariosPage() -> impl IntoView {
    view! {
        <RequireRole permitted=policy::STAFF>
            <AppShell>
                <UsuariosContent />
            </AppShell>
        </RequireRole>
    }
}

#[component]
fn UsuariosContent() -> impl IntoView {
    let users = RwSignal::new(Vec::<UserRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match client::list_users().await {
            Ok(list) => users.set(list),
            Err(_) => set_error.set(Some("Erro ao carregar usuários.".to_string())),
        }
        set_loading.set(false);
    });

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_user(&id).await.map(|()| id) }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(id) => users.update(|list| remove_user(list, &id)),
                Err(_) => set_error.set(Some("Erro ao excluir usuário.".to_string())),
            }
        }
    });

    let on_delete = move |id: String| {
        let confirmed = web_sys::window().is_some_and(|window| {
            window
                .confirm_with_message("Deseja realmente excluir este usuário?")
                .unwrap_or(false)
        });
        if confirmed {
            set_error.set(None);
            delete_action.dispatch(id);
        }
    };

    view! {
        <div class="flex items-center justify-between gap-4">
            <h2 class="text-2xl font-semibold text-slate-900">"Usuários do sistema"</h2>
        </div>

        <div class="bg-white rounded-xl border border-emerald-100 shadow-sm">
            <div class="px-4 py-3 border-b border-emerald-100">
                <h3 class="text-base font-semibold text-slate-900">"Lista de usuários"</h3>
            </div>

            <div class="p-4 space-y-3">
                {move || {
                    error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}

                {move || {
                    if loading.get() {
                        return view! { <Spinner /> }.into_any();
                    }
                    if users.with(Vec::is_empty) {
                        return view! {
                            <p class="text-sm text-slate-600">"Nenhum usuário cadastrado."</p>
                        }
                            .into_any();
                    }

                    view! {
                        <div class="border border-slate-200 rounded-md overflow-hidden bg-white">
                            <table class="w-full text-sm">
                                <thead>
                                    <tr class="bg-slate-100 text-left text-slate-700">
                                        <th class="px-3 py-2">"Nome"</th>
                                        <th class="px-3 py-2">"Tipo de acesso"</th>
                                        <th class="px-3 py-2">"Vínculo"</th>
                                        <th class="px-3 py-2 text-right">"Ações"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y">
                                    <For
                                        each=move || users.get()
                                        key=|user| user.id.clone()
                                        children=move |user: UserRecord| {
                                            let id = user.id.clone();
                                            view! {
                                                <tr class="hover:bg-slate-50">
                                                    <td class="px-3 py-2">
                                                        {user.display_name().to_string()}
                                                    </td>
                                                    <td class="px-3 py-2 text-emerald-700 font-medium">
                                                        {user.role_label().to_string()}
                                                    </td>
                                                    <td class="px-3 py-2">
                                                        {user.affiliation().label()}
                                                    </td>
                                                    <td class="px-3 py-2 text-right">
                                                        <button
                                                            type="button"
                                                            class="text-red-600 hover:text-red-800 font-medium"
                                                            on:click=move |_| on_delete(id.clone())
                                                        >
                                                            "Excluir"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
