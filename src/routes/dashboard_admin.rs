//! Admin dashboard: platform stats, the staff list, and the create-user
//! form. Creating a user is a two-step flow (auth identity, then profile
//! row) that is not transactional backend-side, so the second step failing
//! gets its own message instead of pretending nothing happened.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{RequireRole, client as auth_client};
use crate::features::events::client as events_client;
use crate::features::events::types::count_active;
use crate::features::users::client;
use crate::features::users::types::{NewProfile, UserRole, staff_of};
use crate::routes::policy;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone)]
struct NewUserInput {
    nome: String,
    email: String,
    senha: String,
    role: String,
    matricula: Option<String>,
    cpf: Option<String>,
}

#[derive(Clone, Copy)]
enum CreateUserError {
    Auth,
    Profile,
}

impl CreateUserError {
    fn message(self) -> &'static str {
        match self {
            CreateUserError::Auth => "Erro ao criar usuário de autenticação.",
            CreateUserError::Profile => {
                "Conta criada na autenticação, mas houve erro ao salvar o perfil. \
                 Conclua o cadastro deste usuário antes de tentar novamente."
            }
        }
    }
}

#[component]
pub fn DashboardAdminPage() -> impl IntoView {
    view! {
        <RequireRole permitted=policy::STAFF>
            <AppShell>
                <DashboardAdminContent />
            </AppShell>
        </RequireRole>
    }
}

#[component]
fn DashboardAdminContent() -> impl IntoView {
    let users = RwSignal::new(Vec::<UserRole>::new());
    let (users_error, set_users_error) = signal::<Option<String>>(None);
    let event_flags = LocalResource::new(move || async move {
        events_client::list_event_flags().await
    });

    let reload_users = move || {
        spawn_local(async move {
            match client::list_user_roles().await {
                Ok(list) => users.set(list),
                Err(_) => set_users_error.set(Some("Erro ao carregar dados do painel.".to_string())),
            }
        });
    };
    reload_users();

    let (nome, set_nome) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (senha, set_senha) = signal(String::new());
    let (matricula, set_matricula) = signal(String::new());
    let (cpf, set_cpf) = signal(String::new());
    let (role, set_role) = signal("admin".to_string());
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (form_message, set_form_message) = signal::<Option<String>>(None);

    let create_action = Action::new_local(move |input: &NewUserInput| {
        let input = input.clone();
        async move {
            let user = auth_client::sign_up(&input.email, &input.senha)
                .await
                .map_err(|_| CreateUserError::Auth)?;

            let profile = NewProfile {
                id: user.id,
                nome: input.nome,
                tipo: input.role,
                matricula: input.matricula,
                cpf: input.cpf,
            };
            client::create_profile(&profile)
                .await
                .map_err(|_| CreateUserError::Profile)?;
            Ok::<(), CreateUserError>(())
        }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(()) => {
                    set_form_message.set(Some("Usuário criado com sucesso.".to_string()));
                    set_nome.set(String::new());
                    set_email.set(String::new());
                    set_senha.set(String::new());
                    set_matricula.set(String::new());
                    set_cpf.set(String::new());
                    reload_users();
                }
                Err(err) => set_form_error.set(Some(err.message().to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);
        set_form_message.set(None);

        let nome_value = nome.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let senha_value = senha.get_untracked();
        if nome_value.is_empty() || email_value.is_empty() || senha_value.trim().is_empty() {
            set_form_error.set(Some("Informe nome, e-mail e senha.".to_string()));
            return;
        }

        let matricula_value = matricula.get_untracked().trim().to_string();
        let cpf_value = cpf.get_untracked().trim().to_string();
        create_action.dispatch(NewUserInput {
            nome: nome_value,
            email: email_value,
            senha: senha_value,
            role: role.get_untracked(),
            matricula: (!matricula_value.is_empty()).then_some(matricula_value),
            cpf: (!cpf_value.is_empty()).then_some(cpf_value),
        });
    };

    let total_users = Signal::derive(move || users.with(Vec::len));
    let staff = Signal::derive(move || users.with(|list| staff_of(list)));

    view! {
        <div class="flex items-center justify-between gap-4">
            <div>
                <h2 class="text-2xl font-semibold text-slate-900">"Visão geral"</h2>
                <p class="text-sm text-slate-600">
                    "Usuários, acessos e eventos do Ifpass."
                </p>
            </div>
        </div>

        {move || {
            users_error
                .get()
                .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
        }}

        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <div class="p-6 bg-white rounded-xl border border-emerald-100 shadow-sm">
                <h3 class="text-sm font-semibold text-slate-500 uppercase tracking-wider mb-4">
                    "Usuários cadastrados"
                </h3>
                <p class="text-3xl font-bold text-emerald-700">{move || total_users.get()}</p>
            </div>
            <div class="p-6 bg-white rounded-xl border border-emerald-100 shadow-sm">
                <h3 class="text-sm font-semibold text-slate-500 uppercase tracking-wider mb-4">
                    "Administradores"
                </h3>
                <p class="text-3xl font-bold text-emerald-700">
                    {move || staff.with(Vec::len)}
                </p>
            </div>
            <div class="p-6 bg-white rounded-xl border border-emerald-100 shadow-sm">
                <h3 class="text-sm font-semibold text-slate-500 uppercase tracking-wider mb-4">
                    "Eventos ativos"
                </h3>
                {move || match event_flags.get() {
                    Some(Ok(flags)) => {
                        view! {
                            <p class="text-3xl font-bold text-emerald-700">
                                {count_active(&flags)}
                            </p>
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

        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="bg-white rounded-xl border border-emerald-100 shadow-sm">
                <div class="px-4 py-3 border-b border-emerald-100">
                    <h3 class="text-base font-semibold text-slate-900">"Novo usuário"</h3>
                </div>
                <form class="p-4 space-y-4" on:submit=on_submit>
                    <input
                        type="text"
                        class="w-full rounded-lg border border-slate-300 bg-slate-50 p-2.5 text-sm"
                        placeholder="Nome completo"
                        prop:value=move || nome.get()
                        on:input=move |event| set_nome.set(event_target_value(&event))
                    />
                    <input
                        type="email"
                        class="w-full rounded-lg border border-slate-300 bg-slate-50 p-2.5 text-sm"
                        placeholder="E-mail"
                        autocomplete="off"
                        prop:value=move || email.get()
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <input
                        type="password"
                        class="w-full rounded-lg border border-slate-300 bg-slate-50 p-2.5 text-sm"
                        placeholder="Senha"
                        autocomplete="new-password"
                        prop:value=move || senha.get()
                        on:input=move |event| set_senha.set(event_target_value(&event))
                    />
                    <div class="grid grid-cols-2 gap-4">
                        <input
                            type="text"
                            class="w-full rounded-lg border border-slate-300 bg-slate-50 p-2.5 text-sm"
                            placeholder="Matrícula (opcional)"
                            prop:value=move || matricula.get()
                            on:input=move |event| set_matricula.set(event_target_value(&event))
                        />
                        <input
                            type="text"
                            class="w-full rounded-lg border border-slate-300 bg-slate-50 p-2.5 text-sm"
                            placeholder="CPF (opcional)"
                            prop:value=move || cpf.get()
                            on:input=move |event| set_cpf.set(event_target_value(&event))
                        />
                    </div>
                    <select
                        class="w-full rounded-lg border border-slate-300 bg-slate-50 p-2.5 text-sm"
                        prop:value=move || role.get()
                        on:change=move |event| set_role.set(event_target_value(&event))
                    >
                        <option value="admin">"Administrador"</option>
                        <option value="superuser">"Superusuário"</option>
                        <option value="aluno">"Aluno"</option>
                    </select>

                    {move || {
                        form_error
                            .get()
                            .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                    }}
                    {move || {
                        form_message
                            .get()
                            .map(|message| {
                                view! { <Alert kind=AlertKind::Success message=message /> }
                            })
                    }}

                    <Button button_type="submit" disabled=create_action.pending()>
                        {move || {
                            if create_action.pending().get() {
                                "Criando..."
                            } else {
                                "Criar usuário"
                            }
                        }}
                    </Button>
                </form>
            </div>

            <div class="bg-white rounded-xl border border-emerald-100 shadow-sm">
                <div class="px-4 py-3 border-b border-emerald-100">
                    <h3 class="text-base font-semibold text-slate-900">"Equipe"</h3>
                </div>
                <div class="p-4">
                    {move || {
                        let list = staff.get();
                        if list.is_empty() {
                            view! {
                                <p class="text-sm text-slate-600">
                                    "Nenhum administrador cadastrado."
                                </p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <table class="w-full text-sm">
                                    <thead>
                                        <tr class="bg-slate-100 text-left text-slate-700">
                                            <th class="px-3 py-2">"Nome"</th>
                                            <th class="px-3 py-2">"Tipo de acesso"</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y">
                                        <For
                                            each=move || list.clone()
                                            key=|user| user.id.clone()
                                            children=|user: UserRole| {
                                                view! {
                                                    <tr class="hover:bg-slate-50">
                                                        <td class="px-3 py-2">
                                                            {user.nome.clone().unwrap_or_else(|| "Sem nome".to_string())}
                                                        </td>
                                                        <td class="px-3 py-2 text-emerald-700 font-medium">
                                                            {user.tipo.clone().unwrap_or_else(|| "-".to_string())}
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
