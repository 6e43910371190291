//! Login page. It authenticates credentials and leaves navigation to an
//! effect watching the session store, so a principal is only routed once its
//! profile (and therefore its role) is known.

use crate::app_lib::build_info;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::session::SessionState;
use crate::features::auth::state::use_auth;
use crate::features::auth::client;
use crate::routes::policy;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move { client::sign_in_with_password(&input.email, &input.password).await }
    });

    // Every failure cause collapses into one generic message so the form
    // cannot be used to enumerate accounts.
    Effect::new(move |_| {
        if let Some(Err(_)) = login_action.value().get() {
            set_error.set(Some("E-mail ou senha inválidos.".to_string()));
        }
    });

    // Navigation is driven by the session store, never chained onto the
    // submit handler: the store publishes principal and profile together, so
    // this effect only fires with the role already resolved. It also covers
    // a session restored before the form was ever submitted.
    Effect::new(move |_| {
        auth.state().with(|state| match state {
            SessionState::Authenticated { .. } => match state.role() {
                Some(role) => {
                    navigate(
                        policy::landing_for(role),
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                None => {
                    set_error.set(Some("Tipo de usuário não reconhecido.".to_string()));
                }
            },
            SessionState::Loading | SessionState::Anonymous => {}
        });
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some("Informe e-mail e senha.".to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-100">
            <div class="w-full max-w-sm bg-white rounded-xl border border-slate-200 shadow-sm p-6">
                <h1 class="text-2xl font-bold text-center text-emerald-700 mb-6">"Ifpass"</h1>

                <form class="space-y-4" on:submit=on_submit>
                    <div class="space-y-2">
                        <label class="block text-sm font-medium text-slate-700" for="email">
                            "E-mail"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class="w-full rounded-lg border border-slate-300 bg-slate-50 p-2.5 text-sm text-slate-900 focus:border-emerald-500 focus:ring-emerald-500"
                            autocomplete="email"
                            placeholder="nome@ifpass.app"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div class="space-y-2">
                        <label class="block text-sm font-medium text-slate-700" for="senha">
                            "Senha"
                        </label>
                        <input
                            id="senha"
                            type="password"
                            class="w-full rounded-lg border border-slate-300 bg-slate-50 p-2.5 text-sm text-slate-900 focus:border-emerald-500 focus:ring-emerald-500"
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>

                    {move || {
                        error
                            .get()
                            .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                    }}

                    <Button button_type="submit" disabled=login_action.pending()>
                        {move || if login_action.pending().get() { "Entrando..." } else { "Entrar" }}
                    </Button>
                    {move || {
                        login_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-2"><Spinner /></div> })
                    }}
                </form>

                <p class="text-xs text-slate-400 text-center mt-6">
                    {format!(
                        "Ifpass v{} ({})",
                        build_info::version(),
                        build_info::git_commit_hash(),
                    )}
                </p>
            </div>
        </div>
    }
}
