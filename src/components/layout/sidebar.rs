//! Side navigation for signed-in users. Links vary with the session role;
//! the footer identifies the principal and offers sign-out. Navigation here
//! is UX only; the route guards and the backend enforce access.

use crate::features::auth::state::use_auth;
use crate::features::auth::types::Role;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, components::A, hooks::use_location, hooks::use_navigate};

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let is_staff = Signal::derive(move || auth.role().is_some_and(|role| role.is_staff()));
    let is_student = Signal::derive(move || auth.role() == Some(Role::Aluno));
    let email = Signal::derive(move || auth.email().unwrap_or_default());
    let role_label = Signal::derive(move || auth.role_label().unwrap_or_else(|| "-".to_string()));

    let on_sign_out = move |_| {
        auth.sign_out();
        navigate(
            paths::LOGIN,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    view! {
        <aside class="w-64 bg-emerald-700 text-emerald-50 flex flex-col">
            <div class="px-6 py-5 bg-white border-b border-emerald-600 flex items-center justify-center">
                <span class="text-2xl font-bold text-emerald-700">"Ifpass"</span>
            </div>

            <nav class="flex-1 px-3 py-4 text-sm space-y-1">
                <Show when=move || is_staff.get()>
                    <SidebarLink target=paths::DASHBOARD_ADMIN label="Visão geral" />
                    <SidebarLink target=paths::USUARIOS label="Usuários" />
                </Show>
                <Show when=move || is_student.get()>
                    <SidebarLink target=paths::HOME_ALUNO label="Início" />
                </Show>
                <SidebarLink target=paths::EVENTOS label="Eventos" />
            </nav>

            <div class="px-6 py-4 border-t border-emerald-600 text-xs">
                <p class="font-medium">"Logado como:"</p>
                <p>{move || email.get()}</p>
                <p class="font-medium mt-2">"Perfil:"</p>
                <p>{move || role_label.get()}</p>
                <button type="button" class="mt-3 underline" on:click=on_sign_out>
                    "Sair"
                </button>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(target: &'static str, label: &'static str) -> impl IntoView {
    let location = use_location();
    let class = move || {
        if location.pathname.get() == target {
            "block w-full text-left px-3 py-2 rounded-md bg-emerald-800"
        } else {
            "block w-full text-left px-3 py-2 rounded-md hover:bg-emerald-800/70"
        }
    };

    view! {
        <A href=target {..} class=class>
            {label}
        </A>
    }
}
