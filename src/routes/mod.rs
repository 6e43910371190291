#[cfg(target_arch = "wasm32")]
mod dashboard_admin;
#[cfg(target_arch = "wasm32")]
mod eventos;
#[cfg(target_arch = "wasm32")]
mod home_aluno;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod usuarios;

#[cfg(target_arch = "wasm32")]
pub(crate) use dashboard_admin::DashboardAdminPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use eventos::EventosPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use home_aluno::HomeAlunoPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use login::LoginPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use not_found::NotFoundPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use usuarios::UsuariosPage;

pub(crate) mod paths {
    pub const LOGIN: &str = "/";
    pub const HOME_ALUNO: &str = "/HomeAluno";
    pub const DASHBOARD_ADMIN: &str = "/DashboardAdmin";
    pub const EVENTOS: &str = "/Eventos";
    pub const USUARIOS: &str = "/Usuarios";
}

/// Access policy for every guarded route, kept as one reviewable table
/// rather than scattered per-page role checks.
pub(crate) mod policy {
    use super::paths;
    use crate::features::auth::types::Role;

    pub const STAFF: &[Role] = &[Role::Superuser, Role::Admin];
    pub const STUDENTS: &[Role] = &[Role::Aluno];
    /// The events list serves both audiences; staff review it, students
    /// register through it.
    pub const EVENT_VIEWERS: &[Role] = &[Role::Superuser, Role::Admin, Role::Aluno];

    pub const GUARDED: &[(&str, &[Role])] = &[
        (paths::HOME_ALUNO, STUDENTS),
        (paths::DASHBOARD_ADMIN, STAFF),
        (paths::EVENTOS, EVENT_VIEWERS),
        (paths::USUARIOS, STAFF),
    ];

    /// Landing page per recognized role after login.
    pub fn landing_for(role: Role) -> &'static str {
        match role {
            Role::Superuser | Role::Admin => paths::DASHBOARD_ADMIN,
            Role::Aluno => paths::HOME_ALUNO,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::features::auth::session::{GuardDecision, SessionState, evaluate_guard};
        use crate::features::auth::types::{AuthUser, Profile, Session};

        fn authenticated(tipo: Option<&str>) -> SessionState {
            SessionState::Authenticated {
                user: AuthUser {
                    id: "u1".to_string(),
                    email: None,
                },
                session: Session {
                    access_token: "tok".to_string(),
                    token_type: None,
                    expires_in: None,
                    refresh_token: None,
                },
                profile: tipo.map(|tipo| Profile {
                    id: "u1".to_string(),
                    nome: None,
                    tipo: Some(tipo.to_string()),
                    matricula: None,
                    cpf: None,
                }),
            }
        }

        #[test]
        fn every_guarded_route_names_at_least_one_role() {
            for (path, permitted) in GUARDED {
                assert!(!permitted.is_empty(), "empty role set for {path}");
            }
        }

        #[test]
        fn unrecognized_roles_are_denied_on_every_guarded_route() {
            for state in [
                SessionState::Anonymous,
                authenticated(None),
                authenticated(Some("coordinator")),
                authenticated(Some("visitante")),
            ] {
                for (path, permitted) in GUARDED {
                    assert_eq!(
                        evaluate_guard(&state, permitted),
                        GuardDecision::RedirectToLogin,
                        "unexpected access to {path}"
                    );
                }
            }
        }

        #[test]
        fn loading_session_only_waits_on_every_guarded_route() {
            for (path, permitted) in GUARDED {
                assert_eq!(
                    evaluate_guard(&SessionState::Loading, permitted),
                    GuardDecision::Wait,
                    "guarded content leaked while loading {path}"
                );
            }
        }

        #[test]
        fn recognized_roles_reach_their_landing_pages() {
            assert_eq!(landing_for(Role::Superuser), paths::DASHBOARD_ADMIN);
            assert_eq!(landing_for(Role::Admin), paths::DASHBOARD_ADMIN);
            assert_eq!(landing_for(Role::Aluno), paths::HOME_ALUNO);
        }

        #[test]
        fn students_can_view_events_but_not_admin_pages() {
            let student = authenticated(Some("aluno"));
            assert_eq!(
                evaluate_guard(&student, EVENT_VIEWERS),
                GuardDecision::Render
            );
            assert_eq!(
                evaluate_guard(&student, STAFF),
                GuardDecision::RedirectToLogin
            );
        }
    }
}

#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use leptos_router::components::{Route, Routes};
#[cfg(target_arch = "wasm32")]
use leptos_router::path;

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/HomeAluno") view=HomeAlunoPage />
            <Route path=path!("/DashboardAdmin") view=DashboardAdminPage />
            <Route path=path!("/Eventos") view=EventosPage />
            <Route path=path!("/Usuarios") view=UsuariosPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
