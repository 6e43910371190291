use crate::components::Spinner;
use crate::features::auth::session::{GuardDecision, evaluate_guard};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::Role;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

/// Gates children behind a set of permitted roles. While the session
/// resolves it renders only a placeholder, so guarded content never flashes;
/// anonymous or unauthorized sessions are sent to the login page with the
/// history entry replaced, keeping the back button away from a page that
/// would immediately bounce again.
#[component]
pub fn RequireRole(permitted: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let decision =
        Signal::derive(move || auth.state().with(|state| evaluate_guard(state, permitted)));

    Effect::new(move |_| {
        if decision.get() == GuardDecision::RedirectToLogin {
            navigate(
                paths::LOGIN,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        {move || match decision.get() {
            GuardDecision::Render => children(),
            GuardDecision::Wait => {
                view! {
                    <div class="flex justify-center items-center min-h-[50vh]">
                        <Spinner />
                    </div>
                }
                    .into_any()
            }
            GuardDecision::RedirectToLogin => ().into_any(),
        }}
    }
}
