//! Session store for the frontend. The provider hydrates the session once on
//! mount, subscribes to auth-state changes from the client adapter for the
//! lifetime of its scope, and republishes `SessionState` for guards and
//! routes. It is the single writer of that state: pages read it through
//! [`use_auth`] and may only trigger the explicit sign-out action.

use crate::features::auth::{
    changes, client,
    session::{ResolutionGate, SessionState},
    types::{AuthUser, Role, Session},
};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    state: RwSignal<SessionState>,
    gate: StoredValue<ResolutionGate>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::Loading),
            gate: StoredValue::new(ResolutionGate::new()),
        }
    }

    /// Read-only view of the session state. The context itself stays the
    /// single writer; consumers react to transitions through this signal.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.with(|state| state.role())
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.with(|state| state.user().map(|user| user.id.clone()))
    }

    pub fn email(&self) -> Option<String> {
        self.state
            .with(|state| state.user().and_then(|user| user.email.clone()))
    }

    pub fn display_name(&self) -> Option<String> {
        self.state
            .with(|state| state.profile().and_then(|profile| profile.nome.clone()))
    }

    pub fn role_label(&self) -> Option<String> {
        self.state
            .with(|state| state.profile().and_then(|profile| profile.tipo.clone()))
    }

    /// Resolves one auth change: re-enters the loading phase, fetches the
    /// profile when a principal exists, and publishes principal and profile
    /// together. A resolution superseded while awaiting publishes nothing.
    async fn resolve(self, change: Option<(AuthUser, Session)>) {
        let token = self.gate.with_value(|gate| gate.begin());
        self.state.set(SessionState::Loading);

        let next = match change {
            None => SessionState::Anonymous,
            Some((user, session)) => {
                let profile = client::fetch_profile(&user.id).await;
                SessionState::Authenticated {
                    user,
                    session,
                    profile,
                }
            }
        };

        if self.gate.with_value(|gate| gate.is_current(token)) {
            self.state.set(next);
        }
    }

    /// Requests backend sign-out. Local state is cleared unconditionally by
    /// the adapter's change notification, whether or not the backend call
    /// is ever observed.
    pub fn sign_out(&self) {
        spawn_local(async move {
            client::sign_out().await;
        });
    }
}

/// Provides auth context, hydrates the session once on mount, and keeps it
/// in sync with adapter auth-change notifications.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);

    // Subscribe before the initial restore so no change is missed.
    let subscription = changes::subscribe(move |change| {
        let change = change.clone();
        spawn_local(async move {
            auth.resolve(change).await;
        });
    });
    on_cleanup(move || subscription.unsubscribe());

    spawn_local(async move {
        let restored = client::current_session().await;
        auth.resolve(restored).await;
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(AuthContext::new)
}
