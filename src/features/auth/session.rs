//! Session state machine and the route-guard decision it feeds. The state is
//! owned by the auth provider; everything here is pure so the transition and
//! guard rules can be tested off the browser.

use std::sync::atomic::{AtomicU64, Ordering};

use super::types::{AuthUser, Profile, Role, Session};

/// Who is logged in, and with what profile. `Loading` covers the window
/// between mount (or an auth change) and the completed profile resolution;
/// principal and profile are always published together, never one at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Loading,
    Anonymous,
    Authenticated {
        user: AuthUser,
        session: Session,
        /// Absent when the profile row is missing or its fetch failed; the
        /// principal is still retained, but no guarded route opens.
        profile: Option<Profile>,
    },
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            SessionState::Authenticated { profile, .. } => profile.as_ref(),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.profile().and_then(Profile::role)
    }
}

/// Outcome of guarding a route against the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: render a placeholder, never the content.
    Wait,
    /// Not signed in, or signed in without a permitted role.
    RedirectToLogin,
    Render,
}

/// Decision table for role-gated routes. An absent profile and an
/// unrecognized role both deny access.
pub fn evaluate_guard(state: &SessionState, permitted: &[Role]) -> GuardDecision {
    match state {
        SessionState::Loading => GuardDecision::Wait,
        SessionState::Anonymous => GuardDecision::RedirectToLogin,
        SessionState::Authenticated { .. } => match state.role() {
            Some(role) if permitted.contains(&role) => GuardDecision::Render,
            _ => GuardDecision::RedirectToLogin,
        },
    }
}

/// Monotonic generation counter for session resolutions. Each resolution
/// takes a token at start and publishes only while that token is current, so
/// a slow profile fetch from a superseded auth change can never overwrite a
/// newer state.
#[derive(Debug, Default)]
pub struct ResolutionGate {
    current: AtomicU64,
}

impl ResolutionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current.load(Ordering::Relaxed) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAFF: &[Role] = &[Role::Superuser, Role::Admin];
    const ALUNO: &[Role] = &[Role::Aluno];

    fn session() -> Session {
        Session {
            access_token: "tok".to_string(),
            token_type: Some("bearer".to_string()),
            expires_in: Some(3600),
            refresh_token: None,
        }
    }

    fn authenticated(tipo: Option<&str>) -> SessionState {
        SessionState::Authenticated {
            user: AuthUser {
                id: "u1".to_string(),
                email: Some("ana@ifpass.app".to_string()),
            },
            session: session(),
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
    fn loading_only_waits() {
        assert_eq!(evaluate_guard(&SessionState::Loading, STAFF), GuardDecision::Wait);
        assert_eq!(evaluate_guard(&SessionState::Loading, ALUNO), GuardDecision::Wait);
    }

    #[test]
    fn anonymous_redirects() {
        assert_eq!(
            evaluate_guard(&SessionState::Anonymous, STAFF),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn missing_profile_redirects() {
        assert_eq!(
            evaluate_guard(&authenticated(None), ALUNO),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn unrecognized_role_is_denied_everywhere() {
        for permitted in [STAFF, ALUNO] {
            assert_eq!(
                evaluate_guard(&authenticated(Some("coordinator")), permitted),
                GuardDecision::RedirectToLogin
            );
        }
    }

    #[test]
    fn permitted_role_renders() {
        assert_eq!(
            evaluate_guard(&authenticated(Some("admin")), STAFF),
            GuardDecision::Render
        );
        assert_eq!(
            evaluate_guard(&authenticated(Some("aluno")), ALUNO),
            GuardDecision::Render
        );
    }

    #[test]
    fn role_outside_permitted_set_redirects() {
        assert_eq!(
            evaluate_guard(&authenticated(Some("aluno")), STAFF),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            evaluate_guard(&authenticated(Some("superuser")), ALUNO),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn gate_invalidates_superseded_tokens() {
        let gate = ResolutionGate::new();
        let first = gate.begin();
        assert!(gate.is_current(first));

        let second = gate.begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }
}
