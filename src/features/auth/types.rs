//! Request/response types for the backend auth endpoints, the persisted
//! session shape, and the application role model. Role strings come from the
//! `usuarios` table; anything outside the recognized set carries no access.

use serde::{Deserialize, Serialize};

/// Recognized application roles. Any other `tipo` value is treated as
/// unauthorized for every guarded route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Superuser,
    Admin,
    Aluno,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "superuser" => Some(Role::Superuser),
            "admin" => Some(Role::Admin),
            "aluno" => Some(Role::Aluno),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superuser => "superuser",
            Role::Admin => "admin",
            Role::Aluno => "aluno",
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Superuser | Role::Admin)
    }
}

/// Authenticated identity as issued by the backend auth service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

/// Live authentication grant. Expiry is managed by the backend; the client
/// only carries the token material.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
    pub refresh_token: Option<String>,
}

/// Password-grant response: session fields at the top level plus the user.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(flatten)]
    pub session: Session,
    pub user: AuthUser,
}

/// Credentials submitted to the password and signup endpoints.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Session payload persisted in local storage between visits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: AuthUser,
    pub session: Session,
}

/// The signup endpoint answers with a bare user when email confirmation is
/// pending, or a full session envelope when the account is auto-confirmed.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SignUpPayload {
    WithSession { user: AuthUser },
    Bare(AuthUser),
}

impl SignUpPayload {
    pub fn into_user(self) -> AuthUser {
        match self {
            SignUpPayload::WithSession { user } => user,
            SignUpPayload::Bare(user) => user,
        }
    }
}

/// Application-level user record keyed by the principal id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: String,
    pub nome: Option<String>,
    pub tipo: Option<String>,
    pub matricula: Option<String>,
    pub cpf: Option<String>,
}

impl Profile {
    pub fn role(&self) -> Option<Role> {
        self.tipo.as_deref().and_then(Role::parse)
    }
}

/// At-most-one contract for single-row queries: zero rows or more than one
/// both resolve to absent.
pub fn exactly_one<T>(mut rows: Vec<T>) -> Option<T> {
    if rows.len() == 1 { rows.pop() } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(tipo: Option<&str>) -> Profile {
        Profile {
            id: "u1".to_string(),
            nome: Some("Ana".to_string()),
            tipo: tipo.map(str::to_string),
            matricula: None,
            cpf: None,
        }
    }

    #[test]
    fn role_parses_recognized_values_only() {
        assert_eq!(Role::parse("superuser"), Some(Role::Superuser));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("aluno"), Some(Role::Aluno));
        assert_eq!(Role::parse("coordinator"), None);
        assert_eq!(Role::parse("ADMIN"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn profile_role_treats_unknown_tipo_as_absent() {
        assert_eq!(profile(Some("aluno")).role(), Some(Role::Aluno));
        assert_eq!(profile(Some("coordinator")).role(), None);
        assert_eq!(profile(None).role(), None);
    }

    #[test]
    fn token_response_flattens_session_fields() {
        let json = r#"{
            "access_token": "tok",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "ref",
            "user": {"id": "u1", "email": "ana@ifpass.app"}
        }"#;
        let parsed: TokenResponse = serde_json::from_str(json).expect("token response");
        assert_eq!(parsed.session.access_token, "tok");
        assert_eq!(parsed.user.id, "u1");
        assert_eq!(parsed.user.email.as_deref(), Some("ana@ifpass.app"));
    }

    #[test]
    fn signup_payload_accepts_both_shapes() {
        let bare = r#"{"id": "u2", "email": "novo@ifpass.app"}"#;
        let parsed: SignUpPayload = serde_json::from_str(bare).expect("bare user");
        assert_eq!(parsed.into_user().id, "u2");

        let with_session = r#"{
            "access_token": "tok",
            "user": {"id": "u3", "email": null}
        }"#;
        let parsed: SignUpPayload = serde_json::from_str(with_session).expect("session envelope");
        assert_eq!(parsed.into_user().id, "u3");
    }

    #[test]
    fn exactly_one_rejects_zero_and_multiple_rows() {
        assert_eq!(exactly_one(Vec::<u8>::new()), None);
        assert_eq!(exactly_one(vec![7]), Some(7));
        assert_eq!(exactly_one(vec![1, 2]), None);
    }
}
