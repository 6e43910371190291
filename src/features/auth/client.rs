//! Client wrappers for the backend auth endpoints and the profile query.
//! These helpers centralize token handling and auth-change notifications so
//! route code never touches token material or request setup.

use crate::app_lib::{AppError, api::service_headers, get_json, post_empty, post_json};
use crate::features::auth::{
    changes, storage,
    types::{AuthUser, Credentials, Profile, Session, SignUpPayload, StoredSession, TokenResponse, exactly_one},
};
use leptos::logging::warn;

/// Authenticates with the password grant. On success the session is
/// persisted and subscribers are notified; the caller gets the new
/// principal/session pair.
pub async fn sign_in_with_password(
    email: &str,
    password: &str,
) -> Result<(AuthUser, Session), AppError> {
    let request = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response: TokenResponse = post_json(
        "/auth/v1/token?grant_type=password",
        &request,
        &service_headers(None),
    )
    .await?;

    let TokenResponse { session, user } = response;
    storage::save(&StoredSession {
        user: user.clone(),
        session: session.clone(),
    });
    changes::emit(&Some((user.clone(), session.clone())));
    Ok((user, session))
}

/// Restores the persisted session, revalidating the token with the backend.
/// Returns `None` when nothing is stored or the token is rejected; a
/// rejected token also clears the stale persisted state.
pub async fn current_session() -> Option<(AuthUser, Session)> {
    let stored = storage::load()?;
    let headers = service_headers(Some(&stored.session.access_token));

    match get_json::<AuthUser>("/auth/v1/user", &headers).await {
        Ok(user) => {
            storage::save(&StoredSession {
                user: user.clone(),
                session: stored.session.clone(),
            });
            Some((user, stored.session))
        }
        Err(AppError::Unauthorized) => {
            storage::clear();
            None
        }
        Err(err) => {
            warn!("session restore failed: {err}");
            None
        }
    }
}

/// Revokes the session server-side, then clears local state and notifies
/// subscribers regardless of the revocation outcome.
pub async fn sign_out() {
    if let Some(stored) = storage::load() {
        let headers = service_headers(Some(&stored.session.access_token));
        if let Err(err) = post_empty("/auth/v1/logout", &headers).await {
            warn!("logout request failed: {err}");
        }
    }
    storage::clear();
    changes::emit(&None);
}

/// Creates an auth identity for a new user. Any session the backend returns
/// for the new account is deliberately not stored: the operator's own
/// session stays authoritative while creating users.
pub async fn sign_up(email: &str, password: &str) -> Result<AuthUser, AppError> {
    let request = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    let payload: SignUpPayload =
        post_json("/auth/v1/signup", &request, &service_headers(None)).await?;
    Ok(payload.into_user())
}

/// Fetches the profile row for a principal: exactly one query with an
/// equality filter. Zero rows, multiple rows, or any transport error yield
/// `None` — failures never escape this boundary.
pub async fn fetch_profile(user_id: &str) -> Option<Profile> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return None;
    }

    let path = format!("/rest/v1/usuarios?id=eq.{user_id}&select=*");
    match get_json::<Vec<Profile>>(&path, &service_headers(access_token().as_deref())).await {
        Ok(rows) => exactly_one(rows),
        Err(err) => {
            warn!("profile fetch failed: {err}");
            None
        }
    }
}

/// Access token of the persisted session, if any. Feature clients use this
/// to authenticate table queries.
pub(crate) fn access_token() -> Option<String> {
    storage::load().map(|stored| stored.session.access_token)
}
