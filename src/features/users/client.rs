//! Client helpers for the user table. These functions keep endpoint paths
//! centralized and assume the backend enforces authorization.

use crate::app_lib::{AppError, api::service_headers, delete_empty, get_json, post_json_empty};
use crate::features::auth::client::access_token;
use crate::features::users::types::{NewProfile, UserRecord, UserRole};

/// Fetches the full user list for the admin table.
pub async fn list_users() -> Result<Vec<UserRecord>, AppError> {
    get_json("/rest/v1/usuarios?select=id,nome,tipo,matricula", &headers()).await
}

/// Fetches the role projection used by the dashboard.
pub async fn list_user_roles() -> Result<Vec<UserRole>, AppError> {
    get_json("/rest/v1/usuarios?select=id,nome,tipo", &headers()).await
}

/// Inserts the profile row for a freshly created auth identity.
pub async fn create_profile(profile: &NewProfile) -> Result<(), AppError> {
    let mut headers = headers();
    headers.push(("Prefer".to_string(), "return=minimal".to_string()));
    post_json_empty("/rest/v1/usuarios", profile, &headers).await
}

/// Deletes a user row by id after basic input validation.
pub async fn delete_user(id: &str) -> Result<(), AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Identificador de usuário vazio.".to_string()));
    }

    delete_empty(&format!("/rest/v1/usuarios?id=eq.{trimmed}"), &headers()).await
}

fn headers() -> Vec<(String, String)> {
    service_headers(access_token().as_deref())
}
