//! Client helpers for the event and registration tables. Endpoint paths and
//! projections stay centralized here; the backend enforces row-level access.

use crate::app_lib::{AppError, api::service_headers, get_json, post_json_empty};
use crate::features::auth::client::access_token;
use crate::features::events::types::{Event, EventFlags, NewRegistration};
use serde::Deserialize;

#[derive(Deserialize)]
struct RegistrationRef {
    #[allow(dead_code)]
    id: i64,
}

/// Fetches the full event list ordered by date.
pub async fn list_events() -> Result<Vec<Event>, AppError> {
    get_json(
        "/rest/v1/eventos?select=id,titulo,data,total_vagas,vagas_disponiveis,inscricao,ativo&order=data.asc",
        &headers(),
    )
    .await
}

/// Fetches only the status flags, enough for the stat cards.
pub async fn list_event_flags() -> Result<Vec<EventFlags>, AppError> {
    get_json("/rest/v1/eventos?select=id,ativo,inscricao", &headers()).await
}

/// Counts the principal's registrations.
pub async fn count_registrations(user_id: &str) -> Result<usize, AppError> {
    let path = format!("/rest/v1/inscricao?select=id&usuario_id=eq.{user_id}");
    let rows: Vec<RegistrationRef> = get_json(&path, &headers()).await?;
    Ok(rows.len())
}

/// Registers the principal for an event. Seat accounting lives backend-side;
/// callers refetch the list after a confirmed insert.
pub async fn register(user_id: &str, event_id: i64) -> Result<(), AppError> {
    let record = NewRegistration {
        usuario_id: user_id.to_string(),
        evento_id: event_id,
    };
    let mut headers = headers();
    headers.push(("Prefer".to_string(), "return=minimal".to_string()));
    post_json_empty("/rest/v1/inscricao", &record, &headers).await
}

fn headers() -> Vec<(String, String)> {
    service_headers(access_token().as_deref())
}
