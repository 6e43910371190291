//! Local persistence of the session between visits. Only the token material
//! and the non-sensitive principal summary are stored; the backend remains
//! the authority on whether the token is still valid.

use super::types::StoredSession;

const SESSION_KEY: &str = "ifpass.session";

pub fn save(stored: &StoredSession) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(payload) = serde_json::to_string(stored) {
        let _ = storage.set_item(SESSION_KEY, &payload);
    }
}

pub fn load() -> Option<StoredSession> {
    let storage = local_storage()?;
    let payload = storage.get_item(SESSION_KEY).ok().flatten()?;
    serde_json::from_str(&payload).ok()
}

pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
