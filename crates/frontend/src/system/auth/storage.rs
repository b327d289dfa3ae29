use contracts::system::auth::AuthUser;
use web_sys::window;

const SESSION_KEY: &str = "auth_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session user to localStorage
pub fn save_session(user: &AuthUser) {
    if let Some(storage) = get_local_storage() {
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
    }
}

/// Load the session user from localStorage, if any
pub fn load_session() -> Option<AuthUser> {
    let json = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear the stored session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
