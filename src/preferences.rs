//! User preferences persisted in the browser's `localStorage`.

const KEY_PREFIX: &str = "ai-content-analyzer.";

fn storage_key(key: &str) -> String {
    format!("{}{}", KEY_PREFIX, key)
}

fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "No browser window available".to_string())?
        .local_storage()
        .map_err(|e| format!("localStorage is blocked: {:?}", e))?
        .ok_or_else(|| "localStorage is unavailable".to_string())
}

pub fn get_preference(key: &str) -> Result<Option<String>, String> {
    local_storage()?
        .get_item(&storage_key(key))
        .map_err(|e| format!("Failed to read '{}': {:?}", key, e))
}

pub fn set_preference(key: &str, value: &str) -> Result<(), String> {
    local_storage()?
        .set_item(&storage_key(key), value)
        .map_err(|e| format!("Failed to save '{}': {:?}", key, e))
}

pub fn remove_preference(key: &str) -> Result<(), String> {
    local_storage()?
        .remove_item(&storage_key(key))
        .map_err(|e| format!("Failed to clear '{}': {:?}", key, e))
}

/// Read a preference, logging instead of failing; used during startup.
pub fn load_or_none(key: &str) -> Option<String> {
    match get_preference(key) {
        Ok(value) => value.filter(|v| !v.trim().is_empty()),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}
