use gloo::storage::{LocalStorage, Storage};
use shared::session::{parse_cookie, AuthError, SessionStorage};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Session persistence backed by `document.cookie` and `localStorage`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn document() -> Result<HtmlDocument, AuthError> {
        gloo::utils::document()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| AuthError::Storage("document is not an HTML document".to_string()))
    }

    fn write_cookie(value: &str) -> Result<(), AuthError> {
        Self::document()?
            .set_cookie(value)
            .map_err(|e| AuthError::Storage(format!("cookie write failed: {:?}", e)))
    }
}

impl SessionStorage for BrowserStorage {
    fn cookie(&self, name: &str) -> Option<String> {
        let header = Self::document().ok()?.cookie().ok()?;
        parse_cookie(&header, name)
    }

    fn set_cookie(&mut self, name: &str, value: &str, max_age_secs: u64) -> Result<(), AuthError> {
        Self::write_cookie(&format!(
            "{}={}; path=/; max-age={}; SameSite=Lax",
            name, value, max_age_secs
        ))
    }

    fn clear_cookie(&mut self, name: &str) -> Result<(), AuthError> {
        Self::write_cookie(&format!("{}=; path=/; max-age=0", name))
    }

    fn local(&self, name: &str) -> Option<String> {
        LocalStorage::get::<String>(name).ok()
    }

    fn set_local(&mut self, name: &str, value: &str) -> Result<(), AuthError> {
        LocalStorage::set(name, value).map_err(|e| AuthError::Storage(e.to_string()))
    }

    fn remove_local(&mut self, name: &str) {
        LocalStorage::delete(name);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_values_round_trip() {
        let mut storage = BrowserStorage;
        storage.set_local("bankdash_test_key", "value").unwrap();
        assert_eq!(storage.local("bankdash_test_key").as_deref(), Some("value"));
        storage.remove_local("bankdash_test_key");
        assert_eq!(storage.local("bankdash_test_key"), None);
    }

    #[wasm_bindgen_test]
    fn test_cookie_round_trip() {
        let mut storage = BrowserStorage;
        storage.set_cookie("bankdash_test_cookie", "abc", 60).unwrap();
        assert_eq!(storage.cookie("bankdash_test_cookie").as_deref(), Some("abc"));
        storage.clear_cookie("bankdash_test_cookie").unwrap();
        assert_eq!(storage.cookie("bankdash_test_cookie"), None);
    }
}
