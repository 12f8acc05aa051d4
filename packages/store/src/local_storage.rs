//! # Browser localStorage: web persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It wraps `window.localStorage` through [`web_sys::Storage`], so
//! values survive page reloads and are shared by every tab of the origin.
//!
//! ## Error handling
//!
//! Opening fails when there is no `window` or when the browser refuses access
//! to storage (some privacy modes). Quota errors on `set` are returned as
//! [`StoreError::Unavailable`]; the blog store logs them and keeps running on
//! its in-memory snapshot.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::{Result, StoreError};
use crate::storage::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the origin's local storage.
    pub fn open() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Unavailable(format!("{err:?}"))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}
