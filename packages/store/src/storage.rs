//! # Key-value persistence
//!
//! The blog core persists two string values, the post collection and the
//! theme preference, through the [`KeyValueStore`] trait. Implementations live
//! in sibling modules:
//!
//! | Backend | Platform | Module |
//! |---------|----------|--------|
//! | [`crate::MemoryStore`] | any (tests, fallback) | `memory` |
//! | [`crate::FileStore`] | desktop | `file_store` |
//! | `LocalStorage` | web (`wasm32` + `web` feature) | `local_storage` |
//!
//! Access is synchronous and unisolated. Two writers sharing one backend (two
//! browser tabs, for instance) are not coordinated: the last write wins.

use crate::error::Result;

/// Key holding the JSON-encoded post collection.
pub const POSTS_KEY: &str = "blog_posts";

/// Key holding the theme literal (`"light"` or `"dark"`).
pub const THEME_KEY: &str = "theme";

/// String-keyed persistence used by [`crate::BlogStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
