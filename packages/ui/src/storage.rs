//! Platform wiring for the blog store.
//!
//! Returns a [`store::BlogStore`] backed by the appropriate [`KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`],
//!   falling back to an in-memory store when storage is blocked
//! - **Desktop** (native): one file per key under `<data_dir>/alphablog/`
//!
//! The host colour-scheme preference and the optional config file are resolved
//! here as well, so views never touch platform APIs.

use store::{BlogConfig, BlogStore, KeyValueStore, SystemClock};

/// The store type shared through context.
pub type AppStore = BlogStore<Box<dyn KeyValueStore>, SystemClock>;

/// Open the platform store and load the persisted posts and theme.
pub fn make_store() -> AppStore {
    let mut blog = BlogStore::initialize(open_storage(), SystemClock, prefers_dark);
    watch_theme(&mut blog);
    blog
}

fn open_storage() -> Box<dyn KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        match store::LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                tracing::warn!("localStorage unavailable, posts will not be saved: {}", e);
                Box::new(store::MemoryStore::new())
            }
        }
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Box::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(store::FileStore::new(data_dir()))
    }
}

/// Platform data directory for the app: `<data_dir>/alphablog`.
#[cfg(not(target_arch = "wasm32"))]
pub fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("alphablog")
}

/// Read `alphablog.toml` from the data directory, or defaults.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> BlogConfig {
    let path = data_dir().join(BlogConfig::filename());
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BlogConfig::default(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return BlogConfig::default();
        }
    };
    BlogConfig::from_toml(&text).unwrap_or_else(|e| {
        tracing::warn!("Ignoring {}: {}", path.display(), e);
        BlogConfig::default()
    })
}

/// The web build has no config file.
#[cfg(target_arch = "wasm32")]
pub fn load_config() -> BlogConfig {
    BlogConfig::default()
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn prefers_dark() -> bool {
    false
}

/// Keep the `dark` class on `<html>` in sync with the stored theme.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn watch_theme(blog: &mut AppStore) {
    apply_theme(blog.theme());
    blog.subscribe(|snapshot| apply_theme(snapshot.theme));
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn watch_theme(_blog: &mut AppStore) {}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn apply_theme(theme: store::Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = match theme {
        store::Theme::Dark => classes.add_1("dark"),
        store::Theme::Light => classes.remove_1("dark"),
    };
    if let Err(e) = result {
        tracing::warn!("Failed to apply theme: {:?}", e);
    }
}
