//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps every key in
//! its own file. It is used on desktop to retain posts and the theme across
//! app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── blog_posts      # JSON array of posts
//! └── theme           # "light" or "dark"
//! ```
//!
//! ## Platform data directories
//!
//! Launchers use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/alphablog/` |
//! | Linux | `~/.local/share/alphablog/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\alphablog\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.key_path(key)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlogStore, ManualClock, PostDraft};

    #[test]
    fn test_missing_key_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("alphablog"));
        assert!(store.get("theme").unwrap().is_none());
        // Removing an absent key is not an error
        store.remove("theme").unwrap();
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("alphablog");

        let clock = ManualClock::at_millis(1_700_000_000_000);
        let mut blog = BlogStore::initialize(FileStore::new(base.clone()), clock.clone(), || false);
        let id = blog.add_post(PostDraft {
            title: "From disk".into(),
            author: "Ann".into(),
            content: "Persisted between runs".into(),
            ..Default::default()
        });
        blog.toggle_theme();

        // Re-open from same directory
        let reopened = BlogStore::initialize(FileStore::new(base), clock, || false);
        assert_eq!(reopened.posts(), blog.posts());
        assert_eq!(reopened.post(id).unwrap().title, "From disk");
        assert_eq!(reopened.theme(), crate::Theme::Dark);
    }
}
