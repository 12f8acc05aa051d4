pub mod blog;
pub mod clock;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod query;
pub mod seed;
pub mod storage;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use blog::{BlogStore, Snapshot, SubscriptionId};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{BlogConfig, ConfigError};
pub use error::StoreError;
pub use form::{FormField, PostForm, ValidationErrors};
pub use models::{Comment, CommentId, Post, PostDraft, PostId, PostPatch, Theme};
pub use query::{Page, PostFilter};
pub use storage::KeyValueStore;
