//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

mod storage;
pub use storage::{load_config, make_store, AppStore};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::data_dir;

pub mod views;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

mod provider;
pub use provider::{use_blog, use_config, BlogProvider};

mod navbar;
pub use navbar::{Navbar, ThemeToggle};

pub mod markdown;
pub use markdown::{render_markdown, Markdown};

pub mod post_card;
pub use post_card::PostCard;
