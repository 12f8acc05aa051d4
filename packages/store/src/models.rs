//! # Domain models for posts and comments
//!
//! Defines the data held by [`crate::BlogStore`] and persisted under the
//! `blog_posts` key. These types are `Serialize + Deserialize` so the whole
//! collection can be written to the key-value store as a single JSON array.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Post`] | A blog article: editable metadata and markdown body, plus the store-owned `id`, `date`, `likes` and `comments`. |
//! | [`Comment`] | A reader comment appended to a post. |
//! | [`PostDraft`] | The editor-supplied fields of a new post. The store fills in everything else. |
//! | [`PostPatch`] | A typed partial update. Every `Some` field overwrites the post's value, every `None` leaves it alone. |
//! | [`Theme`] | The light/dark display preference, persisted as `"light"` or `"dark"`. |
//!
//! Older persisted values may lack optional fields (`image`, `tags`, `likes`,
//! `comments` ...) or hold `null` in them; both fall back to empty defaults on
//! load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Post identifier, derived from the creation time in milliseconds.
pub type PostId = u64;

/// Comment identifier, unique within its parent post.
pub type CommentId = u64;

/// Author recorded on comments in the absence of real accounts.
pub const GUEST_AUTHOR: &str = "Guest";

/// Deserialize `null` as `T::default()`. Pair with `#[serde(default)]` so a
/// missing key behaves the same.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A blog post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    /// Markdown body
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    /// Creation time, never changed by updates
    pub date: DateTime<Utc>,
    /// Image URL or `data:` URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Build a fresh post from a draft. Likes start at zero, comments empty.
    pub fn from_draft(id: PostId, date: DateTime<Utc>, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            author: draft.author,
            date,
            image: draft.image,
            category: draft.category,
            tags: draft.tags,
            likes: 0,
            comments: Vec::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A comment on a post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    pub date: DateTime<Utc>,
}

/// Editable fields of a post being created.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub category: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub tags: Vec<String>,
}

/// Partial update of a post's editable fields.
///
/// `id`, `date`, `likes` and `comments` are owned by the store and cannot be
/// patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge this patch over `post`.
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(image) = self.image {
            post.image = image;
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
    }
}

impl From<PostDraft> for PostPatch {
    fn from(draft: PostDraft) -> Self {
        Self {
            title: Some(draft.title),
            author: Some(draft.author),
            category: Some(draft.category),
            excerpt: Some(draft.excerpt),
            content: Some(draft.content),
            image: Some(draft.image),
            tags: Some(draft.tags),
        }
    }
}

/// Display theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse the persisted literal. Anything else is unknown.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
