//! # BlogStore: the post collection and theme preference
//!
//! [`BlogStore`] owns the ordered post collection (newest first) and the
//! light/dark theme, persists both through a [`KeyValueStore`], and notifies
//! subscribers with a borrowed [`Snapshot`] after every change. The same logic
//! runs against `localStorage` in the browser, a data directory on desktop, or
//! a [`crate::MemoryStore`] in tests.
//!
//! ## Initialization
//!
//! [`initialize`](BlogStore::initialize) reads the `blog_posts` key. A missing
//! value, a failed read or a value that does not parse yields the seed
//! collection; an unparsable value is logged and removed. The `theme` key is
//! read the same way, falling back to the host colour-scheme preference. Both
//! values are written back immediately so storage always mirrors memory.
//!
//! ## Write path
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`add_post`](BlogStore::add_post) | Prepends a new post with a fresh id and date, zero likes and no comments. |
//! | [`update_post`](BlogStore::update_post) | Shallow-merges a [`PostPatch`]. |
//! | [`delete_post`](BlogStore::delete_post) | Removes a post together with its comments. |
//! | [`toggle_like`](BlogStore::toggle_like) | Adds one like. There is no per-user state, so it never decrements. |
//! | [`add_comment`](BlogStore::add_comment) | Appends a guest comment. |
//! | [`toggle_theme`](BlogStore::toggle_theme) | Flips light/dark. |
//!
//! Every effective mutation re-serializes the whole collection (or the theme)
//! before returning and then notifies subscribers. Lookups of unknown ids are
//! silent no-ops: nothing is written and nobody is notified.
//!
//! ## Ids
//!
//! Ids are the creation time in milliseconds. Two creations inside the same
//! millisecond would collide, so a new id is bumped past the largest id already
//! in use (per post for comments).

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::models::{Comment, CommentId, Post, PostDraft, PostId, PostPatch, Theme, GUEST_AUTHOR};
use crate::seed::seed_posts;
use crate::storage::{KeyValueStore, POSTS_KEY, THEME_KEY};

/// Read-only view of the store at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot<'a> {
    pub posts: &'a [Post],
    pub theme: Theme,
}

/// Handle returned by [`BlogStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Snapshot<'_>)>;

/// The blog's post collection and theme preference, backed by a KeyValueStore.
pub struct BlogStore<S: KeyValueStore, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    posts: Vec<Post>,
    theme: Theme,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: KeyValueStore, C: Clock> BlogStore<S, C> {
    /// Load persisted state, falling back to seed posts and the host theme.
    ///
    /// `prefers_dark` is only called when no theme has been persisted.
    pub fn initialize(storage: S, clock: C, prefers_dark: impl FnOnce() -> bool) -> Self {
        let posts = load_posts(&storage).unwrap_or_else(|| {
            tracing::info!("No saved posts, using seed data");
            seed_posts(clock.now())
        });
        let theme =
            load_theme(&storage).unwrap_or_else(|| Theme::from_prefers_dark(prefers_dark()));

        let store = Self {
            storage,
            clock,
            posts,
            theme,
            listeners: Vec::new(),
            next_subscription: 0,
        };
        store.persist_posts();
        store.persist_theme();
        tracing::debug!("Loaded {} posts, theme {}", store.posts.len(), store.theme);
        store
    }

    /// All posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            posts: &self.posts,
            theme: self.theme,
        }
    }

    /// Create a post from a draft and put it first. Returns the new id.
    pub fn add_post(&mut self, draft: PostDraft) -> PostId {
        let now = self.clock.now();
        let id = next_id(now, self.posts.iter().map(|p| p.id));
        self.posts.insert(0, Post::from_draft(id, now, draft));
        tracing::info!("Created post {id}");
        self.commit_posts();
        id
    }

    /// Merge `patch` over the post with `id`. Returns `false` if there is none.
    ///
    /// An empty patch leaves storage and subscribers untouched.
    pub fn update_post(&mut self, id: PostId, patch: PostPatch) -> bool {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if patch.is_empty() {
            return true;
        }
        patch.apply(post);
        tracing::info!("Updated post {id}");
        self.commit_posts();
        true
    }

    /// Remove the post with `id`. Deleting an unknown id changes nothing.
    pub fn delete_post(&mut self, id: PostId) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        if self.posts.len() == before {
            return false;
        }
        tracing::info!("Deleted post {id}");
        self.commit_posts();
        true
    }

    /// Add one like to the post with `id`.
    pub fn toggle_like(&mut self, id: PostId) -> bool {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        post.likes = post.likes.saturating_add(1);
        self.commit_posts();
        true
    }

    /// Append a guest comment to the post with `post_id`.
    ///
    /// Returns the comment id, or `None` if the post does not exist or the
    /// text is blank.
    pub fn add_comment(&mut self, post_id: PostId, text: impl Into<String>) -> Option<CommentId> {
        let text = text.into();
        if text.trim().is_empty() {
            tracing::debug!("Ignoring blank comment on post {post_id}");
            return None;
        }
        let now = self.clock.now();
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        let id = next_id(now, post.comments.iter().map(|c| c.id));
        post.comments.push(Comment {
            id,
            author: GUEST_AUTHOR.to_string(),
            text,
            date: now,
        });
        self.commit_posts();
        Some(id)
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.persist_theme();
        self.notify();
        self.theme
    }

    /// Register a listener called with the new snapshot after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Snapshot<'_>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn commit_posts(&mut self) {
        self.persist_posts();
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = Snapshot {
            posts: &self.posts,
            theme: self.theme,
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }

    fn persist_posts(&self) {
        let result = serde_json::to_string(&self.posts)
            .map_err(StoreError::from)
            .and_then(|json| self.storage.set(POSTS_KEY, &json));
        if let Err(e) = result {
            tracing::warn!("Failed to persist posts: {}", e);
        }
    }

    fn persist_theme(&self) {
        if let Err(e) = self.storage.set(THEME_KEY, self.theme.as_str()) {
            tracing::warn!("Failed to persist theme: {}", e);
        }
    }
}

impl<S: KeyValueStore, C: Clock> std::fmt::Debug for BlogStore<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogStore")
            .field("posts", &self.posts.len())
            .field("theme", &self.theme)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Timestamp id, bumped past the largest id already taken. When that would
/// overflow, the lowest free id is used instead.
fn next_id(now: DateTime<Utc>, taken: impl Iterator<Item = u64>) -> u64 {
    let stamp = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let taken: HashSet<u64> = taken.collect();
    match taken.iter().max() {
        Some(&max) if max >= stamp => max.checked_add(1).unwrap_or_else(|| {
            tracing::warn!("Id {max} is taken, falling back to the lowest free id");
            lowest_free_id(&taken)
        }),
        _ => stamp,
    }
}

fn lowest_free_id(taken: &HashSet<u64>) -> u64 {
    (1..=u64::MAX).find(|id| !taken.contains(id)).unwrap_or(0)
}

fn load_posts<S: KeyValueStore>(storage: &S) -> Option<Vec<Post>> {
    let raw = match storage.get(POSTS_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!("Failed to read saved posts: {}", e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(posts) => Some(posts),
        Err(e) => {
            tracing::error!("Failed to parse blog posts from local storage: {}", e);
            if let Err(e) = storage.remove(POSTS_KEY) {
                tracing::warn!("Failed to discard corrupt posts: {}", e);
            }
            None
        }
    }
}

fn load_theme<S: KeyValueStore>(storage: &S) -> Option<Theme> {
    let raw = match storage.get(THEME_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!("Failed to read saved theme: {}", e);
            return None;
        }
    };
    let theme = Theme::parse(&raw);
    if theme.is_none() {
        tracing::warn!("Ignoring unknown theme {:?}", raw);
    }
    theme
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::Duration;

    use super::*;
    use crate::clock::ManualClock;
    use crate::memory::MemoryStore;
    use crate::query::read_time;

    const NOW: i64 = 1_700_000_000_000;

    fn seeded() -> (BlogStore<MemoryStore, ManualClock>, MemoryStore, ManualClock) {
        let storage = MemoryStore::new();
        let clock = ManualClock::at_millis(NOW);
        let store = BlogStore::initialize(storage.clone(), clock.clone(), || false);
        (store, storage, clock)
    }

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            author: "A".to_string(),
            excerpt: "E".to_string(),
            content: "Some content".to_string(),
            category: "Technology".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_seed_when_nothing_persisted() {
        let (store, storage, _) = seeded();

        assert_eq!(store.posts().len(), 2);
        assert_eq!(store.posts()[0].id, 1);
        assert_eq!(store.posts()[0].comments.len(), 1);
        assert_eq!(store.posts()[1].id, 2);
        assert!(store.posts()[1].comments.is_empty());
        assert_eq!(store.theme(), Theme::Light);

        // Seed is written back immediately
        assert!(storage.get(POSTS_KEY).unwrap().is_some());
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_corrupt_posts_fall_back_to_seed() {
        let storage = MemoryStore::with_entry(POSTS_KEY, "{not json");
        let store = BlogStore::initialize(storage.clone(), ManualClock::at_millis(NOW), || false);

        assert_eq!(store.posts().len(), 2);
        let persisted = storage.get(POSTS_KEY).unwrap().unwrap();
        let reparsed: Vec<Post> = serde_json::from_str(&persisted).unwrap();
        assert_eq!(reparsed, store.posts());
    }

    #[test]
    fn test_theme_from_host_preference_only_when_absent() {
        let store = BlogStore::initialize(MemoryStore::new(), ManualClock::at_millis(NOW), || true);
        assert_eq!(store.theme(), Theme::Dark);

        let storage = MemoryStore::with_entry(THEME_KEY, "light");
        let store = BlogStore::initialize(storage, ManualClock::at_millis(NOW), || {
            panic!("host preference consulted despite saved theme")
        });
        assert_eq!(store.theme(), Theme::Light);

        let storage = MemoryStore::with_entry(THEME_KEY, "sepia");
        let store = BlogStore::initialize(storage, ManualClock::at_millis(NOW), || true);
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_add_post_prepends() {
        let (mut store, _, clock) = seeded();

        for n in 0..3 {
            clock.advance(Duration::seconds(1));
            let id = store.add_post(draft(&format!("Post {n}")));
            let first = &store.posts()[0];
            assert_eq!(first.id, id);
            assert_eq!(first.title, format!("Post {n}"));
            assert_eq!(first.likes, 0);
            assert!(first.comments.is_empty());
            assert_eq!(first.date, clock.now());
            assert_eq!(store.posts().len(), 3 + n);
        }
    }

    #[test]
    fn test_add_post_scenario() {
        let (mut store, _, _) = seeded();

        let id = store.add_post(PostDraft {
            title: "T".into(),
            author: "A".into(),
            excerpt: "E".into(),
            content: "word ".repeat(60),
            category: "Technology".into(),
            tags: vec!["x".into(), "y".into()],
            ..Default::default()
        });

        assert_eq!(store.posts().len(), 3);
        let post = &store.posts()[0];
        assert_eq!(post.id, id);
        assert_eq!(post.id, NOW as u64);
        assert_eq!(post.tags, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(read_time(&post.content), 1);
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let (mut store, _, _) = seeded();
        let a = store.add_post(draft("a"));
        let b = store.add_post(draft("b"));
        assert_ne!(a, b);
        assert!(b > a);

        let c1 = store.add_comment(a, "one").unwrap();
        let c2 = store.add_comment(a, "two").unwrap();
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_null_fields_keep_saved_posts() {
        let saved = r#"[{"id":42,"title":"Mine","date":"2024-01-02T03:04:05.000Z","likes":null,"comments":[],"tags":null}]"#;
        let storage = MemoryStore::with_entry(POSTS_KEY, saved);
        let mut store = BlogStore::initialize(storage, ManualClock::at_millis(NOW), || false);

        let ids: Vec<PostId> = store.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![42]);
        assert!(store.toggle_like(42));
        assert_eq!(store.post(42).unwrap().likes, 1);
    }

    #[test]
    fn test_max_id_does_not_overflow() {
        let mut taken = seed_posts(DateTime::from_timestamp_millis(NOW).unwrap());
        taken[0].id = u64::MAX;
        taken[0].comments[0].id = u64::MAX;
        let storage = MemoryStore::with_entry(POSTS_KEY, &serde_json::to_string(&taken).unwrap());
        let mut store = BlogStore::initialize(storage, ManualClock::at_millis(NOW), || false);

        let a = store.add_post(PostDraft::default());
        let b = store.add_post(PostDraft::default());
        assert_eq!(a, 1);
        assert_eq!(b, 3);

        let c = store.add_comment(u64::MAX, "still works").unwrap();
        assert_eq!(c, 1);
        assert_eq!(store.post(u64::MAX).unwrap().comments.len(), 2);
    }

    #[test]
    fn test_update_post_merges() {
        let (mut store, _, _) = seeded();
        let before = store.post(2).unwrap().clone();

        assert!(store.update_post(
            2,
            PostPatch {
                title: Some("Renamed".into()),
                ..Default::default()
            }
        ));

        let after = store.post(2).unwrap();
        assert_eq!(after.title, "Renamed");
        assert_eq!(after.content, before.content);
        assert_eq!(after.date, before.date);
        assert_eq!(after.likes, before.likes);
        assert_eq!(after.id, 2);

        assert!(!store.update_post(99, PostPatch::default()));
    }

    #[test]
    fn test_empty_patch_is_silent() {
        let (mut store, _, _) = seeded();
        let calls = Rc::new(RefCell::new(0));
        let sink = calls.clone();
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(PostPatch::default().is_empty());
        assert!(store.update_post(2, PostPatch::default()));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_delete_post_is_idempotent() {
        let (mut store, storage, _) = seeded();

        assert!(store.delete_post(1));
        assert!(store.post(1).is_none());
        let persisted = storage.get(POSTS_KEY).unwrap();

        assert!(!store.delete_post(1));
        assert_eq!(store.posts().len(), 1);
        assert_eq!(storage.get(POSTS_KEY).unwrap(), persisted);
    }

    #[test]
    fn test_toggle_like_increments() {
        let (mut store, _, _) = seeded();
        let start = store.post(2).unwrap().likes;

        for _ in 0..4 {
            assert!(store.toggle_like(2));
        }
        assert_eq!(store.post(2).unwrap().likes, start + 4);
        assert!(!store.toggle_like(404));
    }

    #[test]
    fn test_add_comment_appends() {
        let (mut store, _, _) = seeded();
        assert_eq!(store.post(1).unwrap().comments.len(), 1);

        let id = store.add_comment(1, "Nice!").unwrap();

        let comments = &store.post(1).unwrap().comments;
        assert_eq!(comments.len(), 2);
        let last = comments.last().unwrap();
        assert_eq!(last.text, "Nice!");
        assert_eq!(last.id, id);
        assert_eq!(last.author, GUEST_AUTHOR);

        assert!(store.add_comment(404, "Lost").is_none());
        assert!(store.add_comment(1, "   ").is_none());
        assert_eq!(store.post(1).unwrap().comments.len(), 2);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let (mut store, storage, _) = seeded();
        assert_eq!(store.toggle_theme(), Theme::Dark);
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(store.toggle_theme(), Theme::Light);
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_persisted_roundtrip() {
        let (mut store, storage, clock) = seeded();
        let id = store.add_post(PostDraft {
            tags: vec!["rust".into()],
            ..draft("Round trip")
        });
        clock.advance(Duration::minutes(5));
        store.add_comment(id, "First!");
        store.toggle_like(id);
        store.delete_post(2);

        let reopened = BlogStore::initialize(storage, clock, || true);
        assert_eq!(reopened.posts(), store.posts());
        assert_eq!(reopened.theme(), Theme::Light);
    }

    #[test]
    fn test_subscribers_notified_per_change() {
        let (mut store, _, _) = seeded();
        let seen: Rc<RefCell<Vec<(usize, Theme)>>> = Rc::default();

        let sink = seen.clone();
        let sub = store.subscribe(move |snap| {
            sink.borrow_mut().push((snap.posts.len(), snap.theme));
        });

        store.add_post(draft("new"));
        store.toggle_theme();
        store.delete_post(404);
        assert_eq!(*seen.borrow(), vec![(3, Theme::Light), (3, Theme::Dark)]);

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.toggle_like(1);
        assert_eq!(seen.borrow().len(), 2);
    }
}
