//! # Query and derivation helpers over a post slice
//!
//! Pure functions used by the views to derive what they display from the
//! store's current snapshot. None of them mutate their input and none of them
//! fail: odd input (an out-of-range page, a zero page size, an unknown tag)
//! simply produces an empty result.

use std::collections::HashSet;

use crate::models::Post;

/// Reading speed used for read-time estimates.
pub const WORDS_PER_MINUTE: u32 = 200;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Categories always offered by the list filter, ahead of those found in posts.
pub const FIXED_CATEGORIES: [&str; 4] = [ALL_CATEGORIES, "Technology", "Lifestyle", "Education"];

pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Number of whitespace-separated words. Non-empty text counts as at least one
/// word, even if it is only whitespace.
pub fn word_count(content: &str) -> usize {
    if content.is_empty() {
        return 0;
    }
    content.split_whitespace().count().max(1)
}

/// Estimated minutes to read `content` at [`WORDS_PER_MINUTE`], rounded up.
pub fn read_time(content: &str) -> u32 {
    read_time_at(content, WORDS_PER_MINUTE)
}

/// Like [`read_time`] with a configurable speed. A speed of zero falls back to
/// the default.
pub fn read_time_at(content: &str, words_per_minute: u32) -> u32 {
    let wpm = if words_per_minute == 0 {
        WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    let words = u32::try_from(word_count(content)).unwrap_or(u32::MAX);
    words.div_ceil(wpm)
}

/// Criteria of the post list filter. All clauses must match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostFilter {
    /// Case-insensitive substring of title or content. Empty matches all.
    pub search: String,
    /// Category name, or [`ALL_CATEGORIES`].
    pub category: String,
    /// Exact tag that must be present.
    pub tag: Option<String>,
}

impl Default for PostFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            tag: None,
        }
    }
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        self.matches_search(post) && self.matches_category(post) && self.matches_tag(post)
    }

    fn matches_search(&self, post: &Post) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        post.title.to_lowercase().contains(&needle) || post.content.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, post: &Post) -> bool {
        self.category == ALL_CATEGORIES
            || (!post.category.is_empty()
                && post.category.to_lowercase() == self.category.to_lowercase())
    }

    fn matches_tag(&self, post: &Post) -> bool {
        match &self.tag {
            Some(tag) => post.has_tag(tag),
            None => true,
        }
    }
}

/// Posts matching `filter`, in their original order.
pub fn filter_posts<'a>(posts: &'a [Post], filter: &PostFilter) -> Vec<&'a Post> {
    posts.iter().filter(|p| filter.matches(p)).collect()
}

/// One page of a collection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number that was requested
    pub number: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// `ceil(len / page_size)`, zero when `page_size` is zero.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// Slice `[(page - 1) * page_size, page * page_size)` of `items`, clipped to
/// the collection. Pages outside `1..=total_pages` come back empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let slice = if page == 0 || start >= items.len() {
        &items[..0]
    } else {
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    };
    Page {
        items: slice,
        number: page,
        total_pages,
    }
}

/// Up to `limit` other posts in exactly the same category as `current`.
pub fn related_posts<'a>(posts: &'a [Post], current: &Post, limit: usize) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| p.category == current.category && p.id != current.id)
        .take(limit)
        .collect()
}

/// `fixed` followed by every other non-empty category in first-seen order.
pub fn distinct_categories(posts: &[Post], fixed: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    fixed
        .iter()
        .copied()
        .chain(posts.iter().map(|p| p.category.as_str()))
        .filter(|c| !c.is_empty() && seen.insert(*c))
        .map(str::to_string)
        .collect()
}

/// Every tag used by any post, de-duplicated in first-seen order.
pub fn distinct_tags(posts: &[Post]) -> Vec<String> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .flat_map(|p| p.tags.iter())
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

/// The first `limit` distinct tags, as offered by the tag filter.
pub fn popular_tags(posts: &[Post], limit: usize) -> Vec<String> {
    let mut tags = distinct_tags(posts);
    tags.truncate(limit);
    tags
}

/// The newest `count` posts, shown on the home page.
pub fn featured_posts(posts: &[Post], count: usize) -> &[Post] {
    &posts[..count.min(posts.len())]
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::models::PostDraft;

    fn post(id: u64, title: &str, category: &str, tags: &[&str]) -> Post {
        Post::from_draft(
            id,
            DateTime::from_timestamp_millis(id as i64).unwrap(),
            PostDraft {
                title: title.to_string(),
                category: category.to_string(),
                content: format!("Body of {title}"),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            },
        )
    }

    fn sample() -> Vec<Post> {
        vec![
            post(1, "Rust ownership", "Technology", &["rust", "memory"]),
            post(2, "Morning routines", "Lifestyle", &["habits"]),
            post(3, "Borrow checker tips", "technology", &["rust"]),
            post(4, "Untitled", "", &[]),
        ]
    }

    #[test]
    fn test_read_time() {
        assert_eq!(read_time(""), 0);
        assert_eq!(read_time("one"), 1);
        assert_eq!(read_time("   "), 1);
        assert_eq!(read_time(&"word ".repeat(200)), 1);
        assert_eq!(read_time(&"word ".repeat(201)), 2);
        assert_eq!(read_time(" spaced\n\tout   words "), 1);
        assert_eq!(read_time_at(&"word ".repeat(100), 50), 2);
        assert_eq!(read_time_at("word", 0), 1);
    }

    #[test]
    fn test_default_filter_is_identity() {
        let posts = sample();
        let filtered = filter_posts(&posts, &PostFilter::default());
        let ids: Vec<u64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let posts = sample();
        let filter = PostFilter {
            search: "RUST".into(),
            ..Default::default()
        };
        let ids: Vec<u64> = filter_posts(&posts, &filter).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);

        // Content matches too
        let filter = PostFilter {
            search: "body of morning".into(),
            ..Default::default()
        };
        assert_eq!(filter_posts(&posts, &filter)[0].id, 2);
    }

    #[test]
    fn test_filter_category_and_tag() {
        let posts = sample();
        let filter = PostFilter {
            category: "TECHNOLOGY".into(),
            ..Default::default()
        };
        let ids: Vec<u64> = filter_posts(&posts, &filter).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let filter = PostFilter {
            category: "Technology".into(),
            tag: Some("memory".into()),
            ..Default::default()
        };
        let ids: Vec<u64> = filter_posts(&posts, &filter).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);

        let filter = PostFilter {
            tag: Some("Rust".into()),
            ..Default::default()
        };
        assert!(filter_posts(&posts, &filter).is_empty());
    }

    #[test]
    fn test_paginate_thirteen_by_six() {
        let items: Vec<u32> = (1..=13).collect();

        let pages: Vec<Page<'_, u32>> = (1..=3).map(|n| paginate(&items, n, 6)).collect();
        assert!(pages.iter().all(|p| p.total_pages == 3));
        assert_eq!(pages[2].items, &[13]);

        let joined: Vec<u32> = pages.iter().flat_map(|p| p.items.iter().copied()).collect();
        assert_eq!(joined, items);

        assert!(!pages[0].has_previous());
        assert!(pages[0].has_next());
        assert!(pages[2].has_previous());
        assert!(!pages[2].has_next());
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=4).collect();
        assert!(paginate(&items, 0, 6).items.is_empty());
        assert!(paginate(&items, 2, 6).items.is_empty());
        assert!(paginate(&items, usize::MAX, 6).items.is_empty());
        assert!(paginate(&items, 1, 0).items.is_empty());
        assert_eq!(paginate(&items, 1, 0).total_pages, 0);
        assert_eq!(paginate::<u32>(&[], 1, 6).total_pages, 0);
    }

    #[test]
    fn test_related_posts() {
        let mut posts = sample();
        posts.push(post(5, "Tokio", "Technology", &[]));
        posts.push(post(6, "Serde", "Technology", &[]));
        posts.push(post(7, "Axum", "Technology", &[]));

        let current = posts[0].clone();
        let ids: Vec<u64> = related_posts(&posts, &current, 3).iter().map(|p| p.id).collect();
        // Exact category match only; "technology" (post 3) differs in case
        assert_eq!(ids, vec![5, 6, 7]);

        let lonely = post(9, "Alone", "Travel", &[]);
        assert!(related_posts(&posts, &lonely, 3).is_empty());
    }

    #[test]
    fn test_distinct_categories() {
        let posts = sample();
        let categories = distinct_categories(&posts, &FIXED_CATEGORIES);
        assert_eq!(
            categories,
            vec!["All", "Technology", "Lifestyle", "Education", "technology"]
        );
    }

    #[test]
    fn test_distinct_and_popular_tags() {
        let posts = sample();
        assert_eq!(distinct_tags(&posts), vec!["rust", "memory", "habits"]);
        assert_eq!(popular_tags(&posts, 2), vec!["rust", "memory"]);
    }

    #[test]
    fn test_featured_posts() {
        let posts = sample();
        assert_eq!(featured_posts(&posts, 3).len(), 3);
        assert_eq!(featured_posts(&posts, 10).len(), 4);
        assert!(featured_posts(&[], 3).is_empty());
    }
}
