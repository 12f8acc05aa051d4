//! Example posts used when nothing (or nothing readable) is persisted.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Comment, Post};

const WELCOME_CONTENT: &str = "# Welcome to alphaBlog\n\n\
alphaBlog is a small blog that keeps everything in local storage. Posts are \
written in **Markdown**, so you can format them quickly.\n\n\
## Features included:\n\
- Routing\n\
- State Management\n\
- Component Reusability\n\n\
```rust\nprintln!(\"Hello World\");\n```";

const STATE_CONTENT: &str = "## State Management\n\n\
State management allows your application to be dynamic and interactive. A \
single store passed down through context gives every view the same snapshot \
without threading props through each level.\n\n\
> \"State is the heart of an application.\"\n\n\
Check out the official docs for more.";

/// The fixed fallback collection, dated relative to `now`.
pub fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "Welcome to alphaBlog".to_string(),
            excerpt: "This is a sample blog post to get you started with alphaBlog.".to_string(),
            content: WELCOME_CONTENT.to_string(),
            author: "Admin".to_string(),
            date: now,
            image: "https://images.unsplash.com/photo-1499750310159-529800cf2c5a?auto=format&fit=crop&w=1350&q=80".to_string(),
            category: "Technology".to_string(),
            tags: vec!["Rust".to_string(), "Dioxus".to_string(), "Frontend".to_string()],
            likes: 12,
            comments: vec![Comment {
                id: 1,
                author: "User1".to_string(),
                text: "Great post!".to_string(),
                date: now,
            }],
        },
        Post {
            id: 2,
            title: "Mastering State Management".to_string(),
            excerpt: "Understanding state is crucial for any UI developer.".to_string(),
            content: STATE_CONTENT.to_string(),
            author: "Dev Guru".to_string(),
            date: now - Duration::days(1),
            image: "https://images.unsplash.com/photo-1555099962-4199c345e5dd?auto=format&fit=crop&w=1350&q=80".to_string(),
            category: "Coding".to_string(),
            tags: vec!["State".to_string(), "Context".to_string(), "Hooks".to_string()],
            likes: 5,
            comments: Vec::new(),
        },
    ]
}
