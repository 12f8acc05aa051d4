use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use store::query::read_time_at;
use store::{Post, PostId};

use crate::use_config;

/// Image shown when a post has none.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1499750310159-529800cf2c5a?auto=format&fit=crop&w=1350&q=80";

/// "March 4, 2025"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn image_or_fallback(post: &Post) -> &str {
    if post.image.is_empty() {
        FALLBACK_IMAGE
    } else {
        &post.image
    }
}

/// Summary card used by the home page, the post list and related posts.
#[component]
pub fn PostCard(post: Post, on_open: EventHandler<PostId>) -> Element {
    let config = use_config();
    let minutes = read_time_at(&post.content, config.reading.words_per_minute);
    let date = format_date(&post.date);
    let image = image_or_fallback(&post).to_string();
    let category = if post.category.is_empty() {
        "General".to_string()
    } else {
        post.category.clone()
    };
    let id = post.id;

    rsx! {
        article {
            class: "group cursor-pointer bg-white dark:bg-slate-800 rounded-2xl overflow-hidden shadow-sm hover:shadow-xl border border-gray-100 dark:border-slate-700 transition-all flex flex-col",
            onclick: move |_| on_open.call(id),
            img {
                class: "h-48 w-full object-cover group-hover:scale-105 transition-transform",
                src: "{image}",
                alt: "{post.title}",
            }
            div {
                class: "p-6 flex flex-col gap-3 flex-1",
                span {
                    class: "self-start bg-indigo-50 dark:bg-indigo-900/30 text-indigo-700 dark:text-indigo-300 px-3 py-1 rounded-full text-xs font-medium",
                    "{category}"
                }
                h3 {
                    class: "text-xl font-bold group-hover:text-indigo-600 transition-colors",
                    "{post.title}"
                }
                p { class: "text-gray-500 dark:text-gray-400 text-sm line-clamp-3", "{post.excerpt}" }
                if !post.tags.is_empty() {
                    div {
                        class: "flex flex-wrap gap-2",
                        for tag in post.tags.iter().take(3) {
                            span {
                                key: "{tag}",
                                class: "text-xs text-gray-500 dark:text-gray-400",
                                "#{tag}"
                            }
                        }
                    }
                }
                div {
                    class: "mt-auto pt-4 flex items-center justify-between text-xs text-gray-500 dark:text-gray-400 border-t border-gray-100 dark:border-slate-700",
                    span { class: "font-medium text-gray-700 dark:text-gray-200", "{post.author}" }
                    span { "{date} · {minutes} min read" }
                }
            }
        }
    }
}
