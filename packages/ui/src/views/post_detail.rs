use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaHeart, FaPenToSquare, FaTrashCan};
use dioxus_free_icons::Icon;
use store::query::{read_time_at, related_posts};
use store::PostId;

use super::ConfirmDialog;
use crate::post_card::{format_date, image_or_fallback};
use crate::{use_blog, use_config, Markdown, PostCard};

/// A single post: body, likes, comments and related posts.
///
/// Platform packages provide navigation callbacks.
#[component]
pub fn PostDetailView(
    id: PostId,
    /// Called after deleting the post, and by the back link.
    on_navigate_posts: EventHandler<()>,
    /// Called by the edit button.
    on_edit_post: EventHandler<PostId>,
    /// Called when a related post is clicked.
    on_open_post: EventHandler<PostId>,
) -> Element {
    let mut blog = use_blog();
    let config = use_config();
    let mut comment_text = use_signal(String::new);
    let mut confirm_delete = use_signal(|| false);

    let handle_like = move |_| {
        blog.write().toggle_like(id);
    };

    let handle_comment = move |evt: FormEvent| {
        evt.prevent_default();
        let text = comment_text();
        if text.trim().is_empty() {
            return;
        }
        if blog.write().add_comment(id, text).is_some() {
            comment_text.set(String::new());
        }
    };

    let handle_delete = move |_| {
        confirm_delete.set(false);
        if blog.write().delete_post(id) {
            tracing::info!("Post {id} deleted from detail view");
        }
        on_navigate_posts.call(());
    };

    let store = blog.read();
    let Some(post) = store.post(id) else {
        return rsx! {
            div {
                class: "text-center py-20 space-y-4",
                h2 { class: "text-2xl font-bold", "Post not found" }
                button {
                    class: "text-indigo-600 hover:text-indigo-700",
                    onclick: move |_| on_navigate_posts.call(()),
                    "Back to posts"
                }
            }
        };
    };

    let minutes = read_time_at(&post.content, config.reading.words_per_minute);
    let date = format_date(&post.date);
    let image = image_or_fallback(post).to_string();
    let related = related_posts(store.posts(), post, config.related.limit);
    let keywords = if post.tags.is_empty() {
        post.category.clone()
    } else {
        post.tags.join(", ")
    };
    let comment_count = post.comments.len();
    let initial = post.author.chars().next().unwrap_or('A');
    let author = if post.author.is_empty() {
        "Anonymous"
    } else {
        post.author.as_str()
    };

    rsx! {
        document::Title { "{post.title} | alphaBlog" }
        document::Meta { name: "description", content: "{post.excerpt}" }
        document::Meta { name: "keywords", content: "{keywords}" }

        div {
            class: "space-y-16",
            article {
                class: "max-w-4xl mx-auto space-y-8",
                button {
                    class: "text-gray-500 hover:text-indigo-600 dark:text-gray-400 font-medium transition-colors",
                    onclick: move |_| on_navigate_posts.call(()),
                    "← Back to Blogs"
                }

                div {
                    class: "space-y-4 text-center",
                    span {
                        class: "inline-block bg-indigo-50 dark:bg-indigo-900/30 text-indigo-700 dark:text-indigo-300 px-3 py-1 rounded-full text-sm font-medium",
                        if post.category.is_empty() { "General" } else { "{post.category}" }
                    }
                    h1 { class: "text-3xl md:text-5xl font-extrabold leading-tight", "{post.title}" }
                    div {
                        class: "flex items-center justify-center gap-4 text-gray-500 dark:text-gray-400",
                        span {
                            class: "w-10 h-10 rounded-full bg-gradient-to-tr from-indigo-600 to-pink-500 flex items-center justify-center font-bold text-white",
                            "{initial}"
                        }
                        span { class: "font-medium text-gray-900 dark:text-gray-200", "{author}" }
                        span { "•" }
                        span { "{date}" }
                        span { "•" }
                        span { "{minutes} min read" }
                    }
                }

                img {
                    class: "w-full h-[300px] md:h-[500px] object-cover rounded-3xl shadow-2xl",
                    src: "{image}",
                    alt: "{post.title}",
                }

                Markdown { source: post.content.clone(), class: "mx-auto".to_string() }

                if !post.tags.is_empty() {
                    div {
                        class: "flex flex-wrap gap-2 pt-4 border-t border-gray-100 dark:border-slate-800",
                        span { class: "text-gray-500 dark:text-gray-400 font-medium mr-2", "Tags:" }
                        for tag in post.tags.iter() {
                            span {
                                key: "{tag}",
                                class: "bg-gray-100 dark:bg-slate-800 text-gray-600 dark:text-gray-300 px-3 py-1 rounded-lg text-sm",
                                "#{tag}"
                            }
                        }
                    }
                }

                div {
                    class: "flex items-center justify-between border-y border-gray-100 dark:border-slate-800 py-4",
                    button {
                        class: "flex items-center gap-2 px-4 py-2 rounded-full bg-pink-50 dark:bg-pink-900/20 text-pink-600 hover:bg-pink-100 transition-colors",
                        onclick: handle_like,
                        Icon { icon: FaHeart, width: 14, height: 14 }
                        span { "{post.likes} Likes" }
                    }
                    div {
                        class: "flex items-center gap-2",
                        button {
                            class: "flex items-center gap-2 px-4 py-2 rounded-full hover:bg-gray-100 dark:hover:bg-slate-800",
                            title: "Edit post",
                            onclick: move |_| on_edit_post.call(id),
                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                            span { "Edit" }
                        }
                        button {
                            class: "flex items-center gap-2 px-4 py-2 rounded-full text-red-600 hover:bg-red-50 dark:hover:bg-red-900/20",
                            title: "Delete post",
                            onclick: move |_| confirm_delete.set(true),
                            Icon { icon: FaTrashCan, width: 14, height: 14 }
                            span { "Delete" }
                        }
                    }
                }

                // Comments
                section {
                    class: "space-y-6",
                    h3 { class: "text-2xl font-bold", "Comments ({comment_count})" }
                    form {
                        class: "flex flex-col gap-3",
                        onsubmit: handle_comment,
                        textarea {
                            class: "w-full p-4 rounded-xl border border-gray-200 dark:border-slate-700 bg-white dark:bg-slate-800 focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            rows: "3",
                            placeholder: "Share your thoughts...",
                            value: "{comment_text}",
                            oninput: move |evt: FormEvent| comment_text.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "self-end px-6 py-2 rounded-full bg-indigo-600 text-white font-medium hover:bg-indigo-700 disabled:opacity-50",
                            disabled: comment_text.read().trim().is_empty(),
                            "Post Comment"
                        }
                    }
                    if post.comments.is_empty() {
                        p { class: "text-gray-500 dark:text-gray-400 italic", "No comments yet. Be the first!" }
                    }
                    for comment in post.comments.iter() {
                        div {
                            key: "{comment.id}",
                            class: "bg-gray-50 dark:bg-slate-800 p-4 rounded-xl",
                            div {
                                class: "flex justify-between text-sm mb-2",
                                span { class: "font-semibold", "{comment.author}" }
                                span { class: "text-gray-500 dark:text-gray-400", {format_date(&comment.date)} }
                            }
                            p { "{comment.text}" }
                        }
                    }
                }
            }

            if !related.is_empty() {
                section {
                    class: "max-w-6xl mx-auto space-y-8",
                    h2 { class: "text-3xl font-bold", "Related Posts" }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                        for other in related.iter() {
                            PostCard {
                                key: "{other.id}",
                                post: (*other).clone(),
                                on_open: on_open_post,
                            }
                        }
                    }
                }
            }
        }

        if confirm_delete() {
            ConfirmDialog {
                title: "Delete this post?",
                message: "The post and its comments will be removed permanently.",
                on_confirm: handle_delete,
                on_cancel: move |_| confirm_delete.set(false),
            }
        }
    }
}
