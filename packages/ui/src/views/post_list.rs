use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;
use store::query::{
    distinct_categories, filter_posts, paginate, popular_tags, ALL_CATEGORIES, FIXED_CATEGORIES,
};
use store::{PostFilter, PostId};

use crate::{use_blog, use_config, PostCard};

fn chip_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-full text-sm font-medium whitespace-nowrap bg-indigo-600 text-white shadow-md"
    } else {
        "px-4 py-2 rounded-full text-sm font-medium whitespace-nowrap bg-gray-50 dark:bg-slate-700 text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-slate-600"
    }
}

fn page_button_class(enabled: bool) -> &'static str {
    if enabled {
        "px-4 py-2 rounded-lg border bg-white dark:bg-slate-800 hover:bg-gray-50 dark:hover:bg-slate-700 dark:border-slate-600"
    } else {
        "px-4 py-2 rounded-lg border bg-gray-100 dark:bg-slate-800 text-gray-400 cursor-not-allowed dark:border-slate-700"
    }
}

/// All posts with search, category and tag filters and pagination.
///
/// Changing any filter goes back to the first page; picking a category clears
/// the tag filter.
#[component]
pub fn PostListView(on_open_post: EventHandler<PostId>) -> Element {
    let blog = use_blog();
    let config = use_config();
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| ALL_CATEGORIES.to_string());
    let mut tag = use_signal(|| Option::<String>::None);
    let mut page = use_signal(|| 1usize);

    let store = blog.read();
    let posts = store.posts();
    let categories = distinct_categories(posts, &FIXED_CATEGORIES);
    let tags = popular_tags(posts, config.listing.popular_tags);

    let filter = PostFilter {
        search: search(),
        category: category(),
        tag: tag(),
    };
    let filtered = filter_posts(posts, &filter);
    let current = paginate(&filtered, page(), config.listing.page_size);
    let total_pages = current.total_pages;
    let (has_previous, has_next) = (current.has_previous(), current.has_next());

    rsx! {
        div {
            class: "space-y-8",
            div {
                class: "text-center space-y-4",
                h1 { class: "text-4xl font-bold", "All Blogs" }
                p {
                    class: "text-gray-500 dark:text-gray-400 max-w-2xl mx-auto",
                    "Explore all thoughts, ideas, and stories from our community."
                }
            }

            // Filters
            div {
                class: "bg-white dark:bg-slate-800 p-6 rounded-2xl shadow-sm border border-gray-100 dark:border-slate-700 space-y-6",
                div {
                    class: "flex flex-col md:flex-row gap-4 justify-between items-center",
                    div {
                        class: "flex overflow-x-auto gap-2 w-full md:w-auto",
                        for name in categories {
                            button {
                                key: "{name}",
                                class: chip_class(filter.category == name),
                                onclick: {
                                    let name = name.clone();
                                    move |_| {
                                        category.set(name.clone());
                                        tag.set(None);
                                        page.set(1);
                                    }
                                },
                                "{name}"
                            }
                        }
                    }
                    div {
                        class: "relative w-full md:w-64",
                        span {
                            class: "absolute left-3 top-2.5 text-gray-400",
                            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                        }
                        input {
                            r#type: "text",
                            placeholder: "Search posts...",
                            class: "w-full pl-10 pr-4 py-2 rounded-full border border-gray-200 dark:border-slate-600 bg-white dark:bg-slate-900 focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            value: "{filter.search}",
                            oninput: move |evt: FormEvent| {
                                search.set(evt.value());
                                page.set(1);
                            },
                        }
                    }
                }

                if !tags.is_empty() {
                    div {
                        class: "flex flex-wrap gap-2 items-center border-t border-gray-100 dark:border-slate-700 pt-4",
                        span { class: "text-sm font-medium text-gray-500 dark:text-gray-400", "Popular Tags:" }
                        for name in tags {
                            button {
                                key: "{name}",
                                class: if filter.tag.as_deref() == Some(name.as_str()) {
                                    "text-xs px-2 py-1 rounded-md bg-indigo-100 dark:bg-indigo-900 text-indigo-700 dark:text-indigo-200"
                                } else {
                                    "text-xs px-2 py-1 rounded-md bg-gray-50 dark:bg-slate-700 text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-slate-600"
                                },
                                onclick: {
                                    let name = name.clone();
                                    move |_| {
                                        let next = if tag().as_deref() == Some(name.as_str()) {
                                            None
                                        } else {
                                            Some(name.clone())
                                        };
                                        tag.set(next);
                                        page.set(1);
                                    }
                                },
                                "#{name}"
                            }
                        }
                    }
                }
            }

            // Grid
            if current.items.is_empty() {
                div {
                    class: "text-center py-20 bg-white dark:bg-slate-800 rounded-3xl border border-dashed border-gray-200 dark:border-slate-700",
                    h3 { class: "text-sm font-medium", "No posts found" }
                    p {
                        class: "mt-1 text-sm text-gray-500 dark:text-gray-400",
                        "Try adjusting your search, category, or tags."
                    }
                }
            } else {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for post in current.items.iter() {
                        PostCard {
                            key: "{post.id}",
                            post: (*post).clone(),
                            on_open: on_open_post,
                        }
                    }
                }

                if total_pages > 1 {
                    div {
                        class: "flex justify-center mt-12 gap-2",
                        button {
                            class: page_button_class(has_previous),
                            disabled: !has_previous,
                            onclick: move |_| page.set(page().saturating_sub(1).max(1)),
                            "Previous"
                        }
                        for number in 1..=total_pages {
                            button {
                                key: "{number}",
                                class: if number == current.number {
                                    "w-10 h-10 rounded-lg font-medium bg-indigo-600 text-white shadow-md"
                                } else {
                                    "w-10 h-10 rounded-lg font-medium bg-white dark:bg-slate-800 border border-gray-200 dark:border-slate-600 hover:bg-gray-50 dark:hover:bg-slate-700"
                                },
                                onclick: move |_| page.set(number),
                                "{number}"
                            }
                        }
                        button {
                            class: page_button_class(has_next),
                            disabled: !has_next,
                            onclick: move |_| page.set((page() + 1).min(total_pages)),
                            "Next"
                        }
                    }
                }
            }
        }
    }
}
