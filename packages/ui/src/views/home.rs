use dioxus::prelude::*;
use store::query::featured_posts;
use store::PostId;

use crate::{use_blog, use_config, PostCard};

/// Landing page: hero plus the newest posts.
#[component]
pub fn HomeView(
    /// Called by the "Browse all posts" button.
    on_browse: EventHandler<()>,
    /// Called when a featured post is clicked.
    on_open_post: EventHandler<PostId>,
) -> Element {
    let blog = use_blog();
    let config = use_config();
    let store = blog.read();
    let featured = featured_posts(store.posts(), config.listing.featured);

    rsx! {
        div {
            class: "space-y-16",
            section {
                class: "rounded-3xl bg-gradient-to-br from-indigo-600 to-pink-600 text-white px-8 py-20 text-center space-y-6",
                h1 { class: "text-4xl md:text-6xl font-extrabold", "Ideas worth sharing" }
                p {
                    class: "max-w-2xl mx-auto text-lg text-indigo-100",
                    "Stories, tutorials and notes from the community. Everything stays in your browser."
                }
                button {
                    class: "bg-white text-indigo-700 font-semibold px-6 py-3 rounded-full shadow-lg hover:shadow-xl transition",
                    onclick: move |_| on_browse.call(()),
                    "Browse all posts"
                }
            }

            section {
                class: "space-y-8",
                h2 { class: "text-3xl font-bold", "Latest posts" }
                if featured.is_empty() {
                    p { class: "text-gray-500 dark:text-gray-400", "Nothing published yet." }
                } else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                        for post in featured.iter() {
                            PostCard {
                                key: "{post.id}",
                                post: post.clone(),
                                on_open: on_open_post,
                            }
                        }
                    }
                }
            }
        }
    }
}
