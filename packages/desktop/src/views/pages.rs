//! Route components. Each one wraps a shared view from `ui` and turns its
//! callbacks into navigation.

use dioxus::prelude::*;
use store::PostId;
use ui::views::{HomeView, PostDetailView, PostEditorView, PostListView};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HomeView {
            on_browse: move |_| {
                nav.push(Route::Posts {});
            },
            on_open_post: move |id| {
                nav.push(Route::PostDetail { id });
            },
        }
    }
}

#[component]
pub fn Posts() -> Element {
    let nav = use_navigator();

    rsx! {
        PostListView {
            on_open_post: move |id| {
                nav.push(Route::PostDetail { id });
            },
        }
    }
}

#[component]
pub fn PostDetail(id: PostId) -> Element {
    let nav = use_navigator();

    rsx! {
        PostDetailView {
            key: "{id}",
            id,
            on_navigate_posts: move |_| {
                nav.push(Route::Posts {});
            },
            on_edit_post: move |id| {
                nav.push(Route::EditPost { id });
            },
            on_open_post: move |id| {
                nav.push(Route::PostDetail { id });
            },
        }
    }
}

#[component]
pub fn CreatePost() -> Element {
    let nav = use_navigator();

    rsx! {
        PostEditorView {
            on_saved: move |_| {
                nav.push(Route::Posts {});
            },
            on_cancel: move |_| {
                nav.push(Route::Posts {});
            },
        }
    }
}

#[component]
pub fn EditPost(id: PostId) -> Element {
    let nav = use_navigator();

    rsx! {
        PostEditorView {
            key: "{id}",
            id,
            on_saved: move |id| {
                nav.push(Route::PostDetail { id });
            },
            on_cancel: move |_| {
                nav.push(Route::PostDetail { id });
            },
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center gap-4",
            h1 { class: "text-4xl font-bold", "Page not found" }
            p { class: "text-gray-500 dark:text-gray-400", "Nothing lives at /{path}." }
            Link { class: "text-indigo-600 hover:text-indigo-700", to: Route::Home {}, "Go home" }
        }
    }
}
