use dioxus::prelude::*;
use store::PostId;
use ui::views::PostEditorView;

use crate::Route;

#[component]
pub fn CreatePost() -> Element {
    let nav = use_navigator();

    rsx! {
        document::Title { "Write a Story | alphaBlog" }
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
        document::Title { "Edit Story | alphaBlog" }
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
