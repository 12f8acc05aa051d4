use dioxus::prelude::*;
use ui::views::PostListView;

use crate::Route;

#[component]
pub fn Posts() -> Element {
    let nav = use_navigator();

    rsx! {
        document::Title { "All Blogs | alphaBlog" }
        PostListView {
            on_open_post: move |id| {
                nav.push(Route::PostDetail { id });
            },
        }
    }
}
