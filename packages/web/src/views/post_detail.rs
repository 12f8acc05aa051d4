use dioxus::prelude::*;
use store::PostId;
use ui::views::PostDetailView;

use crate::Route;

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
