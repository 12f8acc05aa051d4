use dioxus::prelude::*;
use ui::views::HomeView;

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
