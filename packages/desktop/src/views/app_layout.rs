use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let route = use_route::<Route>();
    let link_class = |active: bool| {
        if active {
            "px-3 py-2 rounded-lg text-indigo-600 dark:text-indigo-400"
        } else {
            "px-3 py-2 rounded-lg text-gray-600 dark:text-gray-300 hover:text-indigo-600"
        }
    };
    let on_posts = matches!(route, Route::Posts {} | Route::PostDetail { .. } | Route::EditPost { .. });

    rsx! {
        Navbar {
            Link { class: link_class(route == Route::Home {}), to: Route::Home {}, "Home" }
            Link { class: link_class(on_posts), to: Route::Posts {}, "Blogs" }
            Link { class: link_class(route == Route::CreatePost {}), to: Route::CreatePost {}, "Write" }
            Link { class: link_class(route == Route::About {}), to: Route::About {}, "About" }
        }
        main {
            class: "max-w-6xl mx-auto px-4 py-10",
            Outlet::<Route> {}
        }
    }
}
