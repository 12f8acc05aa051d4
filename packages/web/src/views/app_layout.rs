use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

const LINK_CLASS: &str = "px-3 py-2 rounded-lg text-sm font-medium text-gray-600 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400";

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div {
            class: "flex flex-col min-h-screen",
            Navbar {
                Link { class: LINK_CLASS, to: Route::Home {}, "Home" }
                Link { class: LINK_CLASS, to: Route::Posts {}, "Blogs" }
                Link { class: LINK_CLASS, to: Route::CreatePost {}, "Write" }
                Link { class: LINK_CLASS, to: Route::About {}, "About" }
            }
            main {
                class: "flex-1 w-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10",
                Outlet::<Route> {}
            }
            footer {
                class: "border-t border-gray-100 dark:border-slate-800 py-8 text-center text-sm text-gray-500 dark:text-gray-400",
                "alphaBlog. Posts are stored in this browser."
            }
        }
    }
}
