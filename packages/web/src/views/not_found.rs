use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-50 dark:bg-slate-900 text-gray-900 dark:text-gray-100",
            h1 { class: "text-4xl font-bold", "Page not found" }
            p { class: "text-gray-500", "Nothing lives at /{path}." }
            Link { class: "text-indigo-600 hover:text-indigo-700", to: Route::Home {}, "Go home" }
        }
    }
}
