use dioxus::prelude::*;

/// Static page describing the app.
#[component]
pub fn AboutView() -> Element {
    rsx! {
        div {
            class: "max-w-3xl mx-auto space-y-6",
            h1 { class: "text-4xl font-bold", "About alphaBlog" }
            p {
                class: "text-lg text-gray-600 dark:text-gray-300",
                "alphaBlog is a small place to write and read stories. There is no account and no server: posts, likes and comments live in this device's local storage."
            }
            p {
                class: "text-gray-600 dark:text-gray-300",
                "Write in Markdown, tag your posts, and filter the list by category, tag or a quick search."
            }
        }
    }
}
