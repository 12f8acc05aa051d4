use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaSun};
use dioxus_free_icons::Icon;
use store::Theme;

use crate::use_blog;

/// Top navigation bar. Platform packages pass their router links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "sticky top-0 z-50 bg-white/80 dark:bg-slate-900/80 backdrop-blur border-b border-gray-100 dark:border-slate-800",
            div {
                class: "max-w-6xl mx-auto px-4 h-16 flex items-center justify-between gap-6",
                span {
                    class: "text-2xl font-extrabold text-indigo-600 dark:text-indigo-400",
                    "alphaBlog"
                }
                div {
                    class: "flex items-center gap-6 text-sm font-medium",
                    {children}
                    ThemeToggle {}
                }
            }
        }
    }
}

/// Light/dark switch bound to the store's theme.
#[component]
pub fn ThemeToggle() -> Element {
    let mut blog = use_blog();
    let theme = blog.read().theme();

    rsx! {
        button {
            class: "p-2 rounded-full hover:bg-gray-100 dark:hover:bg-slate-800 transition-colors",
            title: if theme == Theme::Dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                let theme = blog.write().toggle_theme();
                tracing::debug!("Theme switched to {theme}");
            },
            if theme == Theme::Dark {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}
