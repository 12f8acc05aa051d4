use dioxus::prelude::*;
use store::{BlogConfig, Theme};

use crate::storage::{make_store, AppStore};

/// Provides the blog store and configuration to every view below it.
///
/// The store is created once, as `Signal<AppStore>`, so any component that
/// reads it re-renders after a mutation. The wrapper carries the `dark` class
/// used by the dark-mode styles.
#[component]
pub fn BlogProvider(config: BlogConfig, children: Element) -> Element {
    use_context_provider(move || config);
    let blog: Signal<AppStore> = use_context_provider(|| Signal::new(make_store()));

    let theme_class = match blog.read().theme() {
        Theme::Dark => "dark",
        Theme::Light => "",
    };

    rsx! {
        div {
            class: theme_class,
            div {
                class: "min-h-screen bg-gray-50 text-gray-900 dark:bg-slate-900 dark:text-gray-100 transition-colors",
                {children}
            }
        }
    }
}

/// Consume the `Signal<AppStore>` from context.
pub fn use_blog() -> Signal<AppStore> {
    use_context::<Signal<AppStore>>()
}

/// Consume the [`BlogConfig`] from context.
pub fn use_config() -> BlogConfig {
    use_context::<BlogConfig>()
}
