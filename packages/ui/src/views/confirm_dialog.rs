use dioxus::prelude::*;

/// Modal asking the user to confirm a destructive action.
///
/// Clicking the backdrop or "Cancel" calls `on_cancel`. The card swallows its
/// own clicks so they never reach the backdrop.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-[2000] flex items-center justify-center bg-black/40 backdrop-blur-sm",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "bg-white dark:bg-slate-800 rounded-2xl shadow-2xl max-w-md w-full mx-4 p-6",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h3 { class: "text-lg font-bold mb-2", "{title}" }
                p { class: "text-gray-500 dark:text-gray-400 mb-6", "{message}" }
                div {
                    class: "flex justify-end gap-3",
                    button {
                        class: "px-4 py-2 rounded-lg hover:bg-gray-100 dark:hover:bg-slate-700",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 rounded-lg bg-red-600 text-white hover:bg-red-700",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
