use dioxus::prelude::*;
use store::form::EDITOR_CATEGORIES;
use store::{FormField, PostForm, PostId, ValidationErrors};

use crate::{use_blog, Markdown};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-xl bg-gray-50 dark:bg-slate-900 border focus:bg-white dark:focus:bg-slate-800 focus:outline-none focus:ring-2 focus:ring-indigo-500 transition";

fn input_class(invalid: bool) -> String {
    if invalid {
        format!("{INPUT_CLASS} border-red-500")
    } else {
        format!("{INPUT_CLASS} border-gray-200 dark:border-slate-700")
    }
}

/// Apply one edit to the form and drop the stale error on that field.
fn edit(
    form: &mut Signal<PostForm>,
    errors: &mut Signal<ValidationErrors>,
    field: Option<FormField>,
    apply: impl FnOnce(&mut PostForm),
) {
    apply(&mut *form.write());
    if let Some(field) = field {
        if errors.peek().get(field).is_some() {
            errors.write().clear(field);
        }
    }
}

/// Create a new post (`id` is `None`) or edit an existing one.
///
/// Input is validated before the store is touched; failures are shown under
/// each field until the user edits it again.
#[component]
pub fn PostEditorView(
    #[props(default)] id: Option<PostId>,
    /// Called with the post id after a successful save.
    on_saved: EventHandler<PostId>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut blog = use_blog();
    let mut form = use_signal(move || match id {
        Some(id) => blog
            .peek()
            .post(id)
            .map(PostForm::from_post)
            .unwrap_or_default(),
        None => PostForm::default(),
    });
    let mut errors = use_signal(ValidationErrors::default);
    let mut preview = use_signal(|| false);

    let missing = id.is_some_and(|id| blog.read().post(id).is_none());
    if missing {
        return rsx! {
            div {
                class: "text-center py-20 space-y-4",
                h2 { class: "text-2xl font-bold", "Post not found" }
                button {
                    class: "text-indigo-600 hover:text-indigo-700",
                    onclick: move |_| on_cancel.call(()),
                    "Back to posts"
                }
            }
        };
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let input = form();
        let saved = match id {
            Some(id) => input.into_patch().map(|patch| {
                blog.write().update_post(id, patch);
                id
            }),
            None => input.validate().map(|draft| blog.write().add_post(draft)),
        };
        match saved {
            Ok(id) => on_saved.call(id),
            Err(e) => {
                tracing::debug!("Post form rejected: {}", e);
                errors.set(e);
            }
        }
    };

    let current = form.read();
    let errs = errors.read();
    let title_error = errs.get(FormField::Title);
    let author_error = errs.get(FormField::Author);
    let excerpt_error = errs.get(FormField::Excerpt);
    let content_error = errs.get(FormField::Content);
    let mut categories: Vec<&str> = EDITOR_CATEGORIES.to_vec();
    if !current.category.is_empty() && !categories.contains(&current.category.as_str()) {
        categories.push(current.category.as_str());
    }
    let content_class = format!("{} font-mono text-sm", input_class(content_error.is_some()));
    let heading = if id.is_some() { "Edit Story" } else { "Write a Story" };

    rsx! {
        div {
            class: "max-w-3xl mx-auto",
            div {
                class: "mb-10",
                h1 { class: "text-3xl font-bold", "{heading}" }
                p {
                    class: "text-gray-500 dark:text-gray-400 mt-2",
                    if id.is_some() { "Update your content and keep it fresh." } else { "Share your ideas with the world." }
                }
            }

            form {
                class: "space-y-6 bg-white dark:bg-slate-800 p-8 rounded-3xl shadow-lg border border-gray-100 dark:border-slate-700",
                onsubmit: handle_submit,

                div {
                    label { r#for: "title", class: "block text-sm font-medium mb-1", "Title" }
                    input {
                        id: "title",
                        r#type: "text",
                        class: input_class(title_error.is_some()),
                        placeholder: "Enter an engaging title",
                        value: "{current.title}",
                        oninput: move |evt: FormEvent| {
                            edit(&mut form, &mut errors, Some(FormField::Title), |f| f.title = evt.value())
                        },
                    }
                    if let Some(message) = title_error {
                        p { class: "mt-1 text-sm text-red-500", "{message}" }
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    div {
                        label { r#for: "author", class: "block text-sm font-medium mb-1", "Author" }
                        input {
                            id: "author",
                            r#type: "text",
                            class: input_class(author_error.is_some()),
                            placeholder: "Your name",
                            value: "{current.author}",
                            oninput: move |evt: FormEvent| {
                                edit(&mut form, &mut errors, Some(FormField::Author), |f| f.author = evt.value())
                            },
                        }
                        if let Some(message) = author_error {
                            p { class: "mt-1 text-sm text-red-500", "{message}" }
                        }
                    }
                    div {
                        label { r#for: "category", class: "block text-sm font-medium mb-1", "Category" }
                        select {
                            id: "category",
                            class: input_class(false),
                            value: "{current.category}",
                            onchange: move |evt: FormEvent| {
                                edit(&mut form, &mut errors, None, |f| f.category = evt.value())
                            },
                            for name in categories {
                                option {
                                    key: "{name}",
                                    value: "{name}",
                                    selected: current.category == name,
                                    "{name}"
                                }
                            }
                        }
                    }
                }

                div {
                    label { r#for: "image", class: "block text-sm font-medium mb-1", "Cover Image URL" }
                    input {
                        id: "image",
                        r#type: "url",
                        class: input_class(false),
                        placeholder: "https://...",
                        value: "{current.image}",
                        oninput: move |evt: FormEvent| {
                            edit(&mut form, &mut errors, None, |f| f.image = evt.value())
                        },
                    }
                }

                div {
                    label { r#for: "tags", class: "block text-sm font-medium mb-1", "Tags (comma separated)" }
                    input {
                        id: "tags",
                        r#type: "text",
                        class: input_class(false),
                        placeholder: "rust, web, tutorial",
                        value: "{current.tags}",
                        oninput: move |evt: FormEvent| {
                            edit(&mut form, &mut errors, None, |f| f.tags = evt.value())
                        },
                    }
                }

                div {
                    label { r#for: "excerpt", class: "block text-sm font-medium mb-1", "Excerpt" }
                    textarea {
                        id: "excerpt",
                        rows: "2",
                        class: input_class(excerpt_error.is_some()),
                        placeholder: "A short summary shown on cards",
                        value: "{current.excerpt}",
                        oninput: move |evt: FormEvent| {
                            edit(&mut form, &mut errors, Some(FormField::Excerpt), |f| f.excerpt = evt.value())
                        },
                    }
                    if let Some(message) = excerpt_error {
                        p { class: "mt-1 text-sm text-red-500", "{message}" }
                    }
                }

                div {
                    div {
                        class: "flex justify-between items-center mb-1",
                        label { r#for: "content", class: "block text-sm font-medium", "Content (Markdown)" }
                        button {
                            r#type: "button",
                            class: "text-sm text-indigo-600 hover:text-indigo-700 font-medium",
                            onclick: move |_| preview.set(!preview()),
                            if preview() { "Edit" } else { "Preview" }
                        }
                    }
                    if preview() {
                        Markdown {
                            source: current.content.clone(),
                            class: "min-h-[300px] p-4 rounded-xl border border-gray-200 dark:border-slate-700".to_string(),
                        }
                    } else {
                        textarea {
                            id: "content",
                            rows: "12",
                            class: content_class,
                            placeholder: "Write your story in Markdown...",
                            value: "{current.content}",
                            oninput: move |evt: FormEvent| {
                                edit(&mut form, &mut errors, Some(FormField::Content), |f| f.content = evt.value())
                            },
                        }
                    }
                    if let Some(message) = content_error {
                        p { class: "mt-1 text-sm text-red-500", "{message}" }
                    }
                }

                div {
                    class: "flex justify-end gap-4 pt-4",
                    button {
                        r#type: "button",
                        class: "px-6 py-3 rounded-xl hover:bg-gray-100 dark:hover:bg-slate-700 font-medium",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "px-6 py-3 rounded-xl bg-indigo-600 text-white font-medium hover:bg-indigo-700 shadow-lg",
                        if id.is_some() { "Update Post" } else { "Publish Post" }
                    }
                }
            }
        }
    }
}
