//! # Post editor form and its validation
//!
//! Views collect raw input in a [`PostForm`] and validate it before calling
//! [`crate::BlogStore::add_post`] or [`crate::BlogStore::update_post`]; the store
//! itself never sees invalid data. Failures are reported per field so the
//! editor can show each message under its input.
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | title | not blank | `Title is required` |
//! | author | not blank | `Author name is required` |
//! | excerpt | not blank | `Excerpt is required` |
//! | content | at least [`MIN_CONTENT_CHARS`] characters | `Content must be at least 50 characters long` |
//! | content | not blank | `Content is required` |

use std::fmt;

use thiserror::Error;

use crate::models::{Post, PostDraft, PostPatch};

pub const MIN_CONTENT_CHARS: usize = 50;

/// Category preselected in a new post form.
pub const DEFAULT_CATEGORY: &str = "Technology";

/// Categories offered by the editor.
pub const EDITOR_CATEGORIES: [&str; 6] = [
    "Technology",
    "Lifestyle",
    "Education",
    "Travel",
    "Health",
    "Business",
];

/// Editor fields that carry validation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Author,
    Excerpt,
    Content,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Title => "title",
            FormField::Author => "author",
            FormField::Excerpt => "excerpt",
            FormField::Content => "content",
        };
        f.write_str(name)
    }
}

/// Field-level validation failures, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("{} invalid field(s): {}", .errors.len(), field_list(.errors))]
pub struct ValidationErrors {
    errors: Vec<(FormField, &'static str)>,
}

fn field_list(errors: &[(FormField, &'static str)]) -> String {
    errors
        .iter()
        .map(|(field, _)| field.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    /// Forget the error on `field`, e.g. once the user edits it again.
    pub fn clear(&mut self, field: FormField) {
        self.errors.retain(|(f, _)| *f != field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.errors.iter().copied()
    }

    fn push(&mut self, field: FormField, message: &'static str) {
        self.errors.push((field, message));
    }
}

/// Raw editor input. `tags` is the comma-separated text box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub author: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image: String,
    pub tags: String,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            image: String::new(),
            tags: String::new(),
        }
    }
}

impl PostForm {
    /// Pre-fill the editor from an existing post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            category: post.category.clone(),
            image: post.image.clone(),
            tags: post.tags.join(", "),
        }
    }

    /// Check every rule without consuming the form.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.title.trim().is_empty() {
            errors.push(FormField::Title, "Title is required");
        }
        if self.author.trim().is_empty() {
            errors.push(FormField::Author, "Author name is required");
        }
        if self.excerpt.trim().is_empty() {
            errors.push(FormField::Excerpt, "Excerpt is required");
        }
        if self.content.chars().count() < MIN_CONTENT_CHARS {
            errors.push(
                FormField::Content,
                "Content must be at least 50 characters long",
            );
        } else if self.content.trim().is_empty() {
            errors.push(FormField::Content, "Content is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and turn the form into a draft for a new post.
    pub fn validate(self) -> Result<PostDraft, ValidationErrors> {
        self.check()?;
        let tags = parse_tags(&self.tags);
        Ok(PostDraft {
            title: self.title,
            author: self.author,
            category: self.category,
            excerpt: self.excerpt,
            content: self.content,
            image: self.image,
            tags,
        })
    }

    /// Validate and turn the form into a patch replacing every editable field.
    pub fn into_patch(self) -> Result<PostPatch, ValidationErrors> {
        self.validate().map(PostPatch::from)
    }
}

/// Split a comma-separated tag list, trimming and dropping empty entries.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PostForm {
        PostForm {
            title: "Hello".into(),
            author: "Ann".into(),
            excerpt: "Short".into(),
            content: "x".repeat(MIN_CONTENT_CHARS),
            tags: " rust, ,web ,".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = PostForm::default().validate().unwrap_err();
        assert_eq!(errors.get(FormField::Title), Some("Title is required"));
        assert_eq!(errors.get(FormField::Author), Some("Author name is required"));
        assert_eq!(errors.get(FormField::Excerpt), Some("Excerpt is required"));
        assert_eq!(
            errors.get(FormField::Content),
            Some("Content must be at least 50 characters long")
        );
        assert_eq!(errors.iter().count(), 4);
        assert_eq!(
            errors.to_string(),
            "4 invalid field(s): title, author, excerpt, content"
        );
    }

    #[test]
    fn test_blank_but_long_content_is_required() {
        let form = PostForm {
            content: " ".repeat(60),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Content), Some("Content is required"));
        assert_eq!(errors.get(FormField::Title), None);
    }

    #[test]
    fn test_valid_form_becomes_draft() {
        let draft = filled().validate().unwrap();
        assert_eq!(draft.title, "Hello");
        assert_eq!(draft.category, DEFAULT_CATEGORY);
        assert_eq!(draft.tags, vec!["rust", "web"]);
    }

    #[test]
    fn test_clear_single_error() {
        let mut errors = PostForm::default().check().unwrap_err();
        errors.clear(FormField::Title);
        assert!(errors.get(FormField::Title).is_none());
        assert!(errors.get(FormField::Author).is_some());
    }

    #[test]
    fn test_edit_roundtrip_through_form() {
        let draft = filled().validate().unwrap();
        let post = crate::Post::from_draft(
            10,
            chrono::DateTime::from_timestamp_millis(10).unwrap(),
            draft,
        );
        let form = PostForm::from_post(&post);
        assert_eq!(form.tags, "rust, web");

        let patch = form.into_patch().unwrap();
        assert_eq!(patch.tags, Some(vec!["rust".to_string(), "web".to_string()]));
        assert_eq!(patch.title.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_parse_tags() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
        assert_eq!(parse_tags("a,b , c"), vec!["a", "b", "c"]);
    }
}
