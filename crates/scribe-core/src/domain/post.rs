use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post, stored as a nested value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Renders the author as `"first last"`, the shape used on the read path.
impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// BlogPost entity - the only resource the service manages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a fresh id.
    ///
    /// `created` defaults to now. Timestamps are kept at microsecond
    /// precision, which is what PostgreSQL stores.
    pub fn new(
        author: Author,
        title: String,
        content: String,
        created: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            title,
            content,
            created: created.unwrap_or_else(Utc::now).trunc_subsecs(6),
        }
    }

    /// Apply a patch in place. `id` and `created` are never touched.
    pub fn apply(&mut self, patch: BlogPostPatch) {
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// Input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: Option<DateTime<Utc>>,
}

impl NewBlogPost {
    /// Every field except `created` is required and must not be blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut missing = Vec::new();
        if is_blank(&self.author.first_name) {
            missing.push("author.firstName");
        }
        if is_blank(&self.author.last_name) {
            missing.push("author.lastName");
        }
        if is_blank(&self.title) {
            missing.push("title");
        }
        if is_blank(&self.content) {
            missing.push("content");
        }
        reject_missing(&missing)
    }

    pub fn into_post(self) -> BlogPost {
        BlogPost::new(self.author, self.title, self.content, self.created)
    }
}

/// Partial update of the mutable fields of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostPatch {
    pub author: Option<Author>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPostPatch {
    /// Fields that are present must not be blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut missing = Vec::new();
        if let Some(author) = &self.author {
            if is_blank(&author.first_name) {
                missing.push("author.firstName");
            }
            if is_blank(&author.last_name) {
                missing.push("author.lastName");
            }
        }
        if self.title.as_deref().is_some_and(is_blank) {
            missing.push("title");
        }
        if self.content.as_deref().is_some_and(is_blank) {
            missing.push("content");
        }
        reject_missing(&missing)
    }

    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.title.is_none() && self.content.is_none()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn reject_missing(missing: &[&str]) -> Result<(), DomainError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "missing required field(s): {}",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post() -> NewBlogPost {
        NewBlogPost {
            author: Author::new("Maria", "Pal"),
            title: "T".to_string(),
            content: "C".to_string(),
            created: None,
        }
    }

    #[test]
    fn test_author_display_is_first_then_last() {
        assert_eq!(Author::new("Maria", "Pal").to_string(), "Maria Pal");
    }

    #[test]
    fn test_validate_lists_every_blank_field() {
        let mut input = new_post();
        input.author.last_name = "  ".to_string();
        input.content = String::new();

        let msg = match input.validate() {
            Err(DomainError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert!(msg.contains("author.lastName"));
        assert!(msg.contains("content"));
        assert!(!msg.contains("title"));
    }

    #[test]
    fn test_created_defaults_to_now() {
        let before = Utc::now().trunc_subsecs(6);
        let post = new_post().into_post();
        assert!(post.created >= before);
        assert!(post.created <= Utc::now());
    }

    #[test]
    fn test_apply_keeps_id_and_created() {
        let mut post = new_post().into_post();
        let (id, created) = (post.id, post.created);

        post.apply(BlogPostPatch {
            title: Some("Testing endpoints".to_string()),
            ..Default::default()
        });

        assert_eq!(post.id, id);
        assert_eq!(post.created, created);
        assert_eq!(post.title, "Testing endpoints");
        assert_eq!(post.content, "C");
    }

    #[test]
    fn test_patch_validation_ignores_absent_fields() {
        assert!(BlogPostPatch::default().validate().is_ok());
        let patch = BlogPostPatch {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }
}
