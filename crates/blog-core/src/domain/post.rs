use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Structured author name. Only [`Author::display_name`] leaves the API.
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

    /// First and last name joined by a single space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A blog post that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub author: Author,
    pub title: String,
    pub content: String,
}

impl NewBlogPost {
    /// Build a draft, rejecting a blank title.
    pub fn new(
        author: Author,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        ensure_title(&title)?;

        Ok(Self {
            author,
            title,
            content: content.into(),
        })
    }
}

/// Blog post entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Turn a draft into a post with a fresh id and creation timestamp.
    ///
    /// Stores call this on insert; callers never supply `id` or `created`.
    /// `created` is truncated to microseconds, the finest precision
    /// PostgreSQL keeps, so it reads back unchanged.
    pub fn create(draft: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: draft.author,
            title: draft.title,
            content: draft.content,
            created: Utc::now().trunc_subsecs(6),
        }
    }

    /// Apply a partial update. Author, id and creation time never change.
    pub fn apply(&mut self, changes: BlogPostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
    }
}

/// Partial update of the mutable fields of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.title {
            Some(title) => ensure_title(title),
            None => Ok(()),
        }
    }
}

fn ensure_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("title must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewBlogPost {
        NewBlogPost::new(Author::new("Jane", "Doe"), "T", "C").unwrap()
    }

    #[test]
    fn test_display_name_joins_first_and_last() {
        assert_eq!(Author::new("Jane", "Doe").display_name(), "Jane Doe");
        assert_eq!(Author::new("Cher", "").display_name(), "Cher");
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let result = NewBlogPost::new(Author::new("Jane", "Doe"), "   ", "C");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let a = BlogPost::create(draft());
        let b = BlogPost::create(draft());
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "T");
        assert_eq!(a.author, Author::new("Jane", "Doe"));
    }

    #[test]
    fn test_created_has_microsecond_precision() {
        use chrono::Timelike;

        for _ in 0..100 {
            let post = BlogPost::create(draft());
            assert_eq!(post.created.nanosecond() % 1_000, 0, "{}", post.created);
        }
    }

    #[test]
    fn test_apply_only_touches_title_and_content() {
        let mut post = BlogPost::create(draft());
        let original = post.clone();

        post.apply(BlogPostChanges {
            title: Some("How to dive with sharks".to_string()),
            content: None,
        });

        assert_eq!(post.title, "How to dive with sharks");
        assert_eq!(post.content, original.content);
        assert_eq!(post.id, original.id);
        assert_eq!(post.created, original.created);
        assert_eq!(post.author, original.author);
    }

    #[test]
    fn test_changes_validation() {
        assert!(BlogPostChanges::default().is_empty());
        assert!(BlogPostChanges::default().validate().is_ok());

        let blank = BlogPostChanges {
            title: Some(String::new()),
            content: None,
        };
        assert!(!blank.is_empty());
        assert!(blank.validate().is_err());
    }
}
