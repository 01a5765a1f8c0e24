use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use crate::error::RepoError;

/// Storage port for blog posts.
///
/// Absence is never an error: lookups return `None` and mutations of a
/// missing id are no-ops that report `false`.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Persist drafts in order, assigning ids and creation timestamps.
    async fn insert_many(&self, drafts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// Persist a single draft.
    async fn insert(&self, draft: NewBlogPost) -> Result<BlogPost, RepoError> {
        self.insert_many(vec![draft])
            .await?
            .pop()
            .ok_or_else(|| RepoError::Query("insert returned no post".to_string()))
    }

    /// All posts. Ordering is store-defined.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Total number of posts.
    async fn count(&self) -> Result<u64, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Any single post, or `None` when the store is empty.
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError>;

    /// Apply title/content changes. Returns whether a post matched `id`.
    async fn update_by_id(&self, id: Uuid, changes: BlogPostChanges) -> Result<bool, RepoError>;

    /// Remove a post. Returns whether a post was removed.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepoError>;

    /// Remove every post, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}
