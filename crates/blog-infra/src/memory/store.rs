//! In-memory blog post store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

/// Blog post store backed by a `Vec` behind an async RwLock.
///
/// Posts keep insertion order. Data is lost on process restart.
pub struct InMemoryBlogPostStore {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostStore {
    async fn insert_many(&self, drafts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        let created: Vec<BlogPost> = drafts.into_iter().map(BlogPost::create).collect();

        let mut posts = self.posts.write().await;
        posts.extend(created.iter().cloned());

        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.posts.read().await.first().cloned())
    }

    async fn update_by_id(&self, id: Uuid, changes: BlogPostChanges) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.apply(changes);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() < before)
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let removed = posts.len() as u64;
        posts.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::Author;

    fn draft(title: &str) -> NewBlogPost {
        NewBlogPost::new(Author::new("Jane", "Doe"), title, "content").unwrap()
    }

    #[tokio::test]
    async fn test_insert_many_and_count() {
        let store = InMemoryBlogPostStore::new();
        let posts = store
            .insert_many(vec![draft("a"), draft("b"), draft("c")])
            .await
            .unwrap();

        assert_eq!(posts.len(), 3);
        assert_eq!(store.count().await.unwrap(), 3);

        let titles: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_find_by_id_and_find_one() {
        let store = InMemoryBlogPostStore::new();
        assert!(store.find_one().await.unwrap().is_none());

        let post = store.insert(draft("only")).await.unwrap();

        assert_eq!(store.find_by_id(post.id).await.unwrap(), Some(post.clone()));
        assert_eq!(store.find_one().await.unwrap(), Some(post));
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_by_id() {
        let store = InMemoryBlogPostStore::new();
        let post = store.insert(draft("old")).await.unwrap();

        let changes = BlogPostChanges {
            title: Some("new".to_string()),
            content: None,
        };
        assert!(store.update_by_id(post.id, changes.clone()).await.unwrap());
        assert!(!store.update_by_id(Uuid::new_v4(), changes).await.unwrap());

        let updated = store.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(updated.title, "new");
        assert_eq!(updated.content, "content");
        assert_eq!(updated.created, post.created);
    }

    #[tokio::test]
    async fn test_delete_by_id_and_delete_all() {
        let store = InMemoryBlogPostStore::new();
        let posts = store.insert_many(vec![draft("a"), draft("b")]).await.unwrap();

        assert!(store.delete_by_id(posts[0].id).await.unwrap());
        assert!(!store.delete_by_id(posts[0].id).await.unwrap());
        assert!(store.find_by_id(posts[0].id).await.unwrap().is_none());

        assert_eq!(store.delete_all().await.unwrap(), 1);
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
