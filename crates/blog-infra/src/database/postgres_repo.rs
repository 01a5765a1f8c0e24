//! PostgreSQL blog post store.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};

/// PostgreSQL blog post repository.
pub struct PostgresBlogPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresBlogPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn insert_many(&self, drafts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let posts: Vec<BlogPost> = drafts.into_iter().map(BlogPost::create).collect();
        let models: Vec<blog_post::ActiveModel> = posts.iter().cloned().map(Into::into).collect();

        let inserted = BlogPostEntity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(query_error)?;
        tracing::debug!(inserted, "Inserted blog posts");

        Ok(posts)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        BlogPostEntity::find()
            .count(&self.db)
            .await
            .map_err(query_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn update_by_id(&self, id: Uuid, changes: BlogPostChanges) -> Result<bool, RepoError> {
        // Nothing to set: still report whether the id exists.
        if changes.is_empty() {
            return Ok(self.find_by_id(id).await?.is_some());
        }

        let mut update = BlogPostEntity::update_many().filter(blog_post::Column::Id.eq(id));
        if let Some(title) = changes.title {
            update = update.col_expr(blog_post::Column::Title, Expr::value(title));
        }
        if let Some(content) = changes.content {
            update = update.col_expr(blog_post::Column::Content, Expr::value(content));
        }

        let result = update.exec(&self.db).await.map_err(query_error)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = BlogPostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = BlogPostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        tracing::warn!(removed = result.rows_affected, "Deleted all blog posts");
        Ok(result.rows_affected)
    }
}
