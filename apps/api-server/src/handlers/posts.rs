//! Blog post handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{Author, BlogPost, BlogPostChanges, NewBlogPost};
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Public view of a stored post. The structured author is flattened.
pub fn post_view(post: &BlogPost) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        author: post.author.display_name(),
        title: post.title.clone(),
        content: post.content.clone(),
        created: post.created.to_rfc3339(),
    }
}

fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid post id `{}`", raw)))
}

fn missing_field(field: &str) -> AppError {
    AppError::BadRequest(format!("Missing `{}` in request body", field))
}

fn not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "BlogPost",
        id,
    }
    .into()
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.iter().map(post_view).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(post_view(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let author = req.author.ok_or_else(|| missing_field("author"))?;
    let title = req.title.ok_or_else(|| missing_field("title"))?;
    let content = req.content.ok_or_else(|| missing_field("content"))?;

    let draft = NewBlogPost::new(
        Author::new(author.first_name, author.last_name),
        title,
        content,
    )?;
    let post = state.posts.insert(draft).await?;
    tracing::info!(post_id = %post.id, "Blog post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", post.id)))
        .json(post_view(&post)))
}

/// PUT /posts/{id}
///
/// The body must repeat the path id. Only `title` and `content` are updated.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let body_id = req.id.ok_or_else(|| missing_field("id"))?;
    let id = parse_post_id(&path)?;
    if parse_post_id(&body_id)? != id {
        return Err(AppError::BadRequest(format!(
            "Request path id ({}) and request body id ({}) must match",
            path, body_id
        )));
    }

    let changes = BlogPostChanges {
        title: req.title,
        content: req.content,
    };
    changes.validate()?;

    if !state.posts.update_by_id(id, changes).await? {
        return Err(not_found(id));
    }
    tracing::info!(post_id = %id, "Blog post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Deleting an unknown id is a no-op and still answers 204.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let removed = state.posts.delete_by_id(id).await?;
    tracing::info!(post_id = %id, removed, "Blog post deleted");

    Ok(HttpResponse::NoContent().finish())
}
