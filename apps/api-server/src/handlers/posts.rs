//! Blog post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use scribe_core::domain::{Author, BlogPost, BlogPostPatch, NewBlogPost};
use scribe_shared::dto::{
    AuthorPayload, BlogPostListResponse, BlogPostResponse, CreateBlogPostRequest,
    UpdateBlogPostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    Ok(HttpResponse::Ok().json(BlogPostListResponse {
        blogposts: posts.into_iter().map(to_response).collect(),
    }))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.get(id).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Absent fields become empty strings and are rejected by validation.
    let input = NewBlogPost {
        author: to_author(req.author.unwrap_or_default()),
        title: req.title.unwrap_or_default(),
        content: req.content.unwrap_or_default(),
        created: req.created,
    };

    let post = state.posts.create(input).await?;
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    let patch = BlogPostPatch {
        author: req.author.map(to_author),
        title: req.title,
        content: req.content,
    };

    state.posts.update(id, patch).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    // An id that can't parse names no record, so there is nothing to remove.
    if let Ok(id) = Uuid::parse_str(&path) {
        state.posts.delete(id).await?;
    } else {
        tracing::debug!(id = %path, "Delete of malformed id ignored");
    }

    Ok(HttpResponse::NoContent().finish())
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::NotFound(format!("BlogPost with id {raw} not found")))
}

fn to_author(payload: AuthorPayload) -> Author {
    Author::new(
        payload.first_name.unwrap_or_default(),
        payload.last_name.unwrap_or_default(),
    )
}

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        author: post.author.to_string(),
        title: post.title,
        content: post.content,
        created: post.created,
    }
}
