//! Blog post resource service - maps CRUD intents onto the repository port.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::error::{DomainError, RepoError};
use crate::ports::{BaseRepository, BlogPostRepository};

const ENTITY: &str = "BlogPost";

/// CRUD operations over blog posts.
#[derive(Clone)]
pub struct BlogPostService {
    repo: Arc<dyn BlogPostRepository>,
}

impl BlogPostService {
    pub fn new(repo: Arc<dyn BlogPostRepository>) -> Self {
        Self { repo }
    }

    /// The underlying store.
    pub fn repository(&self) -> &Arc<dyn BlogPostRepository> {
        &self.repo
    }

    /// All stored posts. Empty when the store is empty.
    pub async fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        let posts = self.repo.find_all().await?;
        tracing::debug!(count = posts.len(), "Listed blog posts");
        Ok(posts)
    }

    pub async fn get(&self, id: Uuid) -> Result<BlogPost, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    /// Validate and persist a new post. Nothing is written if validation fails.
    pub async fn create(&self, input: NewBlogPost) -> Result<BlogPost, DomainError> {
        input.validate()?;
        let post = self.repo.insert(input.into_post()).await?;
        tracing::info!(post_id = %post.id, "Created blog post");
        Ok(post)
    }

    /// Apply `patch` to the post with `id`.
    pub async fn update(&self, id: Uuid, patch: BlogPostPatch) -> Result<(), DomainError> {
        patch.validate()?;
        if patch.is_empty() {
            tracing::debug!(post_id = %id, "Empty update, checking existence only");
        }

        let mut post = self.get(id).await?;
        post.apply(patch);

        match self.repo.update(post).await {
            Ok(_) => {
                tracing::info!(post_id = %id, "Updated blog post");
                Ok(())
            }
            // Deleted between the read and the write.
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the post with `id`. Succeeds whether or not it existed.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let removed = self.repo.delete(id).await?;
        tracing::info!(post_id = %id, removed, "Deleted blog post");
        Ok(())
    }
}
