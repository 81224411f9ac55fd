use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::BlogPost;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Fetch every entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity. Fails with [`RepoError::NotFound`] if it is gone.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID, returning whether anything was removed.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;

    /// Number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// Any single stored post. No ordering is implied.
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError>;

    /// Bulk insert, used for seeding.
    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError>;

    /// Remove every post. Only the test harness calls this.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}
