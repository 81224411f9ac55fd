//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
};
use uuid::Uuid;

use scribe_core::domain::BlogPost;
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, BlogPostRepository};

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL blog post repository.
pub struct PostgresBlogPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresBlogPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match &err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for PostgresBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        let model = post::ActiveModel::from(entity)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        // `created` is immutable; leave it out of the UPDATE.
        let mut active = post::ActiveModel::from(entity);
        active.created = NotSet;

        let model = active.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find().count(&self.db).await.map_err(map_db_err)
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError> {
        if posts.is_empty() {
            return Ok(0);
        }

        let n = posts.len() as u64;
        PostEntity::insert_many(posts.into_iter().map(post::ActiveModel::from))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = n, "Inserted blog posts");
        Ok(n)
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = result.rows_affected, "Deleted all blog posts");
        Ok(result.rows_affected)
    }
}
