//! In-memory blog post store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use scribe_core::domain::BlogPost;
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, BlogPostRepository};

/// Blog post store backed by a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let mut posts: Vec<BlogPost> = self.store.read().await.values().cloned().collect();
        posts.sort_by_key(|p| p.created);
        Ok(posts)
    }

    async fn insert(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&entity.id) {
            return Err(RepoError::Query(format!("duplicate id {}", entity.id)));
        }
        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        let slot = store.get_mut(&entity.id).ok_or(RepoError::NotFound)?;

        slot.author = entity.author;
        slot.title = entity.title;
        slot.content = entity.content;
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.store.write().await.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.store.read().await.values().next().cloned())
    }

    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        if let Some(dup) = posts.iter().find(|p| store.contains_key(&p.id)) {
            return Err(RepoError::Query(format!("duplicate id {}", dup.id)));
        }

        let n = posts.len() as u64;
        store.extend(posts.into_iter().map(|p| (p.id, p)));
        Ok(n)
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let n = store.len() as u64;
        store.clear();
        Ok(n)
    }
}
