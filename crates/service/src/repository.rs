use async_trait::async_trait;

use crate::errors::StoreError;
use crate::resource::Resource;

/// Document store abstraction for one collection.
///
/// Ids arrive as raw path strings; an id the store cannot interpret is a
/// `StoreError`, never an absent record.
#[async_trait]
pub trait Repository<R: Resource>: Send + Sync {
    async fn insert(&self, fields: R::Fields) -> Result<R, StoreError>;
    async fn find_all(&self) -> Result<Vec<R>, StoreError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<R>, StoreError>;
    async fn find_by_id_and_update(&self, id: &str, fields: R::Fields) -> Result<Option<R>, StoreError>;
    async fn find_by_id_and_remove(&self, id: &str) -> Result<Option<R>, StoreError>;
}

/// In-process store for tests and `STORE_BACKEND=memory`.
pub mod memory {
    use super::*;
    use chrono::Utc;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    /// Insertion-ordered documents behind a lock.
    pub struct MemoryRepository<R> {
        docs: RwLock<Vec<R>>,
    }

    impl<R> Default for MemoryRepository<R> {
        fn default() -> Self {
            Self { docs: RwLock::new(Vec::new()) }
        }
    }

    impl<R> MemoryRepository<R> {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl<R: Resource> Repository<R> for MemoryRepository<R> {
        async fn insert(&self, fields: R::Fields) -> Result<R, StoreError> {
            let doc = R::build(Uuid::new_v4(), Utc::now().into(), fields);
            self.docs.write().await.push(doc.clone());
            Ok(doc)
        }

        async fn find_all(&self) -> Result<Vec<R>, StoreError> {
            Ok(self.docs.read().await.clone())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<R>, StoreError> {
            let id = models::parse_id(id)?;
            let docs = self.docs.read().await;
            Ok(docs.iter().find(|d| d.id() == id).cloned())
        }

        async fn find_by_id_and_update(&self, id: &str, fields: R::Fields) -> Result<Option<R>, StoreError> {
            let id = models::parse_id(id)?;
            let mut docs = self.docs.write().await;
            Ok(docs.iter_mut().find(|d| d.id() == id).map(|doc| {
                doc.apply(fields);
                doc.clone()
            }))
        }

        async fn find_by_id_and_remove(&self, id: &str) -> Result<Option<R>, StoreError> {
            let id = models::parse_id(id)?;
            let mut docs = self.docs.write().await;
            let pos = docs.iter().position(|d| d.id() == id);
            Ok(pos.map(|i| docs.remove(i)))
        }
    }

}
