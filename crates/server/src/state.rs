use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::repo::seaorm::{SeaOrmFriendRepository, SeaOrmPostRepository};
use service::repository::{memory::MemoryRepository, Repository};
use service::{Friend, Post, ResourceService};

/// Shared handler state: one service per collection, each over an injected store.
#[derive(Clone)]
pub struct AppState {
    pub friends: ResourceService<Friend>,
    pub posts: ResourceService<Post>,
}

impl AppState {
    pub fn new(friends: Arc<dyn Repository<Friend>>, posts: Arc<dyn Repository<Post>>) -> Self {
        Self {
            friends: ResourceService::new(friends),
            posts: ResourceService::new(posts),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryRepository::<Friend>::new()),
            Arc::new(MemoryRepository::<Post>::new()),
        )
    }

    /// Both collections share one connection pool.
    pub fn sea_orm(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmFriendRepository { db: db.clone() }),
            Arc::new(SeaOrmPostRepository { db }),
        )
    }
}
