use sea_orm::DatabaseConnection;

use crate::errors::StoreError;
use crate::repository::Repository;
use crate::resource::{Friend, FriendFields, Post, PostFields};

/// `friends` table through sea-orm.
#[derive(Clone)]
pub struct SeaOrmFriendRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl Repository<Friend> for SeaOrmFriendRepository {
    async fn insert(&self, f: FriendFields) -> Result<Friend, StoreError> {
        Ok(models::friend::create(&self.db, &f.first_name, &f.last_name, f.age).await?)
    }

    async fn find_all(&self) -> Result<Vec<Friend>, StoreError> {
        Ok(models::friend::list(&self.db).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Friend>, StoreError> {
        let id = models::parse_id(id)?;
        Ok(models::friend::find(&self.db, id).await?)
    }

    async fn find_by_id_and_update(&self, id: &str, f: FriendFields) -> Result<Option<Friend>, StoreError> {
        let id = models::parse_id(id)?;
        Ok(models::friend::replace(&self.db, id, &f.first_name, &f.last_name, f.age).await?)
    }

    async fn find_by_id_and_remove(&self, id: &str) -> Result<Option<Friend>, StoreError> {
        let id = models::parse_id(id)?;
        Ok(models::friend::remove(&self.db, id).await?)
    }
}

/// `posts` table through sea-orm.
#[derive(Clone)]
pub struct SeaOrmPostRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl Repository<Post> for SeaOrmPostRepository {
    async fn insert(&self, p: PostFields) -> Result<Post, StoreError> {
        Ok(models::post::create(&self.db, &p.post_title, &p.post_content).await?)
    }

    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(models::post::list(&self.db).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let id = models::parse_id(id)?;
        Ok(models::post::find(&self.db, id).await?)
    }

    async fn find_by_id_and_update(&self, id: &str, p: PostFields) -> Result<Option<Post>, StoreError> {
        let id = models::parse_id(id)?;
        Ok(models::post::replace(&self.db, id, &p.post_title, &p.post_content).await?)
    }

    async fn find_by_id_and_remove(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let id = models::parse_id(id)?;
        Ok(models::post::remove(&self.db, id).await?)
    }
}
