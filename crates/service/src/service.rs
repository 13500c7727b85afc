use std::sync::Arc;

use crate::errors::ServiceError;
use crate::repository::Repository;
use crate::resource::Resource;

/// Create/list/get/update/delete for one collection.
///
/// Validation runs before the store is touched; an id with no record becomes
/// `ServiceError::NotFound`.
pub struct ResourceService<R: Resource> {
    repo: Arc<dyn Repository<R>>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(repo: Arc<dyn Repository<R>>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: R::Payload) -> Result<R, ServiceError> {
        let fields = R::validate(payload)?;
        Ok(self.repo.insert(fields).await?)
    }

    pub async fn list(&self) -> Result<Vec<R>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<R, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(R::NAME))
    }

    /// Full replacement of the user-supplied fields.
    pub async fn update(&self, id: &str, payload: R::Payload) -> Result<R, ServiceError> {
        let fields = R::validate(payload)?;
        self.repo
            .find_by_id_and_update(id, fields)
            .await?
            .ok_or(ServiceError::NotFound(R::NAME))
    }

    /// Returns the removed record.
    pub async fn delete(&self, id: &str) -> Result<R, ServiceError> {
        self.repo
            .find_by_id_and_remove(id)
            .await?
            .ok_or(ServiceError::NotFound(R::NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use crate::repository::memory::MemoryRepository;
    use crate::resource::{Friend, FriendPayload, Post, PostPayload};
    use serde_json::json;

    fn friends() -> ResourceService<Friend> {
        ResourceService::new(Arc::new(MemoryRepository::<Friend>::new()))
    }

    fn friend_payload(age: serde_json::Value) -> FriendPayload {
        FriendPayload { first_name: Some("Ada".into()), last_name: Some("Lovelace".into()), age: Some(age) }
    }

    #[tokio::test]
    async fn created_friend_is_retrievable_with_same_fields() -> Result<(), anyhow::Error> {
        let svc = friends();
        let created = svc.create(friend_payload(json!(36))).await?;
        let fetched = svc.get(&created.id.to_string()).await?;
        assert_eq!(fetched, created);
        assert_eq!((fetched.first_name.as_str(), fetched.last_name.as_str(), fetched.age), ("Ada", "Lovelace", 36));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_payloads_persist_nothing() -> Result<(), anyhow::Error> {
        let svc = friends();
        let err = svc.create(friend_payload(json!(200))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::AgeOutOfRange)));
        let err = svc.create(FriendPayload::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::MissingFields)));
        assert!(svc.list().await?.is_empty());

        let posts: ResourceService<Post> = ResourceService::new(Arc::new(MemoryRepository::<Post>::new()));
        let err = posts.create(PostPayload { post_title: Some("Hi".into()), post_content: None }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::MissingFields)));
        assert!(posts.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_validates_before_touching_the_record() -> Result<(), anyhow::Error> {
        let svc = friends();
        let created = svc.create(friend_payload(json!(36))).await?;
        let id = created.id.to_string();

        let incomplete = FriendPayload { first_name: Some("Grace".into()), ..Default::default() };
        assert!(matches!(svc.update(&id, incomplete).await, Err(ServiceError::Validation(_))));
        assert_eq!(svc.get(&id).await?, created);

        let updated = svc.update(&id, friend_payload(json!(37))).await?;
        assert_eq!(updated.age, 37);
        assert_eq!(updated.id, created.id);

        let missing = uuid::Uuid::new_v4().to_string();
        assert!(matches!(svc.update(&missing, friend_payload(json!(5))).await, Err(ServiceError::NotFound("friend"))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() -> Result<(), anyhow::Error> {
        let svc = friends();
        let created = svc.create(friend_payload(json!(36))).await?;
        let id = created.id.to_string();
        assert_eq!(svc.delete(&id).await?.id, created.id);
        assert!(matches!(svc.get(&id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(&id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn malformed_id_is_a_store_error() {
        let svc = friends();
        assert!(matches!(svc.get("xyz").await, Err(ServiceError::Store(_))));
    }
}
