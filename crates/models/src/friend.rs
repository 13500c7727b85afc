use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "friends")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, first_name: &str, last_name: &str, age: i32) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        age: Set(age),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

/// All friends in insertion order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::CreatedAt).all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Overwrite every user-supplied field; `None` when the id has no row.
pub async fn replace(db: &DatabaseConnection, id: Uuid, first_name: &str, last_name: &str, age: i32) -> Result<Option<Model>, ModelError> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut am: ActiveModel = existing.into();
    am.first_name = Set(first_name.to_string());
    am.last_name = Set(last_name.to_string());
    am.age = Set(age);
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        // 并发删除：行在读取后消失
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Delete by id and hand back the removed row.
pub async fn remove(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, ModelError> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok((res.rows_affected > 0).then_some(existing))
}
