use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageBody;
use service::errors::{ServiceError, ValidationError};
use service::resource::FriendPayload;
use service::Friend;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

const RESOURCE: &str = "friend";

const CREATE_MISSING: &str = "Please provide a firstName, lastName and age for friend.";
const AGE_RANGE: &str = "Age must be a whole number between 1 and 120";
const SAVE_FAILED: &str = "There was an error saving the friend to the database";
const RETRIEVE_FAILED: &str = "The information could not be retrieved";
const NOT_FOUND: &str = "The friend with the specified ID does not exist";
const UPDATE_MISSING: &str = "Please provide a first name, last name, and age";
const UPDATE_FAILED: &str = "There has been an error updating this Friend";
const DELETE_NOT_FOUND: &str = "The friend with the specified id does not exist";
const DELETE_FAILED: &str = "The friend could not be removed";
const DELETED: &str = "Friend has been deleted";

/// 创建好友：缺字段与年龄越界均为 400，存储失败同样返回 400
pub async fn create_friend(
    State(state): State<AppState>,
    body: Result<Json<FriendPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Friend>), JsonApiError> {
    let Ok(Json(payload)) = body else {
        return Err(JsonApiError::new(StatusCode::BAD_REQUEST, CREATE_MISSING));
    };
    match state.friends.create(payload).await {
        Ok(friend) => {
            info!(resource = RESOURCE, id = %friend.id, "created");
            Ok((StatusCode::CREATED, Json(friend)))
        }
        Err(ServiceError::Validation(ValidationError::MissingFields)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, CREATE_MISSING))
        }
        Err(ServiceError::Validation(ValidationError::AgeOutOfRange)) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, AGE_RANGE))
        }
        Err(e) => Err(JsonApiError::store(StatusCode::BAD_REQUEST, SAVE_FAILED, RESOURCE, "create", &e)),
    }
}

/// 列出全部好友
pub async fn list_friends(State(state): State<AppState>) -> Result<Json<Vec<Friend>>, JsonApiError> {
    state
        .friends
        .list()
        .await
        .map(Json)
        .map_err(|e| JsonApiError::store(StatusCode::INTERNAL_SERVER_ERROR, RETRIEVE_FAILED, RESOURCE, "list", &e))
}

/// 获取指定好友
pub async fn get_friend(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Friend>, JsonApiError> {
    match state.friends.get(&id).await {
        Ok(friend) => Ok(Json(friend)),
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::new(StatusCode::NOT_FOUND, NOT_FOUND)),
        Err(e) => Err(JsonApiError::store(StatusCode::INTERNAL_SERVER_ERROR, RETRIEVE_FAILED, RESOURCE, "get", &e)),
    }
}

/// 整体替换好友字段；校验失败返回 500
pub async fn update_friend(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<FriendPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Friend>), JsonApiError> {
    let Ok(Json(payload)) = body else {
        return Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, UPDATE_MISSING));
    };
    match state.friends.update(&id, payload).await {
        Ok(friend) => {
            info!(resource = RESOURCE, id = %friend.id, "updated");
            Ok((StatusCode::CREATED, Json(friend)))
        }
        Err(ServiceError::Validation(ValidationError::MissingFields)) => {
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, UPDATE_MISSING))
        }
        Err(ServiceError::Validation(ValidationError::AgeOutOfRange)) => {
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, AGE_RANGE))
        }
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::new(
            StatusCode::NOT_FOUND,
            format!("No friend with the id {id} exists"),
        )),
        Err(e) => Err(JsonApiError::store(StatusCode::INTERNAL_SERVER_ERROR, UPDATE_FAILED, RESOURCE, "update", &e)),
    }
}

/// 删除指定好友
pub async fn delete_friend(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MessageBody>), JsonApiError> {
    match state.friends.delete(&id).await {
        Ok(friend) => {
            info!(resource = RESOURCE, id = %friend.id, "deleted");
            Ok((StatusCode::CREATED, Json(MessageBody { message: DELETED.into() })))
        }
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::new(StatusCode::NOT_FOUND, DELETE_NOT_FOUND)),
        Err(e) => Err(JsonApiError::store(StatusCode::INTERNAL_SERVER_ERROR, DELETE_FAILED, RESOURCE, "delete", &e)),
    }
}
