use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageBody;
use service::errors::ServiceError;
use service::resource::PostPayload;
use service::Post;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

const RESOURCE: &str = "post";

const CREATE_MISSING: &str = "Please provide a post title and some content";
const SAVE_FAILED: &str = "There was an error saving the post to the database";
const LIST_FAILED: &str = "The Post list could not be retrieved";
const NOT_FOUND: &str = "The post with the specified ID does not exist";
const GET_FAILED: &str = "The Post information could not be retrieved";
const UPDATE_MISSING: &str = "Please provide Post Title and Content";
const UPDATE_FAILED: &str = "There has been an error updating this Post";
const DELETE_NOT_FOUND: &str = "The Post with the specified id does not exist";
const DELETE_FAILED: &str = "The Post could not be removed";
const DELETED: &str = "Post has been deleted";

/// 创建文章：缺字段返回 404，存储失败返回 500
pub async fn create_post(
    State(state): State<AppState>,
    body: Result<Json<PostPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), JsonApiError> {
    let Ok(Json(payload)) = body else {
        return Err(JsonApiError::new(StatusCode::NOT_FOUND, CREATE_MISSING));
    };
    match state.posts.create(payload).await {
        Ok(post) => {
            info!(resource = RESOURCE, id = %post.id, "created");
            Ok((StatusCode::CREATED, Json(post)))
        }
        Err(ServiceError::Validation(_)) => Err(JsonApiError::new(StatusCode::NOT_FOUND, CREATE_MISSING)),
        Err(e) => Err(JsonApiError::store(StatusCode::INTERNAL_SERVER_ERROR, SAVE_FAILED, RESOURCE, "create", &e)),
    }
}

pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, JsonApiError> {
    state
        .posts
        .list()
        .await
        .map(Json)
        .map_err(|e| JsonApiError::store(StatusCode::INTERNAL_SERVER_ERROR, LIST_FAILED, RESOURCE, "list", &e))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, JsonApiError> {
    match state.posts.get(&id).await {
        Ok(post) => Ok(Json(post)),
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::new(StatusCode::NOT_FOUND, NOT_FOUND)),
        Err(e) => Err(JsonApiError::store(StatusCode::INTERNAL_SERVER_ERROR, GET_FAILED, RESOURCE, "get", &e)),
    }
}

/// 整体替换文章标题与内容
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PostPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), JsonApiError> {
    let Ok(Json(payload)) = body else {
        return Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, UPDATE_MISSING));
    };
    match state.posts.update(&id, payload).await {
        Ok(post) => {
            info!(resource = RESOURCE, id = %post.id, "updated");
            Ok((StatusCode::CREATED, Json(post)))
        }
        Err(ServiceError::Validation(_)) => Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, UPDATE_MISSING)),
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::new(
            StatusCode::NOT_FOUND,
            format!("No Post with the id {id} exists"),
        )),
        Err(e) => Err(JsonApiError::store(StatusCode::INTERNAL_SERVER_ERROR, UPDATE_FAILED, RESOURCE, "update", &e)),
    }
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MessageBody>), JsonApiError> {
    match state.posts.delete(&id).await {
        Ok(post) => {
            info!(resource = RESOURCE, id = %post.id, "deleted");
            Ok((StatusCode::CREATED, Json(MessageBody { message: DELETED.into() })))
        }
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::new(StatusCode::NOT_FOUND, DELETE_NOT_FOUND)),
        Err(e) => Err(JsonApiError::store(StatusCode::INTERNAL_SERVER_ERROR, DELETE_FAILED, RESOURCE, "delete", &e)),
    }
}
