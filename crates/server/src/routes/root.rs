use axum::Json;
use common::types::{Health, AWAKE};

pub async fn status() -> Json<Health> {
    Json(Health { status: AWAKE })
}
