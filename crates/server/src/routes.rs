use axum::{
    http::{header, HeaderName, HeaderValue},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod friends;
pub mod posts;
pub mod root;

/// Hardening headers added to every response unless a handler set them.
fn security_headers() -> [(HeaderName, HeaderValue); 6] {
    [
        (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")),
        (header::X_DNS_PREFETCH_CONTROL, HeaderValue::from_static("off")),
        (HeaderName::from_static("x-download-options"), HeaderValue::from_static("noopen")),
        (header::X_XSS_PROTECTION, HeaderValue::from_static("0")),
        (header::REFERRER_POLICY, HeaderValue::from_static("no-referrer")),
    ]
}

/// Build the application router for both collections
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let mut router = Router::new()
        .route("/", get(root::status))
        .route("/friends", get(friends::list_friends).post(friends::create_friend))
        .route(
            "/friends/:id",
            get(friends::get_friend).put(friends::update_friend).delete(friends::delete_friend),
        )
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/:id",
            get(posts::get_post).put(posts::update_post).delete(posts::delete_post),
        )
        .with_state(state);

    for (name, value) in security_headers() {
        router = router.layer(SetResponseHeaderLayer::if_not_present(name, value));
    }

    router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    // 每次请求创建 span，包含方法和路径
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    // 响应返回时打点，包含状态码与耗时
                    .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                    // 5xx 以 ERROR 记录
                    .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
            )
            .layer(cors),
    )
}
