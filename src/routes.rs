// region:    --- Imports
use crate::auth;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

// endregion: --- Imports

const BODY_LIMIT: usize = 1024 * 1024;

/// 전체 라우터
///
/// `/auction`, `/bid/:id` 는 Bearer 토큰이 필요하다.
pub fn routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::<AppState>::new()
        .route("/auction", post(handlers::handle_create_auction))
        .route("/bid/:id", post(handlers::handle_place_bid))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    Router::new()
        .route("/signup", post(handlers::handle_signup))
        .route("/signin", post(handlers::handle_signin))
        .route("/auctions", get(handlers::handle_get_auctions))
        .route("/auctions/:id", get(handlers::handle_get_auction))
        .merge(protected)
        .layer(cors)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}
