//! API route handlers

pub mod chains;
pub mod fees;
pub mod health;
pub mod pool;
pub mod wallet;

use axum::{routing::get, Router};

use crate::AppState;

/// Create the API router with all routes.
///
/// The pool route is only registered when the hide flag is unset; a hidden
/// route is absent from the router, not merely rejected.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .nest("/chains", chains::router())
        .nest("/wallet", wallet::router())
        .nest("/fees", fees::router());

    if !state.hide_pool_route() {
        router = router.nest("/pool", pool::router());
    }

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use gantry_core::{AppConfig, BridgeConfig};
    use tower::ServiceExt;

    fn state(hide_pool: bool) -> AppState {
        let config = AppConfig {
            // a closed local port, so client connects fail fast and no test
            // ever leaves the machine
            mainnet_rpc_url: "http://127.0.0.1:1".to_string(),
            hide_pool_route: hide_pool,
            ..AppConfig::default()
        };
        AppState::new(config, BridgeConfig::mainnet())
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = create_router(state(false));
        let resp = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_pool_route_present_by_default() {
        let app = create_router(state(false));
        let resp = app
            .oneshot(Request::builder().uri("/pool/ETH").body(Body::empty()).unwrap())
            .await
            .unwrap();
        // the route exists; it fails on the unreachable RPC, not on routing
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_pool_route_hidden_by_flag() {
        let app = create_router(state(true));
        let resp = app
            .oneshot(Request::builder().uri("/pool/ETH").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_chains_route() {
        let app = create_router(state(true));
        let resp = app
            .oneshot(Request::builder().uri("/chains").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
