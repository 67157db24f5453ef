//! Route definitions for the HouseHub HTTP server.
//!
//! Login and logout are mounted outside the route gate. Everything else
//! that has a route sits behind it, and unmatched paths fall through to
//! the asset handler.

use axum::{
    Router,
    extract::State,
    middleware as axum_middleware,
    routing::{any, get, post},
};
use tower_cookies::CookieManagerLayer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::handlers::pages::PAGE_ROUTES;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let gated = Router::new()
        .merge(api_routes())
        .merge(page_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::route_gate,
        ));

    Router::new()
        .merge(session_routes())
        .merge(gated)
        .fallback(handlers::assets::fallback)
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Login and logout: never gated.
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(handlers::auth::login))
        .route("/api/logout", post(handlers::auth::logout))
}

/// JSON endpoints behind the gate.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/signup", post(handlers::auth::signup))
        .route("/api/leaderboard", get(handlers::leaderboard::leaderboard))
        .route("/api/me", get(handlers::auth::me))
        .route("/api/houses", get(handlers::house::list_houses))
}

/// HTML pages, each with and without the `.html` suffix. Any method serves the page.
fn page_routes() -> Router<AppState> {
    PAGE_ROUTES
        .iter()
        .fold(Router::new(), |router, &(path, page)| {
            router.route(
                path,
                any(move |State(state): State<AppState>| {
                    handlers::pages::serve_page(state, page)
                }),
            )
        })
}
