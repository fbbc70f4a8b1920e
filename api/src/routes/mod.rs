//! Route table and middleware stack.

pub mod analytics;
pub mod calendar;
pub mod health;
pub mod study_sessions;
pub mod syllabus;
pub mod users;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    LatencyUnit,
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::errors::{handle_panic, not_found};

/// Build the router with every route and the middleware stack applied.
pub fn build_router() -> Router {
    let api = Router::new()
        .route("/users", get(users::get_users))
        .route("/study-sessions", get(study_sessions::get_study_sessions))
        .route("/syllabus", get(syllabus::get_syllabus))
        .route("/calendar", get(calendar::get_calendar))
        .route("/analytics", get(analytics::get_analytics))
        .method_not_allowed_fallback(not_found);

    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found);

    with_middleware(app)
}

/// Request logging (method, path, status, latency), panic recovery and CORS.
///
/// Tracing sits outermost so responses produced by the panic handler are
/// logged too; CORS wraps the panic handler so its 500s stay readable from
/// browsers.
pub fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    router.layer(
        ServiceBuilder::new()
            .layer(trace)
            .layer(cors)
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}
