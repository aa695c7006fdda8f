pub mod config;
pub mod content;
pub mod domain;
pub mod filters;
pub mod handlers;
pub mod quiz;
pub mod session;
pub mod state;
pub mod store;
pub mod user;

use axum::{middleware, routing::get, routing::post, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router. Shared between `main` and HTTP tests.
pub fn app(state: AppState) -> Router {
  Router::new()
    .route("/", get(handlers::index))
    .route("/quiz", get(handlers::quiz_page))
    .route("/quiz/start", post(handlers::quiz_start))
    .route("/quiz/answer", post(handlers::quiz_answer))
    .route("/quiz/skip", post(handlers::quiz_skip))
    .route("/exam", get(handlers::exam_page))
    .route("/exam/start", post(handlers::exam_start))
    .route("/exam/answer", post(handlers::exam_answer))
    .route("/exam/stop", post(handlers::exam_stop))
    .route("/nerves", get(handlers::nerves_page))
    .route("/nerves/start", post(handlers::nerves_start))
    .route("/nerves/answer", post(handlers::nerves_answer))
    .route("/nerves/skip", post(handlers::nerves_skip))
    .route("/review", get(handlers::review_page))
    .route("/review/start", post(handlers::review_start))
    .route("/review/answer", post(handlers::review_answer))
    .route("/review/skip", post(handlers::review_skip))
    .route("/review/clear", post(handlers::review_clear))
    .route("/stats", get(handlers::stats_page))
    .route("/stats/reset", post(handlers::stats_reset))
    .route("/export", get(handlers::export_progress))
    .route("/import", post(handlers::import_progress))
    .nest_service("/static", ServeDir::new("static"))
    .layer(middleware::from_fn(user::assign_user))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
