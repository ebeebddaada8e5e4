use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::StoreStats;

use crate::state::AppState;

pub mod attendance;
pub mod courses;
pub mod students;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn stats(State(state): State<AppState>) -> Json<StoreStats> {
    Json(state.store.stats())
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/stats", get(stats));

    let students = Router::new()
        .route("/students", get(students::list).post(students::create))
        .route("/students/:id", get(students::get).put(students::update).delete(students::delete))
        .route(
            "/students/:id/courses/:course_id",
            post(students::register_course).delete(students::unregister_course),
        );

    let courses = Router::new()
        .route("/courses", get(courses::list).post(courses::create))
        .route("/courses/:id", get(courses::get).put(courses::update).delete(courses::delete));

    let attendance = Router::new()
        .route("/attendance", get(attendance::list).post(attendance::create))
        .route(
            "/attendance/:id",
            get(attendance::get).put(attendance::update).delete(attendance::delete),
        );

    public
        .merge(students)
        .merge(courses)
        .merge(attendance)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx 以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
