use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::{Course, CourseInput};

use crate::{errors::JsonApiError, state::AppState};

pub async fn list(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.courses.list())
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Course>, JsonApiError> {
    match state.courses.get(id) {
        Some(course) => Ok(Json(course)),
        None => Err(JsonApiError::not_found(format!("Course not found with ID: {}", id))),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CourseInput>,
) -> Result<(StatusCode, Json<Course>), JsonApiError> {
    let course = state.courses.create(input)?;
    Ok((StatusCode::CREATED, Json(course)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<CourseInput>,
) -> Result<Json<Course>, JsonApiError> {
    Ok(Json(state.courses.update(id, input)?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Message>, JsonApiError> {
    if state.courses.delete(id) {
        Ok(Json(Message::new("Course deleted successfully")))
    } else {
        Err(JsonApiError::not_found(format!("Course not found with ID: {}", id)))
    }
}
