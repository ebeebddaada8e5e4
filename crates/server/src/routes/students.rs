use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::{Student, StudentInput};
use tracing::info;

use crate::{errors::JsonApiError, state::AppState};

pub async fn list(State(state): State<AppState>) -> Json<Vec<Student>> {
    let students = state.students.list();
    info!(count = students.len(), "list students");
    Json(students)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Student>, JsonApiError> {
    state
        .students
        .get(id)
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found(format!("Student not found with ID: {}", id)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<StudentInput>,
) -> Result<(StatusCode, Json<Student>), JsonApiError> {
    let student = state.students.create(input)?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<StudentInput>,
) -> Result<Json<Student>, JsonApiError> {
    Ok(Json(state.students.update(id, input)?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Message>, JsonApiError> {
    if state.students.delete(id) {
        Ok(Json(Message::new("Student deleted successfully")))
    } else {
        Err(JsonApiError::not_found(format!("Student not found with ID: {}", id)))
    }
}

pub async fn register_course(
    State(state): State<AppState>,
    Path((id, course_id)): Path<(u64, u64)>,
) -> Result<Json<Student>, JsonApiError> {
    Ok(Json(state.students.register_course(id, course_id)?))
}

pub async fn unregister_course(
    State(state): State<AppState>,
    Path((id, course_id)): Path<(u64, u64)>,
) -> Result<Json<Student>, JsonApiError> {
    Ok(Json(state.students.unregister_course(id, course_id)?))
}
