use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::{AttendanceInput, AttendanceRecord};
use serde::Deserialize;
use service::AttendanceFilter;

use crate::{errors::JsonApiError, state::AppState};

/// Raw query string filters. Parsed by hand so bad values produce a JSON error body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceQuery {
    pub student_id: Option<String>,
    pub course_id: Option<String>,
}

impl AttendanceQuery {
    /// Absent or `-1` means "unset"; any other value must be a positive integer.
    pub fn into_filter(self) -> Result<AttendanceFilter, JsonApiError> {
        Ok(AttendanceFilter {
            student_id: parse_filter("studentId", self.student_id.as_deref())?,
            course_id: parse_filter("courseId", self.course_id.as_deref())?,
        })
    }
}

fn parse_filter(name: &str, raw: Option<&str>) -> Result<Option<u64>, JsonApiError> {
    let Some(raw) = raw.map(str::trim) else { return Ok(None) };
    match raw.parse::<i64>() {
        Ok(-1) => Ok(None),
        Ok(v) if v > 0 => Ok(Some(v as u64)),
        _ => Err(JsonApiError::bad_request(format!("Invalid {} parameter format", name))),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<AttendanceQuery>,
) -> Result<Json<Vec<AttendanceRecord>>, JsonApiError> {
    let filter = q.into_filter()?;
    Ok(Json(state.attendance.query(filter)?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<AttendanceRecord>, JsonApiError> {
    state
        .attendance
        .get(id)
        .map(Json)
        .ok_or_else(|| {
            JsonApiError::not_found(format!("Attendance record not found with ID: {}", id))
        })
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<AttendanceInput>,
) -> Result<(StatusCode, Json<AttendanceRecord>), JsonApiError> {
    let record = state.attendance.create(input)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<AttendanceInput>,
) -> Result<Json<AttendanceRecord>, JsonApiError> {
    Ok(Json(state.attendance.update(id, input)?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Message>, JsonApiError> {
    if state.attendance.delete(id) {
        Ok(Json(Message::new("Attendance record deleted successfully")))
    } else {
        Err(JsonApiError::not_found(format!("Attendance record not found with ID: {}", id)))
    }
}
