//! API service routes

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::{
    error::ApiError,
    middleware::cors_middleware,
    models::{
        AttendanceHistoryResponse, ClassListResponse, ClassQuery, CreateClassRequest,
        CreateClassResponse, UpdateAttendanceRequest, UpdateAttendanceResponse,
    },
    state::AppState,
    validation::validate_class_id,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/create-class", post(create_class))
        .route("/update-attendance", post(update_attendance))
        .route("/get-attendance-history", get(get_attendance_history))
        .route("/get-classes", get(get_classes))
        .route("/get-absence-report", get(get_absence_report))
        .fallback(not_found)
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "attendance-api"
    }))
}

/// Create a new class with an empty history
pub async fn create_class(
    State(state): State<AppState>,
    payload: Result<Json<CreateClassRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let new_class = payload.into_new_class()?;

    let class = state.class_repository.create(new_class).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateClassResponse {
            message: "Class created successfully".to_string(),
            class,
        }),
    ))
}

/// Record one attendance session for a class
pub async fn update_attendance(
    State(state): State<AppState>,
    payload: Result<Json<UpdateAttendanceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let (class_id, marks) = payload.into_marks()?;

    let attendance_record = state
        .class_repository
        .record_attendance(&class_id, marks)
        .await?;

    Ok(Json(UpdateAttendanceResponse {
        message: "Attendance updated successfully".to_string(),
        attendance_record,
    }))
}

/// Get a class's attendance history
pub async fn get_attendance_history(
    State(state): State<AppState>,
    query: Result<Query<ClassQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let class_id = validate_class_id(query.id.as_deref()).map_err(ApiError::Validation)?;

    let attendance_history = state.class_repository.attendance_history(class_id).await?;

    Ok(Json(AttendanceHistoryResponse { attendance_history }))
}

/// Get summary statistics for every class
pub async fn get_classes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let classes = state.class_repository.summaries().await?;

    Ok(Json(ClassListResponse { classes }))
}

/// Get the per-student absence report for a class
pub async fn get_absence_report(
    State(state): State<AppState>,
    query: Result<Query<ClassQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let class_id = validate_class_id(query.id.as_deref()).map_err(ApiError::Validation)?;

    let report = state.class_repository.absence_report(class_id).await?;

    Ok(Json(report))
}

/// Fallback for unmatched routes
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Not Found" })),
    )
}
