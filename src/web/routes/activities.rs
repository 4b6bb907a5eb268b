use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::services::EnrollmentError;
use crate::store::Catalog;
use crate::web::AppState;

// Same error shape the frontend already parses: status + {"detail": ...}.
impl IntoResponse for EnrollmentError {
    fn into_response(self) -> Response {
        let status = match self {
            EnrollmentError::ActivityNotFound => StatusCode::NOT_FOUND,
            EnrollmentError::AlreadyRegistered | EnrollmentError::NotRegistered => {
                StatusCode::BAD_REQUEST
            }
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.enrollment.list().await)
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>, EnrollmentError> {
    let message = state
        .enrollment
        .register(&activity_name, &query.email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
            e
        })?;
    Ok(Json(json!({ "message": message })))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>, EnrollmentError> {
    let message = state
        .enrollment
        .unregister(&activity_name, &query.email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "unregister rejected");
            e
        })?;
    Ok(Json(json!({ "message": message })))
}
