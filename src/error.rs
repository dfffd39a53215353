use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed schema or range validation
    #[error("Validation error: {message}")]
    Validation { status: StatusCode, message: String },
    /// Charging speed outside `level1` / `level2`
    #[error("Invalid charging speed selected. Choose 'level1' or 'level2'.")]
    InvalidChargingSpeed(String),
}

impl AppError {
    /// 422 for a single offending field
    pub fn invalid_field(field: &str, reason: &str) -> Self {
        Self::Validation {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: format!("{}: {}", field, reason),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { status, .. } => *status,
            Self::InvalidChargingSpeed(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::InvalidChargingSpeed(_) => "invalid_charging_speed",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Validation { message, .. } => message.clone(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "type": self.type_name(),
            }
        }));

        (self.status(), body).into_response()
    }
}

// Extractor rejections keep their own status: 422 for data errors,
// 400 for syntax errors, 415 for a missing JSON content type.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
