use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use storage::error::StorageError;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    UnprocessableEntity(String),
}

/// Error body returned for every failed request
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionDetails {
    pub title: String,
    pub status: u16,
    pub details: String,
    pub developer_message: String,
    pub timestamp: DateTime<Utc>,
    /// Offending field names, validation failures only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Field name to reason, validation failures only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields_messages: Option<BTreeMap<String, String>>,
}

impl ExceptionDetails {
    fn new(status: StatusCode, title: &str, details: String, developer_message: &str) -> Self {
        Self {
            title: title.to_string(),
            status: status.as_u16(),
            details,
            developer_message: developer_message.to_string(),
            timestamp: Utc::now(),
            fields: None,
            fields_messages: None,
        }
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::UnprocessableEntity(msg) => write!(f, "Unprocessable entity: {}", msg),
        }
    }
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(StorageError::Unprocessable(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Storage(StorageError::UnsupportedSport(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Build the response body; internal failures are logged and hidden
    pub fn details(&self) -> ExceptionDetails {
        let status = self.status_code();
        match self {
            Self::Storage(e @ StorageError::NotFound(_)) => ExceptionDetails::new(
                status,
                "Not Found Exception, Check the Documentation",
                e.to_string(),
                e.kind(),
            ),
            Self::Storage(e @ StorageError::ConstraintViolation(msg)) => ExceptionDetails::new(
                status,
                "Conflict Exception, Check the Documentation",
                msg.clone(),
                e.kind(),
            ),
            Self::Storage(e @ StorageError::Unprocessable(msg)) => ExceptionDetails::new(
                status,
                "Unprocessable Entity Exception, Check the Documentation",
                msg.clone(),
                e.kind(),
            ),
            Self::Storage(e @ StorageError::UnsupportedSport(_)) => ExceptionDetails::new(
                status,
                "Bad Request Exception, Check the Documentation",
                e.to_string(),
                e.kind(),
            ),
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                ExceptionDetails::new(
                    status,
                    "Internal Server Error",
                    "An internal error occurred".to_string(),
                    e.kind(),
                )
            }
            Self::Validation(errors) => {
                let fields_messages: BTreeMap<String, String> = errors
                    .field_errors()
                    .iter()
                    .map(|(field, errors)| {
                        let reasons: Vec<String> = errors
                            .iter()
                            .map(|e| {
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            })
                            .collect();
                        (field.to_string(), reasons.join("; "))
                    })
                    .collect();

                let mut body = ExceptionDetails::new(
                    status,
                    "Bad Request Exception, Invalid Fields",
                    "Check the field(s) error".to_string(),
                    "ValidationErrors",
                );
                body.fields = Some(fields_messages.keys().cloned().collect());
                body.fields_messages = Some(fields_messages);
                body
            }
            Self::BadRequest(msg) => ExceptionDetails::new(
                status,
                "Bad Request Exception, Check the Documentation",
                msg.clone(),
                "BadRequestException",
            ),
            Self::UnprocessableEntity(msg) => ExceptionDetails::new(
                status,
                "Unprocessable Entity Exception, Check the Documentation",
                msg.clone(),
                "UnprocessableEntityException",
            ),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.details())).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::UnprocessableEntity(e.body_text()),
            other => Self::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for WebError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for WebError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(range(min = 0))]
        points: i32,
    }

    #[test]
    fn storage_errors_map_to_http_statuses() {
        let cases = [
            (StorageError::NotFound("Team 1".into()), StatusCode::NOT_FOUND),
            (
                StorageError::ConstraintViolation("dup".into()),
                StatusCode::CONFLICT,
            ),
            (
                StorageError::Unprocessable("bad".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                StorageError::UnsupportedSport("CRICKET".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                StorageError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let error = WebError::from(error);
            assert_eq!(error.status_code(), expected);
            assert_eq!(error.details().status, expected.as_u16());
        }
    }

    #[test]
    fn conflict_body_carries_detail_and_exception_name() {
        let body = WebError::from(StorageError::ConstraintViolation(
            "Team name already exists".into(),
        ))
        .details();

        assert_eq!(body.details, "Team name already exists");
        assert_eq!(body.developer_message, "ConflictException");
        assert!(body.fields.is_none());
    }

    #[test]
    fn internal_errors_are_not_leaked() {
        let body = WebError::from(StorageError::Database(sqlx::Error::PoolTimedOut)).details();
        assert_eq!(body.details, "An internal error occurred");
    }

    #[test]
    fn validation_body_lists_fields_and_reasons() {
        let errors = Named {
            name: String::new(),
            points: -1,
        }
        .validate()
        .unwrap_err();

        let body = WebError::from(errors).details();
        assert_eq!(body.status, 400);
        assert_eq!(
            body.fields,
            Some(vec!["name".to_string(), "points".to_string()])
        );
        let messages = body.fields_messages.unwrap();
        assert_eq!(messages["name"], "must not be empty");
        assert_eq!(messages["points"], "range");
    }

    #[test]
    fn body_uses_camel_case_keys() {
        let body = WebError::BadRequest("nope".into()).details();
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("developerMessage").is_some());
        assert!(json.get("timestamp").is_some());
        assert!(json.get("fieldsMessages").is_none());
    }
}
