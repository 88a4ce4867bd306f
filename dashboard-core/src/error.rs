use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Query(#[from] query_state::Error),

    #[error("validation error: rows {rows} exceeds maximum {max_rows}")]
    ValidationRowsTooLarge { rows: u32, max_rows: u32 },

    #[error("validation error: unknown field {0:?}")]
    ValidationUnknownField(String),

    #[error("validation error: field {field:?} does not support {operation}")]
    ValidationUnsupportedOperation {
        field: String,
        operation: &'static str,
    },

    #[error("validation error: invalid value {value:?} for field {field:?}")]
    ValidationInvalidValue { field: String, value: String },

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::Query(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::ValidationRowsTooLarge {
                rows: _,
                max_rows: _,
            } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::ValidationUnknownField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::ValidationUnsupportedOperation {
                field: _,
                operation: _,
            } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::ValidationInvalidValue { field: _, value: _ } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
