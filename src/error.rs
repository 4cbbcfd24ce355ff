//! Typed errors and HTTP mapping.

use crate::response::{envelope, empty_payload};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: car {0}")]
    NotFound(String),
    #[error("invalid id: '{0}'")]
    InvalidId(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InvalidId(_)
            | AppError::Validation(_)
            | AppError::BadRequest(_)
            | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The route-level operation an error happened in. Picks the message shown to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Read,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "error listing",
            Operation::Read => "error reading",
            Operation::Create => "error creating",
            Operation::Update => "error updating",
            Operation::Delete => "error deleting",
        }
    }
}

pub const NOT_FOUND_MESSAGE: &str = "car not found";
pub const INVALID_ID_MESSAGE: &str = "invalid id";

/// An [`AppError`] tagged with the operation that produced it.
#[derive(Error, Debug)]
#[error("{operation:?}: {error}")]
pub struct OperationError {
    pub operation: Operation,
    #[source]
    pub error: AppError,
}

pub trait WithOperation<T> {
    fn during(self, operation: Operation) -> Result<T, OperationError>;
}

impl<T> WithOperation<T> for Result<T, AppError> {
    fn during(self, operation: Operation) -> Result<T, OperationError> {
        self.map_err(|error| OperationError { operation, error })
    }
}

impl OperationError {
    pub fn message(&self) -> &'static str {
        match self.error.status() {
            StatusCode::NOT_FOUND => NOT_FOUND_MESSAGE,
            _ if matches!(self.error, AppError::InvalidId(_)) => INVALID_ID_MESSAGE,
            _ => self.operation.failure_message(),
        }
    }
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        if status.is_server_error() {
            tracing::error!(operation = ?self.operation, error = %self.error, "store failure");
        } else {
            tracing::warn!(operation = ?self.operation, error = %self.error, "request rejected");
        }
        envelope(status, empty_payload(), Some(self.message())).into_response()
    }
}
