//! This module holds the handler of couchgraph

use std::fmt::{Display, Formatter};

use actix_web::body::BoxBody;
use actix_web::HttpResponse;
use log::{debug, error, trace};
use serde::{Deserialize, Serialize};
use serde_repr::Serialize_repr;
use utoipa::{IntoParams, ToSchema};

pub use crate::server::handler::database::*;
pub use crate::server::handler::users::*;
pub use crate::server::handler::version::*;

use crate::graph::SeedError;

pub mod database;
pub mod users;
pub mod version;

/// The result that is used throughout the complete api.
pub type ApiResult<T> = Result<T, ApiError>;

/// The status codes an [ApiErrorResponse] can carry.
///
/// Codes below 2000 are client errors, everything above are server errors.
#[derive(Serialize_repr, ToSchema, Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u16)]
pub enum ApiStatusCode {
    /// An id in the path or query could not be parsed
    InvalidId = 1000,
    /// The requested user does not exist
    UserNotFound = 1001,
    /// The database has to be empty to be seeded
    DatabaseNotEmpty = 1002,
    /// Another seed or reset is running
    MaintenanceInProgress = 1003,
    /// The requested route does not exist
    NotFound = 1004,

    /// The database returned an error
    DatabaseError = 2001,
    /// A seed or reset was rolled back
    TransactionFailure = 2002,
}

/// The body of every error response
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    #[schema(example = "Error message is here")]
    message: String,
    #[schema(example = 1000)]
    status_code: ApiStatusCode,
}

impl ApiErrorResponse {
    pub(crate) fn new(status_code: ApiStatusCode, message: String) -> Self {
        Self {
            message,
            status_code,
        }
    }
}

/// A user id in the path
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PathId {
    /// The id of the user
    pub(crate) id: i64,
}

/// This enum holds all possible error types that can occur in the API
#[derive(Debug)]
pub enum ApiError {
    /// An id could not be parsed
    InvalidId,
    /// The requested user does not exist
    UserNotFound,
    /// Seeding was requested, but the database already contains users
    DatabaseNotEmpty,
    /// Another seed or reset is currently running
    MaintenanceInProgress,

    /// All errors that are thrown by the database
    DatabaseError(rorm::Error),
    /// Seeding or resetting failed and was rolled back
    TransactionFailure(rorm::Error),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidId => write!(f, "Invalid id"),
            ApiError::UserNotFound => write!(f, "User not found"),
            ApiError::DatabaseNotEmpty => write!(f, "The database is not empty"),
            ApiError::MaintenanceInProgress => {
                write!(f, "The database is currently seeded or reset")
            }
            ApiError::DatabaseError(_) => write!(f, "Database error occurred"),
            ApiError::TransactionFailure(_) => {
                write!(f, "The operation failed, no changes were made")
            }
        }
    }
}

impl ApiError {
    fn api_status_code(&self) -> ApiStatusCode {
        match self {
            ApiError::InvalidId => ApiStatusCode::InvalidId,
            ApiError::UserNotFound => ApiStatusCode::UserNotFound,
            ApiError::DatabaseNotEmpty => ApiStatusCode::DatabaseNotEmpty,
            ApiError::MaintenanceInProgress => ApiStatusCode::MaintenanceInProgress,
            ApiError::DatabaseError(_) => ApiStatusCode::DatabaseError,
            ApiError::TransactionFailure(_) => ApiStatusCode::TransactionFailure,
        }
    }
}

impl actix_web::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        let body = ApiErrorResponse::new(self.api_status_code(), self.to_string());

        match self {
            ApiError::InvalidId => {
                trace!("Invalid id");

                HttpResponse::BadRequest().json(body)
            }
            ApiError::UserNotFound => {
                trace!("User not found");

                HttpResponse::NotFound().json(body)
            }
            ApiError::DatabaseNotEmpty => {
                debug!("Refused to seed non-empty database");

                HttpResponse::BadRequest().json(body)
            }
            ApiError::MaintenanceInProgress => {
                debug!("Maintenance already in progress");

                HttpResponse::BadRequest().json(body)
            }
            ApiError::DatabaseError(err) => {
                error!("Database error: {err}");

                HttpResponse::InternalServerError().json(body)
            }
            ApiError::TransactionFailure(err) => {
                error!("Transaction failed: {err}");

                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

impl From<rorm::Error> for ApiError {
    fn from(value: rorm::Error) -> Self {
        Self::DatabaseError(value)
    }
}

impl From<SeedError> for ApiError {
    fn from(value: SeedError) -> Self {
        match value {
            SeedError::NotEmpty => Self::DatabaseNotEmpty,
            SeedError::Database(err) => Self::TransactionFailure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    use super::*;

    #[test]
    fn client_errors_map_to_client_statuses() {
        assert_eq!(
            ApiError::InvalidId.error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UserNotFound.error_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::DatabaseNotEmpty.error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MaintenanceInProgress.error_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_empty_seed_error_is_a_client_error() {
        let err: ApiError = SeedError::NotEmpty.into();
        assert!(matches!(err, ApiError::DatabaseNotEmpty));
    }

    #[test]
    fn error_body_carries_numeric_code() {
        let body = ApiErrorResponse::new(ApiStatusCode::UserNotFound, "User not found".into());
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["statusCode"], 1001);
        assert_eq!(json["message"], "User not found");
    }
}
