use actix_web::error::{PathError, QueryPayloadError};
use actix_web::HttpRequest;
use log::debug;

use crate::server::handler::ApiError;

/// Rejects path parameters that can't be parsed, e.g. a non-numeric user id
pub(crate) fn path_extractor_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Could not parse path: {err}");

    ApiError::InvalidId.into()
}

/// Rejects query parameters that can't be parsed, e.g. a non-numeric viewer id
pub(crate) fn query_extractor_error(
    err: QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    debug!("Could not parse query: {err}");

    ApiError::InvalidId.into()
}
