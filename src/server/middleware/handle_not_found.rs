use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::HttpResponse;

use crate::server::handler::{ApiErrorResponse, ApiStatusCode};

/// Replaces the empty body of unknown routes with an [ApiErrorResponse].
///
/// Responses that already carry a body, like [ApiError::UserNotFound](crate::server::handler::ApiError::UserNotFound),
/// are passed through.
pub(crate) fn handle_not_found<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    if res.response().headers().contains_key(CONTENT_TYPE) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let (req, _) = res.into_parts();
    let res = HttpResponse::NotFound().json(ApiErrorResponse::new(
        ApiStatusCode::NotFound,
        "Not found".to_string(),
    ));

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body::<B>(),
    ))
}
