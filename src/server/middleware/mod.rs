//! This module holds the middleware definitions

pub(crate) use extractor_error::{path_extractor_error, query_extractor_error};
pub(crate) use handle_not_found::handle_not_found;

mod extractor_error;
mod handle_not_found;

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::middleware::ErrorHandlers;
    use actix_web::web::{get, scope, PathConfig, QueryConfig};
    use actix_web::{test, App, HttpResponse};
    use serde_json::Value;

    use super::*;
    use crate::server::handler::{get_user, ApiError, ApiResult};

    async fn missing_user() -> ApiResult<HttpResponse> {
        Err(ApiError::UserNotFound)
    }

    /// The ids are rejected before the database is needed, so none is registered
    async fn call(uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(PathConfig::default().error_handler(path_extractor_error))
                .app_data(QueryConfig::default().error_handler(query_extractor_error))
                .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, handle_not_found))
                .service(
                    scope("/api/v1")
                        .service(get_user)
                        .route("/missing", get().to(missing_user)),
                ),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = res.status();
        let body: Value = test::read_body_json(res).await;

        (status, body)
    }

    #[actix_web::test]
    async fn non_numeric_user_id_is_rejected() {
        let (status, body) = call("/api/v1/users/abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 1000);
        assert_eq!(body["message"], "Invalid id");
    }

    #[actix_web::test]
    async fn non_numeric_viewer_id_is_rejected() {
        let (status, body) = call("/api/v1/users/1?currentUserId=xyz").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 1000);
    }

    #[actix_web::test]
    async fn unknown_route_gets_error_body() {
        let (status, body) = call("/api/v1/nothing/here").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["statusCode"], 1004);
        assert_eq!(body["message"], "Not found");
    }

    #[actix_web::test]
    async fn user_not_found_body_is_kept() {
        let (status, body) = call("/api/v1/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["statusCode"], 1001);
        assert_eq!(body["message"], "User not found");
    }
}
