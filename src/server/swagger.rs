//! This module holds the definition of the swagger declaration

use utoipa::OpenApi;

use crate::graph;
use crate::server::handler;

/// Helper struct for the openapi definitions.
#[derive(OpenApi)]
#[openapi(
    paths(
        handler::version,
        handler::search_users,
        handler::get_user,
        handler::get_database,
        handler::seed_database,
        handler::reset_database,
    ),
    components(schemas(
        handler::ApiErrorResponse,
        handler::ApiStatusCode,
        handler::VersionResponse,
        handler::GetUsersResponse,
        handler::DatabaseResponse,
        handler::MaintenanceResponse,
        graph::UserSummary,
        graph::SubjectView,
        graph::Relationship,
    ))
)]
pub struct ApiDoc;
