//! All handlers for the user endpoints live in here

use actix_web::get;
use actix_web::web::{Data, Json, Path, Query};
use rorm::Database;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::graph::{self, SubjectView, UserSummary, Viewer};
use crate::server::handler::{ApiError, ApiErrorResponse, ApiResult, PathId};

/// The query of a user search
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchUsersQuery {
    /// Part of the name to search for, ignoring case.
    ///
    /// If omitted, all users are returned.
    #[param(example = "mary")]
    search: Option<String>,
}

/// The users matching a search
#[derive(Serialize, ToSchema)]
pub struct GetUsersResponse {
    users: Vec<UserSummary>,
}

/// Search users by name
///
/// The users are ordered by their name.
#[utoipa::path(
    tag = "Users",
    context_path = "/api/v1",
    responses(
        (status = 200, description = "Returns the matching users", body = GetUsersResponse),
        (status = 400, description = "Client error", body = ApiErrorResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse),
    ),
    params(SearchUsersQuery),
)]
#[get("/users")]
pub async fn search_users(
    req: Query<SearchUsersQuery>,
    db: Data<Database>,
) -> ApiResult<Json<GetUsersResponse>> {
    let pattern = req.search.as_deref().unwrap_or_default();

    Ok(Json(GetUsersResponse {
        users: graph::search_users(db.as_ref(), pattern).await?,
    }))
}

/// The user the client is looking as
#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase", parameter_in = Query)]
pub struct GetUserQuery {
    /// The id of the impersonated user
    #[param(example = 3)]
    current_user_id: Option<i64>,
}

/// Retrieve a user with their friends
///
/// If `currentUserId` is given, `relationshipToCurrentUser` tells how the impersonated user
/// is related to the requested one:
/// - `friend`: they are friends
/// - `mutual`: they are not friends, but have a friend in common
/// - `none`: anything else
#[utoipa::path(
    tag = "Users",
    context_path = "/api/v1",
    responses(
        (status = 200, description = "Returns the requested user", body = SubjectView),
        (status = 400, description = "Client error", body = ApiErrorResponse),
        (status = 404, description = "User not found", body = ApiErrorResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse),
    ),
    params(PathId, GetUserQuery),
)]
#[get("/users/{id}")]
pub async fn get_user(
    path: Path<PathId>,
    req: Query<GetUserQuery>,
    db: Data<Database>,
) -> ApiResult<Json<SubjectView>> {
    let viewer = req.current_user_id.map(Viewer);

    graph::resolve(db.as_ref(), path.id, viewer)
        .await?
        .map(Json)
        .ok_or(ApiError::UserNotFound)
}
