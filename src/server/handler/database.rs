//! Handlers to inspect, seed and reset the database

use actix_web::web::{Data, Json};
use actix_web::{get, post};
use rorm::Database;
use serde::Serialize;
use utoipa::ToSchema;

use crate::graph;
use crate::server::handler::{ApiError, ApiErrorResponse, ApiResult};
use crate::server::{MaintenanceLock, SeedSettings};

/// The content of the database
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseResponse {
    /// Seeding is only possible if this is `true`
    is_empty: bool,
    /// The number of stored users
    #[schema(example = 100)]
    users: u64,
    /// The number of stored directed friend edges
    #[schema(example = 1800)]
    friendships: u64,
}

/// Retrieve the number of stored users and friendships
///
/// Clients should check `isEmpty` before offering to seed the database.
#[utoipa::path(
    tag = "Database",
    context_path = "/api/v1",
    responses(
        (status = 200, description = "Content of the database", body = DatabaseResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse),
    ),
)]
#[get("/database")]
pub async fn get_database(db: Data<Database>) -> ApiResult<Json<DatabaseResponse>> {
    let stats = graph::store_stats(db.as_ref()).await?;

    Ok(Json(DatabaseResponse {
        is_empty: stats.is_empty(),
        users: stats.users,
        friendships: stats.friendships,
    }))
}

/// The rows that were inserted or removed
#[derive(Serialize, ToSchema)]
pub struct MaintenanceResponse {
    /// Inserted or removed users
    #[schema(example = 100)]
    users: u64,
    /// Inserted or removed directed friend edges
    #[schema(example = 1800)]
    friendships: u64,
}

/// Fill the empty database with random users and friendships
///
/// Fails if the database already contains users. Only one seed or reset can run at a time.
#[utoipa::path(
    tag = "Database",
    context_path = "/api/v1",
    responses(
        (status = 200, description = "Database has been seeded", body = MaintenanceResponse),
        (status = 400, description = "Client error", body = ApiErrorResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse),
    ),
)]
#[post("/database/seed")]
pub async fn seed_database(
    db: Data<Database>,
    lock: MaintenanceLock,
    settings: SeedSettings,
) -> ApiResult<Json<MaintenanceResponse>> {
    let _guard = lock
        .try_lock()
        .map_err(|_| ApiError::MaintenanceInProgress)?;

    let summary = graph::seed(db.as_ref(), *settings.get_ref()).await?;

    Ok(Json(MaintenanceResponse {
        users: summary.users as u64,
        friendships: summary.friendships as u64,
    }))
}

/// Delete all users and friendships
///
/// Clients impersonating a user have to forget that user afterwards.
/// Only one seed or reset can run at a time.
#[utoipa::path(
    tag = "Database",
    context_path = "/api/v1",
    responses(
        (status = 200, description = "Database has been reset", body = MaintenanceResponse),
        (status = 400, description = "Client error", body = ApiErrorResponse),
        (status = 500, description = "Server error", body = ApiErrorResponse),
    ),
)]
#[post("/database/reset")]
pub async fn reset_database(
    db: Data<Database>,
    lock: MaintenanceLock,
) -> ApiResult<Json<MaintenanceResponse>> {
    let _guard = lock
        .try_lock()
        .map_err(|_| ApiError::MaintenanceInProgress)?;

    let summary = graph::reset(db.as_ref())
        .await
        .map_err(ApiError::TransactionFailure)?;

    Ok(Json(MaintenanceResponse {
        users: summary.users,
        friendships: summary.friendships,
    }))
}
