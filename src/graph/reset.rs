//! Emptying the store

use log::info;
use rorm::{delete, query, Database, Model};

use crate::models::{Friend, User};

/// The rows a reset has removed
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ResetSummary {
    /// Removed users
    pub users: u64,
    /// Removed directed friend edges
    pub friendships: u64,
}

/// Delete all friend edges and afterwards all users.
///
/// Both deletions happen in one transaction, so either everything or nothing is removed.
/// Callers holding a viewer id must drop it, as it refers to a deleted user afterwards.
pub async fn reset(db: &Database) -> Result<ResetSummary, rorm::Error> {
    let mut tx = db.start_transaction().await?;

    let (friendships,) = query!(&mut tx, (Friend::F.id.count(),)).one().await?;
    let (users,) = query!(&mut tx, (User::F.id.count(),)).one().await?;

    // Edges reference users, so they have to go first
    delete!(&mut tx, Friend).all().await?;
    delete!(&mut tx, User).all().await?;

    tx.commit().await?;

    info!("Removed {users} users and {friendships} friendships");

    Ok(ResetSummary {
        users: users as u64,
        friendships: friendships as u64,
    })
}
