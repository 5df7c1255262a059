//! Size of the stored graph

use rorm::{query, Database, Model};

use crate::models::{Friend, User};

/// The number of rows in the store
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StoreStats {
    /// Stored users
    pub users: u64,
    /// Stored directed friend edges
    pub friendships: u64,
}

impl StoreStats {
    /// The seeder may only run on an empty store
    pub fn is_empty(&self) -> bool {
        self.users == 0
    }
}

/// Count the stored users
pub async fn count_users(db: &Database) -> Result<u64, rorm::Error> {
    let (users,) = query!(db, (User::F.id.count(),)).one().await?;
    Ok(users as u64)
}

/// Count the stored users and friend edges
pub async fn store_stats(db: &Database) -> Result<StoreStats, rorm::Error> {
    let users = count_users(db).await?;
    let (friendships,) = query!(db, (Friend::F.id.count(),)).one().await?;

    Ok(StoreStats {
        users,
        friendships: friendships as u64,
    })
}
