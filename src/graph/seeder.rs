//! Populating an empty store with synthetic users and a random friend graph

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use log::{debug, info};
use rand::Rng;
use rorm::fields::types::ForeignModelByField;
use rorm::{insert, query, Database, Model};
use serde::Deserialize;

use crate::graph::generator::{random_biography, random_name};
use crate::models::{FriendInsert, User, UserInsert};

/// Parameters of a seeding run
///
/// Missing values fall back to the defaults.
#[derive(Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct SeedOptions {
    /// The number of users to create
    pub user_count: usize,
    /// The number of friends drawn for every user
    pub friends_per_user: usize,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            user_count: 100,
            friends_per_user: 10,
        }
    }
}

/// The rows a seeding run has inserted
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SeedSummary {
    /// Inserted users
    pub users: usize,
    /// Inserted directed friend edges
    pub friendships: usize,
}

/// The errors that can occur while seeding
#[derive(Debug)]
pub enum SeedError {
    /// The store already contains users
    NotEmpty,
    /// The seed transaction failed and was rolled back
    Database(rorm::Error),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::NotEmpty => write!(f, "The database already contains users"),
            SeedError::Database(err) => write!(f, "Seeding failed: {err}"),
        }
    }
}

impl From<rorm::Error> for SeedError {
    fn from(value: rorm::Error) -> Self {
        Self::Database(value)
    }
}

/// A user that can take part in friendships
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    /// Id of the user
    pub id: i64,
    /// Name of the user
    pub name: String,
}

/// A directed edge that is about to be inserted
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlannedEdge {
    /// The originating user
    pub user: i64,
    /// Name of the originating user
    pub user_name: String,
    /// The other user
    pub friend: i64,
    /// Name of the other user
    pub friend_name: String,
}

/// The ordered pairs that are already present.
///
/// Inserting is idempotent: a pair is only accepted the first time.
#[derive(Default, Debug)]
pub struct EdgeSet {
    pairs: HashSet<(i64, i64)>,
}

impl EdgeSet {
    /// Insert the pair `(user, friend)`.
    ///
    /// Returns `false` if the pair is already present or if it is a self-edge.
    pub fn insert(&mut self, user: i64, friend: i64) -> bool {
        user != friend && self.pairs.insert((user, friend))
    }

    /// Check whether the pair `(user, friend)` is present
    pub fn contains(&self, user: i64, friend: i64) -> bool {
        self.pairs.contains(&(user, friend))
    }

    /// The number of present pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check whether no pair is present
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Draw the friends of every member.
///
/// Members are processed in order of their id. Every member draws `friends_per_user` distinct
/// other members (or all others, if there are fewer). The draw does not consider edges that were
/// created while processing earlier members, so members can end up with more friends than
/// `friends_per_user`.
///
/// Every draw produces the edge and its mirror. Pairs already in `edges` are skipped.
///
/// Returns one batch of edges per member, in processing order.
pub fn plan_friendships<R: Rng + ?Sized>(
    members: &[Member],
    friends_per_user: usize,
    edges: &mut EdgeSet,
    rng: &mut R,
) -> Vec<Vec<PlannedEdge>> {
    let mut ordered: Vec<&Member> = members.iter().collect();
    ordered.sort_by_key(|m| m.id);

    let mut batches = Vec::with_capacity(ordered.len());

    for user in &ordered {
        let mut candidates: Vec<&Member> = ordered
            .iter()
            .copied()
            .filter(|m| m.id != user.id)
            .collect();

        let mut batch = Vec::new();

        for _ in 0..friends_per_user {
            if candidates.is_empty() {
                break;
            }
            let friend = candidates.swap_remove(rng.gen_range(0..candidates.len()));

            if edges.insert(user.id, friend.id) {
                batch.push(PlannedEdge {
                    user: user.id,
                    user_name: user.name.clone(),
                    friend: friend.id,
                    friend_name: friend.name.clone(),
                });
            }
            if edges.insert(friend.id, user.id) {
                batch.push(PlannedEdge {
                    user: friend.id,
                    user_name: friend.name.clone(),
                    friend: user.id,
                    friend_name: user.name.clone(),
                });
            }
        }

        batches.push(batch);
    }

    batches
}

/// Seed the store with synthetic users and friendships.
///
/// The complete run is a single transaction. If the store already contains users,
/// nothing is inserted and [SeedError::NotEmpty] is returned.
pub async fn seed(db: &Database, options: SeedOptions) -> Result<SeedSummary, SeedError> {
    info!(
        "Seeding database with {} users and {} friends per user",
        options.user_count, options.friends_per_user
    );

    let mut tx = db.start_transaction().await?;

    let (existing,) = query!(&mut tx, (User::F.id.count(),)).one().await?;
    if existing > 0 {
        debug!("Refusing to seed, found {existing} users");
        return Err(SeedError::NotEmpty);
    }

    // Generate everything up front, the rng is not Send
    let (inserts, names) = {
        let mut rng = rand::thread_rng();
        let inserts: Vec<UserInsert> = (0..options.user_count)
            .map(|_| UserInsert {
                name: random_name(&mut rng),
                biography: Some(random_biography(&mut rng)),
            })
            .collect();
        let names: Vec<String> = inserts.iter().map(|u| u.name.clone()).collect();
        (inserts, names)
    };

    if inserts.is_empty() {
        tx.commit().await?;
        return Ok(SeedSummary {
            users: 0,
            friendships: 0,
        });
    }

    let ids = insert!(&mut tx, UserInsert)
        .return_primary_key()
        .bulk(&inserts)
        .await?;
    info!("Added {} users", ids.len());

    let members: Vec<Member> = ids
        .into_iter()
        .zip(names)
        .map(|(id, name)| Member { id, name })
        .collect();

    let batches = {
        let mut rng = rand::thread_rng();
        let mut edges = EdgeSet::default();
        plan_friendships(&members, options.friends_per_user, &mut edges, &mut rng)
    };

    let mut friendships = 0;
    for batch in batches {
        if batch.is_empty() {
            continue;
        }

        let inserts: Vec<FriendInsert> = batch
            .into_iter()
            .map(|edge| FriendInsert {
                user: ForeignModelByField::Key(edge.user),
                user_name: edge.user_name,
                friend: ForeignModelByField::Key(edge.friend),
                friend_name: edge.friend_name,
            })
            .collect();

        insert!(&mut tx, FriendInsert).bulk(&inserts).await?;

        friendships += inserts.len();
    }
    info!("Added {friendships} friendships");

    tx.commit().await?;

    info!("Done seeding database");

    Ok(SeedSummary {
        users: members.len(),
        friendships,
    })
}
