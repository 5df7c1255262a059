//! The social graph: resolving users, seeding and resetting the store
//!
//! Users are connected by directed [Friend](crate::models::Friend) edges which are always
//! created in pairs. The relationship of a viewer to another user is never stored but
//! computed on every request, see [Relationship].

pub use relationship::*;
pub use reset::*;
pub use search::*;
pub use seeder::*;
pub use stats::*;

pub mod generator;
mod relationship;
mod reset;
mod search;
mod seeder;
mod stats;
