//! All the database models live here.

pub use friend::*;
pub use user::*;

mod friend;
mod user;
