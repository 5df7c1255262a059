use rorm::fields::types::ForeignModel;
use rorm::{Model, Patch};

use crate::models::User;

/// A directed friend edge
///
/// This model has to be created 2 times for every relation, once in each direction.
/// The pair of `user` and `friend` is unique, the seeder skips pairs that already exist.
#[derive(Model)]
pub struct Friend {
    /// Primary key of this edge
    #[rorm(id)]
    pub id: i64,

    /// The originating user
    #[rorm(on_update = "Cascade", on_delete = "Restrict", index)]
    pub user: ForeignModel<User>,

    /// Name of the originating user at the time the edge was created.
    ///
    /// Not updated if the user is renamed.
    #[rorm(max_length = 256)]
    pub user_name: String,

    /// The other user
    #[rorm(on_update = "Cascade", on_delete = "Restrict", index)]
    pub friend: ForeignModel<User>,

    /// Name of the other user at the time the edge was created
    #[rorm(max_length = 256)]
    pub friend_name: String,

    /// The point in time the edge was created
    #[rorm(auto_create_time)]
    pub created_at: chrono::NaiveDateTime,

    /// The point in time the edge was last modified
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Patch)]
#[rorm(model = "Friend")]
pub(crate) struct FriendInsert {
    pub(crate) user: ForeignModel<User>,
    pub(crate) user_name: String,
    pub(crate) friend: ForeignModel<User>,
    pub(crate) friend_name: String,
}
