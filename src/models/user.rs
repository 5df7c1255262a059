use rorm::{Model, Patch};

/// A member of the social graph
#[derive(Model)]
pub struct User {
    /// The primary key of a user
    #[rorm(id)]
    pub id: i64,

    /// The full name of the user.
    ///
    /// Indexed as it is used for searching.
    #[rorm(max_length = 256, index)]
    pub name: String,

    /// A short text the user wrote about themselves
    #[rorm(max_length = 1024)]
    pub biography: Option<String>,

    /// The point in time the user was created
    #[rorm(auto_create_time)]
    pub created_at: chrono::NaiveDateTime,

    /// The point in time the user was last modified
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Patch)]
#[rorm(model = "User")]
pub(crate) struct UserInsert {
    pub(crate) name: String,
    pub(crate) biography: Option<String>,
}
