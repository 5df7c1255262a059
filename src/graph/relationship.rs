//! Resolving a user together with their friends and their relationship to a viewer

use std::collections::HashSet;

use chrono::NaiveDateTime;
use log::trace;
use rorm::{query, Database, FieldAccess, Model};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Friend, User};

/// The user a page is looked at as.
///
/// This is passed explicitly into every resolution, there is no global "current user".
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Viewer(pub i64);

/// How the viewer is related to the subject
#[derive(Serialize, ToSchema, Copy, Clone, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Relationship {
    /// The viewer has the subject as friend
    Friend,
    /// Viewer and subject are not friends, but have at least one friend in common
    Mutual,
    /// No relationship or no viewer
    None,
}

impl Relationship {
    /// Classify the relationship of a viewer to a subject.
    ///
    /// **Parameter**:
    /// - `subject_id`: the user being looked at
    /// - `viewer`: the user looking, if any
    /// - `subject_friends`: ids of all users the subject has an edge to
    /// - `viewer_friends`: ids of all users the viewer has an edge to
    pub fn classify(
        subject_id: i64,
        viewer: Option<Viewer>,
        subject_friends: &HashSet<i64>,
        viewer_friends: &HashSet<i64>,
    ) -> Self {
        let Some(Viewer(viewer_id)) = viewer else {
            return Self::None;
        };

        if viewer_friends.contains(&subject_id) {
            return Self::Friend;
        }

        if viewer_id != subject_id
            && subject_friends
                .iter()
                .any(|m| *m != viewer_id && viewer_friends.contains(m))
        {
            return Self::Mutual;
        }

        Self::None
    }
}

/// The data of a user without any relations
#[derive(Serialize, ToSchema, Clone, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// The id of the user
    #[schema(example = 2)]
    pub id: i64,
    /// The full name of the user
    #[schema(example = "Mary Smith")]
    pub name: String,
    /// A short text the user wrote about themselves
    #[schema(example = "I love yoga and hate golf.")]
    pub biography: Option<String>,
    /// The point in time the user was created
    pub created_at: NaiveDateTime,
    /// The point in time the user was last modified
    pub updated_at: Option<NaiveDateTime>,
}

/// A user with their friends and their relationship to the viewer
#[derive(Serialize, ToSchema, Clone, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectView {
    /// The id of the user
    #[schema(example = 1)]
    pub id: i64,
    /// The full name of the user
    #[schema(example = "James Garcia")]
    pub name: String,
    /// A short text the user wrote about themselves
    #[schema(example = "I kinda like reading and dislike fishing.")]
    pub biography: Option<String>,
    /// The point in time the user was created
    pub created_at: NaiveDateTime,
    /// The point in time the user was last modified
    pub updated_at: Option<NaiveDateTime>,
    /// All users this user has an edge to, ordered by id
    pub friends: Vec<UserSummary>,
    /// How the viewer is related to this user
    pub relationship_to_current_user: Relationship,
}

impl SubjectView {
    /// Build the view out of the already fetched parts.
    ///
    /// The friends are sorted by their id.
    pub fn assemble(
        subject: UserSummary,
        mut friends: Vec<UserSummary>,
        viewer: Option<Viewer>,
        viewer_friends: &HashSet<i64>,
    ) -> Self {
        friends.sort_by_key(|f| f.id);

        let subject_friends: HashSet<i64> = friends.iter().map(|f| f.id).collect();
        let relationship =
            Relationship::classify(subject.id, viewer, &subject_friends, viewer_friends);

        Self {
            id: subject.id,
            name: subject.name,
            biography: subject.biography,
            created_at: subject.created_at,
            updated_at: subject.updated_at,
            friends,
            relationship_to_current_user: relationship,
        }
    }
}

/// Resolve a user with their friends and their relationship to the viewer.
///
/// Returns `None` if no user with `subject_id` exists.
/// A viewer that doesn't exist has no friends and therefore no relationship.
pub async fn resolve(
    db: &Database,
    subject_id: i64,
    viewer: Option<Viewer>,
) -> Result<Option<SubjectView>, rorm::Error> {
    let Some(subject) = query!(db, User)
        .condition(User::F.id.equals(subject_id))
        .optional()
        .await?
    else {
        trace!("User {subject_id} does not exist");
        return Ok(None);
    };

    let friends = query!(
        db,
        (
            Friend::F.friend.id,
            Friend::F.friend.name,
            Friend::F.friend.biography,
            Friend::F.friend.created_at,
            Friend::F.friend.updated_at,
        )
    )
    .condition(Friend::F.user.equals(subject_id))
    .all()
    .await?
    .into_iter()
    .map(|(id, name, biography, created_at, updated_at)| UserSummary {
        id,
        name,
        biography,
        created_at,
        updated_at,
    })
    .collect();

    let viewer_friends = match viewer {
        Some(Viewer(viewer_id)) => query!(db, (Friend::F.friend.id,))
            .condition(Friend::F.user.equals(viewer_id))
            .all()
            .await?
            .into_iter()
            .map(|(id,)| id)
            .collect(),
        None => HashSet::new(),
    };

    Ok(Some(SubjectView::assemble(
        UserSummary {
            id: subject.id,
            name: subject.name,
            biography: subject.biography,
            created_at: subject.created_at,
            updated_at: subject.updated_at,
        },
        friends,
        viewer,
        &viewer_friends,
    )))
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    /// Directed edges as `(user, friend)`
    type Edges = [(i64, i64)];

    fn friends_of(edges: &Edges, user: i64) -> HashSet<i64> {
        edges
            .iter()
            .filter(|(u, _)| *u == user)
            .map(|(_, f)| *f)
            .collect()
    }

    fn classify(edges: &Edges, subject: i64, viewer: Option<i64>) -> Relationship {
        let viewer_friends = viewer.map(|v| friends_of(edges, v)).unwrap_or_default();
        Relationship::classify(
            subject,
            viewer.map(Viewer),
            &friends_of(edges, subject),
            &viewer_friends,
        )
    }

    fn summary(id: i64) -> UserSummary {
        UserSummary {
            id,
            name: format!("User {id}"),
            biography: None,
            created_at: DateTime::from_timestamp(1_700_000_000, 0)
                .unwrap()
                .naive_utc(),
            updated_at: None,
        }
    }

    // A(1) - B(2) - C(3)
    const CHAIN: [(i64, i64); 4] = [(1, 2), (2, 1), (2, 3), (3, 2)];

    #[test]
    fn worked_example() {
        assert_eq!(classify(&CHAIN, 1, Some(3)), Relationship::Mutual);
        assert_eq!(classify(&CHAIN, 1, Some(2)), Relationship::Friend);
        assert_eq!(classify(&CHAIN, 3, Some(1)), Relationship::Mutual);
        assert_eq!(classify(&CHAIN, 2, Some(3)), Relationship::Friend);
    }

    #[test]
    fn no_viewer_is_always_none() {
        for subject in 1..=3 {
            assert_eq!(classify(&CHAIN, subject, None), Relationship::None);
        }
    }

    #[test]
    fn viewing_yourself_is_none() {
        assert_eq!(classify(&CHAIN, 2, Some(2)), Relationship::None);
    }

    #[test]
    fn unknown_viewer_is_none() {
        assert_eq!(classify(&CHAIN, 1, Some(42)), Relationship::None);
    }

    #[test]
    fn friend_only_depends_on_viewer_edge() {
        // Only the edge (viewer, subject) counts, not the reverse one
        let edges = [(2, 1)];
        assert_eq!(classify(&edges, 1, Some(2)), Relationship::Friend);
        assert_eq!(classify(&edges, 2, Some(1)), Relationship::None);
    }

    #[test]
    fn friend_wins_over_mutual() {
        let edges = [(1, 2), (2, 1), (1, 3), (3, 1), (2, 3), (3, 2)];
        assert_eq!(classify(&edges, 1, Some(2)), Relationship::Friend);
    }

    #[test]
    fn viewer_is_not_their_own_mutual_friend() {
        // The subject has the viewer as friend, but the viewer has no edge back
        let edges = [(1, 2), (2, 2)];
        assert_eq!(classify(&edges, 1, Some(2)), Relationship::None);
    }

    #[test]
    fn disconnected_users_are_none() {
        let edges = [(1, 2), (2, 1), (3, 4), (4, 3)];
        assert_eq!(classify(&edges, 1, Some(3)), Relationship::None);
        assert_eq!(classify(&edges, 4, Some(2)), Relationship::None);
    }

    #[test]
    fn assemble_sorts_friends_and_classifies() {
        let viewer_friends = HashSet::from([5]);
        let view = SubjectView::assemble(
            summary(1),
            vec![summary(9), summary(5), summary(7)],
            Some(Viewer(3)),
            &viewer_friends,
        );

        let ids: Vec<_> = view.friends.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![5, 7, 9]);
        assert_eq!(view.relationship_to_current_user, Relationship::Mutual);
        assert_eq!(view.id, 1);
        assert_eq!(view.name, "User 1");
    }

    #[test]
    fn assemble_without_friends() {
        let view = SubjectView::assemble(summary(4), vec![], None, &HashSet::new());

        assert!(view.friends.is_empty());
        assert_eq!(view.relationship_to_current_user, Relationship::None);
    }

    #[test]
    fn view_serializes_in_camel_case() {
        let view = SubjectView::assemble(
            summary(1),
            vec![summary(2)],
            Some(Viewer(2)),
            &HashSet::from([1]),
        );
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["relationshipToCurrentUser"], "friend");
        assert_eq!(json["friends"][0]["id"], 2);
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_null());
    }
}
