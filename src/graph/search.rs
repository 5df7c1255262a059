//! Searching users by name

use rorm::{query, Database, Model};

use crate::graph::UserSummary;
use crate::models::User;

/// Check whether `name` contains `pattern`, ignoring case.
///
/// Surrounding whitespace of the pattern is ignored, an empty pattern matches every name.
pub fn name_matches(pattern: &str, name: &str) -> bool {
    let pattern = pattern.trim();
    pattern.is_empty() || name.to_lowercase().contains(&pattern.to_lowercase())
}

/// Search all users whose name contains `pattern`, ignoring case.
///
/// The users are ordered by their name.
pub async fn search_users(db: &Database, pattern: &str) -> Result<Vec<UserSummary>, rorm::Error> {
    let users = query!(db, User)
        .order_asc(User::F.name)
        .all()
        .await?
        .into_iter()
        .filter(|user| name_matches(pattern, &user.name))
        .map(|user| UserSummary {
            id: user.id,
            name: user.name,
            biography: user.biography,
            created_at: user.created_at,
            updated_at: user.updated_at,
        })
        .collect();

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case() {
        assert!(name_matches("mary", "Mary Smith"));
        assert!(name_matches("SMITH", "Mary Smith"));
        assert!(name_matches("ry sm", "Mary Smith"));
    }

    #[test]
    fn empty_pattern_matches_everyone() {
        assert!(name_matches("", "Mary Smith"));
        assert!(name_matches("   ", "James James"));
    }

    #[test]
    fn pattern_is_trimmed() {
        assert!(name_matches("  james ", "James Brown"));
    }

    #[test]
    fn non_matching_names() {
        assert!(!name_matches("linda", "Mary Smith"));
        assert!(!name_matches("smithy", "Mary Smith"));
    }
}
