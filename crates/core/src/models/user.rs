use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::UserRole;
use crate::types::{DbId, Timestamp};

/// A user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Full name if any part is known, otherwise the email address.
    pub fn display_name(&self) -> Option<String> {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.email.clone()
        } else {
            Some(full)
        }
    }
}

/// Input for creating a profile. The id is the identity provider's user id.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub id: DbId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub department: Option<String>,
    /// Defaults to [`UserRole::Staff`] if omitted.
    pub role: Option<UserRole>,
    #[validate(url)]
    pub avatar_url: Option<String>,
}

/// Partial update of a profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub department: Option<String>,
    pub role: Option<UserRole>,
    #[validate(url)]
    pub avatar_url: Option<String>,
}

impl From<NewUser> for UserPatch {
    fn from(input: NewUser) -> Self {
        Self {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            department: input.department,
            role: input.role,
            avatar_url: input.avatar_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(first: Option<&str>, last: Option<&str>, email: Option<&str>) -> User {
        User {
            id: DbId::new_v4(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            email: email.map(str::to_string),
            department: None,
            role: UserRole::Staff,
            avatar_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn display_name_joins_known_parts() {
        assert_eq!(
            user(Some("Anna"), Some("Meier"), None).display_name().as_deref(),
            Some("Anna Meier")
        );
        assert_eq!(
            user(None, Some("Meier"), None).display_name().as_deref(),
            Some("Meier")
        );
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(
            user(Some(" "), None, Some("a.meier@example.ch"))
                .display_name()
                .as_deref(),
            Some("a.meier@example.ch")
        );
        assert_eq!(user(None, None, None).display_name(), None);
    }
}
