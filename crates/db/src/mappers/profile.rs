use bauhub_core::models::user::{User, UserPatch};

use crate::models::profile::{ProfileChanges, ProfileRow};

pub fn to_app(row: ProfileRow) -> User {
    User {
        id: row.id,
        first_name: row.vorname,
        last_name: row.nachname,
        email: row.email,
        department: row.abteilung,
        role: row.rolle,
        avatar_url: row.avatar_url,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// The profile id is not part of the patch; inserts set `id` explicitly.
pub fn to_db(patch: &UserPatch) -> ProfileChanges {
    ProfileChanges {
        id: None,
        vorname: patch.first_name.clone(),
        nachname: patch.last_name.clone(),
        email: patch.email.clone(),
        abteilung: patch.department.clone(),
        rolle: patch.role,
        avatar_url: patch.avatar_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bauhub_core::status::UserRole;
    use bauhub_core::types::DbId;
    use chrono::Utc;

    #[test]
    fn round_trip_restores_every_field() {
        let patch = UserPatch {
            first_name: Some("Anna".to_string()),
            last_name: Some("Meier".to_string()),
            email: Some("a.meier@example.ch".to_string()),
            department: Some("Planung".to_string()),
            role: Some(UserRole::ProjectLead),
            avatar_url: Some("https://img.example.ch/a.png".to_string()),
        };
        let id = DbId::new_v4();
        let mut changes = to_db(&patch);
        changes.id = Some(id);
        let user = to_app(ProfileRow::from_insert(Utc::now(), &changes).unwrap());

        assert_eq!(user.id, id);
        assert_eq!(user.first_name, patch.first_name);
        assert_eq!(user.last_name, patch.last_name);
        assert_eq!(user.email, patch.email);
        assert_eq!(user.department, patch.department);
        assert_eq!(Some(user.role), patch.role);
        assert_eq!(user.avatar_url, patch.avatar_url);
    }

    #[test]
    fn null_columns_become_none() {
        let changes = ProfileChanges {
            id: Some(DbId::new_v4()),
            ..Default::default()
        };
        let user = to_app(ProfileRow::from_insert(Utc::now(), &changes).unwrap());
        assert_eq!(user.first_name, None);
        assert_eq!(user.last_name, None);
        assert_eq!(user.email, None);
        assert_eq!(user.department, None);
        assert_eq!(user.avatar_url, None);
        assert_eq!(user.role, UserRole::Staff);
    }
}
