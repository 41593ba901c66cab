//! User profiles.

use std::sync::Arc;

use bauhub_core::error::CoreError;
use bauhub_core::models::user::{NewUser, User, UserPatch};
use bauhub_core::types::DbId;
use bauhub_db::mappers::profile::{to_app, to_db};
use bauhub_db::Store;
use validator::Validate;

use crate::error::ServiceResult;

#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn Store>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// All profiles ordered by last name, then first name.
    pub async fn list(&self) -> ServiceResult<Vec<User>> {
        let rows = self.store.list_profiles().await?;
        Ok(rows.into_iter().map(to_app).collect())
    }

    pub async fn get_by_id(&self, id: DbId) -> ServiceResult<Option<User>> {
        Ok(self.store.find_profile(id).await?.map(to_app))
    }

    /// Create the profile for an existing identity. The id is the caller's.
    pub async fn create(&self, input: NewUser) -> ServiceResult<User> {
        input.validate()?;
        let id = input.id;
        let mut changes = to_db(&input.into());
        changes.id = Some(id);
        let row = self.store.insert_profile(&changes).await?;
        tracing::info!(user_id = %row.id, "Profile created");
        Ok(to_app(row))
    }

    pub async fn update(&self, id: DbId, patch: UserPatch) -> ServiceResult<User> {
        patch.validate()?;
        let row = self
            .store
            .update_profile(id, &to_db(&patch))
            .await?
            .ok_or(CoreError::NotFound {
                entity: "User",
                id,
            })?;
        Ok(to_app(row))
    }

    pub async fn delete(&self, id: DbId) -> ServiceResult<()> {
        if !self.store.delete_profile(id).await? {
            tracing::debug!(user_id = %id, "Delete of unknown profile ignored");
        }
        Ok(())
    }
}
