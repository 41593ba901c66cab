//! Supplier registry.

use std::sync::Arc;

use bauhub_core::error::CoreError;
use bauhub_core::models::supplier::{NewSupplier, Supplier, SupplierPatch};
use bauhub_core::types::DbId;
use bauhub_db::mappers::supplier::{to_app, to_db};
use bauhub_db::Store;
use validator::Validate;

use crate::error::ServiceResult;

#[derive(Clone)]
pub struct SupplierService {
    store: Arc<dyn Store>,
}

impl SupplierService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> ServiceResult<Vec<Supplier>> {
        let rows = self.store.list_suppliers().await?;
        Ok(rows.into_iter().map(to_app).collect())
    }

    pub async fn get_by_id(&self, id: DbId) -> ServiceResult<Option<Supplier>> {
        Ok(self.store.find_supplier(id).await?.map(to_app))
    }

    pub async fn create(&self, input: NewSupplier) -> ServiceResult<Supplier> {
        input.validate()?;
        let row = self.store.insert_supplier(&to_db(&input.into())).await?;
        tracing::info!(supplier_id = %row.id, name = %row.name, "Supplier created");
        Ok(to_app(row))
    }

    pub async fn update(&self, id: DbId, patch: SupplierPatch) -> ServiceResult<Supplier> {
        patch.validate()?;
        let row = self
            .store
            .update_supplier(id, &to_db(&patch))
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Supplier",
                id,
            })?;
        Ok(to_app(row))
    }

    /// Material that referenced the supplier keeps its row, unlinked.
    pub async fn delete(&self, id: DbId) -> ServiceResult<()> {
        if !self.store.delete_supplier(id).await? {
            tracing::debug!(supplier_id = %id, "Delete of unknown supplier ignored");
        }
        Ok(())
    }
}
