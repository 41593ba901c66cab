use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::ItemStatus;
use crate::types::{DbId, Timestamp};

/// A material item recorded against a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<DbId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_number: Option<String>,
    pub status: ItemStatus,
    pub created_at: Timestamp,
}

/// Input for creating a material item. The position comes from the route.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMaterial {
    pub supplier_id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub manufacturer: Option<String>,
    pub article_number: Option<String>,
    pub status: Option<ItemStatus>,
}

/// Partial update of a material item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPatch {
    pub position_id: Option<DbId>,
    pub supplier_id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub article_number: Option<String>,
    pub status: Option<ItemStatus>,
}

impl From<NewMaterial> for MaterialPatch {
    fn from(input: NewMaterial) -> Self {
        Self {
            position_id: None,
            supplier_id: input.supplier_id,
            name: Some(input.name),
            manufacturer: input.manufacturer,
            article_number: input.article_number,
            status: input.status,
        }
    }
}
