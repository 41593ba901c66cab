use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::ItemStatus;
use crate::types::{DbId, Timestamp};

/// A bill-of-quantities line inside a subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: DbId,
    pub subsystem_id: DbId,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub status: ItemStatus,
    pub created_at: Timestamp,
}

/// Input for creating a position. The owning subsystem comes from the route.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPosition {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    #[validate(length(min = 1, max = 20))]
    pub unit: String,
    pub status: Option<ItemStatus>,
}

/// Partial update of a position.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PositionPatch {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub quantity: Option<f64>,
    #[validate(length(min = 1, max = 20))]
    pub unit: Option<String>,
    pub status: Option<ItemStatus>,
}

impl From<NewPosition> for PositionPatch {
    fn from(input: NewPosition) -> Self {
        Self {
            name: Some(input.name),
            quantity: Some(input.quantity),
            unit: Some(input.unit),
            status: input.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_quantity_is_rejected() {
        let input = NewPosition {
            name: "Fassadenplatte".to_string(),
            quantity: -1.0,
            unit: "m2".to_string(),
            status: None,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn zero_quantity_is_allowed() {
        let patch = PositionPatch {
            quantity: Some(0.0),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());
    }
}
