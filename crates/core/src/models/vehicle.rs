use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::{VehicleCategory, VehicleStatus};
use crate::types::{DbId, Timestamp};

/// A machine or vehicle in the company fleet ("Fuhrpark").
///
/// Physical specs are free text as recorded on the inventory sheet
/// (e.g. `"12.5 m"`, `"2'450 kg"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: DbId,
    pub designation: String,
    pub category: VehicleCategory,
    pub inventory_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reach: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspected_until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissions_service: Option<String>,
    pub status: VehicleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub created_at: Timestamp,
}

/// Input for registering a vehicle.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    #[validate(length(min = 1, max = 200))]
    pub designation: String,
    pub category: VehicleCategory,
    #[validate(length(min = 1, max = 50))]
    pub inventory_number: String,
    pub make: Option<String>,
    pub model_type: Option<String>,
    pub serial_number: Option<String>,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub platform_height: Option<String>,
    pub dimensions: Option<String>,
    pub power: Option<String>,
    pub weight: Option<String>,
    pub reach: Option<String>,
    pub payload: Option<String>,
    pub drive: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub year_built: Option<i32>,
    pub special_notes: Option<String>,
    pub purchase_year: Option<String>,
    pub inspected_until: Option<String>,
    pub emissions_service: Option<String>,
    /// Defaults to [`VehicleStatus::Available`] if omitted.
    pub status: Option<VehicleStatus>,
    pub remark: Option<String>,
}

impl NewVehicle {
    /// A vehicle with only the required fields set.
    pub fn new(
        designation: impl Into<String>,
        category: VehicleCategory,
        inventory_number: impl Into<String>,
    ) -> Self {
        Self {
            designation: designation.into(),
            category,
            inventory_number: inventory_number.into(),
            make: None,
            model_type: None,
            serial_number: None,
            color: None,
            license_plate: None,
            platform_height: None,
            dimensions: None,
            power: None,
            weight: None,
            reach: None,
            payload: None,
            drive: None,
            year_built: None,
            special_notes: None,
            purchase_year: None,
            inspected_until: None,
            emissions_service: None,
            status: None,
            remark: None,
        }
    }
}

/// Partial update of a vehicle.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePatch {
    #[validate(length(min = 1, max = 200))]
    pub designation: Option<String>,
    pub category: Option<VehicleCategory>,
    #[validate(length(min = 1, max = 50))]
    pub inventory_number: Option<String>,
    pub make: Option<String>,
    pub model_type: Option<String>,
    pub serial_number: Option<String>,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub platform_height: Option<String>,
    pub dimensions: Option<String>,
    pub power: Option<String>,
    pub weight: Option<String>,
    pub reach: Option<String>,
    pub payload: Option<String>,
    pub drive: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub year_built: Option<i32>,
    pub special_notes: Option<String>,
    pub purchase_year: Option<String>,
    pub inspected_until: Option<String>,
    pub emissions_service: Option<String>,
    pub status: Option<VehicleStatus>,
    pub remark: Option<String>,
}

impl From<NewVehicle> for VehiclePatch {
    fn from(input: NewVehicle) -> Self {
        Self {
            designation: Some(input.designation),
            category: Some(input.category),
            inventory_number: Some(input.inventory_number),
            make: input.make,
            model_type: input.model_type,
            serial_number: input.serial_number,
            color: input.color,
            license_plate: input.license_plate,
            platform_height: input.platform_height,
            dimensions: input.dimensions,
            power: input.power,
            weight: input.weight,
            reach: input.reach,
            payload: input.payload,
            drive: input.drive,
            year_built: input.year_built,
            special_notes: input.special_notes,
            purchase_year: input.purchase_year,
            inspected_until: input.inspected_until,
            emissions_service: input.emissions_service,
            status: input.status,
            remark: input.remark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implausible_year_built_is_rejected() {
        let mut input = NewVehicle::new("Genie GS-1932", VehicleCategory::ScissorLift, "F-104");
        input.year_built = Some(1850);
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year_built"));
    }

    #[test]
    fn category_is_required_on_the_wire() {
        let result = serde_json::from_value::<NewVehicle>(serde_json::json!({
            "designation": "Kubota KX019",
            "inventoryNumber": "F-210"
        }));
        assert!(result.is_err());
    }
}
