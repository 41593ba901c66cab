use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::ItemStatus;
use crate::types::{Date, DbId, Timestamp};

/// A subsystem ("Teilsystem") of a project, e.g. one facade section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subsystem {
    pub id: DbId,
    pub project_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_number: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_on: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_deadline: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_submission: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    pub status: ItemStatus,
    pub created_at: Timestamp,
}

/// Input for creating a subsystem. The owning project comes from the route.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSubsystem {
    pub cost_center: Option<String>,
    pub system_number: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    pub remark: Option<String>,
    pub opened_on: Option<Date>,
    pub opened_by: Option<String>,
    pub assembly_date: Option<Date>,
    pub delivery_deadline: Option<Date>,
    pub plan_submission: Option<Date>,
    pub plan_status: Option<String>,
    #[validate(url)]
    pub external_link: Option<String>,
    pub status: Option<ItemStatus>,
}

/// Partial update of a subsystem.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubsystemPatch {
    pub cost_center: Option<String>,
    pub system_number: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub remark: Option<String>,
    pub opened_on: Option<Date>,
    pub opened_by: Option<String>,
    pub assembly_date: Option<Date>,
    pub delivery_deadline: Option<Date>,
    pub plan_submission: Option<Date>,
    pub plan_status: Option<String>,
    #[validate(url)]
    pub external_link: Option<String>,
    pub status: Option<ItemStatus>,
}

impl From<NewSubsystem> for SubsystemPatch {
    fn from(input: NewSubsystem) -> Self {
        Self {
            cost_center: input.cost_center,
            system_number: input.system_number,
            name: Some(input.name),
            description: input.description,
            remark: input.remark,
            opened_on: input.opened_on,
            opened_by: input.opened_by,
            assembly_date: input.assembly_date,
            delivery_deadline: input.delivery_deadline,
            plan_submission: input.plan_submission,
            plan_status: input.plan_status,
            external_link: input.external_link,
            status: input.status,
        }
    }
}
