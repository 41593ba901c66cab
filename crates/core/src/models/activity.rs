use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// What kind of record an activity entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    SubsystemCreated,
    PositionCreated,
    MaterialRecorded,
}

/// One entry of a project's recent-activity stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub kind: ActivityKind,
    pub target_id: DbId,
    pub target_name: String,
    pub at: Timestamp,
}

/// Dashboard figures for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_id: DbId,
    pub subsystem_count: i64,
    pub position_count: i64,
    pub material_count: i64,
    pub recent_activity: Vec<Activity>,
}
