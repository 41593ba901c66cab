use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{Date, DbId, Timestamp};

/// A booking of a fleet vehicle, optionally for a project.
///
/// Reservations are independent records: nothing prevents two of them from
/// covering the same days for the same vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: DbId,
    pub vehicle_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    pub starts_on: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub created_at: Timestamp,
}

impl Reservation {
    /// Whether this reservation shares at least one day with `[starts_on, ends_on]`.
    ///
    /// An open end (`None`) on either side extends indefinitely.
    pub fn overlaps(&self, starts_on: Date, ends_on: Option<Date>) -> bool {
        let starts_before_other_ends = ends_on.map_or(true, |end| self.starts_on <= end);
        let other_starts_before_this_ends = self.ends_on.map_or(true, |end| starts_on <= end);
        starts_before_other_ends && other_starts_before_this_ends
    }
}

/// Input for creating a reservation.
///
/// `project_id` and `reserved_by` fall back to the caller's session when
/// omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    pub vehicle_id: DbId,
    pub project_id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub site: Option<String>,
    pub starts_on: Date,
    pub ends_on: Option<Date>,
    pub reserved_by: Option<String>,
    pub remark: Option<String>,
}

impl NewReservation {
    /// A reservation of `vehicle_id` starting on `starts_on`, all else unset.
    pub fn new(vehicle_id: DbId, starts_on: Date) -> Self {
        Self {
            vehicle_id,
            project_id: None,
            site: None,
            starts_on,
            ends_on: None,
            reserved_by: None,
            remark: None,
        }
    }
}

/// Partial update of a reservation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPatch {
    pub vehicle_id: Option<DbId>,
    pub project_id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub site: Option<String>,
    pub starts_on: Option<Date>,
    pub ends_on: Option<Date>,
    pub reserved_by: Option<String>,
    pub remark: Option<String>,
}

impl From<NewReservation> for ReservationPatch {
    fn from(input: NewReservation) -> Self {
        Self {
            vehicle_id: Some(input.vehicle_id),
            project_id: input.project_id,
            site: input.site,
            starts_on: Some(input.starts_on),
            ends_on: input.ends_on,
            reserved_by: input.reserved_by,
            remark: input.remark,
        }
    }
}

/// Reject a range whose end lies before its start. Same-day ranges are valid.
pub fn validate_date_range(starts_on: Date, ends_on: Option<Date>) -> Result<(), CoreError> {
    match ends_on {
        Some(end) if end < starts_on => Err(CoreError::Validation(format!(
            "Reservation ends on {end}, before it starts on {starts_on}"
        ))),
        _ => Ok(()),
    }
}
