use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::ProjectStatus;
use crate::types::{DbId, Timestamp};

/// A construction project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub number: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub city: String,
    pub canton: String,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_lead: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bim_engineer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_lead: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreman: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasing: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// `"<number> – <name>"`, the label used in project pickers.
    pub fn label(&self) -> String {
        format!("{} – {}", self.number, self.name)
    }
}

/// Input for creating a project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, max = 50))]
    pub number: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub street: Option<String>,
    #[validate(length(max = 10))]
    pub postal_code: Option<String>,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1, max = 50))]
    pub canton: String,
    /// Defaults to [`ProjectStatus::Open`] if omitted.
    pub status: Option<ProjectStatus>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub created_by: Option<DbId>,
    pub project_lead: Option<String>,
    pub estimator: Option<String>,
    pub bim_engineer: Option<String>,
    pub site_lead: Option<String>,
    pub foreman: Option<String>,
    pub purchasing: Option<String>,
}

/// Partial update of a project. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[validate(length(min = 1, max = 50))]
    pub number: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub street: Option<String>,
    #[validate(length(max = 10))]
    pub postal_code: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub canton: Option<String>,
    pub status: Option<ProjectStatus>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub created_by: Option<DbId>,
    pub project_lead: Option<String>,
    pub estimator: Option<String>,
    pub bim_engineer: Option<String>,
    pub site_lead: Option<String>,
    pub foreman: Option<String>,
    pub purchasing: Option<String>,
}

impl From<NewProject> for ProjectPatch {
    fn from(input: NewProject) -> Self {
        Self {
            number: Some(input.number),
            name: Some(input.name),
            street: input.street,
            postal_code: input.postal_code,
            city: Some(input.city),
            canton: Some(input.canton),
            status: input.status,
            image_url: input.image_url,
            created_by: input.created_by,
            project_lead: input.project_lead,
            estimator: input.estimator,
            bim_engineer: input.bim_engineer,
            site_lead: input.site_lead,
            foreman: input.foreman,
            purchasing: input.purchasing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn new_project() -> NewProject {
        NewProject {
            number: "2024-017".to_string(),
            name: "Landi Frauenfeld".to_string(),
            city: "Frauenfeld".to_string(),
            canton: "TG".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_new_project_passes() {
        assert!(new_project().validate().is_ok());
    }

    #[test]
    fn empty_number_is_rejected() {
        let input = NewProject {
            number: String::new(),
            ..new_project()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("number"));
    }

    #[test]
    fn malformed_image_url_is_rejected() {
        let patch = ProjectPatch {
            image_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn absent_patch_fields_are_not_validated() {
        assert!(ProjectPatch::default().validate().is_ok());
    }

    #[test]
    fn deserializes_camel_case_input() {
        let input: NewProject = serde_json::from_value(serde_json::json!({
            "number": "2024-001",
            "name": "Werkhof",
            "city": "Wil",
            "canton": "SG",
            "status": "in arbeit",
            "siteLead": "M. Keller"
        }))
        .unwrap();
        assert_eq!(input.status, Some(ProjectStatus::InProgress));
        assert_eq!(input.site_lead.as_deref(), Some("M. Keller"));
    }

    #[test]
    fn label_joins_number_and_name() {
        let project = Project {
            id: DbId::nil(),
            number: "2024-017".to_string(),
            name: "Landi Frauenfeld".to_string(),
            street: None,
            postal_code: None,
            city: "Frauenfeld".to_string(),
            canton: "TG".to_string(),
            status: ProjectStatus::Open,
            image_url: None,
            created_by: None,
            project_lead: None,
            estimator: None,
            bim_engineer: None,
            site_lead: None,
            foreman: None,
            purchasing: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert_eq!(project.label(), "2024-017 – Landi Frauenfeld");
    }

    #[test]
    fn new_project_converts_to_full_patch() {
        let patch = ProjectPatch::from(new_project());
        assert_eq!(patch.number.as_deref(), Some("2024-017"));
        assert_eq!(patch.canton.as_deref(), Some("TG"));
        assert_eq!(patch.status, None);
    }
}
