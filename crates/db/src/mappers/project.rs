use bauhub_core::models::project::{Project, ProjectPatch};

use crate::models::project::{ProjectChanges, ProjectRow};

pub fn to_app(row: ProjectRow) -> Project {
    Project {
        id: row.id,
        number: row.projektnummer,
        name: row.projektname,
        street: row.strasse,
        postal_code: row.plz,
        city: row.ort,
        canton: row.kanton,
        status: row.status,
        image_url: row.image_url,
        created_by: row.created_by,
        project_lead: row.projektleiter,
        estimator: row.deviseur,
        bim_engineer: row.bim_konstrukteur,
        site_lead: row.bauleiter,
        foreman: row.polier,
        purchasing: row.einkauf,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

pub fn to_db(patch: &ProjectPatch) -> ProjectChanges {
    ProjectChanges {
        projektnummer: patch.number.clone(),
        projektname: patch.name.clone(),
        strasse: patch.street.clone(),
        plz: patch.postal_code.clone(),
        ort: patch.city.clone(),
        kanton: patch.canton.clone(),
        status: patch.status,
        image_url: patch.image_url.clone(),
        created_by: patch.created_by,
        projektleiter: patch.project_lead.clone(),
        deviseur: patch.estimator.clone(),
        bim_konstrukteur: patch.bim_engineer.clone(),
        bauleiter: patch.site_lead.clone(),
        polier: patch.foreman.clone(),
        einkauf: patch.purchasing.clone(),
    }
}
