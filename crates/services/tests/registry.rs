//! Suppliers and user profiles.

mod common;

use assert_matches::assert_matches;
use bauhub_core::error::CoreError;
use bauhub_core::models::supplier::{NewSupplier, SupplierPatch};
use bauhub_core::models::user::{NewUser, UserPatch};
use bauhub_core::status::UserRole;
use bauhub_core::types::DbId;
use bauhub_services::ServiceError;

use common::{create_user, services};

#[tokio::test]
async fn suppliers_crud() {
    let services = services();
    for name in ["Würth", "Hilti", "Debrunner"] {
        services
            .suppliers
            .create(NewSupplier {
                name: name.to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
    }
    let suppliers = services.suppliers.list().await.unwrap();
    let names: Vec<&str> = suppliers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Debrunner", "Hilti", "Würth"]);

    let hilti = suppliers[1].clone();
    let updated = services
        .suppliers
        .update(
            hilti.id,
            SupplierPatch {
                phone: Some("+41 44 000 00 00".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.phone.as_deref(), Some("+41 44 000 00 00"));
    assert_eq!(updated.name, "Hilti");

    services.suppliers.delete(hilti.id).await.unwrap();
    assert_eq!(services.suppliers.get_by_id(hilti.id).await.unwrap(), None);
    services.suppliers.delete(hilti.id).await.unwrap();
}

#[tokio::test]
async fn supplier_email_is_validated() {
    let services = services();
    let err = services
        .suppliers
        .create(NewSupplier {
            name: "Hilti".to_string(),
            email: Some("not-an-email".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::Core(CoreError::Validation(_)));
}

#[tokio::test]
async fn profiles_keep_the_caller_id_and_default_role() {
    let services = services();
    let id = DbId::new_v4();
    let user = services
        .profiles
        .create(NewUser {
            id,
            first_name: Some("Marco".to_string()),
            last_name: None,
            email: Some("m@example.ch".to_string()),
            department: None,
            role: None,
            avatar_url: None,
        })
        .await
        .unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.role, UserRole::Staff);
    assert_eq!(services.profiles.get_by_id(id).await.unwrap(), Some(user));
}

#[tokio::test]
async fn profiles_are_listed_by_last_then_first_name() {
    let services = services();
    create_user(&services, "Reto", "Zürcher").await;
    create_user(&services, "Anna", "Bühler").await;
    create_user(&services, "Aline", "Bühler").await;

    let names: Vec<Option<String>> = services
        .profiles
        .list()
        .await
        .unwrap()
        .iter()
        .map(|u| u.display_name())
        .collect();
    assert_eq!(
        names,
        vec![
            Some("Aline Bühler".to_string()),
            Some("Anna Bühler".to_string()),
            Some("Reto Zürcher".to_string()),
        ]
    );
}

#[tokio::test]
async fn profile_update_and_delete() {
    let services = services();
    let user = create_user(&services, "Reto", "Zürcher").await;
    let updated = services
        .profiles
        .update(
            user.id,
            UserPatch {
                role: Some(UserRole::Admin),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.role, UserRole::Admin);
    assert_eq!(updated.first_name, user.first_name);

    services.profiles.delete(user.id).await.unwrap();
    let err = services
        .profiles
        .update(user.id, UserPatch::default())
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::Core(CoreError::NotFound { entity: "User", .. }));
}
