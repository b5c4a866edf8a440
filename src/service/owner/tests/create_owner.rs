use logbook_test_utils::prelude::*;

use crate::{
    data::OwnerRepository,
    error::{registry::RegistryError, Error},
    model::owner::CreateOwnerRequest,
    service::owner::OwnerService,
};

fn request(owner_name: &str) -> CreateOwnerRequest {
    CreateOwnerRequest {
        owner_name: owner_name.to_string(),
    }
}

/// Expect a created owner with a server-assigned id and no ships
#[tokio::test]
async fn creates_owner() -> Result<(), TestError> {
    let test = test_setup().await?;
    let owner_service = OwnerService::new(&test.db);

    let owner = owner_service
        .create_owner(request("Maersk Line"))
        .await
        .unwrap();

    assert_eq!(owner.owner_name, "Maersk Line");
    assert!(owner.ship_ids.is_empty());

    let owner_repository = OwnerRepository::new(&test.db);
    assert!(owner_repository.get_by_id(owner.owner_id).await?.is_some());

    Ok(())
}

/// Expect a duplicate error for an existing name, with no write performed
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), TestError> {
    let test = test_setup().await?;
    let owner_service = OwnerService::new(&test.db);

    owner_service
        .create_owner(request("Maersk Line"))
        .await
        .unwrap();

    let result = owner_service.create_owner(request("Maersk Line")).await;

    assert!(matches!(
        result,
        Err(Error::Registry(RegistryError::DuplicateOwnerName(name))) if name == "Maersk Line"
    ));

    let owner_repository = OwnerRepository::new(&test.db);
    assert_eq!(owner_repository.get_all().await?.len(), 1);

    Ok(())
}

/// Expect the duplicate check to be case-sensitive; a differently-cased name
/// creates a second owner
#[tokio::test]
async fn duplicate_check_is_case_sensitive() -> Result<(), TestError> {
    let test = test_setup().await?;
    let owner_service = OwnerService::new(&test.db);

    owner_service
        .create_owner(request("Maersk Line"))
        .await
        .unwrap();

    let result = owner_service.create_owner(request("MAERSK LINE")).await;

    assert!(result.is_ok());

    Ok(())
}
