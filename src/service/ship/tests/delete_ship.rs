use logbook_test_utils::prelude::*;

use crate::{
    data::{OwnerRepository, ShipCategoryDetailsRepository, ShipOwnerRepository, ShipRepository},
    error::{registry::RegistryError, Error},
    service::ship::ShipService,
};

/// Expect error when the ship does not exist
#[tokio::test]
async fn fails_when_ship_not_found() -> Result<(), TestError> {
    let test = test_setup().await?;
    let ship_service = ShipService::new(&test.db);

    let result = ship_service.delete_ship(42).await;

    assert!(matches!(
        result,
        Err(Error::Registry(RegistryError::ShipNotFound(42)))
    ));

    Ok(())
}

/// Expect the ship, its details, and its links to disappear while the owners
/// themselves survive
#[tokio::test]
async fn removes_ship_details_and_links() -> Result<(), TestError> {
    let test = test_setup().await?;
    let ship_service = ShipService::new(&test.db);

    let ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;
    factory::insert_ship_category_details(&test.db, ship.id, Some("Cargo"), Some(50_000)).await?;
    let first_owner = factory::insert_owner(&test.db, "Maersk Line").await?;
    let second_owner = factory::insert_owner(&test.db, "CMA CGM").await?;
    factory::link_ship_owner(&test.db, ship.id, first_owner.id).await?;
    factory::link_ship_owner(&test.db, ship.id, second_owner.id).await?;

    ship_service.delete_ship(ship.id).await.unwrap();

    let ship_repository = ShipRepository::new(&test.db);
    let details_repository = ShipCategoryDetailsRepository::new(&test.db);
    let owner_repository = OwnerRepository::new(&test.db);
    let link_repository = ShipOwnerRepository::new(&test.db);

    assert!(ship_repository.get_by_id(ship.id).await?.is_none());
    assert!(details_repository.get_by_ship_id(ship.id).await?.is_none());
    assert!(owner_repository.get_by_id(first_owner.id).await?.is_some());
    assert!(owner_repository.get_by_id(second_owner.id).await?.is_some());
    assert!(link_repository
        .get_ships_of_owner(&first_owner)
        .await?
        .is_empty());
    assert!(link_repository
        .get_ships_of_owner(&second_owner)
        .await?
        .is_empty());

    Ok(())
}

/// Expect a repeated delete to report the ship as missing
#[tokio::test]
async fn repeated_delete_reports_not_found() -> Result<(), TestError> {
    let test = test_setup().await?;
    let ship_service = ShipService::new(&test.db);

    let ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;

    ship_service.delete_ship(ship.id).await.unwrap();
    let result = ship_service.delete_ship(ship.id).await;

    assert!(matches!(
        result,
        Err(Error::Registry(RegistryError::ShipNotFound(id))) if id == ship.id
    ));

    Ok(())
}
