use std::collections::BTreeSet;

use logbook_test_utils::prelude::*;

use crate::{
    error::{registry::RegistryError, Error},
    service::ship::ShipService,
};

/// Expect the ship with its details flattened and owner ids resolved
#[tokio::test]
async fn returns_ship_with_details_and_owners() -> Result<(), TestError> {
    let test = test_setup().await?;
    let ship_service = ShipService::new(&test.db);

    let ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;
    factory::insert_ship_category_details(&test.db, ship.id, Some("Cargo"), Some(50_000)).await?;
    let owner = factory::insert_owner(&test.db, "Maersk Line").await?;
    factory::link_ship_owner(&test.db, ship.id, owner.id).await?;

    let dto = ship_service.get_ship(ship.id).await.unwrap();

    assert_eq!(dto.id, ship.id);
    assert_eq!(dto.ship_name, "MV Resolute");
    assert_eq!(dto.imo_number, "9744001");
    assert_eq!(dto.ship_type.as_deref(), Some("Cargo"));
    assert_eq!(dto.ship_tonnage, Some(50_000));
    assert_eq!(dto.owner_ids, BTreeSet::from([owner.id]));

    Ok(())
}

/// Expect absent detail fields for a ship with no category details row
#[tokio::test]
async fn omits_detail_fields_without_details_row() -> Result<(), TestError> {
    let test = test_setup().await?;
    let ship_service = ShipService::new(&test.db);

    let ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;

    let dto = ship_service.get_ship(ship.id).await.unwrap();

    assert!(dto.ship_type.is_none());
    assert!(dto.ship_tonnage.is_none());
    assert!(dto.owner_ids.is_empty());

    Ok(())
}

/// Expect error when the ship does not exist
#[tokio::test]
async fn fails_when_ship_not_found() -> Result<(), TestError> {
    let test = test_setup().await?;
    let ship_service = ShipService::new(&test.db);

    let result = ship_service.get_ship(42).await;

    assert!(matches!(
        result,
        Err(Error::Registry(RegistryError::ShipNotFound(42)))
    ));

    Ok(())
}
