use std::collections::BTreeSet;

use logbook_test_utils::prelude::*;

use crate::service::ship::ShipService;

/// Expect an empty list when no ships exist
#[tokio::test]
async fn returns_empty_list() -> Result<(), TestError> {
    let test = test_setup().await?;
    let ship_service = ShipService::new(&test.db);

    let ships = ship_service.list_ships().await.unwrap();

    assert!(ships.is_empty());

    Ok(())
}

/// Expect each ship to carry its own details and owner ids
#[tokio::test]
async fn returns_ships_with_details_and_owner_ids() -> Result<(), TestError> {
    let test = test_setup().await?;
    let ship_service = ShipService::new(&test.db);

    let detailed_ship = factory::insert_ship(&test.db, "MV Resolute", "9744001").await?;
    factory::insert_ship_category_details(&test.db, detailed_ship.id, Some("Cargo"), Some(50_000))
        .await?;
    let bare_ship = factory::insert_ship(&test.db, "MV Endeavour", "9744002").await?;
    let owner = factory::insert_owner(&test.db, "Maersk Line").await?;
    factory::link_ship_owner(&test.db, detailed_ship.id, owner.id).await?;

    let ships = ship_service.list_ships().await.unwrap();

    assert_eq!(ships.len(), 2);

    let detailed = ships.iter().find(|s| s.id == detailed_ship.id).unwrap();
    let bare = ships.iter().find(|s| s.id == bare_ship.id).unwrap();

    assert_eq!(detailed.ship_type.as_deref(), Some("Cargo"));
    assert_eq!(detailed.ship_tonnage, Some(50_000));
    assert_eq!(detailed.owner_ids, BTreeSet::from([owner.id]));

    assert!(bare.ship_type.is_none());
    assert!(bare.ship_tonnage.is_none());
    assert!(bare.owner_ids.is_empty());

    Ok(())
}
