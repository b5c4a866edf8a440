pub use super::owner::Entity as Owner;
pub use super::ship::Entity as Ship;
pub use super::ship_category_details::Entity as ShipCategoryDetails;
pub use super::ship_owner::Entity as ShipOwner;
