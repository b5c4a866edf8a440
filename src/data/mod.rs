//! Database repositories.
//!
//! Each repository wraps a connection reference and exposes the persistence
//! operations one table needs. Repositories are generic over
//! [`sea_orm::ConnectionTrait`] so services can run them against either the
//! pooled connection or an open transaction.

pub mod owner;
pub mod ship;
pub mod ship_category_details;
pub mod ship_owner;

pub use owner::OwnerRepository;
pub use ship::ShipRepository;
pub use ship_category_details::ShipCategoryDetailsRepository;
pub use ship_owner::ShipOwnerRepository;
