//! Database entity definitions for the logbook vessel registry.
//!
//! Entities are plain data records; relationship mutation is handled by the
//! repositories in the main crate, never by methods on the models themselves.

pub mod owner;
pub mod prelude;
pub mod ship;
pub mod ship_category_details;
pub mod ship_owner;
