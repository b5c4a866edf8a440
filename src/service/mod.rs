//! Business services for vessel and owner management.
//!
//! Services coordinate repositories inside request-scoped transactions and
//! map entities to response records. Controllers construct a service per
//! request and call exactly one operation on it.

pub mod owner;
pub mod ship;
