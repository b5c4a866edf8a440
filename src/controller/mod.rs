//! HTTP request handlers.

pub mod home;
pub mod owner;
pub mod ship;
