//! Data transfer objects and shared application state.

pub mod api;
pub mod app;
pub mod owner;
pub mod ship;
