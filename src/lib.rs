//! Vessel and owner registry backend.
//!
//! This crate contains the complete backend for the logbook registry: HTTP
//! routing, request validation, business services for ship and owner
//! management, database repositories, and error handling. Ships and owners
//! form a many-to-many relationship backed by an explicit link table, and
//! each ship may carry one optional set of category details sharing its
//! primary key.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
