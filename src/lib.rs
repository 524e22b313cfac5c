//! Connectivity-probe service for a Redis cache and a MySQL database.
//!
//! The binary in `main.rs` wires these modules together; the library target
//! exists so the router can be driven directly from integration tests.

pub mod cache;
pub mod config;
pub mod context;
pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use context::AppContext;
pub use router::build_router;
