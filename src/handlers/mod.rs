// Handlers Module
// This module contains the API endpoint handlers

mod health;
mod probes;

pub use health::{health_check, ping};
pub use probes::{test_all, test_mysql, test_redis};

use std::sync::Arc;

use crate::context::AppContext;

// Type alias for the application state
pub type AppState = Arc<AppContext>;
