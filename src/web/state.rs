//! Shared application state handed to every handler.

use crate::health::Monitor;
use crate::manager::TaskManager;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub manager: TaskManager,
    pub monitor: Arc<Monitor>,
}
