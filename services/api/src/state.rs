//! Application state shared across handlers

use crate::repositories::ClassRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub class_repository: ClassRepository,
}
