//! Attendance tracking HTTP service
//!
//! Exposes class creation, attendance recording and absence reporting over a
//! small JSON API backed by a single JSON document.

pub mod settings;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;

use axum::Router;
use common::store::JsonStore;

use crate::{repositories::ClassRepository, state::AppState};

/// Build the application router over `store`
pub fn build_app(store: JsonStore) -> Router {
    let app_state = AppState {
        class_repository: ClassRepository::new(store),
    };

    routes::create_router(app_state)
}
