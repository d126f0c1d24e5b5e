//! Common library for the attendance tracker
//!
//! This crate holds everything that does not speak HTTP: the class and
//! attendance models, attendance recording, absence statistics, and the JSON
//! document store they are persisted in.

pub mod error;
pub mod models;
pub mod recorder;
pub mod stats;
pub mod store;
