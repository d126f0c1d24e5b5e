//! Domain models

pub mod attendance;
pub mod class;
pub mod document;
pub mod person;

// Re-export for convenience
pub use attendance::{AttendanceEntry, AttendanceSession};
pub use class::{Class, ClassId, NewClass};
pub use document::Document;
pub use person::{Assistant, Person, PersonName, Student, Teacher};
