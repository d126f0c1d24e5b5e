//! Class model and related functionality

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{Assistant, AttendanceSession, Person, PersonName, Student, Teacher};

/// Opaque class identifier, stored as a string
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    /// Generate a new unique identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClassId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Class entity, serialized with its ID as the last key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub name: String,
    pub teacher: Teacher,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default, rename = "madrichim")]
    pub assistants: Vec<Assistant>,
    /// Sessions in the order they were recorded
    #[serde(default)]
    pub attendance_history: Vec<AttendanceSession>,
    pub id: ClassId,
}

/// New class creation payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClass {
    pub name: String,
    pub teacher: PersonName,
    pub students: Vec<PersonName>,
    pub assistants: Vec<PersonName>,
}

impl Class {
    /// Build a class with fresh identifiers and an empty history.
    ///
    /// Every member gets the new class ID in its memberships.
    pub fn create(new_class: NewClass) -> Self {
        let id = ClassId::generate();
        let member = |name: PersonName| {
            let mut person = Person::new(name);
            person.classes.insert(id.clone());
            person
        };

        Self {
            name: new_class.name,
            teacher: member(new_class.teacher),
            students: new_class.students.into_iter().map(member).collect(),
            assistants: new_class.assistants.into_iter().map(member).collect(),
            attendance_history: Vec::new(),
            id,
        }
    }

    /// Find a student on the roster by display name
    pub fn student_named(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.is_named(name))
    }
}
