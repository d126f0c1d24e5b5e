//! Person model shared by students, teachers and assistants

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use super::ClassId;

/// A member of a class roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Assigned at creation; people loaded from older documents have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Classes this person belongs to, by ID
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub classes: BTreeSet<ClassId>,
}

pub type Student = Person;
pub type Teacher = Person;
pub type Assistant = Person;

impl Person {
    /// Create a person with a fresh identifier and no memberships
    pub fn new(name: PersonName) -> Self {
        Self {
            first_name: name.first_name,
            last_name: name.last_name,
            id: Some(Uuid::new_v4()),
            classes: BTreeSet::new(),
        }
    }

    /// Display name, "First Last"
    pub fn full_name(&self) -> String {
        display_name(&self.first_name, &self.last_name)
    }

    /// Whether `name` refers to this person by display name
    pub fn is_named(&self, name: &str) -> bool {
        self.full_name() == name.trim()
    }
}

/// First and last name pair used when creating people
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

impl PersonName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.trim().is_empty() && self.last_name.trim().is_empty()
    }

    pub fn full_name(&self) -> String {
        display_name(&self.first_name, &self.last_name)
    }
}

fn display_name(first: &str, last: &str) -> String {
    format!("{} {}", first.trim(), last.trim()).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trims_missing_last_name() {
        let person = Person::new(PersonName::new("Cher", ""));
        assert_eq!(person.full_name(), "Cher");
        assert!(person.is_named(" Cher "));
    }

    #[test]
    fn test_legacy_person_round_trips_without_identifier() {
        let raw = r#"{"firstName":"Alice","lastName":"Smith"}"#;
        let person: Person = serde_json::from_str(raw).unwrap();

        assert_eq!(person.full_name(), "Alice Smith");
        assert!(person.classes.is_empty());
        assert_eq!(person.id, None);
        assert_eq!(serde_json::to_string(&person).unwrap(), raw);
    }

    #[test]
    fn test_new_person_gets_identifier() {
        let person = Person::new(PersonName::new("Alice", "Smith"));
        assert!(person.id.is_some_and(|id| !id.is_nil()));
    }
}
