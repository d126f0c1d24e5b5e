//! Attendance session model

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use super::Person;

/// One attendance-taking event for a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSession {
    #[serde(serialize_with = "serialize_millis")]
    pub date: DateTime<Utc>,
    /// Student entries, roster order first, then orphans
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
    /// Assistant entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub staff: Vec<AttendanceEntry>,
}

/// Presence of a single member in a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub student_name: String,
    #[serde(default, deserialize_with = "truthy::deserialize")]
    pub present: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<Uuid>,
}

impl AttendanceEntry {
    /// Whether this entry belongs to `person`.
    ///
    /// When both sides carry an ID only the IDs are compared; otherwise the
    /// display name decides.
    pub fn refers_to(&self, person: &Person) -> bool {
        match (self.member_id, person.id) {
            (Some(member_id), Some(id)) => member_id == id,
            _ => person.is_named(&self.student_name),
        }
    }
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-09-01T09:30:00.000Z`
fn serialize_millis<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Presence flags read with JSON truthiness.
///
/// `null`, `false`, `0` and `""` are absent; any other value is present.
pub mod truthy {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn is_truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Value::deserialize(deserializer).map(|value| is_truthy(&value))
    }

    /// Like [`deserialize`], keeping `null` as unset
    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<bool>, D::Error> {
        Option::<Value>::deserialize(deserializer).map(|value| value.map(|v| is_truthy(&v)))
    }
}

impl AttendanceSession {
    pub fn absences(&self) -> usize {
        self.attendance.iter().filter(|e| !e.present).count()
    }

    /// First student entry recorded under `name`
    pub fn entry_named(&self, name: &str) -> Option<&AttendanceEntry> {
        self.attendance.iter().find(|e| e.student_name == name)
    }

    /// First student entry belonging to `person`
    pub fn entry_for(&self, person: &Person) -> Option<&AttendanceEntry> {
        self.attendance.iter().find(|e| e.refers_to(person))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonName;

    #[test]
    fn test_legacy_session_parses() {
        let session: AttendanceSession = serde_json::from_str(
            r#"{
                "date": "2024-09-01T09:30:00.000Z",
                "attendance": [
                    {"studentName": "Alice Smith", "present": true},
                    {"studentName": "Bob Lee", "present": false}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(session.attendance.len(), 2);
        assert!(session.staff.is_empty());
        assert_eq!(session.absences(), 1);
        assert!(session.entry_named("Bob Lee").is_some_and(|e| !e.present));
    }

    #[test]
    fn test_session_date_keeps_millisecond_format() {
        let raw = r#"{"date":"2024-09-01T09:30:00.000Z","attendance":[{"studentName":"Alice Smith","present":true}]}"#;
        let session: AttendanceSession = serde_json::from_str(raw).unwrap();

        assert_eq!(serde_json::to_string(&session).unwrap(), raw);
    }

    #[test]
    fn test_present_accepts_truthy_values() {
        let session: AttendanceSession = serde_json::from_str(
            r#"{
                "date": "2024-09-01T09:30:00.000Z",
                "attendance": [
                    {"studentName": "A", "present": "on"},
                    {"studentName": "B", "present": 1},
                    {"studentName": "C", "present": 0},
                    {"studentName": "D", "present": ""},
                    {"studentName": "E", "present": null},
                    {"studentName": "F"}
                ]
            }"#,
        )
        .unwrap();

        let presence: Vec<bool> = session.attendance.iter().map(|e| e.present).collect();
        assert_eq!(presence, vec![true, true, false, false, false, false]);
    }

    #[test]
    fn test_refers_to_prefers_member_id() {
        let alice = Person::new(PersonName::new("Alice", "Smith"));
        let other = Person::new(PersonName::new("Alice", "Smith"));

        let entry = AttendanceEntry {
            student_name: "Alice Smith".to_string(),
            present: true,
            member_id: alice.id,
        };
        assert!(entry.refers_to(&alice));
        assert!(!entry.refers_to(&other));

        let legacy = AttendanceEntry {
            member_id: None,
            ..entry.clone()
        };
        assert!(legacy.refers_to(&alice));
        assert!(legacy.refers_to(&other));

        let unidentified = Person {
            id: None,
            ..alice
        };
        assert!(entry.refers_to(&unidentified));
    }
}
