//! Attendance recording
//!
//! Turns the marks submitted for a session into a full roster snapshot and
//! appends it to the class history.

use chrono::{DateTime, SubsecRound, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::models::{AttendanceEntry, AttendanceSession, Class, Person};

/// Name recorded for orphan marks that carry none
pub const UNKNOWN_MEMBER: &str = "Unknown";

/// A submitted presence mark for one member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mark {
    pub member_id: Option<Uuid>,
    pub name: Option<String>,
    pub present: Option<bool>,
}

impl Mark {
    pub fn present(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            present: Some(true),
            ..Default::default()
        }
    }

    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            present: Some(false),
            ..Default::default()
        }
    }

    fn refers_to(&self, person: &Person) -> bool {
        match (self.member_id, self.name.as_deref()) {
            (Some(id), _) => person.id == Some(id),
            (None, Some(name)) => person.is_named(name),
            (None, None) => false,
        }
    }

    fn is_present(&self) -> bool {
        self.present.unwrap_or(false)
    }

    fn into_orphan_entry(self) -> AttendanceEntry {
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_MEMBER.to_string());

        AttendanceEntry {
            student_name: name,
            present: self.present.unwrap_or(false),
            member_id: self.member_id,
        }
    }
}

/// Marks submitted for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceMarks {
    pub students: Vec<Mark>,
    pub assistants: Vec<Mark>,
}

/// Record a session for `class` at time `at` and return it.
///
/// The session date is truncated to milliseconds, the precision it is stored
/// with.
///
/// Every roster member gets exactly one entry; members without a present mark
/// are recorded absent. Marks matching nobody on the roster are kept after the
/// roster entries.
pub fn record_attendance(
    class: &mut Class,
    marks: AttendanceMarks,
    at: DateTime<Utc>,
) -> AttendanceSession {
    let session = AttendanceSession {
        date: at.trunc_subsecs(3),
        attendance: roster_entries(&class.students, marks.students),
        staff: roster_entries(&class.assistants, marks.assistants),
    };

    class.attendance_history.push(session.clone());
    debug!(
        "Recorded session {} for class {} ({} absent)",
        class.attendance_history.len(),
        class.id,
        session.absences()
    );

    session
}

fn roster_entries(roster: &[Person], marks: Vec<Mark>) -> Vec<AttendanceEntry> {
    let mut entries: Vec<AttendanceEntry> = roster
        .iter()
        .map(|person| AttendanceEntry {
            student_name: person.full_name(),
            present: marks.iter().any(|m| m.refers_to(person) && m.is_present()),
            member_id: person.id,
        })
        .collect();

    entries.extend(
        marks
            .into_iter()
            .filter(|m| !roster.iter().any(|p| m.refers_to(p)))
            .map(Mark::into_orphan_entry),
    );

    entries
}
