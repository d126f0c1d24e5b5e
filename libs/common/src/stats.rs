//! Absence statistics
//!
//! Read-only aggregation over a class's attendance history. Nothing here is
//! cached; every report is recomputed from the history it is given.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::models::{AttendanceSession, Class, ClassId, Student};

/// Absence totals for one history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceStats {
    pub total_sessions: usize,
    pub total_absences: usize,
    /// Absences keyed by recorded student name, orphans included
    pub absence_count_by_student: BTreeMap<String, usize>,
    /// Absences in the most recent session
    pub current_session_absences: usize,
}

impl AbsenceStats {
    pub fn absences_of(&self, student_name: &str) -> usize {
        self.absence_count_by_student
            .get(student_name)
            .copied()
            .unwrap_or(0)
    }

    pub fn rate_for(&self, absences: usize) -> f64 {
        absence_rate(absences, self.total_sessions)
    }
}

/// One row of the admin summary table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    pub id: ClassId,
    pub name: String,
    pub teacher: String,
    pub total_students: usize,
    pub total_sessions: usize,
    pub total_absences: usize,
    pub current_session_absences: usize,
}

/// Per-student line of an absence report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAbsence {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<Uuid>,
    pub student_name: String,
    pub absences: usize,
    /// Percentage of sessions missed
    pub absence_rate: f64,
    pub absent_dates: Vec<NaiveDate>,
}

/// Detailed absence report for a class
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassReport {
    pub class_id: ClassId,
    pub class_name: String,
    pub stats: AbsenceStats,
    pub students: Vec<StudentAbsence>,
}

pub fn compute_stats(history: &[AttendanceSession]) -> AbsenceStats {
    let mut absence_count_by_student = BTreeMap::new();

    for entry in history.iter().flat_map(|s| &s.attendance) {
        if !entry.present {
            *absence_count_by_student
                .entry(entry.student_name.clone())
                .or_insert(0) += 1;
        }
    }

    AbsenceStats {
        total_sessions: history.len(),
        total_absences: absence_count_by_student.values().sum(),
        current_session_absences: history.last().map_or(0, AttendanceSession::absences),
        absence_count_by_student,
    }
}

/// Absences as a percentage of sessions; 0.0 when there are no sessions
pub fn absence_rate(absences: usize, total_sessions: usize) -> f64 {
    if total_sessions == 0 {
        return 0.0;
    }
    absences as f64 / total_sessions as f64 * 100.0
}

/// Dates of sessions where the first entry named `student_name` is absent,
/// in recording order.
pub fn list_absent_dates(class: &Class, student_name: &str) -> Vec<NaiveDate> {
    class
        .attendance_history
        .iter()
        .filter(|s| s.entry_named(student_name).is_some_and(|e| !e.present))
        .map(|s| s.date.date_naive())
        .collect()
}

pub fn summarize(class: &Class) -> ClassSummary {
    let stats = compute_stats(&class.attendance_history);

    ClassSummary {
        id: class.id.clone(),
        name: class.name.clone(),
        teacher: class.teacher.full_name(),
        total_students: class.students.len(),
        total_sessions: stats.total_sessions,
        total_absences: stats.total_absences,
        current_session_absences: stats.current_session_absences,
    }
}

pub fn absence_report(class: &Class) -> ClassReport {
    let stats = compute_stats(&class.attendance_history);
    let students = class
        .students
        .iter()
        .map(|student| student_absence(class, student, stats.total_sessions))
        .collect();

    ClassReport {
        class_id: class.id.clone(),
        class_name: class.name.clone(),
        stats,
        students,
    }
}

fn student_absence(class: &Class, student: &Student, total_sessions: usize) -> StudentAbsence {
    let absent_dates: Vec<NaiveDate> = class
        .attendance_history
        .iter()
        .filter(|s| s.entry_for(student).is_some_and(|e| !e.present))
        .map(|s| s.date.date_naive())
        .collect();

    StudentAbsence {
        student_id: student.id,
        student_name: student.full_name(),
        absences: absent_dates.len(),
        absence_rate: absence_rate(absent_dates.len(), total_sessions),
        absent_dates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceEntry, NewClass, PersonName};
    use crate::recorder::{AttendanceMarks, Mark, record_attendance};
    use chrono::{DateTime, Utc};

    fn at(day: u32) -> DateTime<Utc> {
        format!("2024-09-{:02}T09:00:00Z", day).parse().unwrap()
    }

    fn entry(name: &str, present: bool) -> AttendanceEntry {
        AttendanceEntry {
            student_name: name.to_string(),
            present,
            member_id: None,
        }
    }

    fn session(day: u32, entries: Vec<AttendanceEntry>) -> AttendanceSession {
        AttendanceSession {
            date: at(day),
            attendance: entries,
            staff: Vec::new(),
        }
    }

    fn math() -> Class {
        Class::create(NewClass {
            name: "Math".to_string(),
            teacher: PersonName::new("Jane", "Doe"),
            students: vec![
                PersonName::new("Alice", "Smith"),
                PersonName::new("Bob", "Lee"),
            ],
            assistants: vec![],
        })
    }

    #[test]
    fn test_empty_history() {
        let stats = compute_stats(&[]);

        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.total_absences, 0);
        assert_eq!(stats.current_session_absences, 0);
        assert!(stats.absence_count_by_student.is_empty());
        assert_eq!(stats.rate_for(0), 0.0);
        assert!(!stats.rate_for(3).is_nan());
    }

    #[test]
    fn test_counts_absences_per_student() {
        let history = vec![
            session(1, vec![entry("Alice Smith", false), entry("Bob Lee", false)]),
            session(2, vec![entry("Alice Smith", true), entry("Bob Lee", false)]),
            session(3, vec![entry("Ghost", false), entry("Bob Lee", true)]),
        ];

        let stats = compute_stats(&history);

        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.absences_of("Alice Smith"), 1);
        assert_eq!(stats.absences_of("Bob Lee"), 2);
        assert_eq!(stats.absences_of("Ghost"), 1);
        assert_eq!(stats.absences_of("Nobody"), 0);
        assert_eq!(stats.total_absences, 4);
        assert_eq!(
            stats.total_absences,
            stats.absence_count_by_student.values().sum::<usize>()
        );
        assert_eq!(stats.current_session_absences, 1);
    }

    #[test]
    fn test_current_session_is_last_recorded() {
        let history = vec![
            session(1, vec![entry("A", false), entry("B", false)]),
            session(2, vec![entry("A", true), entry("B", true)]),
        ];

        assert_eq!(compute_stats(&history).current_session_absences, 0);
        assert_eq!(compute_stats(&history[..1]).current_session_absences, 2);
    }

    #[test]
    fn test_absence_rate() {
        assert_eq!(absence_rate(0, 0), 0.0);
        assert_eq!(absence_rate(1, 4), 25.0);
        assert_eq!(absence_rate(4, 4), 100.0);
    }

    #[test]
    fn test_list_absent_dates_in_order() {
        let mut class = math();
        class.attendance_history = vec![
            session(1, vec![entry("Bob Lee", false)]),
            session(2, vec![entry("Bob Lee", true)]),
            session(3, vec![entry("Alice Smith", false)]),
            session(5, vec![entry("Bob Lee", false), entry("Bob Lee", true)]),
        ];

        let dates = list_absent_dates(&class, "Bob Lee");

        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 9, 5).unwrap(),
            ]
        );
        assert!(list_absent_dates(&class, "Nobody").is_empty());
    }

    #[test]
    fn test_recorded_scenario() {
        let mut class = math();
        let marks = AttendanceMarks {
            students: vec![Mark::present("Alice Smith"), Mark::absent("Bob Lee")],
            ..Default::default()
        };
        record_attendance(&mut class, marks, at(2));

        let stats = compute_stats(&class.attendance_history);

        assert_eq!(class.attendance_history.len(), 1);
        assert_eq!(stats.absences_of("Bob Lee"), 1);
        assert_eq!(stats.total_absences, 1);
        assert_eq!(stats.current_session_absences, 1);
    }

    #[test]
    fn test_summarize() {
        let mut class = math();
        record_attendance(&mut class, AttendanceMarks::default(), at(1));

        let summary = summarize(&class);

        assert_eq!(summary.teacher, "Jane Doe");
        assert_eq!(summary.total_students, 2);
        assert_eq!(summary.total_sessions, 1);
        assert_eq!(summary.total_absences, 2);
        assert_eq!(summary.current_session_absences, 2);
    }

    #[test]
    fn test_report_matches_by_member_id() {
        let mut class = math();
        record_attendance(
            &mut class,
            AttendanceMarks {
                students: vec![Mark::present("Alice Smith")],
                ..Default::default()
            },
            at(1),
        );
        record_attendance(&mut class, AttendanceMarks::default(), at(2));

        // Rename after the fact; entries still resolve through the member ID.
        class.students[1].last_name = "Leigh".to_string();

        let report = absence_report(&class);
        let bob = &report.students[1];

        assert_eq!(report.stats.total_sessions, 2);
        assert_eq!(bob.student_name, "Bob Leigh");
        assert_eq!(bob.absences, 2);
        assert_eq!(bob.absence_rate, 100.0);
        assert_eq!(bob.absent_dates.len(), 2);
        assert_eq!(report.students[0].absences, 1);
        assert_eq!(report.students[0].absence_rate, 50.0);
    }

    #[test]
    fn test_report_without_sessions() {
        let report = absence_report(&math());
        assert!(report.students.iter().all(|s| s.absence_rate == 0.0));
        assert!(report.students.iter().all(|s| s.absent_dates.is_empty()));
    }
}
