//! API models for request and response payloads

use common::{
    models::{AttendanceSession, Class, NewClass, PersonName, attendance::truthy},
    recorder::{AttendanceMarks, Mark},
    stats::ClassSummary,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::ApiError,
    validation::{
        parse_full_name, parse_names, sanitize_name, sanitize_person, validate_class_id,
        validate_class_name, validate_teacher,
    },
};

/// A person given either as split names or as one "First Last" string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PersonInput {
    FullName(String),
    #[serde(rename_all = "camelCase")]
    Parts {
        #[serde(default)]
        first_name: String,
        #[serde(default)]
        last_name: String,
    },
}

impl PersonInput {
    fn into_name(self) -> PersonName {
        match self {
            PersonInput::FullName(raw) => parse_full_name(&raw),
            PersonInput::Parts {
                first_name,
                last_name,
            } => sanitize_person(&first_name, &last_name),
        }
    }
}

/// A roster given as a list or as a comma-separated string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RosterInput {
    List(Vec<PersonInput>),
    Text(String),
}

impl Default for RosterInput {
    fn default() -> Self {
        RosterInput::List(Vec::new())
    }
}

impl RosterInput {
    fn into_names(self) -> Vec<PersonName> {
        match self {
            RosterInput::List(people) => people
                .into_iter()
                .map(PersonInput::into_name)
                .filter(|name| !name.is_empty())
                .collect(),
            RosterInput::Text(raw) => parse_names(&raw),
        }
    }
}

/// Request for class creation
#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: Option<String>,
    pub teacher: Option<PersonInput>,
    #[serde(default)]
    pub students: RosterInput,
    #[serde(default)]
    pub madrichim: RosterInput,
}

impl CreateClassRequest {
    /// Sanitize and validate into a class configuration
    pub fn into_new_class(self) -> Result<NewClass, ApiError> {
        let name = sanitize_name(self.name.as_deref().unwrap_or_default());
        validate_class_name(&name).map_err(ApiError::Validation)?;

        let teacher = self
            .teacher
            .map(PersonInput::into_name)
            .unwrap_or_default();
        validate_teacher(&teacher).map_err(ApiError::Validation)?;

        Ok(NewClass {
            name,
            teacher,
            students: self.students.into_names(),
            assistants: self.madrichim.into_names(),
        })
    }
}

/// Response for class creation
#[derive(Debug, Serialize)]
pub struct CreateClassResponse {
    pub message: String,
    pub class: Class,
}

/// One submitted presence mark
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMarkInput {
    pub student_id: Option<Uuid>,
    pub student_name: Option<String>,
    #[serde(default, deserialize_with = "truthy::deserialize_option")]
    pub present: Option<bool>,
}

impl From<AttendanceMarkInput> for Mark {
    fn from(input: AttendanceMarkInput) -> Self {
        Mark {
            member_id: input.student_id,
            name: input.student_name.map(|n| sanitize_name(&n)),
            present: input.present,
        }
    }
}

/// Request for recording a session
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendanceRequest {
    pub class_id: Option<String>,
    pub attendance: Option<Vec<AttendanceMarkInput>>,
    #[serde(default)]
    pub madrichim: Vec<AttendanceMarkInput>,
}

impl UpdateAttendanceRequest {
    pub fn into_marks(self) -> Result<(String, AttendanceMarks), ApiError> {
        let class_id = validate_class_id(self.class_id.as_deref())
            .map_err(ApiError::Validation)?
            .to_string();

        let attendance = self
            .attendance
            .ok_or_else(|| ApiError::Validation("Invalid attendance data format".to_string()))?;

        let marks = AttendanceMarks {
            students: attendance.into_iter().map(Mark::from).collect(),
            assistants: self.madrichim.into_iter().map(Mark::from).collect(),
        };

        Ok((class_id, marks))
    }
}

/// Response for recording a session
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendanceResponse {
    pub message: String,
    pub attendance_record: AttendanceSession,
}

/// Query parameters selecting a class
#[derive(Debug, Clone, Deserialize)]
pub struct ClassQuery {
    pub id: Option<String>,
}

/// Response for history lookup
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceHistoryResponse {
    pub attendance_history: Vec<AttendanceSession>,
}

/// Response for the class summary listing
#[derive(Debug, Serialize)]
pub struct ClassListResponse {
    pub classes: Vec<ClassSummary>,
}
