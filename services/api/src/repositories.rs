//! Repositories for document store operations

use chrono::Utc;
use common::{
    models::{AttendanceSession, Class, NewClass},
    recorder::{AttendanceMarks, record_attendance},
    stats::{ClassReport, ClassSummary, absence_report, summarize},
    store::JsonStore,
};
use tracing::info;

use crate::error::{ApiError, ApiResult};

/// Class repository backed by the JSON document
#[derive(Clone)]
pub struct ClassRepository {
    store: JsonStore,
}

impl ClassRepository {
    /// Create a new class repository
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Create and persist a new class
    pub async fn create(&self, new_class: NewClass) -> ApiResult<Class> {
        let class = Class::create(new_class);

        self.store
            .update(|doc| {
                doc.classes.push(class.clone());
                Ok::<_, ApiError>(())
            })
            .await?;

        info!(
            "Created class {} ({}) with {} students",
            class.id,
            class.name,
            class.students.len()
        );
        Ok(class)
    }

    /// Append a session to a class's history
    pub async fn record_attendance(
        &self,
        class_id: &str,
        marks: AttendanceMarks,
    ) -> ApiResult<AttendanceSession> {
        let session = self
            .store
            .update(|doc| {
                let class = doc
                    .find_class_mut(class_id)
                    .ok_or_else(|| ApiError::class_not_found(class_id))?;
                Ok::<_, ApiError>(record_attendance(class, marks, Utc::now()))
            })
            .await?;

        info!(
            "Recorded attendance for class {}: {} entries, {} absent",
            class_id,
            session.attendance.len(),
            session.absences()
        );
        Ok(session)
    }

    /// Find a class by ID
    pub async fn find_by_id(&self, class_id: &str) -> ApiResult<Option<Class>> {
        let doc = self.store.load().await?;
        Ok(doc.find_class(class_id).cloned())
    }

    /// Get a class's attendance history
    pub async fn attendance_history(&self, class_id: &str) -> ApiResult<Vec<AttendanceSession>> {
        self.find_by_id(class_id)
            .await?
            .map(|class| class.attendance_history)
            .ok_or_else(|| ApiError::class_not_found(class_id))
    }

    /// Summaries of all classes, in creation order
    pub async fn summaries(&self) -> ApiResult<Vec<ClassSummary>> {
        let doc = self.store.load().await?;
        Ok(doc.classes.iter().map(summarize).collect())
    }

    /// Absence report for one class
    pub async fn absence_report(&self, class_id: &str) -> ApiResult<ClassReport> {
        self.find_by_id(class_id)
            .await?
            .map(|class| absence_report(&class))
            .ok_or_else(|| ApiError::class_not_found(class_id))
    }
}
