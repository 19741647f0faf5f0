use uuid::Uuid;

use crate::models::{AttendanceEntry, MarkRecord, Resource};

/// The one domain error the pipeline surfaces: a student id that does not
/// resolve in the record store. Carried inside `anyhow::Error` and
/// recoverable with `downcast_ref`.
#[derive(Debug, thiserror::Error)]
#[error("student {0} not found")]
pub struct StudentNotFound(pub Uuid);

/// Read-only port over the persistence collaborator. The scorers never see
/// a connection pool; tests swap in [`memory::MemoryStore`].
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    async fn student_exists(&self, student_id: Uuid) -> anyhow::Result<bool>;

    async fn marks_for_student(&self, student_id: Uuid) -> anyhow::Result<Vec<MarkRecord>>;

    async fn attendance_for_student(
        &self,
        student_id: Uuid,
    ) -> anyhow::Result<Vec<AttendanceEntry>>;

    /// Case-insensitive substring lookup over the resource catalog,
    /// returning at most `limit` rows in catalog order.
    async fn resources_for_skill(&self, skill: &str, limit: usize)
        -> anyhow::Result<Vec<Resource>>;
}

#[cfg(test)]
pub mod memory {
    use super::*;

    /// In-memory stand-in for the Postgres store, mirroring its query
    /// semantics (including ILIKE-style matching) for unit tests.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub students: Vec<Uuid>,
        pub marks: Vec<MarkRecord>,
        pub attendance: Vec<AttendanceEntry>,
        pub resources: Vec<Resource>,
    }

    impl RecordStore for MemoryStore {
        async fn student_exists(&self, student_id: Uuid) -> anyhow::Result<bool> {
            Ok(self.students.contains(&student_id))
        }

        async fn marks_for_student(&self, student_id: Uuid) -> anyhow::Result<Vec<MarkRecord>> {
            Ok(self
                .marks
                .iter()
                .filter(|mark| mark.student_id == student_id)
                .cloned()
                .collect())
        }

        async fn attendance_for_student(
            &self,
            student_id: Uuid,
        ) -> anyhow::Result<Vec<AttendanceEntry>> {
            Ok(self
                .attendance
                .iter()
                .filter(|entry| entry.student_id == student_id)
                .cloned()
                .collect())
        }

        async fn resources_for_skill(
            &self,
            skill: &str,
            limit: usize,
        ) -> anyhow::Result<Vec<Resource>> {
            let needle = skill.to_lowercase();
            Ok(self
                .resources
                .iter()
                .filter(|resource| resource.skill_name.to_lowercase().contains(&needle))
                .take(limit)
                .cloned()
                .collect())
        }
    }
}
