//! Course context decoded from a sheet label.

use serde::{Deserialize, Serialize};

/// Specialty assigned when a sheet label carries no specialty component.
pub const DEFAULT_SPECIALTY: &str = "default";

/// The course/specialty/stage/semester tuple shared by every row of a sheet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseContext {
    pub course_name: String,
    pub specialty: String,
    pub stage_name: String,
    pub semester_num: String,
}

impl CourseContext {
    pub fn new(
        course_name: impl Into<String>,
        specialty: impl Into<String>,
        stage_name: impl Into<String>,
        semester_num: impl Into<String>,
    ) -> Self {
        Self {
            course_name: course_name.into(),
            specialty: specialty.into(),
            stage_name: stage_name.into(),
            semester_num: semester_num.into(),
        }
    }

    /// `course_name _ specialty`.
    pub fn course_id(&self) -> String {
        format!("{}_{}", self.course_name, self.specialty)
    }

    /// `course_id _ stage _ semester`, the prefix of every course-scoped key.
    pub fn key_prefix(&self) -> String {
        format!(
            "{}_{}_{}",
            self.course_id(),
            self.stage_name,
            self.semester_num
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_id_joins_name_and_specialty() {
        let ctx = CourseContext::new("Informatyka", DEFAULT_SPECIALTY, "I", "1");
        assert_eq!(ctx.course_id(), "Informatyka_default");
        assert_eq!(ctx.key_prefix(), "Informatyka_default_I_1");
    }
}
