//! Typed source records, one per row of a timetable or teaching-load sheet.

use serde::{Deserialize, Serialize};

/// A row of the class timetable.
///
/// Null cells are `None`; canonicalizers decide how a missing value renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimetableRecord {
    /// Zero-based row position in the source frame.
    pub row: usize,
    pub sheet_name: String,
    pub group: Option<String>,
    pub subject: Option<String>,
    pub room: Option<String>,
    /// Verbatim value of the `lecture/practice/laboratory` column.
    pub class_type: Option<String>,
}

/// A row of the teaching-load sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeachingLoadRecord {
    pub row: usize,
    pub sheet_name: String,
    pub subject: Option<String>,
    pub lecture_hours: Option<f64>,
    pub practice_hours: Option<f64>,
    pub laboratory_hours: Option<f64>,
    pub project_hours: Option<f64>,
    /// Raw `lecturers with titles` cell.
    pub lecturers: Option<String>,
    /// Raw `practice/lab teachers with titles` cell.
    pub practice_teachers: Option<String>,
}

impl TeachingLoadRecord {
    pub fn has_lecture(&self) -> bool {
        has_hours(self.lecture_hours)
    }

    pub fn has_practice(&self) -> bool {
        has_hours(self.practice_hours)
    }

    pub fn has_laboratory(&self) -> bool {
        has_hours(self.laboratory_hours)
    }

    pub fn has_project(&self) -> bool {
        has_hours(self.project_hours)
    }
}

fn has_hours(hours: Option<f64>) -> bool {
    hours.is_some_and(|h| h > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicators_require_strictly_positive_hours() {
        let record = TeachingLoadRecord {
            lecture_hours: Some(30.0),
            practice_hours: Some(0.0),
            laboratory_hours: None,
            project_hours: Some(-1.0),
            ..Default::default()
        };
        assert!(record.has_lecture());
        assert!(!record.has_practice());
        assert!(!record.has_laboratory());
        assert!(!record.has_project());
    }
}
