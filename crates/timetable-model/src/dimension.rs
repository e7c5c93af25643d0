//! Dimension rows and the keyed tables that hold them.
//!
//! Every dimension row knows how to render its composite identifier. The
//! identifier is the only uniqueness guarantee a table makes: rows are
//! addressed by it and a second row with the same identifier is never stored.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::CourseContext;

/// Replace spaces with hyphens, as used inside composite identifiers.
pub fn hyphenate(value: &str) -> String {
    value.replace(' ', "-")
}

/// The four entity dimensions produced by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKind {
    Group,
    Subject,
    Room,
    Teacher,
}

impl DimensionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionKind::Group => "group",
            DimensionKind::Subject => "subject",
            DimensionKind::Room => "room",
            DimensionKind::Teacher => "teacher",
        }
    }

    /// Name of the identifier column in tabular output.
    pub fn id_column(&self) -> &'static str {
        match self {
            DimensionKind::Group => "group_id",
            DimensionKind::Subject => "subject_id",
            DimensionKind::Room => "room_id",
            DimensionKind::Teacher => "teacher_id",
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of class a subject row describes.
///
/// Teaching-load rows only ever produce the five fixed labels. Timetable rows
/// carry whatever the sheet's class-type column says, so values outside the
/// vocabulary are kept verbatim in [`SubjectType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubjectType {
    Lecture,
    Practice,
    Laboratory,
    Project,
    SelfStudy,
    Other(String),
}

impl SubjectType {
    pub fn as_str(&self) -> &str {
        match self {
            SubjectType::Lecture => "Lecture",
            SubjectType::Practice => "Practice",
            SubjectType::Laboratory => "Laboratory",
            SubjectType::Project => "Project",
            SubjectType::SelfStudy => "self-study",
            SubjectType::Other(value) => value,
        }
    }
}

impl From<&str> for SubjectType {
    fn from(value: &str) -> Self {
        match value {
            "Lecture" => SubjectType::Lecture,
            "Practice" => SubjectType::Practice,
            "Laboratory" => SubjectType::Laboratory,
            "Project" => SubjectType::Project,
            "self-study" => SubjectType::SelfStudy,
            other => SubjectType::Other(other.to_string()),
        }
    }
}

impl From<String> for SubjectType {
    fn from(value: String) -> Self {
        SubjectType::from(value.as_str())
    }
}

impl From<SubjectType> for String {
    fn from(value: SubjectType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized entity instance addressable by its composite identifier.
pub trait DimensionRow: Clone + PartialEq + fmt::Debug {
    const KIND: DimensionKind;

    /// Composite identifier of this row.
    fn key(&self) -> String;

    /// Attribute column names, in output order (identifier excluded).
    fn column_names() -> &'static [&'static str];

    /// Attribute values matching [`DimensionRow::column_names`].
    fn values(&self) -> Vec<String>;
}

fn context_values(context: &CourseContext) -> Vec<String> {
    vec![
        context.course_name.clone(),
        context.specialty.clone(),
        context.stage_name.clone(),
        context.semester_num.clone(),
    ]
}

/// A student group within a course stage and semester.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupRow {
    #[serde(flatten)]
    pub context: CourseContext,
    pub group_name: String,
}

impl DimensionRow for GroupRow {
    const KIND: DimensionKind = DimensionKind::Group;

    fn key(&self) -> String {
        format!("{}_{}", self.context.key_prefix(), self.group_name)
    }

    fn column_names() -> &'static [&'static str] {
        &[
            "course_name",
            "specialty",
            "stage_name",
            "semester_num",
            "group_name",
        ]
    }

    fn values(&self) -> Vec<String> {
        let mut values = context_values(&self.context);
        values.push(self.group_name.clone());
        values
    }
}

/// A subject taught in a course stage and semester, split by class type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectRow {
    #[serde(flatten)]
    pub context: CourseContext,
    pub subject_full_name: String,
    pub subject_type: SubjectType,
}

impl DimensionRow for SubjectRow {
    const KIND: DimensionKind = DimensionKind::Subject;

    fn key(&self) -> String {
        format!(
            "{}_{}_{}",
            self.context.key_prefix(),
            hyphenate(&self.subject_full_name),
            self.subject_type
        )
    }

    fn column_names() -> &'static [&'static str] {
        &[
            "course_name",
            "specialty",
            "stage_name",
            "semester_num",
            "subject_full_name",
            "subject_type",
        ]
    }

    fn values(&self) -> Vec<String> {
        let mut values = context_values(&self.context);
        values.push(self.subject_full_name.clone());
        values.push(self.subject_type.as_str().to_string());
        values
    }
}

/// A physical room. Rooms are shared across courses and carry no context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomRow {
    pub room_name: String,
}

impl DimensionRow for RoomRow {
    const KIND: DimensionKind = DimensionKind::Room;

    fn key(&self) -> String {
        self.room_name.clone()
    }

    fn column_names() -> &'static [&'static str] {
        &["room_name"]
    }

    fn values(&self) -> Vec<String> {
        vec![self.room_name.clone()]
    }
}

/// A teacher of record: a person with an academic title, or a unit such as
/// a language centre carrying the `department` title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeacherRow {
    pub title: String,
    pub full_name: String,
}

impl DimensionRow for TeacherRow {
    const KIND: DimensionKind = DimensionKind::Teacher;

    fn key(&self) -> String {
        format!("{}_{}", hyphenate(&self.title), hyphenate(&self.full_name))
    }

    fn column_names() -> &'static [&'static str] {
        &["title", "full_name"]
    }

    fn values(&self) -> Vec<String> {
        vec![self.title.clone(), self.full_name.clone()]
    }
}

/// A dimension table indexed by composite identifier.
///
/// Rows keep their first-insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionTable<R> {
    keys: Vec<String>,
    rows: Vec<R>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl<R> Default for DimensionTable<R> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<R: DimensionRow> DimensionTable<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> DimensionKind {
        R::KIND
    }

    /// Insert a row under its composite identifier.
    ///
    /// Returns the row already stored under that identifier, if any, in which
    /// case the new row is not inserted.
    pub fn insert(&mut self, row: R) -> Option<&R> {
        let key = row.key();
        if let Some(&idx) = self.index.get(&key) {
            return self.rows.get(idx);
        }
        self.index.insert(key.clone(), self.rows.len());
        self.keys.push(key);
        self.rows.push(row);
        None
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.index.get(key).and_then(|&idx| self.rows.get(idx))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.keys.iter().map(String::as_str).zip(self.rows.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> CourseContext {
        CourseContext::new("Informatyka", "default", "I", "1")
    }

    #[test]
    fn subject_key_hyphenates_name() {
        let row = SubjectRow {
            context: ctx(),
            subject_full_name: "analiza matematyczna".to_string(),
            subject_type: SubjectType::Lecture,
        };
        assert_eq!(row.key(), "Informatyka_default_I_1_analiza-matematyczna_Lecture");
    }

    #[test]
    fn teacher_key_hyphenates_title_and_name() {
        let row = TeacherRow {
            title: "dr inż.".to_string(),
            full_name: "Jan Kowalski".to_string(),
        };
        assert_eq!(row.key(), "dr-inż._Jan-Kowalski");
    }

    #[test]
    fn subject_type_round_trips_labels() {
        for label in ["Lecture", "Practice", "Laboratory", "Project", "self-study"] {
            assert_eq!(SubjectType::from(label).as_str(), label);
        }
        assert_eq!(
            SubjectType::from("Seminar"),
            SubjectType::Other("Seminar".to_string())
        );
    }

    #[test]
    fn table_refuses_second_row_with_same_key() {
        let mut table = DimensionTable::new();
        let first = GroupRow {
            context: ctx(),
            group_name: "L1".to_string(),
        };
        assert!(table.insert(first.clone()).is_none());
        assert_eq!(table.insert(first.clone()), Some(&first));
        assert_eq!(table.len(), 1);
        assert_eq!(table.keys(), ["Informatyka_default_I_1_L1".to_string()]);
    }
}
