//! Pre-correction vocabularies for curating the correction tables.
//!
//! Each vocabulary holds field values after every rule stage but before the
//! final correction-table lookup, so the near-duplicate scan surfaces the
//! variants a new table entry would have to catch.

use std::collections::HashSet;

use serde::Serialize;
use timetable_map::NearDuplicateReport;
use timetable_model::{TeachingLoadRecord, TimetableRecord};
use timetable_normalization::split_teachers;

use crate::dimensions::Canonicalizers;

/// Distinct pre-correction values per field, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    pub rooms: Vec<String>,
    pub subjects: Vec<String>,
    pub teacher_names: Vec<String>,
}

#[derive(Default)]
struct Distinct {
    seen: HashSet<String>,
    values: Vec<String>,
}

impl Distinct {
    fn push(&mut self, value: String) {
        if !value.is_empty() && self.seen.insert(value.clone()) {
            self.values.push(value);
        }
    }
}

pub fn extract_vocabulary(
    canonicalizers: &Canonicalizers,
    timetable: &[TimetableRecord],
    teaching_load: &[TeachingLoadRecord],
) -> Vocabulary {
    let mut rooms = Distinct::default();
    let mut subjects = Distinct::default();
    let mut teacher_names = Distinct::default();

    for record in timetable {
        for room in canonicalizers
            .rooms
            .pre_correction_cell(record.room.as_deref())
        {
            rooms.push(room);
        }
        if let Some(subject) = &record.subject {
            subjects.push(canonicalizers.subjects.pre_correction(subject));
        }
    }
    for record in teaching_load {
        if let Some(subject) = &record.subject {
            subjects.push(canonicalizers.subjects.pre_correction(subject));
        }
    }
    // Null teacher cells contribute no entries.
    let lecturers = teaching_load.iter().filter_map(|r| r.lecturers.as_deref());
    let practice = teaching_load
        .iter()
        .filter_map(|r| r.practice_teachers.as_deref());
    for cell in lecturers.chain(practice) {
        for entry in split_teachers(Some(cell)) {
            teacher_names.push(canonicalizers.teachers.pre_correction(&entry));
        }
    }

    Vocabulary {
        rooms: rooms.values,
        subjects: subjects.values,
        teacher_names: teacher_names.values,
    }
}

/// Near-duplicate scan of each vocabulary, in rooms, subjects, teachers order.
pub fn review_vocabulary(vocabulary: &Vocabulary, threshold: usize) -> Vec<NearDuplicateReport> {
    vec![
        NearDuplicateReport::scan("rooms", &vocabulary.rooms, threshold),
        NearDuplicateReport::scan("subjects", &vocabulary.subjects, threshold),
        NearDuplicateReport::scan("teachers", &vocabulary.teacher_names, threshold),
    ]
}

#[cfg(test)]
mod tests {
    use timetable_standards::{CorrectionTables, ExactTable};

    use super::*;

    #[test]
    fn vocabulary_skips_correction_tables() {
        let mut tables = CorrectionTables::empty();
        tables.rooms = ExactTable::from_pairs([("8 CW", "hall 8 CW")]);
        tables.teacher_prefixes = vec!["dr".to_string()];
        tables.teacher_names = ExactTable::from_pairs([("T.Kobus", "Tadeusz Kobus")]);
        let canonicalizers = Canonicalizers::from_tables(&tables);

        let timetable = [TimetableRecord {
            room: Some("8 CW, 8 CW".to_string()),
            subject: Some("Fizyka!".to_string()),
            ..Default::default()
        }];
        let load = [TeachingLoadRecord {
            lecturers: Some("dr T.Kobus\ndr T.Kobus".to_string()),
            practice_teachers: None,
            ..Default::default()
        }];

        let vocabulary = extract_vocabulary(&canonicalizers, &timetable, &load);
        assert_eq!(vocabulary.rooms, vec!["8 CW"]);
        assert_eq!(vocabulary.subjects, vec!["fizyka"]);
        assert_eq!(vocabulary.teacher_names, vec!["T.Kobus"]);
    }

    #[test]
    fn null_teacher_cells_stay_out_of_vocabulary() {
        let canonicalizers = Canonicalizers::from_tables(&CorrectionTables::empty());
        let load = [
            TeachingLoadRecord {
                lecturers: None,
                practice_teachers: Some("Anna Nowak".to_string()),
                ..Default::default()
            },
            TeachingLoadRecord::default(),
        ];

        let vocabulary = extract_vocabulary(&canonicalizers, &[], &load);
        assert_eq!(vocabulary.teacher_names, vec!["Anna Nowak"]);
    }
}
