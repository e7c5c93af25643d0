use proptest::prelude::*;
use timetable_model::LabelError;
use timetable_normalization::{
    GroupCanonicalizer, RoomCanonicalizer, SubjectCanonicalizer, TeacherCanonicalizer,
    decode_label,
};
use timetable_standards::load_default_corrections;

proptest! {
    #[test]
    fn three_component_labels_default_the_specialty(
        course in "[A-Za-z0-9 ]{1,12}",
        stage in "[A-Za-z0-9 ]{1,12}",
        semester in "[A-Za-z0-9 ]{1,12}",
    ) {
        let ctx = decode_label(&format!("{course}_{stage}_{semester}")).unwrap();
        prop_assert_eq!(ctx.course_name, course);
        prop_assert_eq!(ctx.specialty, "default");
        prop_assert_eq!(ctx.stage_name, stage);
        prop_assert_eq!(ctx.semester_num, semester.chars().last().unwrap().to_string());
    }

    #[test]
    fn four_component_labels_carry_the_specialty(
        course in "[A-Za-z0-9 ]{1,12}",
        stage in "[A-Za-z0-9 ]{1,12}",
        semester in "[A-Za-z0-9 ]{1,12}",
        specialty in "[A-Za-z0-9 ]{0,12}",
    ) {
        let ctx = decode_label(&format!("{course}_{stage}_{semester}_{specialty}")).unwrap();
        prop_assert_eq!(ctx.course_name, course);
        prop_assert_eq!(ctx.specialty, specialty);
        prop_assert_eq!(ctx.stage_name, stage);
        prop_assert_eq!(ctx.semester_num, semester.chars().last().unwrap().to_string());
    }

    #[test]
    fn other_arities_are_rejected(parts in prop::collection::vec("[a-z]{1,4}", 5..8)) {
        let label = parts.join("_");
        let is_arity_error = matches!(decode_label(&label), Err(LabelError::Arity { .. }));
        prop_assert!(is_arity_error);
    }
}

#[test]
fn room_canonicalization_is_idempotent_over_table_values() {
    let tables = load_default_corrections().expect("load corrections");
    let rooms = RoomCanonicalizer::from_tables(&tables);
    for value in tables.rooms.canonical_values() {
        let once = rooms.canonicalize(value);
        assert_eq!(once, value, "canonical value {value:?} is not a fixed point");
        assert_eq!(rooms.canonicalize(&once), once);
    }
}

#[test]
fn default_tables_fix_known_rooms() {
    let tables = load_default_corrections().expect("load corrections");
    let rooms = RoomCanonicalizer::from_tables(&tables);
    assert_eq!(rooms.canonicalize("s. 143"), "lab. 143 CW");
    assert_eq!(rooms.canonicalize("lab 2.6.22 s"), "lab. 2.6.22 BT");
    assert_eq!(
        rooms.canonicalize_cell(Some("8 CW,\n sala 13 CW")),
        vec!["hall 8 CW", "hall 13 CW"]
    );
}

#[test]
fn default_tables_fix_known_subjects() {
    let tables = load_default_corrections().expect("load corrections");
    let subjects = SubjectCanonicalizer::from_tables(&tables);
    assert_eq!(
        subjects.canonicalize("Scientific & Technical Writing"),
        "scientific and technical writing"
    );
    assert_eq!(subjects.canonicalize("Embedded Systems"), "systemy wbudowane");
}

#[test]
fn default_tables_fix_known_teachers() {
    let tables = load_default_corrections().expect("load corrections");
    let teachers = TeacherCanonicalizer::from_tables(&tables);
    let entries = teachers.canonicalize_cell(Some("dr inż. P.Śniatała,Sports Centre PUT\nnan"));
    let pairs: Vec<(&str, &str)> = entries
        .iter()
        .map(|t| (t.title.as_str(), t.full_name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("dr inż.", "Paweł Śniatała"),
            ("department", "Centrum Sportu PP"),
            ("department", ""),
        ]
    );
}

#[test]
fn default_tables_fix_known_groups() {
    let tables = load_default_corrections().expect("load corrections");
    let groups = GroupCanonicalizer::from_tables(&tables);
    assert_eq!(
        groups.canonicalize_cell(Some("L88\nnan")),
        vec!["L8", "L1"]
    );
}
