use std::fs;
use std::path::Path;

use timetable_standards::{CorrectionRegistry, StandardsError, load_default_corrections, standards_root};

fn copy_standards(dest: &Path) {
    let src = standards_root();
    fs::create_dir_all(dest.join("corrections")).expect("create corrections dir");
    fs::copy(src.join("manifest.toml"), dest.join("manifest.toml")).expect("copy manifest");
    for entry in fs::read_dir(src.join("corrections")).expect("read corrections") {
        let entry = entry.expect("dir entry");
        fs::copy(entry.path(), dest.join("corrections").join(entry.file_name()))
            .expect("copy table");
    }
}

#[test]
fn loads_default_tables() {
    let tables = load_default_corrections().expect("load corrections");
    assert_eq!(tables.rooms.len(), 53);
    assert_eq!(tables.subjects.len(), 17);
    assert_eq!(tables.teacher_names.len(), 10);
    assert_eq!(tables.teacher_prefixes.len(), 12);
    assert_eq!(tables.teacher_prefixes[0], "prof.dr hab.inż.");
    assert_eq!(tables.teacher_prefixes[11], "prof. PP");
    assert_eq!(tables.rooms.get("8 CW"), Some("hall 8 CW"));
    assert_eq!(
        tables.teacher_overrides.get("Bogdan Wyrwas"),
        Some("dr hab. inż.")
    );
    assert_eq!(tables.groups.apply("L88\nnan"), "L8\nL1");
}

#[test]
fn summary_reports_pins_and_sizes() {
    let (_, summary) = CorrectionRegistry::verify_and_load(&standards_root()).expect("verify");
    assert_eq!(summary.file_count, 8);
    assert_eq!(summary.manifest_pins.dataset, "2023-2024");
    assert_eq!(summary.entries.get("teacher_artifacts"), Some(&3));
}

#[test]
fn tampered_table_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    copy_standards(dir.path());
    let rooms = dir.path().join("corrections/rooms.csv");
    let mut contents = fs::read_to_string(&rooms).expect("read rooms");
    contents.push_str("hall 99,hall 99 CW\n");
    fs::write(&rooms, contents).expect("write rooms");

    let err = CorrectionRegistry::verify_and_load(dir.path()).unwrap_err();
    assert!(
        matches!(err, StandardsError::Sha256Mismatch { .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn unlisted_file_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    copy_standards(dir.path());
    fs::write(dir.path().join("corrections/extra.csv"), "raw,canonical\n").expect("write extra");

    let err = CorrectionRegistry::verify_and_load(dir.path()).unwrap_err();
    assert!(matches!(err, StandardsError::UnexpectedFile { .. }));
}

#[test]
fn missing_role_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    copy_standards(dir.path());
    let manifest_path = dir.path().join("manifest.toml");
    let manifest = fs::read_to_string(&manifest_path).expect("read manifest");
    let trimmed: String = manifest
        .split("[[files]]")
        .filter(|block| !block.contains("role = \"teacher_titles\""))
        .collect::<Vec<_>>()
        .join("[[files]]");
    fs::write(&manifest_path, trimmed).expect("write manifest");
    fs::remove_file(dir.path().join("corrections/teacher_titles.csv")).expect("remove table");

    let err = CorrectionRegistry::verify_and_load(dir.path()).unwrap_err();
    match err {
        StandardsError::MissingRole { role } => assert_eq!(role, "teacher_titles"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_key_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    copy_standards(dir.path());
    let subjects = dir.path().join("corrections/subjects.csv");
    let mut contents = fs::read_to_string(&subjects).expect("read subjects");
    contents.push_str("jezyk angielski,język angielski\n");
    fs::write(&subjects, &contents).expect("write subjects");

    // Re-pin the edited table so only the duplicate trips.
    let sha = timetable_standards::hash::sha256_hex(contents.as_bytes());
    let manifest_path = dir.path().join("manifest.toml");
    let manifest = fs::read_to_string(&manifest_path).expect("read manifest");
    let manifest = manifest.replace(
        "43bb1c25a9f28e841d4a92f8b51cc8e5dbe93ba717fb6bf7a7672f69ec4fe8a2",
        &sha,
    );
    fs::write(&manifest_path, manifest).expect("write manifest");

    let err = CorrectionRegistry::verify_and_load(dir.path()).unwrap_err();
    assert!(matches!(err, StandardsError::DuplicateEntry { .. }));
}
