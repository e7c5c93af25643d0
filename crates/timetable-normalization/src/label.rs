//! Decoding of sheet labels into course context.
//!
//! A sheet label packs the course, stage, semester and optional specialty
//! into one `_`-separated string:
//!
//! - `course_stage_semesterN` decodes with specialty `default`
//! - `course_stage_semesterN_specialty` carries its specialty last
//!
//! The semester is the last character of the third component.

use timetable_model::{CourseContext, DEFAULT_SPECIALTY, LabelError};

/// Decode a sheet label.
///
/// Any arity other than 3 or 4 is rejected rather than guessed at.
pub fn decode_label(label: &str) -> Result<CourseContext, LabelError> {
    let components: Vec<&str> = label.split('_').collect();
    let (course, stage, semester_part, specialty) = match components.as_slice() {
        [course, stage, semester] => (*course, *stage, *semester, DEFAULT_SPECIALTY),
        [course, stage, semester, specialty] => (*course, *stage, *semester, *specialty),
        _ => {
            return Err(LabelError::Arity {
                label: label.to_string(),
                found: components.len(),
            });
        }
    };

    let semester = semester_part
        .chars()
        .next_back()
        .ok_or_else(|| LabelError::MissingSemester {
            label: label.to_string(),
        })?;

    Ok(CourseContext::new(
        course,
        specialty,
        stage,
        semester.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_components_use_default_specialty() {
        let ctx = decode_label("Informatyka_I stopień_sem1").unwrap();
        assert_eq!(ctx.course_name, "Informatyka");
        assert_eq!(ctx.specialty, "default");
        assert_eq!(ctx.stage_name, "I stopień");
        assert_eq!(ctx.semester_num, "1");
    }

    #[test]
    fn four_components_carry_specialty() {
        let ctx = decode_label("Informatyka_II stopień_sem2_AI").unwrap();
        assert_eq!(ctx.specialty, "AI");
        assert_eq!(ctx.stage_name, "II stopień");
        assert_eq!(ctx.semester_num, "2");
        assert_eq!(ctx.course_id(), "Informatyka_AI");
    }

    #[test]
    fn semester_takes_last_character_only() {
        let ctx = decode_label("Bio_I_semester12").unwrap();
        assert_eq!(ctx.semester_num, "2");
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = decode_label("A_B").unwrap_err();
        assert_eq!(
            err,
            LabelError::Arity {
                label: "A_B".to_string(),
                found: 2
            }
        );
        assert!(decode_label("A_B_C_D_E").is_err());
        assert!(decode_label("").is_err());
    }

    #[test]
    fn empty_semester_component_is_rejected() {
        assert!(matches!(
            decode_label("A_B_"),
            Err(LabelError::MissingSemester { .. })
        ));
    }
}
