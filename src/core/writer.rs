use crate::domain::model::{Schedule, ScheduleRow};
use crate::utils::error::{Result, ScheduleError};

/// Flattens the schedule to one row per student: departments, then
/// groups, then students, in the order they were built.
pub fn schedule_rows(schedule: &Schedule) -> Result<Vec<ScheduleRow>> {
    let mut rows = Vec::with_capacity(schedule.groupings.student_count());

    for department in schedule.groupings.departments() {
        let adviser = schedule
            .advisers
            .adviser_of(&department.department)
            .ok_or_else(|| ScheduleError::MissingAdviserError {
                department: department.department.clone(),
            })?;

        for group in &department.groups {
            let time_slot =
                group
                    .time_slot
                    .ok_or_else(|| ScheduleError::UnassignedSlotError {
                        department: department.department.clone(),
                    })?;

            for student in &group.students {
                rows.push(ScheduleRow {
                    adviser: adviser.to_string(),
                    time_slot,
                    student: student.name.clone(),
                    major: student.major.clone(),
                });
            }
        }
    }

    Ok(rows)
}

/// Serializes rows as headerless, comma-separated, `\n`-terminated CSV.
pub fn render_csv(rows: &[ScheduleRow]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| ScheduleError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AdviserDirectory, Group, Groupings, Student};

    fn slotted_schedule() -> Schedule {
        let mut groupings = Groupings::new();
        let mut art = Group::new(
            "Fine Arts",
            vec![Student::new("Ana", "Art"), Student::new("Ben", "Art")],
        );
        art.time_slot = Some(1);
        groupings.push(art);

        let mut advisers = AdviserDirectory::default();
        advisers.insert("Fine Arts".to_string(), "Prof. X".to_string());

        Schedule {
            groupings,
            advisers,
        }
    }

    #[test]
    fn test_render_schedule() {
        let rows = schedule_rows(&slotted_schedule()).unwrap();
        let csv = String::from_utf8(render_csv(&rows).unwrap()).unwrap();

        assert_eq!(csv, "Prof. X,1,Ana,Art\nProf. X,1,Ben,Art\n");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let rows = vec![ScheduleRow {
            adviser: "Smith, J.".to_string(),
            time_slot: 2,
            student: "Lee".to_string(),
            major: "Art".to_string(),
        }];
        let csv = String::from_utf8(render_csv(&rows).unwrap()).unwrap();

        assert_eq!(csv, "\"Smith, J.\",2,Lee,Art\n");
    }

    #[test]
    fn test_unslotted_group_is_rejected() {
        let mut schedule = slotted_schedule();
        schedule.groupings.departments_mut()[0].groups[0].time_slot = None;

        assert!(matches!(
            schedule_rows(&schedule),
            Err(ScheduleError::UnassignedSlotError { .. })
        ));
    }

    #[test]
    fn test_missing_adviser_is_rejected() {
        let mut schedule = slotted_schedule();
        schedule.advisers = AdviserDirectory::default();

        assert!(matches!(
            schedule_rows(&schedule),
            Err(ScheduleError::MissingAdviserError { .. })
        ));
    }
}
