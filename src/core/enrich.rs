use crate::domain::model::{AdviserDirectory, MajorDirectory, Roster};
use crate::utils::error::{Result, ScheduleError};

/// Fills in each student's department and adviser.
///
/// All lookups are resolved before any student is touched, so a missing
/// department or adviser leaves the roster unchanged.
pub fn populate_student_fields(
    roster: &mut Roster,
    majors: &MajorDirectory,
    advisers: &AdviserDirectory,
) -> Result<()> {
    let mut resolved = Vec::with_capacity(roster.len());

    for student in &roster.students {
        let department = majors.department_of(&student.major).ok_or_else(|| {
            ScheduleError::MissingDepartmentError {
                student: student.name.clone(),
                major: student.major.clone(),
            }
        })?;
        let adviser = advisers.adviser_of(department).ok_or_else(|| {
            ScheduleError::MissingAdviserError {
                department: department.to_string(),
            }
        })?;
        resolved.push((department.to_string(), adviser.to_string()));
    }

    for (student, (department, adviser)) in roster.students.iter_mut().zip(resolved) {
        student.department = department;
        student.adviser = adviser;
    }

    Ok(())
}
