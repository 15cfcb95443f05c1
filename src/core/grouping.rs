use crate::core::partition::Partitioner;
use crate::domain::model::{Group, Groupings, MajorDirectory, Roster};
use crate::utils::error::{Result, ScheduleError};

/// Splits every major's students into consecutive groups and files each
/// group under the major's department.
///
/// Majors are visited in first-seen order and students keep input order,
/// so the same roster always yields the same groupings.
pub fn partition_majors(
    roster: &Roster,
    majors: &MajorDirectory,
    partitioner: &Partitioner,
) -> Result<Groupings> {
    let mut groupings = Groupings::new();

    for major in roster.majors() {
        let cohort = roster.cohort(major);
        let department = majors.department_of(major).ok_or_else(|| {
            ScheduleError::MissingDepartmentError {
                student: cohort
                    .first()
                    .map(|s| s.name.clone())
                    .unwrap_or_default(),
                major: major.to_string(),
            }
        })?;

        let sizes = partitioner.partition(cohort.len())?;
        tracing::debug!("{} ({}): {:?}", major, department, sizes);

        let mut rest = cohort.as_slice();
        for size in sizes {
            let (members, tail) = rest.split_at(size);
            let students = members.iter().map(|&s| s.clone()).collect();
            groupings.push(Group::new(department, students));
            rest = tail;
        }
    }

    Ok(groupings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Student;
    use std::collections::HashSet;

    fn roster_of(entries: &[(&str, &str)]) -> Roster {
        let mut roster = Roster::new();
        for (name, major) in entries {
            roster.push(Student::new(*name, *major));
        }
        roster
    }

    #[test]
    fn test_seven_students_split_four_three() {
        let names = ["s1", "s2", "s3", "s4", "s5", "s6", "s7"];
        let roster = roster_of(&names.map(|n| (n, "CS")));
        let mut majors = MajorDirectory::default();
        majors.insert("CS".to_string(), "Engineering".to_string());

        let groupings = partition_majors(&roster, &majors, &Partitioner::default()).unwrap();

        let engineering = groupings.department("Engineering").unwrap();
        let sizes: Vec<usize> = engineering.groups.iter().map(Group::len).collect();
        assert_eq!(sizes, vec![4, 3]);
        assert!(engineering
            .groups
            .iter()
            .all(|g| g.department == "Engineering" && g.single_major));

        let placed: Vec<&str> = engineering
            .groups
            .iter()
            .flat_map(|g| g.students.iter().map(|s| s.name.as_str()))
            .collect();
        assert_eq!(placed, names);
        assert_eq!(placed.iter().collect::<HashSet<_>>().len(), 7);
    }

    #[test]
    fn test_majors_accumulate_per_department() {
        let roster = roster_of(&[
            ("a", "CS"),
            ("b", "Art"),
            ("c", "EE"),
            ("d", "CS"),
            ("e", "EE"),
        ]);
        let mut majors = MajorDirectory::default();
        majors.insert("CS".to_string(), "Engineering".to_string());
        majors.insert("EE".to_string(), "Engineering".to_string());
        majors.insert("Art".to_string(), "Fine Arts".to_string());

        let groupings = partition_majors(&roster, &majors, &Partitioner::default()).unwrap();

        let departments: Vec<&str> = groupings
            .departments()
            .iter()
            .map(|d| d.department.as_str())
            .collect();
        assert_eq!(departments, vec!["Engineering", "Fine Arts"]);

        let engineering = groupings.department("Engineering").unwrap();
        assert_eq!(engineering.groups.len(), 2);
        for group in &engineering.groups {
            let first = &group.students[0].major;
            assert!(group.students.iter().all(|s| &s.major == first));
        }
        assert_eq!(groupings.student_count(), 5);
    }

    #[test]
    fn test_unmapped_major_fails() {
        let roster = roster_of(&[("a", "Dance")]);
        let err =
            partition_majors(&roster, &MajorDirectory::default(), &Partitioner::default())
                .unwrap_err();

        assert!(matches!(err, ScheduleError::MissingDepartmentError { .. }));
    }

    #[test]
    fn test_infeasible_major_aborts_grouping() {
        let entries: Vec<(String, &str)> = (0..14).map(|i| (format!("s{i}"), "CS")).collect();
        let mut roster = Roster::new();
        for (name, major) in &entries {
            roster.push(Student::new(name.as_str(), *major));
        }
        let mut majors = MajorDirectory::default();
        majors.insert("CS".to_string(), "Engineering".to_string());

        let result = partition_majors(&roster, &majors, &Partitioner::new(5).unwrap());

        assert!(matches!(
            result,
            Err(ScheduleError::PartitionInfeasibleError { total: 14, .. })
        ));
    }
}
