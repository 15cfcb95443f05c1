use crate::core::partition::Partitioner;
use crate::domain::model::SourceTables;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorPlan {
    pub major: String,
    pub students: usize,
    pub group_sizes: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentPlan {
    pub department: String,
    pub adviser: Option<String>,
    pub majors: Vec<MajorPlan>,
}

impl DepartmentPlan {
    pub fn students(&self) -> usize {
        self.majors.iter().map(|m| m.students).sum()
    }

    pub fn slots(&self) -> usize {
        self.majors.iter().map(|m| m.group_sizes.len()).sum()
    }
}

/// Previews the grouping of every known department without touching
/// any student. Departments are sorted by name; majors keep table order.
pub fn plan_departments(
    data: &SourceTables,
    partitioner: &Partitioner,
) -> Result<Vec<DepartmentPlan>> {
    let mut departments: Vec<&String> = data.majors.department_majors.keys().collect();
    departments.sort();

    departments
        .into_iter()
        .map(|department| -> Result<DepartmentPlan> {
            let majors = data
                .majors
                .majors_in(department)
                .iter()
                .map(|major| -> Result<MajorPlan> {
                    let students = data.roster.cohort(major).len();
                    Ok(MajorPlan {
                        major: major.clone(),
                        students,
                        group_sizes: partitioner.partition(students)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(DepartmentPlan {
                department: department.clone(),
                adviser: data.advisers.adviser_of(department).map(str::to_string),
                majors,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Student;

    #[test]
    fn test_plan_lists_every_department() {
        let mut data = SourceTables::default();
        for (i, major) in ["CS"; 7].iter().enumerate() {
            data.roster.push(Student::new(format!("s{i}"), *major));
        }
        data.majors.insert("CS".to_string(), "Engineering".to_string());
        data.majors.insert("EE".to_string(), "Engineering".to_string());
        data.majors.insert("Art".to_string(), "Fine Arts".to_string());
        data.advisers
            .insert("Engineering".to_string(), "Dr. Y".to_string());

        let plan = plan_departments(&data, &Partitioner::default()).unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].department, "Engineering");
        assert_eq!(plan[0].adviser.as_deref(), Some("Dr. Y"));
        assert_eq!(plan[0].majors[0].group_sizes, vec![4, 3]);
        assert!(plan[0].majors[1].group_sizes.is_empty());
        assert_eq!(plan[0].students(), 7);
        assert_eq!(plan[0].slots(), 2);

        assert_eq!(plan[1].department, "Fine Arts");
        assert_eq!(plan[1].adviser, None);
        assert_eq!(plan[1].students(), 0);
    }

    #[test]
    fn test_plan_counts_repeated_major_once() {
        let mut data = SourceTables::default();
        for i in 0..4 {
            data.roster.push(Student::new(format!("s{i}"), "CS"));
        }
        data.majors.insert("CS".to_string(), "Engineering".to_string());
        data.majors.insert("CS".to_string(), "Engineering".to_string());

        let plan = plan_departments(&data, &Partitioner::default()).unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].majors.len(), 1);
        assert_eq!(plan[0].students(), 4);
        assert_eq!(plan[0].slots(), 1);
    }
}
