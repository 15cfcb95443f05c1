use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub major: String,
    pub department: String,
    pub adviser: String,
    pub time_slot: Option<u32>,
}

impl Student {
    /// A freshly loaded student: only name and major are known.
    pub fn new(name: impl Into<String>, major: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            major: major.into(),
            department: String::new(),
            adviser: String::new(),
            time_slot: None,
        }
    }
}

/// Same-major students meeting their department's adviser together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub students: Vec<Student>,
    pub single_major: bool,
    pub department: String,
    pub time_slot: Option<u32>,
}

impl Group {
    pub fn new(department: impl Into<String>, students: Vec<Student>) -> Self {
        Self {
            students,
            single_major: true,
            department: department.into(),
            time_slot: None,
        }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Students in input order, indexed by major in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub students: Vec<Student>,
    majors: Vec<String>,
    members: HashMap<String, Vec<usize>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, student: Student) {
        let idx = self.students.len();
        match self.members.get_mut(&student.major) {
            Some(members) => members.push(idx),
            None => {
                self.majors.push(student.major.clone());
                self.members.insert(student.major.clone(), vec![idx]);
            }
        }
        self.students.push(student);
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn majors(&self) -> impl Iterator<Item = &str> {
        self.majors.iter().map(String::as_str)
    }

    /// Students of one major, in input order.
    pub fn cohort(&self, major: &str) -> Vec<&Student> {
        self.members
            .get(major)
            .map(|idxs| idxs.iter().map(|&i| &self.students[i]).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MajorDirectory {
    pub major_department: HashMap<String, String>,
    pub department_majors: HashMap<String, Vec<String>>,
}

impl MajorDirectory {
    /// A major listed again moves to its latest department.
    pub fn insert(&mut self, major: String, department: String) {
        if let Some(previous) = self.major_department.get(&major) {
            if let Some(majors) = self.department_majors.get_mut(previous) {
                majors.retain(|m| m != &major);
                if majors.is_empty() {
                    self.department_majors.remove(previous);
                }
            }
        }
        self.department_majors
            .entry(department.clone())
            .or_default()
            .push(major.clone());
        self.major_department.insert(major, department);
    }

    pub fn department_of(&self, major: &str) -> Option<&str> {
        self.major_department.get(major).map(String::as_str)
    }

    pub fn majors_in(&self, department: &str) -> &[String] {
        self.department_majors
            .get(department)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdviserDirectory {
    pub department_adviser: HashMap<String, String>,
}

impl AdviserDirectory {
    pub fn insert(&mut self, department: String, adviser: String) {
        self.department_adviser.insert(department, adviser);
    }

    pub fn adviser_of(&self, department: &str) -> Option<&str> {
        self.department_adviser.get(department).map(String::as_str)
    }
}

/// Everything the loader reads from the three input tables.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub roster: Roster,
    pub majors: MajorDirectory,
    pub advisers: AdviserDirectory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentGroups {
    pub department: String,
    pub groups: Vec<Group>,
}

/// Groups per department, departments in the order their first group was made.
#[derive(Debug, Clone, Default)]
pub struct Groupings {
    departments: Vec<DepartmentGroups>,
    index: HashMap<String, usize>,
}

impl Groupings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, group: Group) {
        match self.index.get(&group.department) {
            Some(&i) => self.departments[i].groups.push(group),
            None => {
                self.index
                    .insert(group.department.clone(), self.departments.len());
                self.departments.push(DepartmentGroups {
                    department: group.department.clone(),
                    groups: vec![group],
                });
            }
        }
    }

    pub fn departments(&self) -> &[DepartmentGroups] {
        &self.departments
    }

    pub fn departments_mut(&mut self) -> &mut [DepartmentGroups] {
        &mut self.departments
    }

    pub fn department(&self, name: &str) -> Option<&DepartmentGroups> {
        self.index.get(name).map(|&i| &self.departments[i])
    }

    pub fn group_count(&self) -> usize {
        self.departments.iter().map(|d| d.groups.len()).sum()
    }

    pub fn student_count(&self) -> usize {
        self.departments
            .iter()
            .flat_map(|d| d.groups.iter())
            .map(Group::len)
            .sum()
    }
}

/// Grouped, slotted students ready to be written.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub groupings: Groupings,
    pub advisers: AdviserDirectory,
}

/// One output row: adviser, time slot, student, major. No header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub adviser: String,
    pub time_slot: u32,
    pub student: String,
    pub major: String,
}
