use crate::domain::model::{AdviserDirectory, MajorDirectory, Roster, Student};
use crate::utils::error::{Result, ScheduleError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads `(first, second)` column pairs from a headerless CSV table.
///
/// Scanning ends at the first blank line or the first row whose first field
/// is empty. A row with fewer than two fields is a
/// [`ScheduleError::MalformedRecordError`]. Columns beyond the second are
/// ignored.
pub fn read_pairs(table: &str, data: &[u8]) -> Result<Vec<(String, String)>> {
    let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;

        let start = record.position().map_or(0, |p| p.byte() as usize);
        if follows_blank_line(body, start) || record.get(0).map_or(true, str::is_empty) {
            tracing::debug!("End of {} table after {} rows", table, rows.len());
            break;
        }

        match (record.get(0), record.get(1)) {
            (Some(first), Some(second)) => rows.push((first.to_string(), second.to_string())),
            _ => {
                return Err(ScheduleError::MalformedRecordError {
                    table: table.to_string(),
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    fields: record.len(),
                })
            }
        }
    }

    Ok(rows)
}

/// The csv reader skips empty lines, so look at the raw bytes where the
/// record's read began. A `\n` there completing the previous `\r\n` is not
/// a blank line.
fn follows_blank_line(body: &[u8], start: usize) -> bool {
    let mut rest = body.get(start..).unwrap_or_default();
    if start > 0 && body.get(start - 1) == Some(&b'\r') {
        rest = rest.strip_prefix(b"\n").unwrap_or(rest);
    }
    matches!(rest.first(), Some(b'\r' | b'\n'))
}

/// Student/major table: `student name, major`.
pub fn read_student_majors(data: &[u8]) -> Result<Roster> {
    let mut roster = Roster::new();
    for (name, major) in read_pairs("student/major", data)? {
        roster.push(Student::new(name, major));
    }
    tracing::debug!(
        "Loaded {} students across {} majors",
        roster.len(),
        roster.majors().count()
    );
    Ok(roster)
}

/// Major/department table: `major, department`.
pub fn read_major_departments(data: &[u8]) -> Result<MajorDirectory> {
    let mut majors = MajorDirectory::default();
    for (major, department) in read_pairs("major/department", data)? {
        majors.insert(major, department);
    }
    tracing::debug!(
        "Loaded {} majors in {} departments",
        majors.major_department.len(),
        majors.department_majors.len()
    );
    Ok(majors)
}

/// Department/adviser table. The legacy layout lists the adviser first:
/// `adviser, department`.
pub fn read_department_advisers(data: &[u8]) -> Result<AdviserDirectory> {
    let mut advisers = AdviserDirectory::default();
    for (adviser, department) in read_pairs("department/adviser", data)? {
        advisers.insert(department, adviser);
    }
    tracing::debug!(
        "Loaded {} department advisers",
        advisers.department_adviser.len()
    );
    Ok(advisers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_pairs_stops_at_empty_first_field() {
        let data = b"Ana,Math\nBen,Art\n,\nCy,History\n";
        let rows = read_pairs("student/major", data).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], ("Ben".to_string(), "Art".to_string()));
    }

    #[test]
    fn test_read_pairs_stops_at_blank_line() {
        let rows = read_pairs("student/major", b"Ana,Art\n\nBen,Art\n").unwrap();
        assert_eq!(rows, vec![("Ana".to_string(), "Art".to_string())]);

        let rows = read_pairs("student/major", b"Ana,Art\r\n\r\nBen,Art\r\n").unwrap();
        assert_eq!(rows.len(), 1);

        assert!(read_pairs("student/major", b"\nAna,Art\n").unwrap().is_empty());
    }

    #[test]
    fn test_read_pairs_crlf_and_quoted_newlines() {
        let rows = read_pairs("student/major", b"Ana,Art\r\nBen,Art\r\n").unwrap();
        assert_eq!(rows.len(), 2);

        let rows = read_pairs("student/major", b"\"Ana\n\nLee\",Art\nBen,Art\n").unwrap();
        assert_eq!(rows[0].0, "Ana\n\nLee");
        assert_eq!(rows[1].0, "Ben");
    }

    #[test]
    fn test_read_pairs_strips_byte_order_mark() {
        let data = "\u{feff}Ana,Math\nBen,Art\n".as_bytes();
        let rows = read_pairs("student/major", data).unwrap();

        assert_eq!(rows[0].0, "Ana");
    }

    #[test]
    fn test_read_pairs_rejects_single_field_row() {
        let data = b"Ana,Math\nBen\nCy,Art\n";
        let err = read_pairs("student/major", data).unwrap_err();

        match err {
            ScheduleError::MalformedRecordError {
                table,
                line,
                fields,
            } => {
                assert_eq!(table, "student/major");
                assert_eq!(line, 2);
                assert_eq!(fields, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_pairs_ignores_extra_columns() {
        let data = b"Ana,Math,senior\n";
        let rows = read_pairs("student/major", data).unwrap();

        assert_eq!(rows, vec![("Ana".to_string(), "Math".to_string())]);
    }

    #[test]
    fn test_read_pairs_empty_input() {
        assert!(read_pairs("student/major", b"").unwrap().is_empty());
    }

    #[test]
    fn test_read_department_advisers_swaps_columns() {
        let data = b"Prof. X,Fine Arts\nDr. Y,Engineering\n";
        let advisers = read_department_advisers(data).unwrap();

        assert_eq!(advisers.adviser_of("Fine Arts"), Some("Prof. X"));
        assert_eq!(advisers.adviser_of("Engineering"), Some("Dr. Y"));
        assert_eq!(advisers.adviser_of("Prof. X"), None);
    }

    #[test]
    fn test_read_student_majors_groups_by_major() {
        let data = b"Ana,CS\nBen,Art\nCy,CS\n";
        let roster = read_student_majors(data).unwrap();

        assert_eq!(roster.len(), 3);
        let cs: Vec<&str> = roster
            .cohort("CS")
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(cs, vec!["Ana", "Cy"]);
        assert!(roster.students.iter().all(|s| s.department.is_empty()));
    }

    #[test]
    fn test_read_major_departments_builds_inverse() {
        let data = b"CS,Engineering\nEE,Engineering\nArt,Fine Arts\n";
        let majors = read_major_departments(data).unwrap();

        assert_eq!(majors.department_of("EE"), Some("Engineering"));
        assert_eq!(majors.majors_in("Engineering"), ["CS", "EE"]);
    }
}
