use crate::utils::error::{Result, ScheduleError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const MAX_GROUP_SIZE: usize = 100;

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

/// Paths must end in `.csv`, compared case-insensitively.
pub fn validate_csv_path(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(()),
        Some(ext) => Err(invalid(
            field_name,
            path,
            &format!("Unsupported file extension: {}. Expected csv", ext),
        )),
        None => Err(invalid(
            field_name,
            path,
            "File has no extension or invalid filename",
        )),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            &value.to_string(),
            &format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_group_settings(group_size: usize, small_major_threshold: usize) -> Result<()> {
    validate_range("group_size", group_size, 1, MAX_GROUP_SIZE)?;

    if small_major_threshold < group_size {
        return Err(invalid(
            "small_major_threshold",
            &small_major_threshold.to_string(),
            &format!("Value must be at least the group size ({})", group_size),
        ));
    }
    Ok(())
}

fn invalid(field_name: &str, value: &str, reason: &str) -> ScheduleError {
    ScheduleError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_csv_path() {
        assert!(validate_csv_path("schedule", "data/da_schedule.csv").is_ok());
        assert!(validate_csv_path("schedule", "DATA.CSV").is_ok());
        assert!(validate_csv_path("schedule", "").is_err());
        assert!(validate_csv_path("schedule", "schedule.txt").is_err());
        assert!(validate_csv_path("schedule", "schedule").is_err());
    }

    #[test]
    fn test_validate_group_settings() {
        assert!(validate_group_settings(3, 6).is_ok());
        assert!(validate_group_settings(3, 3).is_ok());
        assert!(validate_group_settings(0, 6).is_err());
        assert!(validate_group_settings(MAX_GROUP_SIZE + 1, 500).is_err());
        assert!(validate_group_settings(4, 2).is_err());
    }
}
