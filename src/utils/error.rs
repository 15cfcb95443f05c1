use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record in {table} table at line {line}: expected at least 2 fields, found {fields}")]
    MalformedRecordError {
        table: String,
        line: u64,
        fields: usize,
    },

    #[error("No department known for major '{major}' (student '{student}')")]
    MissingDepartmentError { student: String, major: String },

    #[error("No adviser known for department '{department}'")]
    MissingAdviserError { department: String },

    #[error("Cannot partition {total} students into groups of {group_size} or {}", .group_size + 1)]
    PartitionInfeasibleError { total: usize, group_size: usize },

    #[error("Groups in department '{department}' have no time slot")]
    UnassignedSlotError { department: String },

    #[error("Failed to write schedule to {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Lookup,
    Partition,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScheduleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScheduleError::CsvError(_)
            | ScheduleError::IoError(_)
            | ScheduleError::ReadError { .. }
            | ScheduleError::MalformedRecordError { .. } => ErrorCategory::Data,
            ScheduleError::MissingDepartmentError { .. }
            | ScheduleError::MissingAdviserError { .. } => ErrorCategory::Lookup,
            ScheduleError::PartitionInfeasibleError { .. }
            | ScheduleError::UnassignedSlotError { .. } => ErrorCategory::Partition,
            ScheduleError::WriteError { .. } => ErrorCategory::Output,
            ScheduleError::ConfigValidationError { .. }
            | ScheduleError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Every failure aborts the run; severity only picks the exit code.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Lookup | ErrorCategory::Partition => {
                ErrorSeverity::High
            }
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScheduleError::CsvError(_) => {
                "Check that the input files are comma-separated text".to_string()
            }
            ScheduleError::MalformedRecordError { table, .. } => format!(
                "Every row of the {} table needs two columns; end the data with an empty row",
                table
            ),
            ScheduleError::MissingDepartmentError { major, .. } => format!(
                "Add a row for '{}' to the major/department table",
                major
            ),
            ScheduleError::MissingAdviserError { department } => format!(
                "Add an adviser for '{}' to the department/adviser table",
                department
            ),
            ScheduleError::PartitionInfeasibleError { .. } => {
                "Choose a different group size or raise the small-major threshold".to_string()
            }
            ScheduleError::UnassignedSlotError { .. } => {
                "Run slot assignment before writing the schedule".to_string()
            }
            ScheduleError::IoError(_) | ScheduleError::ReadError { .. } => {
                "Check that the files exist and are readable".to_string()
            }
            ScheduleError::WriteError { .. } => {
                "Check free disk space and write permission on the output directory".to_string()
            }
            ScheduleError::ConfigValidationError { .. }
            | ScheduleError::InvalidConfigValueError { .. } => {
                "Review the command-line arguments or the configuration file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Data => format!("Input data could not be read: {}", self),
            ErrorCategory::Lookup => format!("Reference data is inconsistent: {}", self),
            ErrorCategory::Partition => format!("Students could not be grouped: {}", self),
            ErrorCategory::Output => format!("Schedule was not written: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_differ_by_category() {
        let lookup = ScheduleError::MissingAdviserError {
            department: "Physics".to_string(),
        };
        let config = ScheduleError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "expected a table".to_string(),
        };
        let output = ScheduleError::WriteError {
            path: "out.csv".to_string(),
            source: std::io::Error::other("disk full"),
        };

        assert_eq!(lookup.category(), ErrorCategory::Lookup);
        assert_eq!(lookup.exit_code(), 1);
        assert_eq!(config.exit_code(), 2);
        assert_eq!(output.exit_code(), 3);
    }

    #[test]
    fn test_partition_error_message() {
        let err = ScheduleError::PartitionInfeasibleError {
            total: 14,
            group_size: 5,
        };
        assert_eq!(
            err.to_string(),
            "Cannot partition 14 students into groups of 5 or 6"
        );
    }
}
