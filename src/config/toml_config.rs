use crate::core::partition::{default_small_major_threshold, DEFAULT_GROUP_SIZE};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ScheduleError};
use crate::utils::validation::{validate_csv_path, validate_group_settings, validate_path, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("environment variable pattern is valid")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub scheduler: SchedulerInfo,
    pub input: InputConfig,
    #[serde(default)]
    pub grouping: GroupingConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub data_dir: Option<String>,
    pub student_majors: String,
    pub major_departments: String,
    pub department_advisers: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupingConfig {
    pub group_size: Option<usize>,
    pub small_major_threshold: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub schedule: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ScheduleError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration text after expanding `${VAR}` references.
    /// Unset variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| ScheduleError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn data_dir(&self) -> &str {
        self.input.data_dir.as_deref().unwrap_or(".")
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().is_some_and(|m| m.enabled)
    }

    /// Applies command-line grouping overrides. A new group size without
    /// an explicit threshold drops the file's threshold so the default for
    /// that size applies.
    pub fn override_grouping(&mut self, group_size: Option<usize>, threshold: Option<usize>) {
        if let Some(group_size) = group_size {
            self.grouping.group_size = Some(group_size);
            self.grouping.small_major_threshold = threshold;
        } else if threshold.is_some() {
            self.grouping.small_major_threshold = threshold;
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn student_majors_path(&self) -> &str {
        &self.input.student_majors
    }

    fn major_departments_path(&self) -> &str {
        &self.input.major_departments
    }

    fn department_advisers_path(&self) -> &str {
        &self.input.department_advisers
    }

    fn schedule_path(&self) -> &str {
        &self.output.schedule
    }

    fn group_size(&self) -> usize {
        self.grouping.group_size.unwrap_or(DEFAULT_GROUP_SIZE)
    }

    fn small_major_threshold(&self) -> usize {
        self.grouping
            .small_major_threshold
            .unwrap_or_else(|| default_small_major_threshold(self.group_size()))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.data_dir", self.data_dir())?;
        validate_csv_path("input.student_majors", &self.input.student_majors)?;
        validate_csv_path("input.major_departments", &self.input.major_departments)?;
        validate_csv_path("input.department_advisers", &self.input.department_advisers)?;
        validate_csv_path("output.schedule", &self.output.schedule)?;
        validate_group_settings(self.group_size(), self.small_major_threshold())
    }
}
