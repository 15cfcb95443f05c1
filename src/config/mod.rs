pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::core::partition::{default_small_major_threshold, DEFAULT_GROUP_SIZE};
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_csv_path, validate_group_settings, validate_path, Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "advising-scheduler")]
    #[command(about = "Assigns students to same-major advising groups and time slots")]
    pub struct CliConfig {
        /// Directory the input and output paths are relative to
        #[arg(long, default_value = "data")]
        pub data_dir: String,

        #[arg(long, default_value = "mock_student_majors.csv")]
        pub student_majors: String,

        #[arg(long, default_value = "mock_major_departments.csv")]
        pub major_departments: String,

        #[arg(long, default_value = "mock_major_advisers.csv")]
        pub department_advisers: String,

        #[arg(long, default_value = "da_schedule.csv")]
        pub schedule: String,

        /// Target group size; groups get this many students or one more
        #[arg(long, default_value_t = DEFAULT_GROUP_SIZE)]
        pub group_size: usize,

        /// Unbalanced majors below this size form a single group [default: 6 for size 3, else the group size]
        #[arg(long)]
        pub small_major_threshold: Option<usize>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log CPU and memory usage per phase")]
        pub monitor: bool,
    }

    impl ConfigProvider for CliConfig {
        fn student_majors_path(&self) -> &str {
            &self.student_majors
        }

        fn major_departments_path(&self) -> &str {
            &self.major_departments
        }

        fn department_advisers_path(&self) -> &str {
            &self.department_advisers
        }

        fn schedule_path(&self) -> &str {
            &self.schedule
        }

        fn group_size(&self) -> usize {
            self.group_size
        }

        fn small_major_threshold(&self) -> usize {
            self.small_major_threshold
                .unwrap_or_else(|| default_small_major_threshold(self.group_size))
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("data_dir", &self.data_dir)?;
            validate_csv_path("student_majors", &self.student_majors)?;
            validate_csv_path("major_departments", &self.major_departments)?;
            validate_csv_path("department_advisers", &self.department_advisers)?;
            validate_csv_path("schedule", &self.schedule)?;
            validate_group_settings(self.group_size, self.small_major_threshold())
        }
    }

}
