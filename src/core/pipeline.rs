use crate::core::enrich::populate_student_fields;
use crate::core::grouping::partition_majors;
use crate::core::loader::{read_department_advisers, read_major_departments, read_student_majors};
use crate::core::partition::Partitioner;
use crate::core::slots::assign_slots;
use crate::core::writer::{render_csv, schedule_rows};
use crate::core::{ConfigProvider, Pipeline, Schedule, SourceTables, Storage};
use crate::utils::error::Result;

/// Reads the three reference tables from storage, groups and slots the
/// students, and writes the schedule back to storage.
pub struct SchedulePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SchedulePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn partitioner(&self) -> Result<Partitioner> {
        Partitioner::with_threshold(self.config.group_size(), self.config.small_major_threshold())
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SchedulePipeline<S, C> {
    fn extract(&self) -> Result<SourceTables> {
        tracing::debug!("Reading students from {}", self.config.student_majors_path());
        let roster =
            read_student_majors(&self.storage.read_file(self.config.student_majors_path())?)?;

        tracing::debug!("Reading majors from {}", self.config.major_departments_path());
        let majors =
            read_major_departments(&self.storage.read_file(self.config.major_departments_path())?)?;

        tracing::debug!("Reading advisers from {}", self.config.department_advisers_path());
        let advisers = read_department_advisers(
            &self.storage.read_file(self.config.department_advisers_path())?,
        )?;

        Ok(SourceTables {
            roster,
            majors,
            advisers,
        })
    }

    fn transform(&self, data: SourceTables) -> Result<Schedule> {
        let partitioner = self.partitioner()?;
        let SourceTables {
            mut roster,
            majors,
            advisers,
        } = data;

        populate_student_fields(&mut roster, &majors, &advisers)?;

        let mut groupings = partition_majors(&roster, &majors, &partitioner)?;
        assign_slots(&mut groupings);

        Ok(Schedule {
            groupings,
            advisers,
        })
    }

    fn load(&self, schedule: Schedule) -> Result<String> {
        let rows = schedule_rows(&schedule)?;
        let data = render_csv(&rows)?;

        tracing::debug!("Writing {} rows ({} bytes)", rows.len(), data.len());
        self.storage.write_file(self.config.schedule_path(), &data)?;

        Ok(self.storage.location(self.config.schedule_path()))
    }
}
