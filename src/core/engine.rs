use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a pipeline through extract, transform and load.
pub struct SchedulerEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> SchedulerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Returns the location of the written schedule. Nothing is reported
    /// as written unless every phase succeeded.
    pub fn run(&self) -> Result<String> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        tracing::info!("Starting schedule run");

        tracing::info!("📥 Loading reference tables...");
        let data = self.pipeline.extract()?;
        tracing::info!(
            "Loaded {} students, {} majors, {} advisers",
            data.roster.len(),
            data.majors.major_department.len(),
            data.advisers.department_adviser.len()
        );
        monitor.log_stats("Load");

        tracing::info!("🧮 Grouping students...");
        let schedule = self.pipeline.transform(data)?;
        tracing::info!(
            "Formed {} groups across {} departments",
            schedule.groupings.group_count(),
            schedule.groupings.departments().len()
        );
        monitor.log_stats("Group");

        tracing::info!("💾 Writing schedule...");
        let output_path = self.pipeline.load(schedule)?;
        tracing::info!("Schedule saved to: {}", output_path);
        monitor.log_stats("Write");

        monitor.log_final_stats();
        Ok(output_path)
    }
}
