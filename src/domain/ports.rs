use crate::core::partition::default_small_major_threshold;
use crate::domain::model::{Schedule, SourceTables};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;

    /// Human-readable location of `path`, used when reporting output.
    fn location(&self, path: &str) -> String {
        path.to_string()
    }
}

pub trait ConfigProvider {
    fn student_majors_path(&self) -> &str;
    fn major_departments_path(&self) -> &str;
    fn department_advisers_path(&self) -> &str;
    fn schedule_path(&self) -> &str;
    fn group_size(&self) -> usize;

    /// Majors that cannot be balanced into `G`/`G + 1` groups form one
    /// group when they have fewer students than this.
    fn small_major_threshold(&self) -> usize {
        default_small_major_threshold(self.group_size())
    }
}

pub trait Pipeline {
    fn extract(&self) -> Result<SourceTables>;
    fn transform(&self, data: SourceTables) -> Result<Schedule>;
    fn load(&self, schedule: Schedule) -> Result<String>;
}
