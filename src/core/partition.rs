use crate::utils::error::{Result, ScheduleError};

pub const DEFAULT_GROUP_SIZE: usize = 3;

/// Below six students the default group size cannot always balance
/// (5 is neither 3+3 nor a single 3 or 4), so such majors meet as one
/// group. Any other group size only tolerates a lone group smaller
/// than `G`.
pub fn default_small_major_threshold(group_size: usize) -> usize {
    if group_size == DEFAULT_GROUP_SIZE {
        DEFAULT_GROUP_SIZE * 2
    } else {
        group_size
    }
}

/// Splits a head count into group sizes of `G` or `G + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioner {
    group_size: usize,
    small_major_threshold: usize,
}

impl Partitioner {
    /// Uses [`default_small_major_threshold`] for `group_size`.
    pub fn new(group_size: usize) -> Result<Self> {
        Self::with_threshold(group_size, default_small_major_threshold(group_size))
    }

    pub fn with_threshold(group_size: usize, small_major_threshold: usize) -> Result<Self> {
        if group_size == 0 {
            return Err(ScheduleError::InvalidConfigValueError {
                field: "group_size".to_string(),
                value: group_size.to_string(),
                reason: "Group size must be positive".to_string(),
            });
        }
        Ok(Self {
            group_size,
            small_major_threshold,
        })
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    pub fn small_major_threshold(&self) -> usize {
        self.small_major_threshold
    }

    /// Returns group sizes summing to `total`, larger groups first.
    ///
    /// Every group has `G` or `G + 1` members, which needs at least as
    /// many whole groups as leftover students. When that fails, a count
    /// below the small-major threshold stays together as one group and
    /// anything larger is an error.
    pub fn partition(&self, total: usize) -> Result<Vec<usize>> {
        if total == 0 {
            return Ok(Vec::new());
        }

        let groups = total / self.group_size;
        let remainder = total % self.group_size;

        if remainder > groups {
            if total < self.small_major_threshold {
                return Ok(vec![total]);
            }
            return Err(ScheduleError::PartitionInfeasibleError {
                total,
                group_size: self.group_size,
            });
        }

        let mut sizes = vec![self.group_size; groups];
        for size in sizes.iter_mut().take(remainder) {
            *size += 1;
        }
        Ok(sizes)
    }
}

impl Default for Partitioner {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            small_major_threshold: default_small_major_threshold(DEFAULT_GROUP_SIZE),
        }
    }
}
