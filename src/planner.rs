//! End-to-end planning pass: collect, prioritize, pack, write.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Config;
use crate::dispatching::Prioritizer;
use crate::input::{InputProvider, TaskCollector};
use crate::models::{Schedule, Task};
use crate::report::ScheduleWriter;
use crate::scheduler::{DayPacker, ScheduleSummary};
use crate::Result;

/// Prioritizer, packer, and output file configured from one [`Config`].
#[derive(Debug, Clone)]
pub struct Planner {
    prioritizer: Prioritizer,
    packer: DayPacker,
    output: PathBuf,
}

impl Planner {
    /// Builds a planner from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            prioritizer: Prioritizer::standard(config.ordering.due_date),
            packer: DayPacker::new().with_window(config.workday),
            output: config.output.path.clone(),
        }
    }

    /// Schedule file written by [`Planner::run`].
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Orders and packs tasks. Never fails; misfits become rejections.
    pub fn plan(&self, tasks: &[Task]) -> Schedule {
        self.packer.schedule(tasks, &self.prioritizer)
    }

    /// Runs one full pass against `provider`, writing to the configured file.
    ///
    /// Rejection warnings are shown through the provider before the
    /// schedule itself is written. Only running out of input or failing
    /// to write the file is an error.
    pub fn run<P: InputProvider>(&self, provider: &mut P) -> Result<Schedule> {
        let tasks = TaskCollector::new(&mut *provider).collect()?;

        let schedule = self.plan(&tasks);
        for rejection in &schedule.rejections {
            provider.say(&rejection.message());
        }

        let mut writer = ScheduleWriter::create(&self.output)?;
        let written = writer.write_schedule(&schedule)?;

        let summary = ScheduleSummary::calculate(&schedule, self.packer.window());
        for day in &summary.days {
            info!(
                day = %day.day,
                tasks = day.tasks_scheduled,
                worked_hours = day.worked_hours,
                break_hours = day.break_hours,
                utilization = day.utilization,
                "day planned"
            );
        }
        if summary.rejected > 0 {
            warn!(rejected = summary.rejected, "some tasks were not scheduled");
        }
        info!(
            written,
            avg_utilization = summary.avg_utilization(),
            path = %self.output.display(),
            "schedule saved"
        );

        Ok(schedule)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
