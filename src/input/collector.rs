//! Interactive task collection.
//!
//! Each field is asked for until the answer validates; invalid answers
//! get a hint and the same prompt again, with no retry limit. Only an
//! input source that runs dry stops collection.

use tracing::debug;

use super::InputProvider;
use crate::error::InputError;
use crate::models::Task;
use crate::validation::{self, ValidationError};

const PROMPT_COUNT: &str = "Enter the number of tasks: ";
const PROMPT_NAME: &str = "Enter task name: ";
const PROMPT_TIME: &str = "Enter required time(hours): ";
const PROMPT_PRIORITY: &str = "Enter priority (1-5, 1 being highest): ";
const PROMPT_DUE: &str = "Enter due date (DD-MM-YYYY HH:MM AM/PM): ";
const PROMPT_TARGET: &str = "Enter desired completion day (DD-MM-YYYY): ";

const RETRY_COUNT: &str = "Please enter a valid number of tasks.";
const RETRY_NAME: &str = "Please enter a valid task name.";
const RETRY_TIME: &str = "Please enter a valid required time.";
const RETRY_PRIORITY: &str = "Please enter a valid priority.";
const RETRY_DUE: &str = "Please enter a valid due date in the format DD-MM-YYYY HH:MM AM/PM.";
const RETRY_TARGET: &str = "Please enter a valid completion day in the format DD-MM-YYYY.";

/// Builds tasks from answers given by an [`InputProvider`].
#[derive(Debug)]
pub struct TaskCollector<P> {
    provider: P,
}

impl<P: InputProvider> TaskCollector<P> {
    /// Creates a collector reading from `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Asks for a task count, then for each task in turn.
    pub fn collect(&mut self) -> Result<Vec<Task>, InputError> {
        let count = self.ask(PROMPT_COUNT, RETRY_COUNT, validation::parse_task_count)?;
        debug!(count, "collecting tasks");

        (1..=count).map(|index| self.collect_task(index)).collect()
    }

    /// Asks for every field of one task.
    pub fn collect_task(&mut self, index: usize) -> Result<Task, InputError> {
        self.provider.say(&format!("\nTask {index}:"));

        let name = self.ask(PROMPT_NAME, RETRY_NAME, validation::parse_name)?;
        let time_required = self.ask(PROMPT_TIME, RETRY_TIME, validation::parse_time_required)?;
        let priority = self.ask(PROMPT_PRIORITY, RETRY_PRIORITY, validation::parse_priority)?;
        let due_date = self.ask(PROMPT_DUE, RETRY_DUE, validation::parse_due_date)?;
        let target_date = self.ask(PROMPT_TARGET, RETRY_TARGET, validation::parse_target_date)?;

        debug!(index, task = %name, "task collected");

        Ok(Task::new(name, time_required, priority)
            .with_due_date(due_date)
            .with_target_date(target_date))
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, InputError> {
        loop {
            let line = self.provider.prompt(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(kind = ?e.kind, error = %e, "invalid input");
                    self.provider.say(retry);
                }
            }
        }
    }
}
