//! Prioritizer: a chain of ordering rules applied as one stable sort.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use super::rules::{DueDate, Priority};
use super::{DueDateOrder, OrderingRule};
use crate::models::Task;

/// Orders tasks by a chain of rules.
///
/// The sort is stable: tasks equal under every rule keep their input
/// order, so prioritizing an already prioritized list is a no-op.
///
/// # Example
/// ```
/// use day_schedule::dispatching::{rules, DueDateOrder, Prioritizer};
///
/// let prioritizer = Prioritizer::new()
///     .with_rule(rules::Priority)
///     .with_rule(rules::DueDate::new(DueDateOrder::Literal));
/// assert_eq!(prioritizer.rule_count(), 2);
/// ```
#[derive(Clone)]
pub struct Prioritizer {
    rules: Vec<Arc<dyn OrderingRule>>,
}

impl Prioritizer {
    /// Creates a prioritizer with no rules (keeps input order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Priority ascending, then due date in the given mode.
    pub fn standard(due_date_order: DueDateOrder) -> Self {
        Self::new()
            .with_rule(Priority)
            .with_rule(DueDate::new(due_date_order))
    }

    /// Appends a rule; it only decides ties left by earlier rules.
    pub fn with_rule<R: OrderingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Number of rules in the chain.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Compares two tasks through the rule chain.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.compare(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Returns indices into `tasks` in prioritized order.
    pub fn sort_indices(&self, tasks: &[Task]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&tasks[a], &tasks[b]));
        indices
    }

    /// Returns a new, prioritized copy of `tasks`. The input is untouched.
    pub fn prioritize(&self, tasks: &[Task]) -> Vec<Task> {
        let chain: Vec<&str> = self.rules.iter().map(|r| r.description()).collect();
        debug!(
            tasks = tasks.len(),
            rules = self.rule_count(),
            chain = %chain.join(", "),
            "prioritizing"
        );

        let ordered: Vec<Task> = self
            .sort_indices(tasks)
            .into_iter()
            .map(|i| tasks[i].clone())
            .collect();

        for (position, task) in ordered.iter().enumerate() {
            debug!(
                position,
                task = %task.name,
                priority = task.priority,
                due = %task.due_date,
                "prioritized"
            );
        }

        ordered
    }
}

impl Default for Prioritizer {
    fn default() -> Self {
        Self::standard(DueDateOrder::default())
    }
}

impl std::fmt::Debug for Prioritizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prioritizer")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
