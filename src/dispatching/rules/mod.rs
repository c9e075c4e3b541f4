//! Built-in ordering rules.

use std::cmp::Ordering;

use super::{DueDateOrder, OrderingRule};
use crate::models::Task;

/// Priority level, 1 (highest) first.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl OrderingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        a.priority.cmp(&b.priority)
    }

    fn description(&self) -> &'static str {
        "Priority level, highest first"
    }
}

/// Earliest due date first.
///
/// With [`DueDateOrder::Literal`] the raw text is compared, which is not
/// chronological across days, months, or meridiems. With
/// [`DueDateOrder::Chronological`] parsed date-times are compared and
/// ties (or two unparsable dates) fall back to the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DueDate {
    /// Comparison mode.
    pub order: DueDateOrder,
}

impl DueDate {
    /// Creates the rule in the given comparison mode.
    pub fn new(order: DueDateOrder) -> Self {
        Self { order }
    }
}

impl OrderingRule for DueDate {
    fn name(&self) -> &'static str {
        "DUE_DATE"
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self.order {
            DueDateOrder::Literal => a.due_date.cmp(&b.due_date),
            DueDateOrder::Chronological => {
                let by_time = match (a.due_date_time(), b.due_date_time()) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                };
                by_time.then_with(|| a.due_date.cmp(&b.due_date))
            }
        }
    }

    fn description(&self) -> &'static str {
        match self.order {
            DueDateOrder::Literal => "Earliest due date (text order)",
            DueDateOrder::Chronological => "Earliest due date (calendar order)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due(name: &str, priority: u8, due_date: &str) -> Task {
        Task::new(name, 1.0, priority).with_due_date(due_date)
    }

    #[test]
    fn test_priority_rule() {
        let high = due("high", 1, "");
        let low = due("low", 5, "");
        assert_eq!(Priority.compare(&high, &low), Ordering::Less);
        assert_eq!(Priority.compare(&low, &high), Ordering::Greater);
        assert_eq!(Priority.compare(&high, &high), Ordering::Equal);
    }

    #[test]
    fn test_literal_due_date_compares_text() {
        let dec = due("dec", 1, "31-12-2024 10:00 AM");
        let jan = due("jan", 1, "01-01-2025 10:00 AM");
        // Known quirk of text order: the later calendar date wins on day digits.
        assert_eq!(DueDate::new(DueDateOrder::Literal).compare(&jan, &dec), Ordering::Less);
    }

    #[test]
    fn test_literal_due_date_meridiem_quirk() {
        let morning = due("am", 1, "01-01-2025 11:00 AM");
        let noon = due("pm", 1, "01-01-2025 01:00 PM");
        // "01:00 PM" < "11:00 AM" as text.
        assert_eq!(DueDate::new(DueDateOrder::Literal).compare(&noon, &morning), Ordering::Less);
        assert_eq!(
            DueDate::new(DueDateOrder::Chronological).compare(&morning, &noon),
            Ordering::Less
        );
    }

    #[test]
    fn test_chronological_due_date() {
        let dec = due("dec", 1, "31-12-2024 10:00 AM");
        let jan = due("jan", 1, "01-01-2025 10:00 AM");
        assert_eq!(DueDate::new(DueDateOrder::Chronological).compare(&dec, &jan), Ordering::Less);
    }

    #[test]
    fn test_chronological_unparsable_sorts_last() {
        let bad = due("bad", 1, "99-99-2025 10:00 AM");
        let good = due("good", 1, "31-12-2099 10:00 AM");
        let rule = DueDate::new(DueDateOrder::Chronological);
        assert_eq!(rule.compare(&good, &bad), Ordering::Less);
        assert_eq!(rule.compare(&bad, &good), Ordering::Greater);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Priority.name(), "PRIORITY");
        assert_eq!(DueDate::default().name(), "DUE_DATE");
        assert_eq!(DueDate::default().order, DueDateOrder::Literal);
    }
}
