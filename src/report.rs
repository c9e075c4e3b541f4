//! Schedule rendering and persistence.
//!
//! Entries render as
//! `\nTask '<name>' on <DD-MM-YYYY> from H:MM AM/PM to H:MM AM/PM`.
//! Each rendered line goes to a persistent sink (normally a file,
//! truncated on open) and is mirrored to the console.

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::{Schedule, ScheduleEntry};

/// Default schedule file name, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "tasks_schedule.txt";

/// Renders a 24-hour fractional hour as a 12-hour clock time.
///
/// Minutes are rounded to the nearest whole minute first, so the
/// minute field is always 00-59.
///
/// ```
/// use day_schedule::report::format_clock;
///
/// assert_eq!(format_clock(10.0), "10:00 AM");
/// assert_eq!(format_clock(12.5), "12:30 PM");
/// assert_eq!(format_clock(15.75), "3:45 PM");
/// ```
pub fn format_clock(hour: f64) -> String {
    let total_minutes = (hour * 60.0).round() as i64;
    let hour_of_day = total_minutes.div_euclid(60);
    let minute = total_minutes.rem_euclid(60);

    let period = if hour_of_day.rem_euclid(24) < 12 {
        "AM"
    } else {
        "PM"
    };
    let display = match hour_of_day.rem_euclid(12) {
        0 => 12,
        h => h,
    };

    format!("{display}:{minute:02} {period}")
}

/// Renders one entry, including its leading blank line.
pub fn render_entry(entry: &ScheduleEntry) -> String {
    format!(
        "\nTask '{}' on {} from {} to {}",
        entry.task_name,
        entry.day,
        format_clock(entry.start_hour),
        format_clock(entry.end_hour)
    )
}

/// Writes rendered entries to a sink and mirrors them to a console.
#[derive(Debug)]
pub struct ScheduleWriter<S: Write, C: Write> {
    sink: S,
    console: C,
}

impl ScheduleWriter<BufWriter<File>, Stdout> {
    /// Creates (or truncates) `path` and mirrors to stdout.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "schedule file opened");
        Ok(Self::new(BufWriter::new(file), io::stdout()))
    }
}

impl<S: Write, C: Write> ScheduleWriter<S, C> {
    /// Creates a writer over an arbitrary sink and console.
    pub fn new(sink: S, console: C) -> Self {
        Self { sink, console }
    }

    /// Writes every entry in order and flushes the sink.
    ///
    /// Returns the number of entries written.
    pub fn write_schedule(&mut self, schedule: &Schedule) -> Result<usize> {
        for entry in &schedule.entries {
            let line = render_entry(entry);
            writeln!(self.console, "{line}")?;
            writeln!(self.sink, "{line}")?;
        }
        self.sink.flush()?;
        self.console.flush()?;
        Ok(schedule.entry_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock_morning_and_noon() {
        assert_eq!(format_clock(10.0), "10:00 AM");
        assert_eq!(format_clock(11.5), "11:30 AM");
        assert_eq!(format_clock(12.0), "12:00 PM");
        assert_eq!(format_clock(12.25), "12:15 PM");
    }

    #[test]
    fn test_format_clock_afternoon() {
        assert_eq!(format_clock(13.0), "1:00 PM");
        assert_eq!(format_clock(15.5), "3:30 PM");
        assert_eq!(format_clock(22.0), "10:00 PM");
    }

    #[test]
    fn test_format_clock_midnight() {
        assert_eq!(format_clock(0.0), "12:00 AM");
        assert_eq!(format_clock(0.5), "12:30 AM");
    }

    #[test]
    fn test_format_clock_rounds_minutes() {
        // 10.1 h is 10:06; float error must not show as 10:05
        assert_eq!(format_clock(10.1), "10:06 AM");
        // Never renders a 60th minute
        assert_eq!(format_clock(10.9999), "11:00 AM");
        assert_eq!(format_clock(11.9999), "12:00 PM");
    }

    #[test]
    fn test_render_entry() {
        let entry = ScheduleEntry::new("A", "01-01-2025", 12.5, 15.5);
        assert_eq!(
            render_entry(&entry),
            "\nTask 'A' on 01-01-2025 from 12:30 PM to 3:30 PM"
        );
    }

    #[test]
    fn test_write_schedule_to_buffers() {
        let mut schedule = Schedule::new();
        schedule.add_entry(ScheduleEntry::new("B", "01-01-2025", 10.0, 12.0));
        schedule.add_entry(ScheduleEntry::new("A", "01-01-2025", 12.5, 15.5));

        let mut sink = Vec::new();
        let mut console = Vec::new();
        let mut writer = ScheduleWriter::new(&mut sink, &mut console);
        assert_eq!(writer.write_schedule(&schedule).unwrap(), 2);
        drop(writer);

        let expected = "\nTask 'B' on 01-01-2025 from 10:00 AM to 12:00 PM\n\
                        \nTask 'A' on 01-01-2025 from 12:30 PM to 3:30 PM\n";
        assert_eq!(String::from_utf8(sink).unwrap(), expected);
        assert_eq!(String::from_utf8(console).unwrap(), expected);
    }

    #[test]
    fn test_create_truncates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        std::fs::write(&path, "stale content from an earlier run\n").unwrap();

        let mut schedule = Schedule::new();
        schedule.add_entry(ScheduleEntry::new("C", "02-01-2025", 10.0, 11.0));

        let mut writer = ScheduleWriter::create(&path).unwrap();
        writer.write_schedule(&schedule).unwrap();
        drop(writer);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "\nTask 'C' on 02-01-2025 from 10:00 AM to 11:00 AM\n"
        );
    }

    #[test]
    fn test_create_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(ScheduleWriter::create(&path).is_err());
    }
}
