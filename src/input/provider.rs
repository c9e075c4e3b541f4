//! Line-based input sources.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::InputError;

/// A source of answers to prompts, plus somewhere to show messages.
pub trait InputProvider {
    /// Shows `prompt` and returns the next line without its line ending.
    ///
    /// Fails with [`InputError::Exhausted`] when no more input exists.
    fn prompt(&mut self, prompt: &str) -> Result<String, InputError>;

    /// Shows a message line (retry hints, section headers).
    fn say(&mut self, message: &str);
}

impl<P: InputProvider + ?Sized> InputProvider for &mut P {
    fn prompt(&mut self, prompt: &str) -> Result<String, InputError> {
        (**self).prompt(prompt)
    }

    fn say(&mut self, message: &str) {
        (**self).say(message);
    }
}

/// Reads answers from stdin and writes prompts to stdout.
#[derive(Debug, Default)]
pub struct StdinProvider;

impl StdinProvider {
    /// Creates a provider bound to the process's stdio.
    pub fn new() -> Self {
        Self
    }
}

impl InputProvider for StdinProvider {
    fn prompt(&mut self, prompt: &str) -> Result<String, InputError> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        read_line(&mut io::stdin().lock(), prompt)
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Answers prompts from a fixed list and records everything shown.
///
/// # Example
///
/// ```
/// use day_schedule::input::{InputProvider, ScriptedProvider};
///
/// let mut input = ScriptedProvider::new(["yes"]);
/// assert_eq!(input.prompt("Continue? ").unwrap(), "yes");
/// assert!(input.prompt("Again? ").is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedProvider {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedProvider {
    /// Creates a provider that will answer with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every prompt and message shown so far, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputProvider for ScriptedProvider {
    fn prompt(&mut self, prompt: &str) -> Result<String, InputError> {
        self.transcript.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| InputError::Exhausted(prompt.trim().to_string()))
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}

/// Reads one line, stripping `\n` or `\r\n`. EOF is an error.
pub(crate) fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Exhausted(prompt.trim().to_string()));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_endings() {
        let mut input = Cursor::new("first\nsecond\r\nlast");
        assert_eq!(read_line(&mut input, "p").unwrap(), "first");
        assert_eq!(read_line(&mut input, "p").unwrap(), "second");
        assert_eq!(read_line(&mut input, "p").unwrap(), "last");
    }

    #[test]
    fn test_read_line_eof() {
        let mut input = Cursor::new("");
        let err = read_line(&mut input, "Enter task name: ").unwrap_err();
        assert!(matches!(err, InputError::Exhausted(ref p) if p == "Enter task name:"));
    }

    #[test]
    fn test_read_line_keeps_blank_line() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_line(&mut input, "p").unwrap(), "");
    }

    #[test]
    fn test_scripted_transcript() {
        let mut input = ScriptedProvider::new(["a", "b"]);
        assert_eq!(input.prompt("one? ").unwrap(), "a");
        input.say("note");
        assert_eq!(input.prompt("two? ").unwrap(), "b");
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.transcript(), ["one? ", "note", "two? "]);
    }

    fn ask_once<P: InputProvider>(mut provider: P) -> String {
        let answer = provider.prompt("one? ").unwrap();
        provider.say("done");
        answer
    }

    #[test]
    fn test_borrowed_provider_shares_state() {
        let mut input = ScriptedProvider::new(["a"]);
        assert_eq!(ask_once(&mut input), "a");
        assert_eq!(input.transcript(), ["one? ", "done"]);
    }
}
