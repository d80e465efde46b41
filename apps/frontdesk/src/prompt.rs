//! # Console Prompts
//!
//! Line-oriented prompting over any `BufRead` + `Write` pair.
//!
//! Every read returns `Ok(None)` once input is exhausted; the menu treats
//! that as Save & Exit.

use std::io::{self, BufRead, Write};

use rasa_core::Date;

/// Prompting front end for the menu.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Gives back the output sink of a scripted session.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Writes `text` framed by `=` rules as wide as its longest line.
    pub fn notice(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        let text = text.as_ref();
        let width = text.lines().map(str::len).max().unwrap_or(0).max(19);
        let rule = "=".repeat(width);
        writeln!(self.output, "\n{}\n{}\n{}", rule, text, rule)
    }

    /// Reads one line without its terminator.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Shows `prompt` and reads the answer.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.read_line()
    }

    /// Shows `prompt` until the answer starts with an integer.
    pub fn ask_integer(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            if let Some(value) = parse_leading_integer(&line) {
                return Ok(Some(value));
            }
            self.say("Invalid input. Please enter a valid number.")?;
        }
    }

    /// Asks for day, month and year in turn.
    ///
    /// Numbers that cannot be a date component come back as 0, which the
    /// caller's date checks then reject.
    pub fn ask_date(&mut self, labels: [&str; 3]) -> io::Result<Option<Date>> {
        let Some(day) = self.ask_integer(labels[0])? else {
            return Ok(None);
        };
        let Some(month) = self.ask_integer(labels[1])? else {
            return Ok(None);
        };
        let Some(year) = self.ask_integer(labels[2])? else {
            return Ok(None);
        };

        Ok(Some(Date::new(
            u32::try_from(day).unwrap_or(0),
            u32::try_from(month).unwrap_or(0),
            i32::try_from(year).unwrap_or(0),
        )))
    }
}

/// Parses an optionally signed integer at the start of `line`, ignoring
/// leading whitespace and anything after the digits.
pub fn parse_leading_integer(line: &str) -> Option<i64> {
    let trimmed = line.trim_start();
    let sign_len = usize::from(trimmed.starts_with(|c: char| c == '+' || c == '-'));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}
