//! Line-oriented prompts for the interactive menu.
//!
//! Both prompts loop until they get acceptable input and return `None` once input
//! is exhausted, which callers treat like the exit sentinel.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads a non-negative integer.
    pub fn integer(&mut self) -> Option<u32> {
        loop {
            let line = self.read_line(" > ")?;
            match line.trim().parse::<i64>() {
                Ok(n) if n < 0 => self.say("Integer must be non-negative, retry:"),
                Ok(n) => match u32::try_from(n) {
                    Ok(n) => return Some(n),
                    Err(_) => self.say("Number too large, retry:"),
                },
                Err(_) => self.say("Improper selection, retry:"),
            }
        }
    }

    /// Reads a file name, appending `.csv` when it is missing.
    pub fn file_name(&mut self) -> Option<String> {
        loop {
            let line = self.read_line(" File > ")?;
            let name = line.trim();
            if name.is_empty() {
                self.say("Enter a file name, or 0 to exit:");
                continue;
            }
            return Some(with_csv_extension(name));
        }
    }

    fn read_line(&mut self, marker: &str) -> Option<String> {
        let _ = write!(self.output, "{marker}");
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    fn say(&mut self, msg: &str) {
        let _ = writeln!(self.output, "{msg}");
    }
}

pub fn with_csv_extension(name: &str) -> String {
    if name.ends_with(".csv") {
        name.to_string()
    } else {
        format!("{name}.csv")
    }
}
