//! Prefix + timestamp line formatting shared by the stdout and file loggers.
//!
//! A [`LineLogger`] owns a mutable prefix and output; the prefix is swapped
//! on every write and the output can be bound for a single write. Each write renders
//! `<prefix><date> <time> <file:line>: <message>\n`, with the date, time and
//! location parts controlled by [`LineFlags`].

use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::panic::Location;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Which header fields precede each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFlags {
    /// Local date as `yyyy/mm/dd`.
    pub date: bool,
    /// Local time as `hh:mm:ss`.
    pub time: bool,
    /// Caller file name (no directories) and line number.
    pub short_file: bool,
}

impl LineFlags {
    pub const STANDARD: LineFlags = LineFlags {
        date: true,
        time: true,
        short_file: true,
    };

    pub const NONE: LineFlags = LineFlags {
        date: false,
        time: false,
        short_file: false,
    };
}

impl Default for LineFlags {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Destination a line logger writes into.
pub type Output = Box<dyn Write + Send>;

struct LineState {
    prefix: String,
    flags: LineFlags,
    output: Option<Output>,
}

/// A line-oriented logger with a swappable prefix and output.
pub struct LineLogger {
    state: Mutex<LineState>,
}

impl LineLogger {
    pub fn new(output: Output, prefix: &str, flags: LineFlags) -> Self {
        Self {
            state: Mutex::new(LineState {
                prefix: prefix.to_string(),
                flags,
                output: Some(output),
            }),
        }
    }

    /// Logger bound to the process's standard output.
    pub fn stdout(flags: LineFlags) -> Self {
        Self::new(Box::new(io::stdout()), "", flags)
    }

    /// Logger with no output yet. Writes are dropped until one is set.
    pub fn unbound(flags: LineFlags) -> Self {
        Self {
            state: Mutex::new(LineState {
                prefix: String::new(),
                flags,
                output: None,
            }),
        }
    }

    pub fn flags(&self) -> LineFlags {
        self.lock().flags
    }

    /// Swap the prefix and write one line, holding the lock across both.
    pub fn println_with_prefix(
        &self,
        prefix: &str,
        message: &str,
        location: &Location<'_>,
    ) -> io::Result<()> {
        let mut state = self.lock();
        state.prefix = prefix.to_string();
        let line = format_line(&state.prefix, state.flags, Local::now(), location, message);
        write_line(&mut state, &line)
    }

    /// Point the logger at `output`, set the prefix, write one line and then
    /// release the output again.
    ///
    /// The whole sequence runs under one lock so concurrent callers never mix
    /// one call's prefix with another call's destination.
    pub fn println_to(
        &self,
        output: Output,
        prefix: &str,
        message: &str,
        location: &Location<'_>,
    ) -> io::Result<()> {
        let mut state = self.lock();
        state.output = Some(output);
        state.prefix = prefix.to_string();
        let line = format_line(&state.prefix, state.flags, Local::now(), location, message);
        let result = write_line(&mut state, &line);
        state.output = None;
        result
    }

    /// Write `message` verbatim followed by a newline, without prefix or header.
    /// Errors are ignored.
    pub fn print_plain(&self, message: &str) {
        let mut state = self.lock();
        let _ = write_line(&mut state, &format!("{}\n", message));
    }

    fn lock(&self) -> MutexGuard<'_, LineState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn write_line(state: &mut LineState, line: &str) -> io::Result<()> {
    match state.output.as_mut() {
        Some(out) => {
            out.write_all(line.as_bytes())?;
            out.flush()
        }
        None => Ok(()),
    }
}

/// Render a single log line.
pub fn format_line(
    prefix: &str,
    flags: LineFlags,
    now: DateTime<Local>,
    location: &Location<'_>,
    message: &str,
) -> String {
    let mut line = String::with_capacity(prefix.len() + message.len() + 40);
    line.push_str(prefix);
    if flags.date {
        line.push_str(&now.format("%Y/%m/%d ").to_string());
    }
    if flags.time {
        line.push_str(&now.format("%H:%M:%S ").to_string());
    }
    if flags.short_file {
        let file = Path::new(location.file())
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("???");
        line.push_str(&format!("{}:{}: ", file, location.line()));
    }
    line.push_str(message);
    line.push('\n');
    line
}
