//! Status lines printed around each command.

use crossterm::style::{Color, Stylize};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Length of the `===[` `]==` decoration around a debug message.
const DECORATION_LEN: usize = 7;
/// Debug lines are never narrower than this.
const MIN_WIDTH: usize = 78;

/// Where console output is written.
#[derive(Clone, Default)]
pub enum ConsoleSink {
    #[default]
    Stdout,
    Buffer(Rc<RefCell<Vec<u8>>>),
}

impl ConsoleSink {
    fn write_str(&self, text: &str) {
        let result = match self {
            ConsoleSink::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush())
            }
            ConsoleSink::Buffer(buffer) => {
                buffer.borrow_mut().extend_from_slice(text.as_bytes());
                Ok(())
            }
        };
        if let Err(err) = result {
            tracing::debug!(error = %err, "console write failed");
        }
    }
}

/// Semantic colour of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Failure,
    Warning,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Info => Color::Blue,
            Tone::Success => Color::Green,
            Tone::Failure => Color::Red,
            Tone::Warning => Color::Yellow,
        }
    }

    pub fn paint(self, text: &str) -> String {
        text.with(self.color()).to_string()
    }
}

pub struct Console {
    sink: ConsoleSink,
    debug: bool,
    quiet: bool,
    width: usize,
}

impl Console {
    pub fn new(sink: ConsoleSink, debug: bool, quiet: bool, width: usize) -> Self {
        Self {
            sink,
            debug,
            quiet,
            width,
        }
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Report a status message: nothing when quiet, the bare message normally,
    /// and a padded, coloured banner in debug mode.
    pub fn log(&self, message: &str, tone: Tone) {
        if self.quiet {
            return;
        }
        let line = if self.debug {
            decorate(message, tone, self.width)
        } else {
            message.to_string()
        };
        self.line(&line);
    }

    /// Write raw text followed by a newline, regardless of quiet mode.
    pub fn line(&self, text: &str) {
        self.sink.write_str(text);
        self.sink.write_str("\n");
    }

    pub fn blank(&self) {
        self.sink.write_str("\n");
    }
}

/// Render `===[message]==` padded with `=` to `width`, truncating the
/// message with `...` when it does not fit.
pub fn decorate(message: &str, tone: Tone, width: usize) -> String {
    let max_len = if width < MIN_WIDTH {
        MIN_WIDTH - DECORATION_LEN
    } else {
        width - DECORATION_LEN
    };

    let message_len = message.chars().count();
    let (shown, shown_len) = if message_len > max_len {
        let head: String = message.chars().take(max_len - 3).collect();
        (format!("{head}..."), max_len)
    } else {
        (message.to_string(), message_len)
    };

    let padding = "=".repeat(max_len - shown_len);
    format!("===[{}]=={}", tone.paint(&shown), padding)
}
