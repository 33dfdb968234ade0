//! State behind the interactive loop: one input line in, one command out.

use crate::conf::DEFAULT_PROMPT;
use crate::console::{Console, ConsoleSink, Tone};
use crate::invocation::SessionFlags;
use crate::process::{CommandRunner, RunOutcome, shell_escape};
use crate::signals::Interrupts;
use crate::template::Template;
use std::time::Instant;

/// The rendered prompt and the visible width of its command part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    display: String,
    width: usize,
}

impl Prompt {
    /// `"<template>" >> `, or `repl("<template>") >> ` in debug mode, with
    /// `rlwrap(...)` around it when running under the wrapper.
    pub fn compose(template: &Template, debug: bool, wrapped: bool, suffix: &str) -> Self {
        let painted = Tone::Info.paint(template.as_str());
        let quote = |inner: &str| -> String {
            match (debug, wrapped) {
                (true, true) => format!("rlwrap(repl(\"{inner}\"))"),
                (true, false) => format!("repl(\"{inner}\")"),
                (false, _) => format!("\"{inner}\""),
            }
        };

        Self {
            display: format!("{} {suffix} ", quote(&painted)),
            width: quote(template.as_str()).chars().count(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

pub struct ControlState<R: CommandRunner> {
    template: Template,
    flags: SessionFlags,
    runner: R,
    console: Console,
    prompt: Prompt,
    interrupts: Interrupts,
    interactive: bool,
    wrapped: bool,
    prompt_suffix: String,
    executed: usize,
}

impl<R: CommandRunner> ControlState<R> {
    pub fn new(template: Template, flags: SessionFlags, runner: R) -> Self {
        let prompt = Prompt::compose(&template, flags.debug, false, DEFAULT_PROMPT);
        let console = Console::new(ConsoleSink::Stdout, flags.debug, flags.quiet, prompt.width());
        Self {
            template,
            flags,
            runner,
            console,
            prompt,
            interrupts: Interrupts::detached(),
            interactive: false,
            wrapped: false,
            prompt_suffix: DEFAULT_PROMPT.to_string(),
            executed: 0,
        }
    }

    pub fn with_sink(mut self, sink: ConsoleSink) -> Self {
        self.console = Console::new(sink, self.flags.debug, self.flags.quiet, self.prompt.width());
        self
    }

    pub fn with_interrupts(mut self, interrupts: Interrupts) -> Self {
        self.interrupts = interrupts;
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn wrapped(mut self, wrapped: bool) -> Self {
        self.wrapped = wrapped;
        self.refresh_prompt();
        self
    }

    pub fn prompt_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.prompt_suffix = suffix.into();
        self.refresh_prompt();
        self
    }

    fn refresh_prompt(&mut self) {
        self.prompt = Prompt::compose(
            &self.template,
            self.flags.debug,
            self.wrapped,
            &self.prompt_suffix,
        );
        self.console.set_width(self.prompt.width());
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn interrupts(&self) -> &Interrupts {
        &self.interrupts
    }

    /// Number of commands handed to the runner so far.
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// The prompt to show, or an empty string when prompts are suppressed.
    pub fn prompt(&self) -> &str {
        if self.chatty() { self.prompt.as_str() } else { "" }
    }

    /// Echo piped input so transcripts read like an interactive session;
    /// `None` (end of input) closes the prompt line.
    pub fn echo_input(&self, line: Option<&str>) {
        if self.interactive || self.flags.quiet {
            return;
        }
        match line {
            Some(line) => self.console.line(line),
            None => self.console.blank(),
        }
    }

    /// Run one input line through the template, then print the separator.
    pub fn handle_line(&mut self, line: &str) {
        let line = line.trim();
        if !is_skipped(line) {
            self.execute(line);
        }
        if self.chatty() {
            self.console.blank();
        }
    }

    fn execute(&mut self, line: &str) {
        let input = if self.flags.escape {
            shell_escape(line)
        } else {
            line.to_string()
        };
        let command = self.template.expand(&input);

        self.console.log(&format!("Executing: '{command}'"), Tone::Info);
        self.executed += 1;

        let started = Instant::now();
        match self.runner.run(&command) {
            Ok(outcome) => {
                if outcome == RunOutcome::Interrupted {
                    self.console.log("Command was interrupted", Tone::Failure);
                }
                let elapsed = started.elapsed().as_secs_f64();
                self.console
                    .log(&format!("Command took {elapsed:.2}s to execute"), Tone::Success);
            }
            Err(err) => {
                self.console.log(&err.to_string(), Tone::Failure);
                if mentions_quit(line) {
                    self.console.log("Use ^C or ^D to exit repl", Tone::Warning);
                }
            }
        }
    }

    fn chatty(&self) -> bool {
        self.interactive || !self.flags.quiet
    }
}

/// Blank lines and `#` comments are never executed.
pub fn is_skipped(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Whether a failed line looks like an attempt to leave the loop.
pub fn mentions_quit(line: &str) -> bool {
    let line = line.to_lowercase();
    line.contains("quit") || line.contains("exit")
}
