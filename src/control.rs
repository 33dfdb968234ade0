use crate::control_state::{ControlState, is_skipped};
use crate::error::ReplResult;
use crate::process::CommandRunner;
use crate::process::history::{append_history, load_history};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Source of input lines for the loop.
pub trait LineEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError>;

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool>;
}

/// Plain line reader, used when piped and when `rlwrap` does the editing.
pub struct StdinEditor<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> StdinEditor<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

impl<I: BufRead, O: Write> LineEditor for StdinEditor<I, O> {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        if let Err(err) = write_prompt(&mut self.output, prompt) {
            tracing::debug!(error = %err, "prompt write failed");
        }

        let mut line = Vec::new();
        match self.input.read_until(b'\n', &mut line) {
            Ok(0) => Err(ReadlineError::Eof),
            Ok(_) => Ok(String::from_utf8_lossy(&line).into_owned()),
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {
                Err(ReadlineError::Interrupted)
            }
            Err(err) => Err(ReadlineError::Io(err)),
        }
    }

    fn add_history_entry(&mut self, _entry: &str) -> rustyline::Result<bool> {
        Ok(false)
    }
}

/// Output failures are treated like the console's: the prompt is cosmetic.
fn write_prompt<O: Write>(output: &mut O, prompt: &str) -> std::io::Result<()> {
    if !prompt.is_empty() {
        output.write_all(prompt.as_bytes())?;
    }
    output.flush()
}

/// In-process line editing for terminals without `rlwrap`, sharing the
/// per-command history file `rlwrap` would have used.
pub struct HistoryEditor {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl HistoryEditor {
    pub fn open(history_file: Option<PathBuf>) -> ReplResult<Self> {
        let mut editor = DefaultEditor::new()?;

        if let Some(path) = &history_file {
            match load_history(path) {
                Ok(entries) => {
                    for entry in entries {
                        editor.add_history_entry(entry)?;
                    }
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "unable to read history");
                }
            }
        }

        Ok(Self {
            editor,
            history_file,
        })
    }
}

impl LineEditor for HistoryEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.editor.readline(prompt)
    }

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool> {
        let added = self.editor.add_history_entry(entry)?;
        if let Some(path) = &self.history_file {
            if let Err(err) = append_history(path, entry) {
                tracing::warn!(path = %path.display(), error = %err, "unable to write history");
            }
        }
        Ok(added)
    }
}

/// Read, expand, run, report; until end of input or Ctrl-C at the prompt.
pub fn run_loop_with_editor<R: CommandRunner>(
    control_state: &mut ControlState<R>,
    editor: &mut dyn LineEditor,
) -> ReplResult<()> {
    loop {
        let prompt = control_state.prompt().to_string();
        let readline = {
            let _reading = control_state.interrupts().reading();
            editor.readline(&prompt)
        };

        match readline {
            Ok(line) => {
                let line = line.trim();
                control_state.echo_input(Some(line));

                if !is_skipped(line) {
                    if let Err(err) = editor.add_history_entry(line) {
                        tracing::warn!(error = %err, "unable to record history entry");
                    }
                }

                control_state.handle_line(line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                control_state.echo_input(None);
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
