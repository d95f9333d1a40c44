use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Line-oriented terminal seam used by the controller
pub trait Console {
    /// Shows `prompt` and reads one line. `Ok(None)` means input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn write_line(&mut self, line: &str);

    /// Adds an entry to the line-editor history
    fn remember(&mut self, _entry: &str) {}
}

/// Interactive console backed by rustyline
pub struct LineEditor {
    rl: DefaultEditor,
}

impl LineEditor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            rl: DefaultEditor::new()?,
        })
    }
}

impl Console for LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.rl.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-D or Ctrl-C ends the session the same way closing stdin does
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn remember(&mut self, entry: &str) {
        let _ = self.rl.add_history_entry(entry);
    }
}
