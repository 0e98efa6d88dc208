//! Line-oriented terminal input and output.

use anyhow::Result;
use std::io::{BufRead, Write};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Source of typed lines and sink for printed text.
///
/// Input arrives over a channel so that scripted lines can stand in for the
/// keyboard.
pub struct Console {
    lines: mpsc::UnboundedReceiver<String>,
    out: Box<dyn Write + Send>,
}

impl Console {
    /// Creates a console reading from `lines` and writing to `out`.
    pub fn new(lines: mpsc::UnboundedReceiver<String>, out: Box<dyn Write + Send>) -> Self {
        Self { lines, out }
    }

    /// Console attached to the process's stdin and stdout.
    ///
    /// Stdin is read on a plain thread; a blocking read inside the runtime
    /// would hold up shutdown.
    pub fn stdio() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to read stdin");
                        break;
                    }
                }
            }
            debug!("Stdin closed");
        });
        Self::new(rx, Box::new(std::io::stdout()))
    }

    /// Console fed by a fixed script of lines, ending in EOF.
    pub fn scripted<I, S>(lines: I, out: Box<dyn Write + Send>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        for line in lines {
            // Receiver is alive, send cannot fail
            let _ = tx.send(line.into());
        }
        Self::new(rx, out)
    }

    /// Prints a line.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Prints without a trailing newline.
    pub fn prompt(&mut self, text: impl std::fmt::Display) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Next trimmed input line, or `None` at end of input.
    pub async fn read_line(&mut self) -> Option<String> {
        let line = self.lines.recv().await?;
        Some(line.trim().to_string())
    }

    /// Prompts and reads a line.
    pub async fn ask(&mut self, question: impl std::fmt::Display) -> Result<Option<String>> {
        self.prompt(question)?;
        Ok(self.read_line().await)
    }
}
