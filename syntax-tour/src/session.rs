//! State shared by the steps of one run.

use std::io::Write;

use tracing::trace;

use crate::error::RuntimeError;
use crate::scope::Scope;
use crate::Value;

/// Name bindings plus the sink that printed lines go to.
pub struct Session<'a> {
    /// Bindings visible to every step
    pub scope: Scope,
    out: &'a mut dyn Write,
    lines: usize,
}

impl<'a> Session<'a> {
    /// Start a session with an empty scope writing to `out`.
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self {
            scope: Scope::new(),
            out,
            lines: 0,
        }
    }

    /// Print `args` joined by single spaces as one line.
    pub fn print(&mut self, args: &[Value]) -> Result<(), RuntimeError> {
        let line = args
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        trace!(line = %line, "print");
        writeln!(self.out, "{}", line)?;
        self.lines += 1;
        Ok(())
    }

    /// Print a single value.
    pub fn print_value(&mut self, value: impl Into<Value>) -> Result<(), RuntimeError> {
        self.print(&[value.into()])
    }

    /// Number of lines printed so far.
    pub fn lines_printed(&self) -> usize {
        self.lines
    }

    /// Flush the sink.
    pub fn flush(&mut self) -> Result<(), RuntimeError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Run `body`; hand its error to `on_error`; run `finally` on every path.
///
/// The result is the first failure among `body`/`on_error` and `finally`,
/// or `Ok(())`.
pub fn guarded<T>(
    session: &mut Session<'_>,
    body: impl FnOnce(&mut Session<'_>) -> Result<T, RuntimeError>,
    on_error: impl FnOnce(&mut Session<'_>, RuntimeError) -> Result<(), RuntimeError>,
    finally: impl FnOnce(&mut Session<'_>) -> Result<(), RuntimeError>,
) -> Result<(), RuntimeError> {
    let outcome = match body(session) {
        Ok(_) => Ok(()),
        Err(err) => on_error(session, err),
    };
    let cleanup = finally(session);
    outcome.and(cleanup)
}
