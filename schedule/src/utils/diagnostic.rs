//! Verbosity-gated diagnostic output.
//!
//! Two entry points share the same sinks:
//!
//! - Free functions ([`std_out`], [`select_output`], [`print_title`]) write to
//!   stdout and fall back to the process-wide [`NullStream::global`].
//! - [`DiagnosticContext`] owns its writer and configuration, so callers can pass
//!   it around explicitly and tests can capture what was printed.

use std::fmt;
use std::io::{self, Write};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::config::DiagnosticConfig;

/// Default minimum verbosity for output to be emitted.
pub const DEFAULT_VERBOSITY_THRESHOLD: i32 = 1;

static GLOBAL_NULL_STREAM: Lazy<NullStream> = Lazy::new(NullStream::default);

/// Output sink that accepts and drops every write.
#[derive(Debug, Default)]
pub struct NullStream {
    _private: (),
}

impl NullStream {
    /// Shared instance, constructed on first access.
    pub fn global() -> &'static NullStream {
        &GLOBAL_NULL_STREAM
    }
}

impl Write for NullStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Write for &NullStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink selected by verbosity.
pub enum Output<'a> {
    /// Process standard output.
    Stdout(io::Stdout),
    /// Writer owned by a [`DiagnosticContext`].
    Writer(&'a mut dyn Write),
    /// Shared discard sink.
    Discard(&'static NullStream),
}

impl Output<'_> {
    pub fn is_discard(&self) -> bool {
        matches!(self, Self::Discard(_))
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout(_))
    }
}

impl fmt::Debug for Output<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout(_) => f.write_str("Output::Stdout"),
            Self::Writer(_) => f.write_str("Output::Writer"),
            Self::Discard(_) => f.write_str("Output::Discard"),
        }
    }
}

impl Write for Output<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::Writer(writer) => writer.write(buf),
            Self::Discard(null) => null.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::Writer(writer) => writer.flush(),
            Self::Discard(null) => null.flush(),
        }
    }
}

/// Stdout when `verbosity >= threshold`, the shared discard sink otherwise.
///
/// ```rust
/// # use autosched_schedule::select_output;
/// assert!(select_output(0, 1).is_discard());
/// assert!(select_output(1, 1).is_stdout());
/// ```
pub fn select_output(verbosity: i32, threshold: i32) -> Output<'static> {
    if verbosity >= threshold { Output::Stdout(io::stdout()) } else { Output::Discard(NullStream::global()) }
}

/// [`select_output`] with [`DEFAULT_VERBOSITY_THRESHOLD`].
pub fn std_out(verbosity: i32) -> Output<'static> {
    select_output(verbosity, DEFAULT_VERBOSITY_THRESHOLD)
}

/// `times` copies of `c`; non-positive counts give an empty string.
pub fn chars(c: char, times: i32) -> String {
    usize::try_from(times).map(|n| std::iter::repeat_n(c, n).collect()).unwrap_or_default()
}

/// Print a framed section title to stdout if `verbosity` passes the default threshold.
pub fn print_title(title: &str, verbosity: i32) -> io::Result<()> {
    write_title(&mut std_out(verbosity), title, &DiagnosticConfig::default())
}

fn write_title(out: &mut impl Write, title: &str, config: &DiagnosticConfig) -> io::Result<()> {
    let rule = chars(config.rule_char, config.rule_width);
    writeln!(out, "{rule}")?;
    writeln!(out, "{}  [ {title} ]", chars(config.rule_char, config.title_indent))?;
    writeln!(out, "{rule}")?;
    out.flush()
}

/// Explicitly constructed diagnostic output.
///
/// Replaces reliance on the global discard sink with an object that is passed by
/// reference. Writes take `&mut self`, so sharing across threads needs the caller's
/// own synchronization.
///
/// ```rust
/// # use autosched_schedule::{DiagnosticConfig, DiagnosticContext};
/// let mut ctx = DiagnosticContext::new(DiagnosticConfig::default(), Vec::new());
/// ctx.print_title("Search", 0).unwrap();
/// assert!(ctx.into_inner().is_empty());
/// ```
#[derive(Debug)]
pub struct DiagnosticContext<W = io::Stdout> {
    config: DiagnosticConfig,
    writer: W,
}

impl DiagnosticContext<io::Stdout> {
    pub fn stdout(config: DiagnosticConfig) -> Self {
        Self::new(config, io::stdout())
    }
}

impl<W: Write> DiagnosticContext<W> {
    pub fn new(config: DiagnosticConfig, writer: W) -> Self {
        Self { config, writer }
    }

    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// The context's writer when `verbosity` passes the threshold, the discard sink otherwise.
    pub fn output(&mut self, verbosity: i32) -> Output<'_> {
        if self.config.enabled(verbosity) {
            Output::Writer(&mut self.writer)
        } else {
            Output::Discard(NullStream::global())
        }
    }

    pub fn print_title(&mut self, title: &str, verbosity: i32) -> io::Result<()> {
        if !self.config.enabled(verbosity) {
            return Ok(());
        }
        debug!(title, verbosity, "printing section title");
        write_title(&mut self.writer, title, &self.config)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
