//! Diagnostics and error reports.
//!
//! A [`Report`] collects diagnostics: compiler-style errors and warnings that
//! point at the offending source text. Recognizing literals in a
//! [`File`][crate::File] adds an error to the report for every invalid
//! literal, explaining what went wrong.
//!
//! Reports are reference-counted, so they are cheap to clone; they are usually
//! passed around by reference.

use std::fmt;
use std::io;
use std::panic;
use std::panic::Location;
use std::process;
use std::sync::Arc;

use crate::file::Context;

mod builtin;
mod diagnostic;
mod render;

pub use builtin::Builtins;
pub use builtin::Expected;
pub use diagnostic::Diagnostic;
use diagnostic::Kind;
pub use diagnostic::Loc;
pub use diagnostic::ToLoc;

/// A collection of diagnostics built up over the course of an operation.
///
/// To construct a report, see [`Context::new_report()`]. Only spans from that
/// context may be passed into it.
#[derive(Clone)]
pub struct Report {
  ctx: Context,
  state: Arc<render::State>,
}

/// Options for a [`Report`].
#[derive(Clone, Debug)]
pub struct Options {
  /// Whether to color the output when rendered.
  pub color: bool,
  /// Whether to add a note to each diagnostic showing where in the Rust
  /// source it was reported.
  pub show_report_locations: bool,
  /// Whether invalid literal errors should explain where the literal stopped
  /// making sense, rather than only underlining it.
  pub explain: bool,
}

impl Default for Options {
  fn default() -> Self {
    Self {
      color: true,
      show_report_locations: cfg!(debug_assertions),
      explain: true,
    }
  }
}

impl Report {
  pub(crate) fn new(ctx: &Context, opts: Options) -> Self {
    Self {
      ctx: ctx.clone(),
      state: Arc::new(render::State::new(opts)),
    }
  }

  /// Returns the options this report was created with.
  pub fn options(&self) -> &Options {
    &self.state.opts
  }

  /// Returns a wrapper for accessing built-in diagnostics.
  pub fn builtins(&self) -> Builtins {
    Builtins(self.clone())
  }

  /// Adds a new error to this report.
  ///
  /// The returned [`Diagnostic`] can be used to add labels and notes.
  #[track_caller]
  pub fn error(&self, message: impl fmt::Display) -> Diagnostic {
    self.new_diagnostic(Kind::Error, message.to_string())
  }

  /// Adds a new warning to this report.
  #[track_caller]
  pub fn warn(&self, message: impl fmt::Display) -> Diagnostic {
    self.new_diagnostic(Kind::Warning, message.to_string())
  }

  #[track_caller]
  fn new_diagnostic(&self, kind: Kind, message: String) -> Diagnostic {
    Diagnostic::new(self.clone(), kind, message)
      .reported_at(Location::caller())
  }

  /// Returns the number of errors in this report.
  pub fn error_count(&self) -> usize {
    self.state.error_count()
  }

  /// Returns a [`Fatal`] regardless of whether this report contains any errors.
  pub fn fatal<T>(&self) -> Result<T, Fatal> {
    Err(Fatal(self.clone()))
  }

  /// Returns `Ok(ok)` if this report contains no errors, and
  /// [`Err(Fatal)`][Fatal] otherwise.
  pub fn fatal_or<T>(&self, ok: T) -> Result<T, Fatal> {
    if self.error_count() == 0 {
      return Ok(ok);
    }

    self.fatal()
  }

  /// Writes out the contents of this report to `sink`.
  pub fn write_out(&self, sink: impl io::Write) -> io::Result<()> {
    render::finish(self, sink)
  }

  pub(crate) fn write_out_for_test(&self) -> String {
    let opts = Options {
      color: false,
      show_report_locations: false,
      ..self.options().clone()
    };

    let mut sink = String::new();
    if render::render_fmt(self, &opts, &mut sink).is_err() {
      bug!("formatting a report into a string failed");
    }
    sink
  }
}

/// An error that carries a [`Report`], and prints its diagnostics when
/// displayed.
///
/// This is what fallible operations that also produce diagnostics, like
/// [`Context::open_file()`], return.
pub struct Fatal(Report);

impl Fatal {
  /// Returns the report this error came from.
  pub fn report(&self) -> &Report {
    &self.0
  }

  /// Prints all diagnostics to stderr and terminates the program.
  pub fn terminate(self) -> ! {
    eprintln!("{self}");
    process::exit(1);
  }

  /// Panics with the [`Report`]'s diagnostics as the panic message.
  pub fn panic(self) -> ! {
    panic::panic_any(self.to_string())
  }
}

impl fmt::Debug for Fatal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    render::render_fmt(&self.0, self.0.options(), f)
  }
}

impl fmt::Display for Fatal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(self, f)
  }
}
