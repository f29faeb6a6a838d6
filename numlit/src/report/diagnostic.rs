use std::fmt;
use std::mem;
use std::ops;
use std::panic;

use crate::file::File;
use crate::file::Spanned;
use crate::range::Range;
use crate::report::Report;

/// A diagnostic that is being built up.
///
/// A [`Diagnostic`] is added to the report that owns it when it is dropped, so
/// the usual way to build one is as a temporary:
///
/// ```
/// # fn x(report: &numlit::Report, lit: &numlit::Literal) {
/// report.error("number too large")
///   .saying(lit, "does not fit in 64 bits");
/// # }
/// ```
///
/// Holding one in a variable delays it until the end of the scope, or until
/// [`Diagnostic::commit()`] is called. See e.g. [`Report::error()`].
pub struct Diagnostic {
  pub(super) report: Report,
  pub(super) info: Info,
  pub(super) speculative: bool,
}

pub use annotate_snippets::AnnotationType as Kind;

pub struct Info {
  pub kind: Kind,
  pub message: String,
  pub labels: Vec<Label>,
  pub notes: Vec<(String, Kind)>,
  pub reported_at: Option<&'static panic::Location<'static>>,
}

/// An underlined range with a message, in some file.
pub struct Label {
  pub loc: Loc,
  pub message: String,
  pub kind: Kind,
}

/// A location in a source file: like a [`Span`][crate::Span], but it may
/// also be built from a raw byte range.
///
/// Anything that implements [`ToLoc`] (which includes anything that is
/// [`Spanned`]) is suitable for placing spanned data in diagnostics.
#[derive(Copy, Clone, Debug)]
pub struct Loc {
  pub(super) file: usize,
  pub(super) range: Range,
}

impl Loc {
  /// Constructs a location from a file and a byte range within it.
  ///
  /// # Panics
  ///
  /// Panics if the range is out of order or out of bounds for `file`.
  #[track_caller]
  pub fn new(file: File<'_>, range: ops::Range<usize>) -> Loc {
    Loc {
      file: file.idx(),
      range: Range::new(range, file.len()),
    }
  }
}

/// Converts a value to a file [`Loc`].
pub trait ToLoc {
  /// Performs the conversion.
  fn to_loc(&self) -> Loc;
}

impl ToLoc for Loc {
  fn to_loc(&self) -> Loc {
    *self
  }
}

impl<'ctx, S: Spanned<'ctx>> ToLoc for S {
  fn to_loc(&self) -> Loc {
    let span = self.span();
    Loc { file: span.file().idx(), range: span.range() }
  }
}

impl Info {
  fn empty() -> Self {
    Info {
      kind: Kind::Error,
      message: String::new(),
      labels: Vec::new(),
      notes: Vec::new(),
      reported_at: None,
    }
  }
}

impl Diagnostic {
  pub(super) fn new(report: Report, kind: Kind, message: String) -> Self {
    Diagnostic {
      report,
      speculative: false,
      info: Info { kind, message, ..Info::empty() },
    }
  }

  /// Marks this diagnostic as "speculative", meaning that it will not be
  /// applied until [`Diagnostic::commit()`] is called.
  pub fn speculate(mut self) -> Self {
    self.speculative = true;
    self
  }

  /// Commits this diagnostic to its report, even if it was marked as
  /// speculative.
  pub fn commit(mut self) {
    self.speculative = false;
    drop(self);
  }

  /// Underlines the given location, with no message.
  pub fn at(self, loc: impl ToLoc) -> Self {
    self.saying(loc, "")
  }

  /// Underlines the given location, with a message attached to it.
  pub fn saying(self, loc: impl ToLoc, message: impl fmt::Display) -> Self {
    let kind = self.info.kind;
    self.label(loc, message, kind)
  }

  /// Like `saying`, but the underline is as for a "help" rather than the
  /// overall diagnostic.
  pub fn remark(self, loc: impl ToLoc, message: impl fmt::Display) -> Self {
    self.label(loc, message, Kind::Help)
  }

  fn label(
    mut self,
    loc: impl ToLoc,
    message: impl fmt::Display,
    kind: Kind,
  ) -> Self {
    self.info.labels.push(Label {
      loc: loc.to_loc(),
      message: escape_markdown(message),
      kind,
    });
    self
  }

  /// Appends a note to the bottom of the diagnostic.
  pub fn note(mut self, message: impl fmt::Display) -> Self {
    self.info.notes.push((escape_markdown(message), Kind::Note));
    self
  }

  /// Updates the "reported at" information for this diagnostic.
  ///
  /// This is only intended for tool developers, to find out which line of
  /// Rust emitted a diagnostic.
  pub fn reported_at(mut self, at: &'static panic::Location<'static>) -> Self {
    if self.report.state.opts.show_report_locations {
      self.info.reported_at = Some(at)
    }
    self
  }
}

// HACK: annotate-snippets renders __ as bold, like Markdown, which mangles
// literals like `1__2`. Insert a zero-width space between the underscores.
fn escape_markdown(message: impl fmt::Display) -> String {
  message.to_string().replace("__", "_\u{200b}_")
}

impl Drop for Diagnostic {
  fn drop(&mut self) {
    if self.speculative {
      return;
    }

    let info = mem::replace(&mut self.info, Info::empty());
    self.report.state.insert_diagnostic(info);
  }
}
