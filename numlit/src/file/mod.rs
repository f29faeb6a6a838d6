//! Source files, and spans within them.

use std::fmt;
use std::ops::Index;
use std::ops::RangeBounds;

use camino::Utf8Path;

use crate::range::Range;

mod context;
pub use context::Context;

/// An input source file.
#[derive(Copy, Clone)]
pub struct File<'ctx> {
  path: &'ctx Utf8Path,
  text: &'ctx str,
  ctx: &'ctx Context,
  idx: usize,
}

impl<'ctx> File<'ctx> {
  /// Returns the name of this file, as a path.
  pub fn path(self) -> &'ctx Utf8Path {
    self.path
  }

  /// Returns the textual contents of this file. This function takes a range,
  /// since immediately slicing the file text is an extremely common operation.
  ///
  /// To get the whole file, use `file.text(..)`.
  pub fn text<R>(self, range: R) -> &'ctx str
  where
    str: Index<R, Output = str>,
  {
    &self.text[range]
  }

  /// Returns the length of this file in bytes.
  #[allow(clippy::len_without_is_empty)]
  pub fn len(self) -> usize {
    self.text.len()
  }

  /// Returns the [`Context`] that owns this file.
  pub fn context(self) -> &'ctx Context {
    self.ctx
  }

  /// Creates a new [`Span`] within this file.
  ///
  /// # Panics
  ///
  /// Panics if the range is out of order, or if it ends past the end of the
  /// file.
  #[track_caller]
  pub fn span(self, range: impl RangeBounds<usize>) -> Span<'ctx> {
    Span { file: self, range: Range::new(range, self.len()) }
  }

  pub(crate) fn idx(self) -> usize {
    self.idx
  }
}

impl PartialEq for File<'_> {
  fn eq(&self, other: &Self) -> bool {
    self.ctx.is_same(other.ctx) && self.idx == other.idx
  }
}

/// A range within a [`File`].
#[derive(Copy, Clone)]
pub struct Span<'ctx> {
  file: File<'ctx>,
  range: Range,
}

impl<'ctx> Span<'ctx> {
  /// Gets the file for this span.
  pub fn file(self) -> File<'ctx> {
    self.file
  }

  /// Returns the byte range of this span within its file.
  pub fn range(self) -> Range {
    self.range
  }

  /// Returns the start (inclusive) byte offset of this span.
  pub fn start(self) -> usize {
    self.range.start()
  }

  /// Returns the end (exclusive) byte offset of this span.
  pub fn end(self) -> usize {
    self.range.end()
  }

  /// Returns whether this span has zero length.
  pub fn is_empty(self) -> bool {
    self.range.is_empty()
  }

  /// Returns the length of this span, in bytes.
  pub fn len(self) -> usize {
    self.range.len()
  }

  /// Looks up the textual content of this span.
  pub fn text(self) -> &'ctx str {
    self.file.text(self.range)
  }
}

/// A syntax element which contains a span.
///
/// [`Literal`][crate::Literal] and its parts implement this, so they can be
/// passed directly to [`Diagnostic`][crate::report::Diagnostic] methods.
pub trait Spanned<'ctx> {
  /// Returns the span in this syntax element.
  fn span(&self) -> Span<'ctx>;

  /// Forwards to [`Span::file()`].
  fn file(&self) -> File<'ctx> {
    self.span().file()
  }

  /// Forwards to [`Span::start()`].
  fn start(&self) -> usize {
    self.span().start()
  }

  /// Forwards to [`Span::end()`].
  fn end(&self) -> usize {
    self.span().end()
  }

  /// Forwards to [`Span::len()`].
  fn len(&self) -> usize {
    self.span().len()
  }

  /// Forwards to [`Span::text()`].
  fn text(&self) -> &'ctx str {
    self.span().text()
  }
}

impl<'ctx> Spanned<'ctx> for Span<'ctx> {
  fn span(&self) -> Span<'ctx> {
    *self
  }
}

impl<'ctx, S: Spanned<'ctx>> Spanned<'ctx> for &S {
  fn span(&self) -> Span<'ctx> {
    S::span(self)
  }
}

impl fmt::Debug for File<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "File({})", self.path())
  }
}

impl fmt::Debug for Span<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:?} @ {}[{:?}]", self.text(), self.file.path(), self.range)
  }
}

impl fmt::Display for Span<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.text())
  }
}
