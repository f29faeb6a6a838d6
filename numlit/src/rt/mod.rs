//! The recognizer runtime.

use std::ops;

use crate::f;
use crate::file::File;
use crate::file::Spanned;
use crate::range::Range;
use crate::report::Expected;
use crate::report::Loc;
use crate::report::Report;
use crate::rule::Form;
use crate::rule::SEPARATOR;
use crate::token::Literal;
use crate::token::Tree;

mod find;
mod scan;

use find::Finder;
use find::Miss;
use find::Want;

pub use scan::scan;

/// Classifies `text[range]` as a numeric literal.
///
/// This always produces a tree: if no structured form matches the whole
/// range, the result is an invalid literal covering all of it.
///
/// `range` is usually the result of [`scan()`], but it need not be; for
/// example, `_42` is not a candidate (since it does not start with a digit),
/// but classifying it directly yields an invalid literal.
///
/// # Panics
///
/// Panics if `range` is out of bounds for `text`, or if either end of it does
/// not fall on a `char` boundary.
#[track_caller]
pub fn classify(text: &str, range: ops::Range<usize>) -> Tree {
  Finder::new(text, Range::new(range, text.len())).classify().0
}

/// Tries to classify `text[range]` as exactly `form`, ignoring every other
/// form.
///
/// Returns `None` if `form` does not match the whole range.
///
/// # Panics
///
/// Panics under the same conditions as [`classify()`].
#[track_caller]
pub fn classify_as(
  text: &str,
  range: ops::Range<usize>,
  form: Form,
) -> Option<Tree> {
  Finder::new(text, Range::new(range, text.len())).classify_as(form)
}

/// Recognizes the numeric literal starting at `pos`, if there is one.
///
/// Returns `None` if there is no candidate at `pos` (see [`scan()`]).
pub fn recognize(text: &str, pos: usize) -> Option<Tree> {
  let end = scan(text, pos)?;
  Some(classify(text, pos..end))
}

/// Returns an iterator over every numeric literal in `text`, in order.
///
/// A literal never spans more than one line.
pub fn find_all(text: &str) -> Literals<'_> {
  Literals { text, pos: 0 }
}

/// An iterator over the numeric literals in some text.
///
/// See [`find_all()`].
pub struct Literals<'a> {
  text: &'a str,
  pos: usize,
}

impl Iterator for Literals<'_> {
  type Item = Tree;

  fn next(&mut self) -> Option<Self::Item> {
    let (start, end) = next_candidate(self.text, &mut self.pos)?;
    Some(classify(self.text, start..end))
  }
}

/// Finds the next candidate span at or after `*pos`, and advances `*pos` past
/// it.
fn next_candidate(text: &str, pos: &mut usize) -> Option<(usize, usize)> {
  while *pos < text.len() {
    let start = *pos;
    if let Some(end) = scan(text, start) {
      *pos = end;
      return Some((start, end));
    }

    let next = text[start..].chars().next().map_or(1, char::len_utf8);
    *pos += next;
  }
  None
}

impl<'ctx> File<'ctx> {
  /// Recognizes the numeric literal starting at `pos`, if there is one.
  ///
  /// If the literal is invalid, an error is added to `report` explaining why.
  pub fn literal_at(
    self,
    pos: usize,
    report: &Report,
  ) -> Option<Literal<'ctx>> {
    let end = scan(self.text(..), pos)?;
    Some(emit(self, pos, end, report))
  }

  /// Recognizes every numeric literal in this file, in order.
  ///
  /// An error is added to `report` for each invalid literal.
  pub fn literals(self, report: &Report) -> Vec<Literal<'ctx>> {
    let text = self.text(..);
    let mut pos = 0;
    let mut lits = Vec::new();
    while let Some((start, end)) = next_candidate(text, &mut pos) {
      lits.push(emit(self, start, end, report));
    }
    lits
  }
}

fn emit<'ctx>(
  file: File<'ctx>,
  start: usize,
  end: usize,
  report: &Report,
) -> Literal<'ctx> {
  let (tree, miss) = Finder::new(file.text(..), Range(start, end)).classify();
  let lit = Literal::new(file.span(start..end), tree);
  if lit.is_invalid() {
    diagnose(file, &lit, miss, report);
  }
  lit
}

/// Explains why `lit` is invalid, using the furthest point any form reached.
fn diagnose(file: File, lit: &Literal, miss: Option<Miss>, report: &Report) {
  let diagnostic = report.builtins().invalid_literal(lit);
  if !report.options().explain {
    return;
  }
  let Some(Miss { at, want, form }) = miss else { return };

  // Only a suffix check looks past the literal, at whatever the scanner
  // stopped before.
  let rest = match want {
    Want::End => file.text(at..),
    _ => file.text(at..lit.end()),
  };
  let len = rest.chars().next().map_or(0, char::len_utf8);
  let found = Expected::Literal(&rest[..len]);
  let want = Expected::Name(want.name());
  let loc = Loc::new(file, at..at + len);

  match &rest[..len] {
    "" => diagnostic.remark(loc, f!("expected {want} after this")),
    sep if sep.starts_with(SEPARATOR) => diagnostic
      .remark(loc, "unexpected digit separator")
      .note("digit separators may only appear between two digits"),
    _ if matches!(miss, Some(Miss { want: Want::End, .. })) => {
      diagnostic.remark(loc, f!("unexpected {found} in {form}"))
    }
    _ => diagnostic.remark(loc, f!("expected {want}, found {found}")),
  };
}
