//! Built-in errors and warnings.

use std::fmt;
use std::panic::Location;

use byteyarn::YarnBox;

use crate::report::Diagnostic;
use crate::report::Report;
use crate::report::ToLoc;

/// A wrapper over [`Report`] for generating diagnostics.
///
/// See [`Report::builtins()`].
pub struct Builtins(pub(super) Report);

impl Builtins {
  /// Generates an "invalid numeric literal" diagnostic.
  #[track_caller]
  pub fn invalid_literal(self, at: impl ToLoc) -> Diagnostic {
    self
      .0
      .error("invalid numeric literal")
      .saying(at, "this is not a valid number")
      .reported_at(Location::caller())
  }
}

/// Something that can be named in a diagnostic.
///
/// This type exists because there are many potential sources for the "name of
/// a thing", and so it's easier to just have a sink type that they all convert
/// into.
pub enum Expected<'a> {
  /// A literal string, wrapped in backticks in the diagnostic.
  Literal(&'a str),
  /// A description of something, like "digit separator".
  Name(YarnBox<'a, str>),
}

impl fmt::Display for Expected<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Literal(lit) => write!(f, "`{lit}`"),
      Self::Name(name) => f.write_str(name),
    }
  }
}

impl<'a> From<&'a str> for Expected<'a> {
  fn from(value: &'a str) -> Self {
    Self::Literal(value)
  }
}
