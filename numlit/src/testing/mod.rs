//! Literal testing helpers.
//!
//! This module provides testing-oriented matchers for matching on a
//! [`Tree`], plus helpers for checking the diagnostics in a [`Report`].
//!
//! These are intended for writing *tests*. To inspect a tree in real code,
//! use [`Tree::root()`] and [`Tree::walk()`] instead.

use byteyarn::Yarn;
use std::env;
use std::fmt;
use std::fs;
use std::ops;
use std::path::Path;

use crate::range::Range;
use crate::report::Report;
use crate::token::Kind;
use crate::token::Tag;
use crate::token::Tree;

pub mod corpus;
mod recognize;

/// Checks that `report` contains the expected diagnostics in `path`, verbatim.
///
/// If the contents do not match, it will print a diff to stderr and panic.
///
/// If the `NUMLIT_REGENERATE` env var is set, instead of reading the file and
/// performing the check, it will write the expected contents to the file,
/// allowing for easy generation of test data.
#[track_caller]
pub fn check_report(report: &Report, path: &(impl AsRef<Path> + ?Sized)) {
  let path = path.as_ref();
  let got = report.write_out_for_test();
  let want = if env::var("NUMLIT_REGENERATE").is_ok() {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, got).unwrap();
    return;
  } else {
    fs::read_to_string(path).unwrap()
  };

  eprintln!("checking against {}...", path.display());
  similar_asserts::assert_eq!(want, got);
}

/// Checks that `report` contains no diagnostics.
///
/// If it does, it will print them to stderr and panic.
#[track_caller]
pub fn check_report_ok(report: &Report) {
  if let Err(e) = report.fatal_or(()) {
    e.panic();
  }
}

/// A matcher for a literal's [`Tree`].
///
/// A matcher describes one node: its tag, its text, and (in order) the
/// matchers for all of its children. A matcher with no children only matches
/// leaves.
///
/// ```
/// use numlit::rule::Radix;
/// use numlit::testing::Matcher;
/// use numlit::Kind;
/// use numlit::Tag;
///
/// let text = "0x_ff";
/// let tree = numlit::recognize(text, 0).unwrap();
///
/// Matcher::new(Kind::Int { radix: Radix::Hexadecimal, imaginary: false })
///   .then(Tag::Prefix(Radix::Hexadecimal), "0x")
///   .then(Tag::Separator, "_")
///   .then(Tag::Digits(Radix::Hexadecimal), "ff")
///   .assert_matches(text, &tree);
/// ```
pub struct Matcher {
  root: recognize::Matcher,
}

impl Matcher {
  /// Creates a new matcher for a literal of the given kind, covering any
  /// span.
  pub fn new(kind: Kind) -> Self {
    Self::node(Tag::Literal(kind), Text::any())
  }

  /// Creates a new matcher for an arbitrary node, which may be passed to
  /// [`Matcher::then_nested()`].
  pub fn node(tag: Tag, text: impl Into<Text>) -> Self {
    Self {
      root: recognize::Matcher {
        tag,
        text: text.into(),
        children: Vec::new(),
      },
    }
  }

  /// Creates a matcher for an invalid literal with the given text. Invalid
  /// literals never have children.
  pub fn invalid(text: impl Into<Text>) -> Self {
    Self::node(Tag::Literal(Kind::Invalid), text)
  }

  /// Sets an expectation for the text of the node this matcher describes.
  pub fn text(mut self, text: impl Into<Text>) -> Self {
    self.root.text = text.into();
    self
  }

  /// Adds an expected leaf child.
  pub fn then(self, tag: Tag, text: impl Into<Text>) -> Self {
    self.then_nested(Self::node(tag, text))
  }

  /// Adds an expected child, which may have children of its own.
  pub fn then_nested(mut self, child: Matcher) -> Self {
    self.root.children.push(child.root);
    self
  }

  /// Matches `tree` against this matcher, and panics if it doesn't.
  ///
  /// `src` must be the text `tree` was built from.
  #[track_caller]
  pub fn assert_matches(&self, src: &str, tree: &Tree) {
    self.matches(src, tree).unwrap()
  }

  /// Matches `tree` against this matcher.
  ///
  /// If matching fails, returns an error describing why.
  pub fn matches(&self, src: &str, tree: &Tree) -> Result<(), impl fmt::Debug> {
    struct DebugBy(String);
    impl fmt::Debug for DebugBy {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }

    let mut state = recognize::MatchState::new(src);
    self.root.recognizes(&mut state, tree.root());
    state
      .finish()
      .map_err(|e| DebugBy(format!("{e}\n{}", tree.summary(Some(src)))))
  }
}

impl fmt::Debug for Matcher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(&self.root, f)
  }
}

/// A matcher for a chunk of text from the input source.
///
/// This is slightly more general than a range, since it can specify the
/// content of the text and the offsets separately, and optionally. `Text`
/// values are intended to *recognize* various nodes.
///
/// `&str` and `String` are both convertible to `Text`.
#[derive(Clone)]
pub struct Text {
  text: Option<Yarn>,
  range: Option<ops::Range<usize>>,
}

impl Text {
  /// Returns a matcher that recognizes all spans.
  pub fn any() -> Self {
    Text { text: None, range: None }
  }

  /// Returns a matcher that recognizes spans with the given text.
  pub fn new(text: impl Into<Yarn>) -> Self {
    Text { text: Some(text.into()), range: None }
  }

  /// Returns a matcher that recognizes spans with the given byte range.
  pub fn range(range: ops::Range<usize>) -> Self {
    Text { text: None, range: Some(range) }
  }

  /// Returns a matcher that recognizes spans with the given byte range and
  /// text.
  pub fn text_and_range(
    text: impl Into<Yarn>,
    range: ops::Range<usize>,
  ) -> Self {
    Text {
      text: Some(text.into()),
      range: Some(range),
    }
  }

  /// Returns whether this recognizes `range` within `src`.
  fn recognizes(&self, range: Range, src: &str) -> bool {
    !self
      .text
      .as_ref()
      .is_some_and(|text| text.as_str() != &src[range])
      && !self
        .range
        .as_ref()
        .is_some_and(|want| want != &range.bounds())
  }
}

impl<Y: Into<Yarn>> From<Y> for Text {
  fn from(value: Y) -> Self {
    Text::new(value)
  }
}

impl fmt::Debug for Text {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match (&self.text, &self.range) {
      (Some(text), Some(range)) => write!(f, "{text:?} @ {range:?}"),
      (Some(text), None) => fmt::Debug::fmt(text, f),
      (None, Some(range)) => write!(f, "<any> @ {range:?}"),
      (None, None) => f.write_str("<any>"),
    }
  }
}
