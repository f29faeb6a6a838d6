//! Classification results.
//!
//! Recognizing a literal produces a [`Tree`]: a root node tagged with the
//! literal's [`Kind`], whose children partition the literal into tagged
//! sub-spans (prefix, digit groups, point, exponent, and so on). Digit groups
//! further contain their separators as children.
//!
//! Trees are plain data with byte ranges into whatever text they were built
//! from. [`Literal`] pairs a tree with the [`File`][crate::File] it came from,
//! so that its parts can be used as [`Span`]s in diagnostics.

use std::fmt;
use std::iter;

use crate::file::Span;
use crate::file::Spanned;
use crate::range::Range;
use crate::rule::Form;
use crate::rule::Radix;

mod summary;

/// The sign of an exponent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Sign {
  /// `+`.
  Pos,
  /// `-`.
  Neg,
}

impl Sign {
  /// Returns the character for this sign.
  pub fn as_char(self) -> char {
    match self {
      Self::Pos => '+',
      Self::Neg => '-',
    }
  }
}

/// The top-level classification of a literal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
  /// An integer, possibly imaginary, like `0x_ff` or `42i`.
  Int {
    /// The radix of the integer.
    radix: Radix,
    /// Whether the literal ends in an imaginary suffix.
    imaginary: bool,
  },
  /// A float, possibly imaginary, like `1.5e9` or `0x1p-2i`.
  Float {
    /// The radix of the mantissa; always decimal or hexadecimal.
    radix: Radix,
    /// Whether the literal ends in an imaginary suffix.
    imaginary: bool,
  },
  /// Something that looked like a number, but did not parse as one.
  Invalid,
}

impl Kind {
  pub(crate) fn new(form: Form, imaginary: bool) -> Self {
    let radix = form.radix();
    if form.is_float() {
      Self::Float { radix, imaginary }
    } else {
      Self::Int { radix, imaginary }
    }
  }

  /// Returns the radix of this literal, unless it's invalid.
  pub fn radix(self) -> Option<Radix> {
    match self {
      Self::Int { radix, .. } | Self::Float { radix, .. } => Some(radix),
      Self::Invalid => None,
    }
  }

  /// Returns the [`Form`] that matched this literal, unless it's invalid.
  pub fn form(self) -> Option<Form> {
    let form = match self {
      Self::Int { radix, .. } => match radix {
        Radix::Binary => Form::BinaryInt,
        Radix::Octal => Form::OctalInt,
        Radix::Decimal => Form::DecimalInt,
        Radix::Hexadecimal => Form::HexInt,
      },
      Self::Float { radix, .. } => match radix {
        Radix::Hexadecimal => Form::HexFloat,
        _ => Form::DecimalFloat,
      },
      Self::Invalid => return None,
    };
    Some(form)
  }

  /// Returns whether this is an imaginary literal.
  pub fn is_imaginary(self) -> bool {
    matches!(
      self,
      Self::Int { imaginary: true, .. } | Self::Float { imaginary: true, .. }
    )
  }

  /// Returns whether this is an invalid literal.
  pub fn is_invalid(self) -> bool {
    self == Self::Invalid
  }
}

impl fmt::Display for Kind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let Some(form) = self.form() else {
      return f.write_str("invalid numeric literal");
    };

    if self.is_imaginary() {
      write!(f, "imaginary ")?;
    }
    f.write_str(form.name())
  }
}

/// A classification tag, attached to each node of a [`Tree`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tag {
  /// The whole literal.
  Literal(Kind),
  /// A radix prefix, such as `0x` or `0o`. Octal's prefix may be a lone `0`.
  Prefix(Radix),
  /// A run of digits, with separators as children.
  Digits(Radix),
  /// A digit separator.
  Separator,
  /// The radix point of a float.
  Point(Radix),
  /// The `e` or `p` introducing an exponent. The radix is the mantissa's.
  ExponentMarker(Radix),
  /// The sign after an exponent marker. The radix is the mantissa's.
  ExponentSign(Sign, Radix),
  /// The digits of an exponent, which are always decimal. The radix is the
  /// mantissa's.
  ExponentDigits(Radix),
  /// The imaginary suffix, `i`.
  Imaginary,
}

impl Tag {
  /// Returns the TextMate scope name for this tag, if it has one.
  ///
  /// Valid literals themselves have no scope; only their parts do.
  pub fn scope(self) -> Option<&'static str> {
    use Radix::*;
    let scope = match self {
      Self::Literal(Kind::Invalid) => "invalid.illegal.constant.numeric",
      Self::Literal(..) => return None,

      Self::Prefix(Binary) => "keyword.other.unit.binary",
      Self::Prefix(Octal) => "keyword.other.unit.octal",
      Self::Prefix(Hexadecimal) => "keyword.other.unit.hexadecimal",
      Self::Prefix(Decimal) => return None,

      Self::Digits(Binary) => "constant.numeric.binary",
      Self::Digits(Octal) => "constant.numeric.octal",
      Self::Digits(Decimal) => "constant.numeric.decimal",
      Self::Digits(Hexadecimal) => "constant.numeric.hexadecimal",

      Self::Separator => "punctuation.separator.constant.numeric",

      Self::Point(Hexadecimal) => "constant.numeric.hexadecimal",
      Self::Point(..) => "constant.numeric.decimal.point",

      Self::ExponentMarker(Hexadecimal) => {
        "keyword.other.unit.exponent.hexadecimal"
      }
      Self::ExponentMarker(..) => "keyword.other.unit.exponent.decimal",

      Self::ExponentSign(Sign::Pos, Hexadecimal) => {
        "keyword.operator.plus.exponent.hexadecimal"
      }
      Self::ExponentSign(Sign::Neg, Hexadecimal) => {
        "keyword.operator.minus.exponent.hexadecimal"
      }
      Self::ExponentSign(Sign::Pos, ..) => {
        "keyword.operator.plus.exponent.decimal"
      }
      Self::ExponentSign(Sign::Neg, ..) => {
        "keyword.operator.minus.exponent.decimal"
      }

      Self::ExponentDigits(Hexadecimal) => {
        "constant.numeric.exponent.hexadecimal"
      }
      Self::ExponentDigits(..) => "constant.numeric.exponent.decimal",

      Self::Imaginary => "keyword.other.unit.imaginary",
    };
    Some(scope)
  }
}

/// One node in a flattened [`Tree`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Entry {
  tag: Tag,
  range: Range,
  // Number of entries after this one that are its descendants.
  descendants: u32,
}

/// A classified literal: a tree of tagged, non-overlapping spans.
///
/// The tree is stored flattened, in pre-order. Use [`Tree::root()`] to
/// navigate it, or [`Tree::walk()`] to visit every node.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree {
  entries: Vec<Entry>,
}

impl Tree {
  /// Creates a tree with just a root node, to be filled in by the matcher.
  pub(crate) fn new(tag: Tag, range: Range) -> Self {
    Self {
      entries: vec![Entry { tag, range, descendants: 0 }],
    }
  }

  /// Returns the current number of entries; used as a rollback mark.
  pub(crate) fn mark(&self) -> usize {
    self.entries.len()
  }

  /// Discards every entry pushed after `mark`.
  pub(crate) fn rollback(&mut self, mark: usize) {
    if mark == 0 {
      bug!("attempted to roll back the root of a tree");
    }
    self.entries.truncate(mark);
  }

  /// Starts a new node at `start`; it is closed by [`Tree::close()`].
  pub(crate) fn open(&mut self, tag: Tag, start: usize) -> usize {
    let idx = self.entries.len();
    self.entries.push(Entry {
      tag,
      range: Range(start, start),
      descendants: 0,
    });
    idx
  }

  /// Closes the node at `idx`, which ends at `end` and owns every node pushed
  /// since it was opened.
  pub(crate) fn close(&mut self, idx: usize, end: usize) {
    let len = self.entries.len();
    let entry = &mut self.entries[idx];
    entry.range = Range(entry.range.start(), end);
    entry.descendants = (len - idx - 1) as u32;
  }

  /// Pushes a leaf node.
  pub(crate) fn leaf(&mut self, tag: Tag, start: usize, end: usize) {
    let idx = self.open(tag, start);
    self.close(idx, end);
  }

  /// Re-tags the root, making it own every entry in the tree.
  pub(crate) fn finish(&mut self, tag: Tag) {
    let end = self.entries[0].range.end();
    self.entries[0].tag = tag;
    self.close(0, end);
  }

  /// Returns the root of this tree, which represents the whole literal.
  pub fn root(&self) -> Node<'_> {
    Node { tree: self, idx: 0 }
  }

  /// Returns the top-level classification of this literal.
  pub fn kind(&self) -> Kind {
    match self.root().tag() {
      Tag::Literal(kind) => kind,
      tag => bug!("tree root was tagged {:?}", tag),
    }
  }

  /// Returns the [`Form`] that matched this literal, unless it's invalid.
  pub fn form(&self) -> Option<Form> {
    self.kind().form()
  }

  /// Returns the radix of this literal, unless it's invalid.
  pub fn radix(&self) -> Option<Radix> {
    self.kind().radix()
  }

  /// Returns whether this literal has an imaginary suffix.
  pub fn is_imaginary(&self) -> bool {
    self.kind().is_imaginary()
  }

  /// Returns whether this literal is invalid.
  pub fn is_invalid(&self) -> bool {
    self.kind().is_invalid()
  }

  /// Returns the byte range of the whole literal.
  pub fn range(&self) -> Range {
    self.root().range()
  }

  /// Returns the text of the whole literal, given the text this tree was
  /// built from.
  pub fn text<'a>(&self, src: &'a str) -> &'a str {
    self.root().text(src)
  }

  /// Returns the number of nodes in this tree, including the root.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Trees are never empty, since they always have a root.
  pub fn is_empty(&self) -> bool {
    false
  }

  /// Visits every node of the tree in pre-order, along with its depth (the
  /// root has depth zero).
  pub fn walk(&self) -> impl Iterator<Item = (usize, Node<'_>)> + '_ {
    let mut ends = Vec::<usize>::new();
    (0..self.entries.len()).map(move |idx| {
      while ends.last().is_some_and(|&end| end <= idx) {
        ends.pop();
      }
      let depth = ends.len();
      ends.push(idx + 1 + self.entries[idx].descendants as usize);
      (depth, Node { tree: self, idx })
    })
  }
}

impl fmt::Debug for Tree {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.summary(None))
  }
}

/// A node in a [`Tree`].
#[derive(Copy, Clone)]
pub struct Node<'a> {
  tree: &'a Tree,
  idx: usize,
}

impl<'a> Node<'a> {
  fn entry(self) -> &'a Entry {
    &self.tree.entries[self.idx]
  }

  /// Returns this node's tag.
  pub fn tag(self) -> Tag {
    self.entry().tag
  }

  /// Returns the byte range this node covers.
  pub fn range(self) -> Range {
    self.entry().range
  }

  /// Returns the text of this node, given the text its tree was built from.
  pub fn text<'s>(self, src: &'s str) -> &'s str {
    &src[self.range()]
  }

  /// Returns whether this node has no children.
  pub fn is_leaf(self) -> bool {
    self.entry().descendants == 0
  }

  /// Returns an iterator over the direct children of this node.
  pub fn children(self) -> impl Iterator<Item = Node<'a>> + Clone {
    let tree = self.tree;
    let end = self.idx + 1 + self.entry().descendants as usize;
    let mut next = self.idx + 1;
    iter::from_fn(move || {
      if next >= end {
        return None;
      }
      let node = Node { tree, idx: next };
      next += 1 + node.entry().descendants as usize;
      Some(node)
    })
  }

  /// Returns the first child with the given tag.
  pub fn child(self, tag: Tag) -> Option<Node<'a>> {
    self.children().find(|n| n.tag() == tag)
  }
}

impl fmt::Debug for Node<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:?} @ {:?}", self.tag(), self.range())
  }
}

/// A literal recognized in a [`File`][crate::File].
///
/// This is a [`Tree`] together with the file it came from, so that each of
/// its parts can be turned into a [`Span`].
#[derive(Clone)]
pub struct Literal<'ctx> {
  span: Span<'ctx>,
  tree: Tree,
}

impl<'ctx> Literal<'ctx> {
  pub(crate) fn new(span: Span<'ctx>, tree: Tree) -> Self {
    Self { span, tree }
  }

  /// Returns the underlying tree.
  pub fn tree(&self) -> &Tree {
    &self.tree
  }

  /// Returns the top-level classification of this literal.
  pub fn kind(&self) -> Kind {
    self.tree.kind()
  }

  /// Returns whether this literal is invalid.
  pub fn is_invalid(&self) -> bool {
    self.tree.is_invalid()
  }

  /// Returns the root of this literal's tree as a [`Part`].
  pub fn root(&self) -> Part<'_, 'ctx> {
    Part { span: self.span, node: self.tree.root() }
  }

  /// Returns the direct parts of this literal, in order.
  pub fn parts(&self) -> impl Iterator<Item = Part<'_, 'ctx>> + '_ {
    self.root().children()
  }

  /// Returns the first direct part of this literal with the given tag.
  pub fn part(&self, tag: Tag) -> Option<Part<'_, 'ctx>> {
    self.root().child(tag)
  }
}

impl<'ctx> Spanned<'ctx> for Literal<'ctx> {
  fn span(&self) -> Span<'ctx> {
    self.span
  }
}

impl fmt::Debug for Literal<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.tree.summary(Some(self.span.file().text(..))))
  }
}

/// A node of a [`Literal`], with its span.
#[derive(Copy, Clone)]
pub struct Part<'a, 'ctx> {
  span: Span<'ctx>,
  node: Node<'a>,
}

impl<'a, 'ctx> Part<'a, 'ctx> {
  /// Returns this part's tag.
  pub fn tag(self) -> Tag {
    self.node.tag()
  }

  /// Returns this part's tree node.
  pub fn node(self) -> Node<'a> {
    self.node
  }

  /// Returns the direct sub-parts of this part, in order.
  pub fn children(self) -> impl Iterator<Item = Part<'a, 'ctx>> {
    let file = self.span.file();
    self.node.children().map(move |node| Part {
      span: file.span(node.range().bounds()),
      node,
    })
  }

  /// Returns the first direct sub-part with the given tag.
  pub fn child(self, tag: Tag) -> Option<Part<'a, 'ctx>> {
    self.children().find(|p| p.tag() == tag)
  }
}

impl<'ctx> Spanned<'ctx> for Part<'_, 'ctx> {
  fn span(&self) -> Span<'ctx> {
    self.span
  }
}

impl fmt::Debug for Part<'_, '_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:?} {:?}", self.tag(), self.span)
  }
}
