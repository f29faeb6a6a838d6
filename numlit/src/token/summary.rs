//! Implementation of `Tree::summary()`.

use std::fmt::Write;

use crate::token::Tag;
use crate::token::Tree;

impl Tree {
  /// Returns a string that summarizes the contents of this tree, one node per
  /// line, indented by depth.
  ///
  /// If `src` is the text this tree was built from, each line also shows the
  /// text of its node.
  ///
  /// ```text
  /// Literal(hexadecimal integer) 0..8
  ///   Prefix(Hexadecimal) 0..2 "0x" keyword.other.unit.hexadecimal
  ///   ...
  /// ```
  pub fn summary(&self, src: Option<&str>) -> String {
    let mut out = String::new();
    for (depth, node) in self.walk() {
      let _ = write!(
        out,
        "{:indent$}{} {:?}",
        "",
        tag_name(node.tag()),
        node.range(),
        indent = depth * 2,
      );
      if let Some(src) = src {
        let _ = write!(out, " {:?}", node.text(src));
      }
      if let Some(scope) = node.tag().scope() {
        let _ = write!(out, " {scope}");
      }
      out.push('\n');
    }
    out
  }
}

fn tag_name(tag: Tag) -> String {
  match tag {
    Tag::Literal(kind) => format!("Literal({kind})"),
    tag => format!("{tag:?}"),
  }
}
