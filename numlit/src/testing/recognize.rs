//! Visitor code for tree matching.
//!
//! This code is not very pretty or fast, since it's meant to generate
//! diagnostics in unit tests.

use std::fmt;
use std::fmt::Display;

use crate::f;
use crate::testing::Text;
use crate::token::Node;
use crate::token::Tag;

pub struct Matcher {
  pub tag: Tag,
  pub text: Text,
  pub children: Vec<Matcher>,
}

impl Matcher {
  pub fn recognizes(&self, state: &mut MatchState, node: Node) {
    if self.tag != node.tag() {
      state.error(f!(
        "wrong tag; want {:?}, got {:?}",
        self.tag,
        node.tag()
      ));
    }
    state.match_text("node text", &self.text, node);

    zip_eq(
      "children",
      state,
      &self.children,
      node.children(),
      |state, ours, theirs| ours.recognizes(state, theirs),
    );
  }
}

impl fmt::Debug for Matcher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut d = f.debug_struct(&format!("{:?}", self.tag));
    d.field("text", &self.text);
    if !self.children.is_empty() {
      d.field("children", &self.children);
    }
    d.finish()
  }
}

pub struct MatchState<'a> {
  src: &'a str,
  errors: String,
  stack: Vec<usize>,
  error_count: usize,
}

impl<'a> MatchState<'a> {
  pub fn new(src: &'a str) -> Self {
    Self {
      src,
      errors: String::new(),
      stack: Vec::new(),
      error_count: 0,
    }
  }

  fn error(&mut self, msg: impl Display) {
    use std::fmt::Write;

    self.error_count += 1;
    if self.error_count > 10 {
      return;
    }

    self.errors.push_str("at root");
    for i in &self.stack {
      let _ = write!(self.errors, "[{}]", i);
    }
    let _ = writeln!(self.errors, ": {msg}");
  }

  fn match_text(&mut self, what: &str, text: &Text, node: Node) {
    if !text.recognizes(node.range(), self.src) {
      self.error(f!(
        "wrong {what}; want {:?}, got {:?} @ {:?}",
        text,
        node.text(self.src),
        node.range(),
      ));
    }
  }

  pub fn finish(mut self) -> Result<(), String> {
    use std::fmt::Write;

    if self.error_count > 10 {
      let _ =
        writeln!(self.errors, "... and {} more errors", self.error_count - 10);
    }

    if self.error_count > 0 {
      return Err(self.errors);
    }
    Ok(())
  }
}

pub fn zip_eq<Ours: IntoIterator, Theirs: IntoIterator>(
  what: &str,
  state: &mut MatchState,
  ours: Ours,
  theirs: Theirs,
  mut cb: impl FnMut(&mut MatchState, Ours::Item, Theirs::Item),
) {
  let mut ours = ours.into_iter();
  let mut theirs = theirs.into_iter();
  state.stack.push(0);
  loop {
    let ours = ours.next();
    let theirs = theirs.next();
    if ours.is_none() && theirs.is_none() {
      state.stack.pop();
      break;
    }

    if let (Some(ours), Some(theirs)) = (ours, theirs) {
      cb(state, ours, theirs);

      if let Some(idx) = state.stack.last_mut() {
        *idx += 1;
      }
      continue;
    }

    let popped = state.stack.pop().unwrap_or_default();
    state.error(f!("{what} had unequal lengths (got to {popped})"));
    break;
  }
}
