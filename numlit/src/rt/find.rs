//! The grammar proper.
//!
//! Every rule here takes the offset it should start matching at and returns
//! the offset it stopped at, or `None` if it did not match. Rules push nodes
//! into the tree being built; whoever tries a rule is responsible for rolling
//! those nodes back if the rule (or anything after it) fails.

use byteyarn::yarn;
use byteyarn::Yarn;

use crate::range::Range;
use crate::rt::scan::is_word;
use crate::rule::Form;
use crate::rule::Radix;
use crate::rule::Step;
use crate::rule::IMAGINARY;
use crate::rule::POINT;
use crate::rule::SEPARATOR;
use crate::token::Kind;
use crate::token::Sign;
use crate::token::Tag;
use crate::token::Tree;

/// The furthest point any alternative got to before failing.
///
/// This is used to explain to the user why a literal is invalid.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Miss {
  /// Where matching got stuck.
  pub at: usize,
  /// What was wanted at `at`.
  pub want: Want,
  /// The form that got stuck.
  pub form: Form,
}

/// Something a rule wanted but did not find.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Want {
  /// A digit of the given radix.
  Digit(Radix),
  /// A decimal digit after an exponent marker.
  ExponentDigit,
  /// A radix point.
  Point,
  /// An exponent marker for the given mantissa radix.
  Exponent(Radix),
  /// The end of the literal.
  End,
}

impl Want {
  /// Returns a user-facing name for this.
  pub fn name(self) -> Yarn {
    match self {
      Self::Digit(radix) => yarn!("{radix} digit"),
      Self::ExponentDigit => yarn!("exponent digit"),
      Self::Point => yarn!("`{POINT}`"),
      Self::Exponent(radix) => {
        let markers = radix.exponent_markers();
        match markers {
          [lower, upper] => yarn!("`{lower}` or `{upper}`"),
          _ => Yarn::from_static("exponent"),
        }
      }
      Self::End => Yarn::from_static("end of literal"),
    }
  }
}

/// Classifies a candidate span, threading a cursor through each rule.
pub struct Finder<'a> {
  text: &'a str,
  span: Range,
  tree: Tree,
  furthest: Option<Miss>,
  form: Form,
}

impl<'a> Finder<'a> {
  /// Creates a new finder for the given span of `text`.
  #[track_caller]
  pub fn new(text: &'a str, span: Range) -> Self {
    span.bounds_check(text.len());
    assert!(
      text.is_char_boundary(span.start()) && text.is_char_boundary(span.end()),
      "range is not on char boundaries: {:?}",
      span
    );
    Self {
      text,
      span,
      tree: Tree::new(Tag::Literal(Kind::Invalid), span),
      furthest: None,
      form: Form::PRECEDENCE[0],
    }
  }

  /// Tries every form in precedence order. If none of them match the whole
  /// span, the span is classified as invalid.
  ///
  /// Also returns the furthest point an alternative reached, if the literal
  /// is invalid.
  pub fn classify(mut self) -> (Tree, Option<Miss>) {
    for form in Form::PRECEDENCE {
      if let Some(imaginary) = self.take_form(form) {
        self.tree.finish(Tag::Literal(Kind::new(form, imaginary)));
        return (self.tree, None);
      }
    }

    // Nothing matched; the root is already tagged invalid, and covers the
    // whole span.
    (self.tree, self.furthest)
  }

  /// Tries just `form`, returning the tree if it matches the whole span.
  pub fn classify_as(mut self, form: Form) -> Option<Tree> {
    let imaginary = self.take_form(form)?;
    self.tree.finish(Tag::Literal(Kind::new(form, imaginary)));
    Some(self.tree)
  }

  /// Returns the byte at `at`, if it is inside of the candidate span.
  fn byte(&self, at: usize) -> Option<u8> {
    if at < self.span.start() || at >= self.span.end() {
      return None;
    }
    Some(self.text.as_bytes()[at])
  }

  /// Returns whether the byte at `at` is a digit in `radix`.
  fn is_digit(&self, radix: Radix, at: usize) -> bool {
    self.byte(at).is_some_and(|b| radix.is_digit(b as char))
  }

  /// Records a failure, and returns `None` for convenience.
  fn miss<T>(&mut self, at: usize, want: Want) -> Option<T> {
    if self.furthest.map_or(true, |m| at > m.at) {
      self.furthest = Some(Miss { at, want, form: self.form });
    }
    None
  }

  /// Runs an optional rule, undoing any nodes it pushed if it fails.
  fn maybe(
    &mut self,
    at: usize,
    rule: impl FnOnce(&mut Self, usize) -> Option<usize>,
  ) -> usize {
    let mark = self.tree.mark();
    match rule(self, at) {
      Some(end) => end,
      None => {
        self.tree.rollback(mark);
        at
      }
    }
  }

  /// Tries each alternative of `form`; on success, returns whether the
  /// literal was imaginary.
  fn take_form(&mut self, form: Form) -> Option<bool> {
    self.form = form;
    form
      .alternatives()
      .iter()
      .find_map(|steps| self.take_alternative(form, steps))
  }

  fn take_alternative(&mut self, form: Form, steps: &[Step]) -> Option<bool> {
    let mark = self.tree.mark();
    let result = (|| {
      let mut at = self.span.start();
      for &step in steps {
        at = self.take_step(form.radix(), step, at)?;
      }

      let end = self.maybe(at, Self::take_imaginary);
      self.expect_end(end)?;
      Some(end != at)
    })();

    if result.is_none() {
      self.tree.rollback(mark);
    }
    result
  }

  fn take_step(
    &mut self,
    radix: Radix,
    step: Step,
    at: usize,
  ) -> Option<usize> {
    match step {
      Step::Unprefixed => self.expect_unprefixed(at),
      Step::Prefix => self.take_prefix(radix, at),
      Step::PrefixSeparator => Some(self.maybe(at, Self::take_separator)),
      Step::Digits => self.take_digits(radix, Tag::Digits(radix), at),
      Step::MaybeDigits => Some(self.maybe(at, |this, at| {
        this.take_digits(radix, Tag::Digits(radix), at)
      })),
      Step::Integer => self.take_integer(at),
      Step::Point => self.take_point(radix, at),
      Step::Exponent => self.take_exponent(radix, at),
      Step::MaybeExponent => {
        Some(self.maybe(at, |this, at| this.take_exponent(radix, at)))
      }
    }
  }

  /// Checks that a decimal literal starts here: a digit or a point, but not
  /// the `0x`, `0b`, or `0o` that would make it some other radix.
  fn expect_unprefixed(&mut self, at: usize) -> Option<usize> {
    match self.byte(at) {
      Some(b'0') => match self.byte(at + 1) {
        Some(b'x' | b'X' | b'b' | b'B' | b'o' | b'O') => {
          self.miss(at + 1, Want::Digit(Radix::Decimal))
        }
        _ => Some(at),
      },
      Some(b'0'..=b'9' | b'.') => Some(at),
      _ => self.miss(at, Want::Digit(Radix::Decimal)),
    }
  }

  /// Takes a radix prefix: a `0` followed by the radix's letter. The letter is
  /// optional for octal.
  fn take_prefix(&mut self, radix: Radix, at: usize) -> Option<usize> {
    if self.byte(at) != Some(b'0') {
      return self.miss(at, Want::Digit(Radix::Decimal));
    }

    let letters = radix.prefix_letters();
    let has_letter = self
      .byte(at + 1)
      .is_some_and(|b| letters.contains(&(b as char)));

    let end = match (has_letter, radix) {
      (true, _) => at + 2,
      (false, Radix::Octal) => at + 1,
      (false, _) => return self.miss(at + 1, Want::Digit(radix)),
    };

    self.tree.leaf(Tag::Prefix(radix), at, end);
    Some(end)
  }

  /// Takes a single separator, with no constraints on its neighbors. This is
  /// only used directly after a prefix, as in `0x_ff`.
  fn take_separator(&mut self, at: usize) -> Option<usize> {
    if self.byte(at) != Some(SEPARATOR as u8) {
      return None;
    }
    self.tree.leaf(Tag::Separator, at, at + 1);
    Some(at + 1)
  }

  /// Takes a maximal group of digits in `radix`, tagged with `tag`.
  ///
  /// A separator is only part of the group if there is a digit on either side
  /// of it, so a group never starts or ends with one, and never contains two
  /// in a row.
  ///
  /// Octal groups are the exception: they are a single run of octal digits
  /// with no separators at all, so `0o6_00` is invalid even though `0x6_00`
  /// is not.
  fn take_digits(
    &mut self,
    radix: Radix,
    tag: Tag,
    at: usize,
  ) -> Option<usize> {
    if !self.is_digit(radix, at) {
      let want = match tag {
        Tag::ExponentDigits(..) => Want::ExponentDigit,
        _ => Want::Digit(radix),
      };
      return self.miss(at, want);
    }

    let node = self.tree.open(tag, at);
    let mut end = at + 1;
    loop {
      if self.is_digit(radix, end) {
        end += 1;
        continue;
      }

      if radix != Radix::Octal
        && self.byte(end) == Some(SEPARATOR as u8)
        && self.is_digit(radix, end + 1)
      {
        self.tree.leaf(Tag::Separator, end, end + 1);
        end += 1;
        continue;
      }

      break;
    }

    self.tree.close(node, end);
    Some(end)
  }

  /// Takes the digits of a decimal integer, which may only start with `0` if
  /// they are exactly `0`. Anything else with a leading zero is octal.
  fn take_integer(&mut self, at: usize) -> Option<usize> {
    let radix = Radix::Decimal;
    let end = self.take_digits(radix, Tag::Digits(radix), at)?;
    if self.byte(at) == Some(b'0') && end > at + 1 {
      return self.miss(at + 1, Want::End);
    }
    Some(end)
  }

  /// Takes a radix point, which must have a digit of `radix` on at least one
  /// side.
  fn take_point(&mut self, radix: Radix, at: usize) -> Option<usize> {
    if self.byte(at) != Some(POINT as u8)
      || !(self.is_digit(radix, at.wrapping_sub(1))
        || self.is_digit(radix, at + 1))
    {
      return self.miss(at, Want::Point);
    }

    self.tree.leaf(Tag::Point(radix), at, at + 1);
    Some(at + 1)
  }

  /// Takes an exponent: a marker, an optional sign, and a decimal digit group.
  /// `radix` is the radix of the mantissa, which selects the marker.
  fn take_exponent(&mut self, radix: Radix, at: usize) -> Option<usize> {
    let is_marker = self
      .byte(at)
      .is_some_and(|b| radix.exponent_markers().contains(&(b as char)));
    let after_separator =
      self.byte(at.wrapping_sub(1)) == Some(SEPARATOR as u8);
    if !is_marker || after_separator {
      return self.miss(at, Want::Exponent(radix));
    }
    self.tree.leaf(Tag::ExponentMarker(radix), at, at + 1);
    let mut at = at + 1;

    let sign = match self.byte(at) {
      Some(b'+') => Some(Sign::Pos),
      Some(b'-') => Some(Sign::Neg),
      _ => None,
    };
    if let Some(sign) = sign {
      self.tree.leaf(Tag::ExponentSign(sign, radix), at, at + 1);
      at += 1;
    }

    self.take_digits(Radix::Decimal, Tag::ExponentDigits(radix), at)
  }

  /// Takes an imaginary suffix, so long as it is not followed by another word
  /// character.
  ///
  /// The lookahead is not limited to the candidate span: the span never
  /// includes non-ASCII characters, but `1ié` is still not imaginary.
  fn take_imaginary(&mut self, at: usize) -> Option<usize> {
    if self.byte(at) != Some(IMAGINARY as u8) {
      return None;
    }
    let next = self.text[at + 1..].chars().next();
    if next.is_some_and(is_word) {
      return self.miss(at + 1, Want::End);
    }

    self.tree.leaf(Tag::Imaginary, at, at + 1);
    Some(at + 1)
  }

  /// Checks that `at` is the end of the candidate span.
  fn expect_end(&mut self, at: usize) -> Option<()> {
    if at != self.span.end() {
      return self.miss(at, Want::End);
    }
    Some(())
  }
}
