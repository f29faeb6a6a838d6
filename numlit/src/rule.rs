//! Grammar rules for numeric literals.
//!
//! A numeric literal is matched by trying each [`Form`] in
//! [`Form::PRECEDENCE`] order. Each form is an ordered choice among a few
//! sequences of [`Step`]s; the first sequence to consume the whole candidate
//! span wins.

use std::fmt;

/// The digit separator, which may appear between two digits of a group.
pub const SEPARATOR: char = '_';

/// The radix point.
pub const POINT: char = '.';

/// The imaginary-unit suffix.
pub const IMAGINARY: char = 'i';

/// A numeral base.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Radix {
  /// Base 2, prefixed with `0b`.
  Binary,
  /// Base 8, prefixed with `0` or `0o`.
  Octal,
  /// Base 10, unprefixed.
  Decimal,
  /// Base 16, prefixed with `0x`.
  Hexadecimal,
}

impl Radix {
  /// Returns the numeric base of this radix.
  pub fn base(self) -> u32 {
    match self {
      Self::Binary => 2,
      Self::Octal => 8,
      Self::Decimal => 10,
      Self::Hexadecimal => 16,
    }
  }

  /// Returns whether `c` is a valid digit in this radix.
  ///
  /// Hexadecimal digits may be of either case.
  pub fn is_digit(self, c: char) -> bool {
    c.is_digit(self.base())
  }

  /// Returns the letters that may follow a leading `0` to form this radix's
  /// prefix.
  ///
  /// For octal, the letter is optional: `0600` and `0o600` are both octal.
  pub fn prefix_letters(self) -> &'static [char] {
    match self {
      Self::Binary => &['b', 'B'],
      Self::Octal => &['o', 'O'],
      Self::Decimal => &[],
      Self::Hexadecimal => &['x', 'X'],
    }
  }

  /// Returns the exponent markers for floats in this radix, if any.
  pub fn exponent_markers(self) -> &'static [char] {
    match self {
      Self::Decimal => &['e', 'E'],
      Self::Hexadecimal => &['p', 'P'],
      _ => &[],
    }
  }

  /// Returns the name of this radix, as it appears in scope names and
  /// diagnostics.
  pub fn name(self) -> &'static str {
    match self {
      Self::Binary => "binary",
      Self::Octal => "octal",
      Self::Decimal => "decimal",
      Self::Hexadecimal => "hexadecimal",
    }
  }
}

impl fmt::Display for Radix {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// One of the six structured shapes a numeric literal can take.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Form {
  /// `1.5`, `1e9`, `.25`.
  DecimalFloat,
  /// `0x1p-2`, `0x1.Fp+0`, `0X.8p-0`.
  HexFloat,
  /// `0`, `42`, `4_2`.
  DecimalInt,
  /// `0b1010`.
  BinaryInt,
  /// `0600`, `0o600`.
  OctalInt,
  /// `0xBadFace`.
  HexInt,
}

impl Form {
  /// The order in which forms are tried. The first one to match the whole
  /// candidate span wins.
  ///
  /// Floats come first, so that e.g. `1.5` is never mistaken for a decimal
  /// integer followed by garbage.
  pub const PRECEDENCE: [Form; 6] = [
    Self::DecimalFloat,
    Self::HexFloat,
    Self::DecimalInt,
    Self::BinaryInt,
    Self::OctalInt,
    Self::HexInt,
  ];

  /// Returns the radix of the mantissa of this form.
  pub fn radix(self) -> Radix {
    match self {
      Self::DecimalFloat | Self::DecimalInt => Radix::Decimal,
      Self::HexFloat | Self::HexInt => Radix::Hexadecimal,
      Self::BinaryInt => Radix::Binary,
      Self::OctalInt => Radix::Octal,
    }
  }

  /// Returns whether this is one of the float forms.
  pub fn is_float(self) -> bool {
    matches!(self, Self::DecimalFloat | Self::HexFloat)
  }

  /// Returns the name of this form, for diagnostics.
  pub fn name(self) -> &'static str {
    match self {
      Self::DecimalFloat => "decimal float",
      Self::HexFloat => "hexadecimal float",
      Self::DecimalInt => "decimal integer",
      Self::BinaryInt => "binary integer",
      Self::OctalInt => "octal integer",
      Self::HexInt => "hexadecimal integer",
    }
  }

  /// Returns the alternatives for this form, in the order they are tried.
  ///
  /// Every alternative is implicitly followed by an optional imaginary suffix
  /// and the end of the candidate span.
  pub(crate) fn alternatives(self) -> &'static [&'static [Step]] {
    use Step::*;
    match self {
      Self::DecimalFloat => &[
        &[Unprefixed, Digits, Point, MaybeDigits, MaybeExponent],
        &[Unprefixed, Digits, Exponent],
        &[Point, Digits, MaybeExponent],
      ],
      Self::HexFloat => &[
        &[Prefix, PrefixSeparator, Digits, Point, MaybeDigits, Exponent],
        &[Prefix, PrefixSeparator, Digits, Exponent],
        &[Prefix, Point, Digits, Exponent],
      ],
      Self::DecimalInt => &[&[Unprefixed, Integer]],
      Self::BinaryInt | Self::OctalInt | Self::HexInt => {
        &[&[Prefix, PrefixSeparator, Digits]]
      }
    }
  }
}

impl fmt::Display for Form {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// A single step of a [`Form`] alternative.
///
/// Steps are run left to right, each one picking up where the previous one
/// left off. Optional steps that fail consume nothing.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Step {
  /// Asserts that the literal does not start with a radix prefix.
  Unprefixed,
  /// The radix prefix, such as `0x`.
  Prefix,
  /// A single optional separator directly after the prefix.
  PrefixSeparator,
  /// A digit group.
  Digits,
  /// An optional digit group.
  MaybeDigits,
  /// A decimal digit group that is either exactly `0` or has no leading zero.
  Integer,
  /// A radix point.
  Point,
  /// An exponent: marker, optional sign, decimal digit group.
  Exponent,
  /// An optional exponent.
  MaybeExponent,
}
