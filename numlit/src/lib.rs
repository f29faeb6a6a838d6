//! `numlit` - numeric literals, taken apart. 🔢
//!
//! This crate recognizes the numeric literals of a Go-like language, decides
//! what kind of number each one is, and breaks it into sub-spans (prefixes,
//! digit groups, separators, points, exponents, and imaginary suffixes) for
//! fine-grained annotation, such as syntax highlighting.
//!
//! It does not lex anything other than numbers, and it does not compute the
//! value of a number. It *does* recognize garbage that looks like a number,
//! such as `1__0` or `0o8`, and classifies it as invalid instead of silently
//! giving up on it.
//!
//! The grammar accepted is, roughly:
//!
//! ```text
//! int       = decimal | binary | octal | hex
//! decimal   = "0" | [1-9] ["_"] decimal_digits
//! binary    = "0" [bB] ["_"] binary_digits
//! octal     = "0" [oO] ["_"] [0-7]+
//! hex       = "0" [xX] ["_"] hex_digits
//!
//! float     = decimal_digits "." [decimal_digits] [exp]
//!           | decimal_digits exp
//!           | "." decimal_digits [exp]
//!           | "0" [xX] ["_"] hex_digits "." [hex_digits] hex_exp
//!           | "0" [xX] ["_"] hex_digits hex_exp
//!           | "0" [xX] "." hex_digits hex_exp
//!
//! literal   = (int | float) ["i"]
//! ```
//!
//! where `_` may appear between any two digits of the same digit group.
//!
//! # Quick Start
//!
//! The simplest entry point is [`recognize()`], which operates on plain text.
//!
//! ```
//! use numlit::Kind;
//! use numlit::rule::Radix;
//!
//! let tree = numlit::recognize("x := 0x_67_7a;", 5).unwrap();
//! assert_eq!(
//!   tree.kind(),
//!   Kind::Int { radix: Radix::Hexadecimal, imaginary: false },
//! );
//! assert_eq!(tree.text("x := 0x_67_7a;"), "0x_67_7a");
//!
//! let bad = numlit::recognize("4__2", 0).unwrap();
//! assert!(bad.is_invalid());
//! ```
//!
//! When you want diagnostics, put your text in a [`Context`], and use
//! [`File::literals()`].
//!
//! ```
//! let ctx = numlit::Context::new();
//! let report = ctx.new_report();
//!
//! let file = ctx.new_file("lits.go", "a := 42\nb := 1_.5\n");
//! let lits = file.literals(&report);
//! assert_eq!(lits.len(), 2);
//! assert!(lits[1].is_invalid());
//! assert!(report.fatal_or(()).is_err());
//! ```

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]

macro_rules! bug {
  ($fmt:literal $($arg:tt)*) => {{
    panic!(concat!("numlit: ", $fmt, "; this is a bug") $($arg)*)
  }};
}

pub(crate) use format_args as f;

mod file;
mod range;
mod rt;

pub mod report;
pub mod rule;
pub mod testing;
pub mod token;

pub use {
  crate::{
    file::Context,
    file::File,
    file::{Span, Spanned},
    range::Range,
    report::{Fatal, Report},
    rt::{classify, classify_as, find_all, recognize, scan, Literals},
    token::{Kind, Literal, Tag, Tree},
  },
};

fn plural<T: Eq + From<u8>>(count: T) -> &'static str {
  if count == 1.into() {
    ""
  } else {
    "s"
  }
}
