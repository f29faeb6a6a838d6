//! The accept/reject corpus that the grammar is checked against.
//!
//! Every entry is a complete literal. Accepted entries must classify as
//! exactly the expected family (integer or float) over their whole text;
//! rejected entries must classify as invalid.

use std::fmt::Write;

use crate::rt::classify;
use crate::token::Kind;

/// Integers that must be accepted.
pub const INT_ACCEPT: &[&str] = &[
  "42",
  "4_2",
  "0600",
  "0_600",
  "0o600",
  "0O600",
  "0xBadFace",
  "0xBad_Face",
  "0x_67_7a_2f_cc_40_c6",
  "170141183460469231731687303715884105727",
  "170_141183_460469_231731_687303_715884_105727",
  "0b1010",
  "0B_1_0",
  "0i",
  "42i",
  "0x_ffi",
];

/// Integers that must be rejected.
pub const INT_REJECT: &[&str] = &[
  "_42",
  "42_",
  "4__2",
  "0_xBadFace",
  "0o6_00",
  "08",
  "0b102",
  "0x",
  "42ix",
  "1i\u{e9}",
];

/// Floats that must be accepted.
pub const FLOAT_ACCEPT: &[&str] = &[
  "0.",
  "72.40",
  "072.40",
  "2.71828",
  "1.e+0",
  "6.67428e-11",
  ".25",
  ".12345E+5",
  "1_5.",
  "0.15e+0_2",
  "0x1p-2",
  "0x2.p10",
  "0x1.Fp+0",
  "0X.8p-0",
  "0X_1FFFP-16",
  "1.5i",
  "1e9i",
  "0x1p-2i",
];

/// Floats that must be rejected.
pub const FLOAT_REJECT: &[&str] = &[
  "0x.p1",
  "1p-2",
  "0x1.6e-2",
  "1_.5",
  "1._5",
  "1.5_e1",
  "1.5e_1",
  "1.5e1_",
  "0x15e-2",
  "1e",
  "1e+-5",
  "1.5e5.5",
];

/// Checks every entry of the corpus, panicking with a list of every entry
/// that was classified wrong.
#[track_caller]
pub fn check() {
  let mut errors = String::new();

  let accept = [(INT_ACCEPT, false), (FLOAT_ACCEPT, true)];
  for (entries, float) in accept {
    for &text in entries {
      let tree = classify(text, 0..text.len());
      let ok = match tree.kind() {
        Kind::Int { .. } => !float,
        Kind::Float { .. } => float,
        Kind::Invalid => false,
      };
      if !ok {
        let want = if float { "a float" } else { "an integer" };
        let _ = writeln!(errors, "{text:?}: want {want}, got {}", tree.kind());
      }
    }
  }

  for &text in INT_REJECT.iter().chain(FLOAT_REJECT) {
    let tree = classify(text, 0..text.len());
    if !tree.is_invalid() {
      let _ = writeln!(errors, "{text:?}: want invalid, got {}", tree.kind());
    }
  }

  if !errors.is_empty() {
    panic!("corpus mismatch:\n{errors}");
  }
}
