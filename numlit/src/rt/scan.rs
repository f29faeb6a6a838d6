//! The boundary scanner, which finds candidate spans.

use unicode_xid::UnicodeXID as _;

/// Finds the end of the candidate numeric literal starting at `pos`.
///
/// Returns `None` if `pos` cannot start a number: either it is preceded by a
/// word character (so that the `9` in `x9` is not a number), or it is not a
/// digit or a `.` followed by a digit.
pub fn scan(text: &str, pos: usize) -> Option<usize> {
  let before = text.get(..pos)?;
  if before.chars().next_back().is_some_and(is_word) {
    return None;
  }

  let bytes = text.as_bytes();
  match bytes.get(pos)? {
    b'0'..=b'9' => {}
    b'.' if bytes.get(pos + 1).is_some_and(u8::is_ascii_digit) => {}
    _ => return None,
  }

  Some(interior_end(text, pos))
}

/// Returns the end of the longest run of characters that may appear inside a
/// numeric literal, starting at `pos`.
pub(crate) fn interior_end(text: &str, pos: usize) -> usize {
  let bytes = text.as_bytes();
  let mut end = pos;
  while end < bytes.len() && is_interior(bytes, end) {
    end += 1;
  }
  end
}

/// Returns whether the byte at `idx` may appear inside a numeric literal.
///
/// This is any ASCII letter or digit, `_`, `.`, or a sign directly after an
/// exponent marker.
fn is_interior(bytes: &[u8], idx: usize) -> bool {
  match bytes[idx] {
    b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'.' => true,
    b'+' | b'-' => {
      idx > 0 && matches!(bytes[idx - 1], b'e' | b'E' | b'p' | b'P')
    }
    _ => false,
  }
}

/// Returns whether `c` is a word character: a letter, a digit, or `_`.
pub(crate) fn is_word(c: char) -> bool {
  c.is_xid_continue()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn preconditions() {
    assert_eq!(scan("42", 0), Some(2));
    assert_eq!(scan(".25", 0), Some(3));
    assert_eq!(scan("x9", 1), None);
    assert_eq!(scan("_9", 1), None);
    assert_eq!(scan("é9", 2), None);
    assert_eq!(scan("a.5", 1), None);
    assert_eq!(scan("a.5", 2), Some(3));
    assert_eq!(scan(" .x", 1), None);
    assert_eq!(scan(".", 0), None);
    assert_eq!(scan("", 0), None);
    assert_eq!(scan("42", 3), None);
  }

  #[test]
  fn extent() {
    assert_eq!(scan("0x1p-2;", 0), Some(6));
    assert_eq!(scan("1e+5+1", 0), Some(4));
    assert_eq!(scan("1+5", 0), Some(1));
    assert_eq!(scan("1.5.6 x", 0), Some(5));
    assert_eq!(scan("4__2 ", 0), Some(4));
    assert_eq!(scan("12\n34", 0), Some(2));
    assert_eq!(scan("(7)", 1), Some(2));
  }
}
