use std::fmt;
use std::ops;
use std::ops::Bound;
use std::ops::Index;
use std::ops::RangeBounds;

/// A byte range within some text: a compact, `Copy` version of
/// [`std::ops::Range<usize>`].
///
/// Every node of a [`Tree`][crate::Tree] carries one of these.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range {
  /// The start offset, inclusive.
  pub start: u32,
  /// The end offset, exclusive.
  pub end: u32,
}

/// Constructs a new [`Range`] from a pair of offsets.
///
/// # Panics
///
/// Panics if either bound does not fit in a `u32`.
#[allow(non_snake_case)]
#[track_caller]
pub fn Range<T: Copy + TryInto<u32> + fmt::Debug>(start: T, end: T) -> Range {
  Range { start: cast(start), end: cast(end) }
}

#[track_caller]
fn cast<T: Copy + TryInto<u32> + fmt::Debug>(value: T) -> u32 {
  value
    .try_into()
    .unwrap_or_else(|_| bug!("range bound does not fit into u32: {:?}", value))
}

impl Range {
  /// Converts any Rust range into a [`Range`]. Unbounded ends are clamped to
  /// `0` and `limit`, respectively.
  #[track_caller]
  pub fn new(range: impl RangeBounds<usize>, limit: usize) -> Range {
    let start = match range.start_bound() {
      Bound::Included(&x) => x,
      Bound::Excluded(&x) => x.saturating_add(1),
      Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
      Bound::Included(&x) => x.saturating_add(1),
      Bound::Excluded(&x) => x,
      Bound::Unbounded => limit,
    };

    let range = Range(start, end);
    range.bounds_check(limit);
    range
  }

  /// Returns the start offset as a `usize`.
  pub fn start(self) -> usize {
    self.start as usize
  }

  /// Returns the end offset as a `usize`.
  pub fn end(self) -> usize {
    self.end as usize
  }

  /// Converts this range back into a standard library range.
  pub fn bounds(self) -> ops::Range<usize> {
    self.start as usize..self.end as usize
  }

  /// Returns the length of this range, in bytes.
  pub fn len(self) -> usize {
    (self.end - self.start) as usize
  }

  /// Returns whether this range is empty.
  pub fn is_empty(self) -> bool {
    self.start == self.end
  }

  /// Returns whether `that` lies entirely within this range.
  pub fn contains(self, that: Range) -> bool {
    self.start <= that.start && that.end <= self.end
  }

  #[track_caller]
  pub(crate) fn bounds_check(self, limit: usize) {
    assert!(
      self.start <= self.end,
      "out of order range: {} > {}",
      self.start,
      self.end
    );
    assert!(
      self.end as usize <= limit,
      "got out of bounds range: {} > {}",
      self.end,
      limit
    );
  }
}

impl Index<Range> for str {
  type Output = str;

  #[track_caller]
  fn index(&self, index: Range) -> &Self::Output {
    &self[index.start as usize..index.end as usize]
  }
}

impl From<ops::Range<usize>> for Range {
  #[track_caller]
  fn from(range: ops::Range<usize>) -> Self {
    Range(range.start, range.end)
  }
}

impl fmt::Debug for Range {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}..{}", self.start, self.end)
  }
}
