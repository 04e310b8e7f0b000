//! Character set algebra over half-open code point ranges.
//!
//! A [`CharSet`] is a value type. Construction only sorts its ranges; every
//! algebraic operation ([`CharSet::union`], [`CharSet::difference`],
//! [`CharSet::complement`], [`CharSet::minimize`]) returns a new, minimized
//! set in which ranges are sorted, disjoint, and non-adjacent. Two minimized
//! sets are equal exactly when they contain the same code points, which is
//! what the automaton and the encoder rely on when they use charsets as keys.

use serde::{Deserialize, Serialize};

use crate::{ALPHABET_SIZE, CharSetError};

/// Half-open interval `[start, stop)` of code points.
///
/// Ordered by `(start, stop)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct CodepointRange {
    start: u32,
    stop: u32,
}

impl CodepointRange {
    /// Create a range, rejecting empty or reversed intervals and intervals
    /// that leave the alphabet.
    pub fn new(start: u32, stop: u32) -> Result<Self, CharSetError> {
        if start >= stop || stop > ALPHABET_SIZE {
            return Err(CharSetError::InvalidRange { start, stop });
        }
        Ok(Self { start, stop })
    }

    /// Range holding a single code point.
    pub fn single(cp: u32) -> Result<Self, CharSetError> {
        Self::new(cp, cp.saturating_add(1))
    }

    /// Inclusive range `[first, last]`.
    pub fn inclusive(first: u32, last: u32) -> Result<Self, CharSetError> {
        Self::new(first, last.saturating_add(1))
    }

    #[inline]
    pub fn start(self) -> u32 {
        self.start
    }

    #[inline]
    pub fn stop(self) -> u32 {
        self.stop
    }

    /// Last code point inside the range.
    #[inline]
    pub fn last(self) -> u32 {
        self.stop - 1
    }

    /// Number of code points covered.
    #[inline]
    pub fn len(self) -> u32 {
        self.stop - self.start
    }

    /// Always false; ranges are non-empty by construction.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    #[inline]
    pub fn contains(self, cp: u32) -> bool {
        self.start <= cp && cp < self.stop
    }
}

/// Immutable set of code points stored as sorted ranges.
///
/// Ordering is lexicographic over the range list, which gives the encoder a
/// deterministic total order for tie-breaking.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "RawCharSet")]
pub struct CharSet {
    ranges: Vec<CodepointRange>,
}

impl CharSet {
    /// Build a set from `(start, stop)` pairs.
    ///
    /// Fails with [`CharSetError::InvalidRange`] if any pair is empty or
    /// reversed. The ranges are sorted but not merged; call
    /// [`CharSet::minimize`] for the canonical form.
    pub fn new(ranges: impl IntoIterator<Item = (u32, u32)>) -> Result<Self, CharSetError> {
        let ranges = ranges
            .into_iter()
            .map(|(start, stop)| CodepointRange::new(start, stop))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_ranges(ranges))
    }

    /// Build a set from already validated ranges.
    pub fn from_ranges(ranges: impl IntoIterator<Item = CodepointRange>) -> Self {
        let mut ranges: Vec<_> = ranges.into_iter().collect();
        ranges.sort_unstable();
        Self { ranges }
    }

    /// The set matching nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The set matching every code point of the alphabet.
    pub fn full() -> Self {
        Self {
            ranges: vec![CodepointRange {
                start: 0,
                stop: ALPHABET_SIZE,
            }],
        }
    }

    /// Set holding a single code point.
    pub fn single(cp: u32) -> Result<Self, CharSetError> {
        Ok(Self {
            ranges: vec![CodepointRange::single(cp)?],
        })
    }

    /// Set of the characters appearing in `s`, minimized.
    pub fn from_chars(s: &str) -> Self {
        Self::from_ranges(s.chars().map(|c| CodepointRange {
            start: c as u32,
            stop: c as u32 + 1,
        }))
        .minimize()
    }

    #[inline]
    pub fn ranges(&self) -> &[CodepointRange] {
        &self.ranges
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = CodepointRange> + '_ {
        self.ranges.iter().copied()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether the set covers the whole alphabet.
    pub fn is_full(&self) -> bool {
        self.minimize() == Self::full()
    }

    /// Number of distinct code points in the set.
    pub fn len(&self) -> u32 {
        self.minimize().ranges.iter().map(|r| r.len()).sum()
    }

    pub fn contains(&self, cp: u32) -> bool {
        self.ranges.iter().any(|r| r.contains(cp))
    }

    /// Merge overlapping and touching ranges.
    ///
    /// Idempotent: `x.minimize().minimize() == x.minimize()`.
    pub fn minimize(&self) -> Self {
        let mut ranges: Vec<CodepointRange> = Vec::with_capacity(self.ranges.len());
        for &r in &self.ranges {
            match ranges.last_mut() {
                Some(prev) if prev.stop >= r.start => prev.stop = prev.stop.max(r.stop),
                _ => ranges.push(r),
            }
        }
        Self { ranges }
    }

    pub fn union(&self, other: &Self) -> Self {
        Self::from_ranges(self.ranges.iter().chain(&other.ranges).copied()).minimize()
    }

    /// Code points in `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let lhs = self.minimize();
        let rhs = other.minimize();
        let rhs = &rhs.ranges;

        let mut out = Vec::new();
        let mut j = 0;
        for r in lhs.ranges {
            let mut start = r.start;
            while j < rhs.len() && rhs[j].stop <= start {
                j += 1;
            }
            for cut in rhs[j..].iter().take_while(|cut| cut.start < r.stop) {
                if cut.start > start {
                    out.push(CodepointRange {
                        start,
                        stop: cut.start,
                    });
                }
                start = start.max(cut.stop);
                if start >= r.stop {
                    break;
                }
            }
            if start < r.stop {
                out.push(CodepointRange {
                    start,
                    stop: r.stop,
                });
            }
        }
        Self { ranges: out }
    }

    /// Everything in the alphabet that is not in `self`.
    ///
    /// `x.complement().complement() == x.minimize()`.
    pub fn complement(&self) -> Self {
        Self::full().difference(self)
    }
}

impl From<CodepointRange> for CharSet {
    fn from(range: CodepointRange) -> Self {
        Self {
            ranges: vec![range],
        }
    }
}

/// Unchecked wire form of [`CodepointRange`].
#[derive(Deserialize)]
struct RawRange {
    start: u32,
    stop: u32,
}

impl TryFrom<RawRange> for CodepointRange {
    type Error = CharSetError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.stop)
    }
}

/// Wire form of [`CharSet`]; ranges are re-sorted on the way in.
#[derive(Deserialize)]
struct RawCharSet {
    ranges: Vec<CodepointRange>,
}

impl From<RawCharSet> for CharSet {
    fn from(raw: RawCharSet) -> Self {
        Self::from_ranges(raw.ranges)
    }
}
