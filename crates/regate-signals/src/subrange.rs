//! Block-aligned subrange tests.
//!
//! A code point is split into a block number (`cp >> 6`) and a 6-bit offset.
//! The target decodes the block number one-hot and the offset as a
//! thermometer code, so any range that stays inside one block costs a single
//! small AND: `block_hot & offset >= start & !(offset > end)`.

use std::fmt;

use regate_core::{ALPHABET_SIZE, CharSet, CodepointRange};
use serde::{Deserialize, Serialize};

use crate::SignalError;

/// Code points per block.
pub const BLOCK_SIZE: u32 = 64;

/// First code point whose block cannot be decoded one-hot.
///
/// The top digit of the block number (bits 20..18 of the code point) is
/// decoded into five lines, so blocks at or above `5 << 12` never assert.
/// Only the reserved lead bytes `0xF5..=0xF7` decode into that area.
pub const TESTABLE_LIMIT: u32 = 5 << 18;

const BLOCK_COUNT: u32 = ALPHABET_SIZE / BLOCK_SIZE;
const LAST_OFFSET: u8 = (BLOCK_SIZE - 1) as u8;

/// Inclusive offset range `[start, end]` inside one block.
///
/// Ordered by `(block, start, end)`; two subranges with the same triple are
/// the same signal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct SubRange {
    block: u32,
    start: u8,
    end: u8,
}

impl SubRange {
    pub fn new(block: u32, start: u8, end: u8) -> Result<Self, SignalError> {
        if block >= BLOCK_COUNT || start > end || end > LAST_OFFSET {
            return Err(SignalError::SubRangeOutOfBounds { block, start, end });
        }
        Ok(Self { block, start, end })
    }

    /// Subrange covering a whole block.
    pub fn whole(block: u32) -> Result<Self, SignalError> {
        Self::new(block, 0, LAST_OFFSET)
    }

    #[inline]
    pub fn block(self) -> u32 {
        self.block
    }

    #[inline]
    pub fn start(self) -> u8 {
        self.start
    }

    #[inline]
    pub fn end(self) -> u8 {
        self.end
    }

    pub fn first_code_point(self) -> u32 {
        self.block * BLOCK_SIZE + self.start as u32
    }

    pub fn last_code_point(self) -> u32 {
        self.block * BLOCK_SIZE + self.end as u32
    }

    /// The code points this subrange tests for.
    pub fn charset(self) -> CharSet {
        CharSet::from_ranges([
            CodepointRange::inclusive(self.first_code_point(), self.last_code_point())
                .unwrap_or_else(|_| unreachable!("subrange bounds validated on construction")),
        ])
    }

    /// Whether the test asserts for `cp`.
    pub fn contains(self, cp: u32) -> bool {
        if cp >= TESTABLE_LIMIT || cp / BLOCK_SIZE != self.block {
            return false;
        }
        let offset = (cp % BLOCK_SIZE) as u8;
        self.start <= offset && offset <= self.end
    }

    /// Split a charset on block boundaries.
    ///
    /// Every range yields one subrange if it stays inside a block, otherwise
    /// a left partial, zero or more whole blocks, and a right partial.
    pub fn decompose(charset: &CharSet) -> Vec<SubRange> {
        let mut out = Vec::new();
        for r in charset.minimize().iter() {
            let (first_block, first_offset) = split(r.start());
            let (last_block, last_offset) = split(r.last());

            if first_block == last_block {
                out.push(Self::raw(first_block, first_offset, last_offset));
                continue;
            }

            out.push(Self::raw(first_block, first_offset, LAST_OFFSET));
            for block in first_block + 1..last_block {
                out.push(Self::raw(block, 0, LAST_OFFSET));
            }
            out.push(Self::raw(last_block, 0, last_offset));
        }
        out
    }

    /// Number of subranges [`SubRange::decompose`] would produce.
    pub fn count(charset: &CharSet) -> usize {
        charset
            .minimize()
            .iter()
            .map(|r| (r.last() / BLOCK_SIZE - r.start() / BLOCK_SIZE + 1) as usize)
            .sum()
    }

    fn raw(block: u32, start: u8, end: u8) -> Self {
        Self { block, start, end }
    }
}

fn split(cp: u32) -> (u32, u8) {
    (cp / BLOCK_SIZE, (cp % BLOCK_SIZE) as u8)
}

/// Signal name: `b` + block in octal, then `f`/`t` + offsets in octal when
/// the range does not touch the block edge.
impl fmt::Display for SubRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{:05o}", self.block)?;
        if self.start > 0 {
            write!(f, "f{:02o}", self.start)?;
        }
        if self.end < LAST_OFFSET {
            write!(f, "t{:02o}", self.end)?;
        }
        Ok(())
    }
}
