//! Maps cursor positions between the raw text and the
//! formatted text.
//!
//! All positions are grapheme positions. Any position outside
//! the valid range is clamped, the host may ask with stale
//! positions while it rebuilds its state.

use crate::template::LiteralRuns;
use crate::upos_type;
use log::trace;
use std::ops::Range;

/// Offset mapping for one raw text.
///
/// Created by each transform and only valid for the raw text
/// it was created with.
#[derive(Debug, Clone)]
pub struct OffsetMap<'a> {
    runs: &'a LiteralRuns,
    // length of the raw text
    raw_len: upos_type,
    // start of each run in formatted coordinates
    shifted: Vec<upos_type>,
}

impl<'a> OffsetMap<'a> {
    /// New mapping for a raw text of the given length.
    pub fn new(runs: &'a LiteralRuns, raw_len: upos_type) -> Self {
        let mut shifted = Vec::with_capacity(runs.len());
        let mut lit_len = 0;
        for run in runs {
            shifted.push(run.pos() + lit_len);
            lit_len += run.len();
        }

        Self {
            runs,
            raw_len,
            shifted,
        }
    }

    /// Length of the raw text.
    #[inline]
    pub fn raw_len(&self) -> upos_type {
        self.raw_len
    }

    /// Raw position to formatted position.
    ///
    /// Every literal that starts at or before the raw position
    /// is displayed before it.
    pub fn raw_to_formatted(&self, pos: upos_type) -> upos_type {
        let pos = if pos > self.raw_len {
            trace!("clamp raw pos {} to {}", pos, self.raw_len);
            self.raw_len
        } else {
            pos
        };

        let lit_len: upos_type = self
            .runs
            .iter()
            .take_while(|v| v.pos() <= pos)
            .map(|v| v.len())
            .sum();
        pos + lit_len
    }

    /// Formatted position to raw position.
    ///
    /// Subtracts every literal that starts before the formatted
    /// position. The result is clamped to the raw text.
    pub fn formatted_to_raw(&self, pos: upos_type) -> upos_type {
        let lit_len: upos_type = self
            .runs
            .iter()
            .zip(self.shifted.iter())
            .take_while(|(_, start)| **start < pos)
            .map(|(v, _)| v.len())
            .sum();

        let raw = pos.saturating_sub(lit_len);
        if raw > self.raw_len {
            trace!("clamp formatted pos {} to {}", pos, self.raw_len);
            self.raw_len
        } else {
            raw
        }
    }

    /// Raw range to formatted range.
    #[inline]
    pub fn raw_range_to_formatted(&self, range: Range<upos_type>) -> Range<upos_type> {
        self.raw_to_formatted(range.start)..self.raw_to_formatted(range.end)
    }

    /// Formatted range to raw range.
    #[inline]
    pub fn formatted_range_to_raw(&self, range: Range<upos_type>) -> Range<upos_type> {
        self.formatted_to_raw(range.start)..self.formatted_to_raw(range.end)
    }
}
