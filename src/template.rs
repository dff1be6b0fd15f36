//! Parses a mask template into the literal runs that get
//! inserted into the raw input.
//!
//! The template consists of slot characters and everything else.
//! Each slot takes one grapheme of the raw input, all other
//! graphemes are literals that are displayed as is.
//!
//! ```
//! use rat_mask::LiteralRuns;
//!
//! let runs = LiteralRuns::parse("+7(***) ***-**-**", '*').expect("ok");
//! assert_eq!(runs.slot_count(), 10);
//! assert_eq!(runs.get(0).map(|v| v.text()), Some("+7("));
//! assert_eq!(runs.get(1).map(|v| v.pos()), Some(3));
//! ```

use crate::{MaskError, str_len, upos_type};
use log::debug;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::slice;
use unicode_segmentation::UnicodeSegmentation;

/// One run of literal text.
#[derive(Clone, PartialEq, Eq)]
pub struct LiteralRun {
    // raw insertion index
    pos: upos_type,
    // literal text
    text: Box<str>,
    // grapheme count of text
    len: upos_type,
}

/// All literal runs of a template, ordered by their raw insertion index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LiteralRuns {
    runs: Vec<LiteralRun>,
    // number of slots in the template.
    slots: upos_type,
}

impl Debug for LiteralRun {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.pos, self.text)
    }
}

impl LiteralRun {
    fn new(pos: upos_type, text: &str) -> Self {
        Self {
            pos,
            text: Box::from(text),
            len: str_len(text),
        }
    }

    /// Index into the raw text. The literal is displayed
    /// right before the raw grapheme at this index.
    #[inline]
    pub fn pos(&self) -> upos_type {
        self.pos
    }

    /// Literal text.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_ref()
    }

    /// Length as grapheme count.
    #[inline]
    pub fn len(&self) -> upos_type {
        self.len
    }

    /// Always false, empty runs are never created.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Parse the template.
///
/// Same as [LiteralRuns::parse].
pub fn parse_template(template: &str, slot: char) -> Result<LiteralRuns, MaskError> {
    LiteralRuns::parse(template, slot)
}

impl LiteralRuns {
    /// Parse the template.
    ///
    /// Each maximal sequence of non-slot graphemes becomes one
    /// run. The key of a run is the number of slots before it,
    /// which is its index in raw-text coordinates.
    ///
    /// Fails if the template contains no slot at all.
    pub fn parse(template: &str, slot: char) -> Result<Self, MaskError> {
        let mut slot_buf = [0u8; 4];
        let slot_str = &*slot.encode_utf8(&mut slot_buf);

        let mut runs = Vec::new();
        let mut slots: upos_type = 0;
        let mut lit_start = None;

        for (idx, g) in template.grapheme_indices(true) {
            if g == slot_str {
                if let Some(start) = lit_start.take() {
                    runs.push(LiteralRun::new(slots, &template[start..idx]));
                }
                slots += 1;
            } else if lit_start.is_none() {
                lit_start = Some(idx);
            }
        }
        if let Some(start) = lit_start {
            runs.push(LiteralRun::new(slots, &template[start..]));
        }

        if slots == 0 {
            return Err(MaskError::InvalidTemplate {
                template: Box::from(template),
                slot,
            });
        }

        debug!(
            "parsed template {:?} slots {} runs {:?}",
            template, slots, runs
        );

        Ok(Self { runs, slots })
    }

    /// Number of slots in the template.
    /// This is the number of raw graphemes the template can hold.
    #[inline]
    pub fn slot_count(&self) -> upos_type {
        self.slots
    }

    /// Sum of all literal lengths.
    pub fn literal_len(&self) -> upos_type {
        self.runs.iter().map(|v| v.len).sum()
    }

    /// Number of runs.
    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Template without any literals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Run by index.
    #[inline]
    pub fn get(&self, n: usize) -> Option<&LiteralRun> {
        self.runs.get(n)
    }

    /// Runs in ascending order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, LiteralRun> {
        self.runs.iter()
    }

    /// Rebuild the template string.
    pub fn template(&self, slot: char) -> String {
        let mut buf = String::new();
        let mut pos = 0;
        for run in self.runs.iter() {
            for _ in pos..run.pos {
                buf.push(slot);
            }
            buf.push_str(&run.text);
            pos = run.pos;
        }
        for _ in pos..self.slots {
            buf.push(slot);
        }
        buf
    }
}

impl<'a> IntoIterator for &'a LiteralRuns {
    type Item = &'a LiteralRun;
    type IntoIter = slice::Iter<'a, LiteralRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
