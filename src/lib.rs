#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub mod offset_map;
#[cfg(feature = "ratatui")]
pub mod render;
pub mod styled;
pub mod template;
pub mod transform;

pub use offset_map::OffsetMap;
pub use styled::{Color, StyleSpan, StyledText};
pub use template::{LiteralRun, LiteralRuns, parse_template};
pub use transform::{MaskTransform, Placeholder, Transformed, transform};

/// Errors when constructing a mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The template doesn't contain a single slot character.
    ///
    /// Contains the template and the slot character, in that order.
    InvalidTemplate { template: Box<str>, slot: char },
}

impl Display for MaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for MaskError {}

/// Position type. Counts graphemes.
#[allow(non_camel_case_types)]
pub type upos_type = u32;

/// Length as grapheme count.
#[inline]
pub(crate) fn str_len(s: &str) -> upos_type {
    use unicode_segmentation::UnicodeSegmentation;
    s.graphemes(true).count() as upos_type
}
