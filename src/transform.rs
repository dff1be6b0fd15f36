//! Applies a mask template to a raw text.
//!
//! * The template is parsed once when the [MaskTransform] is created.
//! * Each call to [MaskTransform::apply] creates the formatted text
//!   and an [OffsetMap] for the cursor.
//!
//! The template consists of slot characters and literals.
//! Each slot takes one grapheme of the raw text, literals are
//! inserted as soon as the raw text reaches them.
//!
//! * Raw text shorter than the template shows the remainder of the
//!   placeholder, if there is one.
//! * Raw text longer than the template is appended as is.
//!
//! ```
//! use rat_mask::{Color, MaskTransform, Placeholder};
//!
//! let mask = MaskTransform::new("%%/%%", '%')
//!     .expect("valid template")
//!     .placeholder(Placeholder::new("MM/YY").color(Color::DarkGray));
//!
//! let t = mask.apply("123");
//! assert_eq!(t.as_str(), "12/3Y");
//! assert_eq!(t.raw_to_formatted(3), 4);
//! assert_eq!(t.formatted_to_raw(4), 3);
//! ```

use crate::offset_map::OffsetMap;
use crate::styled::{Color, StyledText};
use crate::template::LiteralRuns;
use crate::{MaskError, str_len, upos_type};
use log::debug;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Placeholder text displayed for the part of the template
/// that has no input yet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Placeholder {
    text: Box<str>,
    // grapheme count of text
    len: upos_type,
    color: Option<Color>,
}

impl Placeholder {
    /// Placeholder with the default style.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: Box::from(text.as_ref()),
            len: str_len(text.as_ref()),
            color: None,
        }
    }

    /// Color for the placeholder.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Placeholder text.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_ref()
    }

    /// Length as grapheme count.
    #[inline]
    pub fn len(&self) -> upos_type {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Color for the placeholder.
    #[inline]
    pub fn get_color(&self) -> Option<Color> {
        self.color
    }

    /// The part of the placeholder after the given grapheme position.
    fn tail(&self, pos: upos_type) -> Option<&str> {
        if pos >= self.len {
            return None;
        }
        self.text
            .grapheme_indices(true)
            .nth(pos as usize)
            .map(|(idx, _)| &self.text[idx..])
    }
}

/// Input mask.
///
/// The template uses one slot character for each grapheme of
/// the raw text, everything else is a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTransform {
    template: Box<str>,
    slot: char,
    // parsed template
    runs: LiteralRuns,
    placeholder: Option<Placeholder>,
}

/// Result of one transform.
#[derive(Debug, Clone)]
pub struct Transformed<'a> {
    /// Formatted text with the placeholder tail.
    pub text: StyledText,
    /// Offset mapping for this text.
    pub offsets: OffsetMap<'a>,
}

/// Apply the literal runs to the raw text and append the
/// remainder of the placeholder.
pub fn transform<'a>(
    raw: &str,
    runs: &'a LiteralRuns,
    placeholder: Option<&Placeholder>,
) -> Transformed<'a> {
    let mut text = StyledText::new();

    let mut runs_iter = runs.iter().peekable();
    let mut raw_len: upos_type = 0;
    for g in raw.graphemes(true) {
        if let Some(run) = runs_iter.next_if(|v| v.pos() == raw_len) {
            text.push_str(run.text(), run.len());
        }
        text.push_str(g, 1);
        raw_len += 1;
    }
    // literal directly after the last raw grapheme
    if let Some(run) = runs_iter.next_if(|v| v.pos() == raw_len) {
        text.push_str(run.text(), run.len());
    }

    if let Some(placeholder) = placeholder {
        if let Some(tail) = placeholder.tail(text.len()) {
            let tail_len = placeholder.len() - text.len();
            text.push_styled(tail, tail_len, placeholder.get_color());
        }
    }

    Transformed {
        text,
        offsets: OffsetMap::new(runs, raw_len),
    }
}

impl MaskTransform {
    /// New mask.
    ///
    /// Fails if the template has no slot character.
    pub fn new<S: AsRef<str>>(template: S, slot: char) -> Result<Self, MaskError> {
        let template = template.as_ref();
        let runs = LiteralRuns::parse(template, slot)?;
        debug!(
            "mask {:?} slot {:?} capacity {}",
            template,
            slot,
            runs.slot_count()
        );
        Ok(Self {
            template: Box::from(template),
            slot,
            runs,
            placeholder: None,
        })
    }

    /// Placeholder for the part of the template that has no input.
    pub fn placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Placeholder for the part of the template that has no input.
    pub fn set_placeholder(&mut self, placeholder: Option<Placeholder>) {
        self.placeholder = placeholder;
    }

    /// Placeholder.
    #[inline]
    pub fn get_placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }

    /// Template.
    #[inline]
    pub fn template(&self) -> &str {
        self.template.as_ref()
    }

    /// Slot character.
    #[inline]
    pub fn slot(&self) -> char {
        self.slot
    }

    /// Parsed template.
    #[inline]
    pub fn runs(&self) -> &LiteralRuns {
        &self.runs
    }

    /// Number of raw graphemes the template can hold.
    #[inline]
    pub fn capacity(&self) -> upos_type {
        self.runs.slot_count()
    }

    /// Raw text fills all slots of the template.
    pub fn is_complete(&self, raw: &str) -> bool {
        str_len(raw) >= self.runs.slot_count()
    }

    /// Format the raw text.
    pub fn apply(&self, raw: &str) -> Transformed<'_> {
        transform(raw, &self.runs, self.placeholder.as_ref())
    }
}

impl Transformed<'_> {
    /// Formatted text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Formatted text with styles.
    #[inline]
    pub fn styled(&self) -> &StyledText {
        &self.text
    }

    /// Offset mapping.
    #[inline]
    pub fn offsets(&self) -> &OffsetMap<'_> {
        &self.offsets
    }

    /// Raw position to formatted position.
    #[inline]
    pub fn raw_to_formatted(&self, pos: upos_type) -> upos_type {
        self.offsets.raw_to_formatted(pos)
    }

    /// Formatted position to raw position.
    #[inline]
    pub fn formatted_to_raw(&self, pos: upos_type) -> upos_type {
        self.offsets.formatted_to_raw(pos)
    }

    /// Raw selection to formatted selection.
    #[inline]
    pub fn raw_range_to_formatted(&self, range: Range<upos_type>) -> Range<upos_type> {
        self.offsets.raw_range_to_formatted(range)
    }

    /// Formatted selection to raw selection.
    #[inline]
    pub fn formatted_range_to_raw(&self, range: Range<upos_type>) -> Range<upos_type> {
        self.offsets.formatted_range_to_raw(range)
    }

    /// Display column for a raw cursor position.
    pub fn screen_column(&self, raw_pos: upos_type) -> upos_type {
        self.text.column(self.raw_to_formatted(raw_pos))
    }
}
