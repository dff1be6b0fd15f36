//! Formatted text with colored spans.
//!
//! This is independent of any UI framework. With the feature
//! `ratatui` it can be converted to a ratatui `Line`.

use crate::upos_type;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Colors for styled spans.
///
/// Mirrors the terminal colors.
#[allow(variant_size_differences)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Reset to the terminal default.
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    /// 24bit color.
    Rgb(u8, u8, u8),
    /// Index into the 256 color palette.
    Indexed(u8),
}

/// A styled part of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    /// Byte range into the text.
    pub range: Range<usize>,
    /// Foreground color. None uses the default style of the host.
    pub color: Option<Color>,
}

/// Formatted text.
///
/// Text that is not covered by any span uses the default style.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    len: upos_type,
    spans: Vec<StyleSpan>,
}

impl StyledText {
    /// New empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unstyled text.
    pub(crate) fn push_str(&mut self, s: &str, len: upos_type) {
        self.text.push_str(s);
        self.len += len;
    }

    /// Append text as one styled span.
    /// Empty text adds no span.
    pub(crate) fn push_styled(&mut self, s: &str, len: upos_type, color: Option<Color>) {
        if s.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(s);
        self.len += len;
        self.spans.push(StyleSpan {
            range: start..self.text.len(),
            color,
        });
    }

    /// Text
    #[inline]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Styled spans in ascending order.
    #[inline]
    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// Length as grapheme count.
    #[inline]
    pub fn len(&self) -> upos_type {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Grapheme position to byte position.
    ///
    /// Positions beyond the end map to the text length.
    pub fn byte_pos(&self, pos: upos_type) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(pos as usize)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }

    /// Display width of the text.
    pub fn width(&self) -> upos_type {
        self.text.width() as upos_type
    }

    /// Display column for the grapheme position.
    ///
    /// Use this with a formatted cursor position to place
    /// the screen cursor.
    pub fn column(&self, pos: upos_type) -> upos_type {
        self.text[..self.byte_pos(pos)].width() as upos_type
    }

    /// Split into text parts with their color.
    ///
    /// Unstyled parts have no color.
    pub fn parts(&self) -> impl Iterator<Item = (&str, Option<Color>)> + '_ {
        let mut parts = Vec::new();
        let mut pos = 0;
        for span in self.spans.iter() {
            if pos < span.range.start {
                parts.push((&self.text[pos..span.range.start], None));
            }
            parts.push((&self.text[span.range.clone()], span.color));
            pos = span.range.end;
        }
        if pos < self.text.len() {
            parts.push((&self.text[pos..], None));
        }
        parts.into_iter()
    }
}

impl From<StyledText> for String {
    fn from(value: StyledText) -> Self {
        value.text
    }
}
