//! Conversions to ratatui text.
//!
//! Needs the feature `ratatui`.

use crate::styled::{Color, StyledText};
use ratatui_core::style::Style;
use ratatui_core::text::{Line, Span};

impl From<Color> for ratatui_core::style::Color {
    fn from(value: Color) -> Self {
        use ratatui_core::style::Color as C;
        match value {
            Color::Reset => C::Reset,
            Color::Black => C::Black,
            Color::Red => C::Red,
            Color::Green => C::Green,
            Color::Yellow => C::Yellow,
            Color::Blue => C::Blue,
            Color::Magenta => C::Magenta,
            Color::Cyan => C::Cyan,
            Color::Gray => C::Gray,
            Color::DarkGray => C::DarkGray,
            Color::LightRed => C::LightRed,
            Color::LightGreen => C::LightGreen,
            Color::LightYellow => C::LightYellow,
            Color::LightBlue => C::LightBlue,
            Color::LightMagenta => C::LightMagenta,
            Color::LightCyan => C::LightCyan,
            Color::White => C::White,
            Color::Rgb(r, g, b) => C::Rgb(r, g, b),
            Color::Indexed(i) => C::Indexed(i),
        }
    }
}

impl StyledText {
    /// Create a Line.
    ///
    /// All text uses the base style, styled spans
    /// replace the foreground color.
    pub fn to_line(&self, base: Style) -> Line<'_> {
        let spans = self
            .parts()
            .map(|(text, color)| match color {
                Some(color) => Span::styled(text, base.fg(color.into())),
                None => Span::styled(text, base),
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }
}

impl<'a> From<&'a StyledText> for Line<'a> {
    fn from(value: &'a StyledText) -> Self {
        value.to_line(Style::default())
    }
}
