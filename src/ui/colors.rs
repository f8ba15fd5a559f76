//! Colors of the list screen, by role.
//! Values come from the Rose Pine theme: https://rosepinetheme.com/

use ratatui::style::Color;
pub struct Theme;

impl Theme {
    pub const TEXT: Color = Color::Rgb(224, 222, 244);
    pub const SUBTLE: Color = Color::Rgb(144, 140, 170);
    pub const MUTED: Color = Color::Rgb(110, 106, 134);
    pub const BORDER: Color = Color::Rgb(82, 79, 103);
    pub const SURFACE: Color = Color::Rgb(31, 29, 46);
    pub const SELECTION: Color = Color::Rgb(33, 32, 46);
    /// Category headers and dialog frames (iris)
    pub const ACCENT: Color = Color::Rgb(196, 167, 231);
    /// Categories missing from the configured list (rose)
    pub const UNLISTED: Color = Color::Rgb(235, 188, 186);
    /// Totals, focused fields and shortcut keys (gold)
    pub const EMPHASIS: Color = Color::Rgb(246, 193, 119);
    /// Cursor, errors and destructive prompts (love)
    pub const ALERT: Color = Color::Rgb(235, 111, 146);
    /// Bought marks and success messages (foam)
    pub const OK: Color = Color::Rgb(156, 207, 216);
}
