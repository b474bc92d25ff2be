use ratatui::style::Color;

// Table and chrome
pub const BRAND: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const BORDER: Color = Color::Rgb(0x3f, 0x3f, 0x46);
pub const TEXT: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
pub const MUTED: Color = Color::Rgb(0x71, 0x71, 0x7a);
pub const CURSOR_ROW: Color = Color::Rgb(0x27, 0x27, 0x2a);
pub const DIALOG_BORDER: Color = Color::Rgb(0xd4, 0xd4, 0xd8);

// Status
pub const SUCCESS: Color = Color::Rgb(0x4a, 0xde, 0x80);
pub const WARNING: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const DANGER: Color = Color::Rgb(0xf8, 0x71, 0x71);
