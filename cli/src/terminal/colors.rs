use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

// Status colors
pub const IDLE: Color = Color::Green;
pub const BUSY: Color = Color::Yellow;
pub const UNAVAILABLE: Color = Color::Red;
pub const DONE: Color = Color::Cyan;
