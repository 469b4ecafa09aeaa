use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x001db954);
pub const NEUTRAL: Color = Color::from_u32(0x00535353);
pub const BACKGROUND: Color = Color::from_u32(0x00121212);
pub const TEXT: Color = Color::from_u32(0x00e8e8e8);
