use eframe::egui::Color32;

pub const BOARD_BACKGROUND: Color32 = Color32::from_rgb(0x31, 0x2e, 0x81);
pub const GRID_LINE: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26);
pub const SNAKE_HEAD: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
pub const SNAKE_BODY: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99);
pub const FOOD: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 128);

pub const GOLD: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15);
pub const SILVER: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
pub const BRONZE: Color32 = Color32::from_rgb(0xd9, 0x77, 0x06);
