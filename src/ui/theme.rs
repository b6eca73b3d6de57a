//! Theme constants for the Connect Four GUI

use egui::Color32;

// Board colors - classic blue frame with dark holes
pub const BOARD_BG: Color32 = Color32::from_rgb(0, 0, 255);
pub const HOLE: Color32 = Color32::from_rgb(0, 0, 0);
pub const HOVER_ROW_BG: Color32 = Color32::from_rgb(0, 0, 0);

// Piece colors
pub const PLAYER_PIECE: Color32 = Color32::from_rgb(255, 0, 0);
pub const PLAYER_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(255, 110, 110);
pub const AI_PIECE: Color32 = Color32::from_rgb(255, 255, 0);
pub const AI_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(255, 255, 170);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(30, 30, 30);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 60)
}

pub fn suggestion_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 0, 0, 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_ALERT: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 10.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.45;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
