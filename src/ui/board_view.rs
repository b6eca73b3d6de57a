//! Board rendering for the Connect Four GUI
//!
//! The board is drawn as a blue frame of holes with an extra strip on top
//! where the piece about to be dropped hovers over the pointer's column.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::rules::Window;
use crate::{Board, Piece, COL_COUNT, ROW_COUNT};

use super::theme::*;

/// Rows drawn on screen: the hover strip plus the board
const DRAWN_ROWS: usize = ROW_COUNT + 1;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked column if any.
    ///
    /// Clicks on a full column are reported too so the caller can explain
    /// why the drop was refused.
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Piece,
        accepts_input: bool,
        last_move: Option<(usize, usize)>,
        suggested_move: Option<usize>,
        winning_line: Option<Window>,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        self.cell_size = ((available_size.x - 2.0 * BOARD_MARGIN) / COL_COUNT as f32)
            .min((available_size.y - 2.0 * BOARD_MARGIN) / DRAWN_ROWS as f32)
            .max(10.0);

        let size = Vec2::new(
            self.cell_size * COL_COUNT as f32,
            self.cell_size * DRAWN_ROWS as f32,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        // Hover strip and board frame
        let frame_rect = Rect::from_min_max(
            self.board_rect.min + Vec2::new(0.0, self.cell_size),
            self.board_rect.max,
        );
        painter.rect_filled(
            Rect::from_min_size(self.board_rect.min, Vec2::new(size.x, self.cell_size)),
            CornerRadius::ZERO,
            HOVER_ROW_BG,
        );
        painter.rect_filled(frame_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_pieces(&painter, board);

        if let Some((row, col)) = last_move {
            painter.circle_filled(
                self.cell_center(row, col),
                LAST_MOVE_MARKER_RADIUS,
                LAST_MOVE_MARKER,
            );
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if let Some(col) = suggested_move {
            self.draw_suggestion(&painter, board, col);
        }

        let mut clicked_col = None;

        if accepts_input {
            if let Some(col) = response.hover_pos().and_then(|p| self.screen_to_column(p)) {
                let is_valid = board.is_valid(col);
                self.draw_hover_preview(&painter, col, current_turn, is_valid);

                if response.clicked() {
                    clicked_col = Some(col);
                }
            }
        }

        clicked_col
    }

    /// Draw every hole, filled or empty
    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        for row in 0..ROW_COUNT {
            for col in 0..COL_COUNT {
                let center = self.cell_center(row, col);
                match board.get(row, col) {
                    Piece::Empty => {
                        painter.circle_filled(center, radius, HOLE);
                    }
                    piece => self.draw_piece(painter, center, piece),
                }
            }
        }
    }

    /// Draw a single piece with a small highlight
    fn draw_piece(&self, painter: &Painter, center: Pos2, piece: Piece) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let (fill, highlight) = match piece {
            Piece::Player => (PLAYER_PIECE, PLAYER_PIECE_HIGHLIGHT),
            Piece::Ai => (AI_PIECE, AI_PIECE_HIGHLIGHT),
            Piece::Empty => return,
        };

        painter.circle_filled(center, radius, fill);
        painter.circle_filled(
            center + Vec2::new(-radius * 0.3, -radius * 0.3),
            radius * 0.2,
            highlight,
        );
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &Window) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.cell_center(pair[0].0, pair[0].1);
            let end = self.cell_center(pair[1].0, pair[1].1);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * PIECE_RADIUS_RATIO + 2.0;
        for &(row, col) in line {
            painter.circle_stroke(self.cell_center(row, col), radius, stroke);
        }
    }

    /// Mark the hole a hinted drop would land in
    fn draw_suggestion(&self, painter: &Painter, board: &Board, col: usize) {
        let Some(row) = board.next_open_row(col) else {
            return;
        };
        let center = self.cell_center(row, col);

        painter.circle_filled(center, self.cell_size * PIECE_RADIUS_RATIO, suggestion_fill());
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(self.cell_size * 0.3),
            Color32::WHITE,
        );
    }

    /// Draw the piece about to be dropped above the hovered column
    fn draw_hover_preview(&self, painter: &Painter, col: usize, turn: Piece, is_valid: bool) {
        let center = self.hover_center(col);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        let color = match (is_valid, turn) {
            (false, _) => hover_invalid(),
            (true, Piece::Player) => PLAYER_PIECE,
            (true, Piece::Ai) => AI_PIECE,
            (true, Piece::Empty) => return,
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert a screen position to the column under it
    pub fn screen_to_column(&self, screen_pos: Pos2) -> Option<usize> {
        if !self.board_rect.contains(screen_pos) {
            return None;
        }
        let col = ((screen_pos.x - self.board_rect.min.x) / self.cell_size).floor() as i32;
        (0..COL_COUNT as i32).contains(&col).then_some(col as usize)
    }

    /// Screen center of a board cell; row 0 is drawn at the bottom
    pub fn cell_center(&self, row: usize, col: usize) -> Pos2 {
        let drawn_row = ROW_COUNT - row;
        Pos2::new(
            self.board_rect.min.x + (col as f32 + 0.5) * self.cell_size,
            self.board_rect.min.y + (drawn_row as f32 + 0.5) * self.cell_size,
        )
    }

    fn hover_center(&self, col: usize) -> Pos2 {
        Pos2::new(
            self.board_rect.min.x + (col as f32 + 0.5) * self.cell_size,
            self.board_rect.min.y + 0.5 * self.cell_size,
        )
    }
}
