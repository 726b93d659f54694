//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Player, BOARD_SIZE};
use crate::rules::WinningLine;

use super::theme::*;

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
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked slot if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Player,
        last_move: Option<usize>,
        winning_line: Option<WinningLine>,
        game_over: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        // Draw grid lines
        self.draw_grid(&painter);

        // Draw placed marks
        self.draw_marks(&painter, board);

        // Draw last move marker
        if let Some(slot) = last_move {
            self.draw_last_move_marker(&painter, slot);
        }

        // Draw winning line highlight
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Handle hover preview and click
        let mut clicked_slot = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(slot) = self.screen_to_slot(pointer_pos) {
                    let is_valid = board.get(slot) == Cell::Empty;

                    self.draw_hover_preview(&painter, slot, current_turn, is_valid);

                    if response.clicked() && is_valid {
                        clicked_slot = Some(slot);
                    }
                }
            }
        }

        clicked_slot
    }

    /// Top-left corner of the playable grid
    fn grid_origin(&self) -> Pos2 {
        self.board_rect.min + Vec2::splat(BOARD_MARGIN)
    }

    /// Center point of a slot's cell
    fn cell_center(&self, slot: usize) -> Pos2 {
        let row = slot / BOARD_SIZE;
        let col = slot % BOARD_SIZE;
        self.grid_origin()
            + Vec2::new(
                (col as f32 + 0.5) * self.cell_size,
                (row as f32 + 0.5) * self.cell_size,
            )
    }

    /// Draw the two inner vertical and horizontal lines of the grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.grid_origin();
        let extent = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = origin + Vec2::new(offset, 0.0);
            let end = origin + Vec2::new(offset, extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = origin + Vec2::new(0.0, offset);
            let end = origin + Vec2::new(extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for slot in 0..BOARD_SIZE * BOARD_SIZE {
            if let Cell::Mark(player) = board.get(slot) {
                self.draw_mark(painter, slot, player, 255);
            }
        }
    }

    /// Draw a single mark with the given opacity
    fn draw_mark(&self, painter: &Painter, slot: usize, player: Player, alpha: u8) {
        let center = self.cell_center(slot);
        let radius = self.cell_size * MARK_RADIUS_RATIO;

        match player {
            Player::X => {
                let color = X_MARK.gamma_multiply(alpha as f32 / 255.0);
                let stroke = Stroke::new(MARK_STROKE_WIDTH, color);
                let d = Vec2::splat(radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment(
                    [center + Vec2::new(-radius, radius), center + Vec2::new(radius, -radius)],
                    stroke,
                );
            }
            Player::O => {
                let color = O_MARK.gamma_multiply(alpha as f32 / 255.0);
                painter.circle_stroke(center, radius, Stroke::new(MARK_STROKE_WIDTH, color));
            }
        }
    }

    /// Draw a faint preview of the hovered move
    fn draw_hover_preview(
        &self,
        painter: &Painter,
        slot: usize,
        player: Player,
        is_valid: bool,
    ) {
        let rect = Rect::from_center_size(
            self.cell_center(slot),
            Vec2::splat(self.cell_size - GRID_LINE_WIDTH * 2.0),
        );
        let fill = if is_valid { hover_valid() } else { hover_invalid() };
        painter.rect_filled(rect, CornerRadius::same(4), fill);

        if is_valid {
            self.draw_mark(painter, slot, player, 90);
        }
    }

    /// Draw a small dot marking the most recent move
    fn draw_last_move_marker(&self, painter: &Painter, slot: usize) {
        let center = self.cell_center(slot);
        let offset = self.cell_size * 0.38;
        painter.circle_filled(
            center + Vec2::new(offset, -offset),
            4.0,
            LAST_MOVE_MARKER,
        );
    }

    /// Draw a line through the three winning cells
    fn draw_winning_line(&self, painter: &Painter, line: WinningLine) {
        let start = self.cell_center(line[0]);
        let end = self.cell_center(line[2]);

        // Extend slightly past the outer cell centers
        let dir = (end - start).normalized() * self.cell_size * 0.35;
        painter.line_segment(
            [start - dir, end + dir],
            Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT),
        );
    }

    /// Convert a screen position to a slot index
    fn screen_to_slot(&self, pos: Pos2) -> Option<usize> {
        let origin = self.grid_origin();
        let rel = pos - origin;
        let extent = BOARD_SIZE as f32 * self.cell_size;

        if rel.x < 0.0 || rel.y < 0.0 || rel.x >= extent || rel.y >= extent {
            return None;
        }

        let col = (rel.x / self.cell_size) as usize;
        let row = (rel.y / self.cell_size) as usize;

        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(row * BOARD_SIZE + col)
        } else {
            None
        }
    }
}
