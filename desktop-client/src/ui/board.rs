use common::games::snake::{Cell, GameSnapshot, Lifecycle};
use eframe::egui;

use crate::colors;

const CORNER_RADIUS: f32 = 8.0;

pub fn cell_rect(origin: egui::Pos2, cell: Cell, cell_size: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            origin.x + cell.x as f32 * cell_size,
            origin.y + cell.y as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

fn overlay_text(snapshot: &GameSnapshot) -> Option<&'static str> {
    match snapshot.lifecycle {
        Lifecycle::Paused => Some("PAUSED"),
        Lifecycle::Ended => Some("GAME OVER"),
        Lifecycle::NotStarted => Some("Press an arrow key to start"),
        Lifecycle::Running => None,
    }
}

pub fn render_board(ui: &mut egui::Ui, snapshot: &GameSnapshot, cell_size: f32) {
    let side = snapshot.grid_size as f32 * cell_size;
    let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, CORNER_RADIUS, colors::BOARD_BACKGROUND);

    let grid_stroke = egui::Stroke::new(1.0, colors::GRID_LINE);
    for i in 0..=snapshot.grid_size {
        let offset = i as f32 * cell_size;
        painter.line_segment(
            [egui::pos2(rect.min.x + offset, rect.min.y), egui::pos2(rect.min.x + offset, rect.max.y)],
            grid_stroke,
        );
        painter.line_segment(
            [egui::pos2(rect.min.x, rect.min.y + offset), egui::pos2(rect.max.x, rect.min.y + offset)],
            grid_stroke,
        );
    }

    for (index, segment) in snapshot.snake.iter().enumerate() {
        let color = if index == 0 { colors::SNAKE_HEAD } else { colors::SNAKE_BODY };
        painter.rect_filled(cell_rect(rect.min, *segment, cell_size), cell_size / 4.0, color);
    }

    painter.circle_filled(
        cell_rect(rect.min, snapshot.food, cell_size).center(),
        cell_size / 3.0,
        colors::FOOD,
    );

    if let Some(text) = overlay_text(snapshot) {
        painter.rect_filled(rect, CORNER_RADIUS, colors::OVERLAY);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(28.0),
            egui::Color32::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(lifecycle: Lifecycle) -> GameSnapshot {
        GameSnapshot {
            session_id: 1,
            tick: 0,
            grid_size: 25,
            snake: vec![Cell::new(12, 12)],
            food: Cell::new(5, 5),
            score: 0,
            lifecycle,
            end_reason: None,
        }
    }

    #[test]
    fn test_cell_rect_scales_by_cell_size() {
        let rect = cell_rect(egui::pos2(10.0, 20.0), Cell::new(3, 2), 20.0);
        assert_eq!(rect.min, egui::pos2(70.0, 60.0));
        assert_eq!(rect.size(), egui::vec2(20.0, 20.0));
    }

    #[test]
    fn test_overlay_hidden_while_running() {
        assert_eq!(overlay_text(&snapshot(Lifecycle::Paused)), Some("PAUSED"));
        assert_eq!(overlay_text(&snapshot(Lifecycle::Ended)), Some("GAME OVER"));
        assert_eq!(overlay_text(&snapshot(Lifecycle::Running)), None);
        assert!(overlay_text(&snapshot(Lifecycle::NotStarted)).is_some());
    }
}
