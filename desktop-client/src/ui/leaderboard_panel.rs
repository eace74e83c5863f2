use common::leaderboard::LeaderboardEntry;
use eframe::egui;

use crate::colors;

fn medal(rank: usize) -> Option<(&'static str, egui::Color32)> {
    match rank {
        0 => Some(("🥇", colors::GOLD)),
        1 => Some(("🥈", colors::SILVER)),
        2 => Some(("🥉", colors::BRONZE)),
        _ => None,
    }
}

fn format_date(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map(|date| date.with_timezone(&chrono::Local).format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn render_leaderboard(ui: &mut egui::Ui, entries: &[LeaderboardEntry]) {
    ui.heading("🏆 Leaderboard");
    ui.separator();

    if entries.is_empty() {
        ui.label(egui::RichText::new("No scores yet. Be the first!").color(egui::Color32::GRAY));
        return;
    }

    egui::Grid::new("leaderboard_grid")
        .num_columns(3)
        .spacing([10.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            for (rank, entry) in entries.iter().enumerate() {
                match medal(rank) {
                    Some((icon, color)) => ui.label(egui::RichText::new(icon).color(color)),
                    None => ui.label(format!("{}.", rank + 1)),
                };
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&entry.name).strong());
                    ui.label(egui::RichText::new(format_date(entry.timestamp)).small().color(egui::Color32::GRAY));
                });
                ui.label(egui::RichText::new(entry.score.to_string()).strong());
                ui.end_row();
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_top_three_get_medals() {
        assert!(medal(0).is_some());
        assert!(medal(2).is_some());
        assert!(medal(3).is_none());
    }

    #[test]
    fn test_format_date_is_not_empty_for_valid_timestamp() {
        assert_eq!(format_date(0).len(), "1970-01-01".len());
        assert!(format_date(i64::MAX).is_empty());
    }
}
