use eframe::egui;

const CONTROLS: [(&str, &str); 5] = [
    ("↑", "Move Up"),
    ("↓", "Move Down"),
    ("←", "Move Left"),
    ("→", "Move Right"),
    ("Space", "Pause Game"),
];

pub fn render_instructions(ui: &mut egui::Ui) {
    ui.heading("🎮 How to Play");
    ui.separator();
    ui.label(egui::RichText::new("Controls").strong());

    egui::Grid::new("controls_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for (key, action) in CONTROLS {
                ui.label(egui::RichText::new(key).monospace());
                ui.label(action);
                ui.end_row();
            }
        });

    ui.add_space(16.0);
    ui.label("🎯 Collect the red food to grow longer");
    ui.label("⚠ Avoid hitting yourself");
    ui.label("🏆 Try to achieve the highest score!");
}
