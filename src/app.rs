use eframe::egui;

use crate::data::model::AngleMatrix;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ArmViewerApp {
    matrix: AngleMatrix,
}

impl ArmViewerApp {
    pub fn new(matrix: AngleMatrix) -> Self {
        Self { matrix }
    }
}

impl eframe::App for ArmViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.label(format!("{} time steps loaded", self.matrix.len()));
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::angle_plot(ui, &self.matrix);
        });
    }
}
