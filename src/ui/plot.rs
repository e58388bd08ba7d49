use eframe::egui::{Color32, Ui};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{AngleMatrix, ARM_COUNT, ARM_LABELS};

// ---------------------------------------------------------------------------
// Angle plot (central panel)
// ---------------------------------------------------------------------------

/// Render the joint rotation plot in the central panel.
///
/// Each arm is one line series against the implicit time-step axis. An empty
/// matrix just shows an empty plot.
pub fn angle_plot(ui: &mut Ui, matrix: &AngleMatrix) {
    Plot::new("arm_angles")
        .legend(Legend::default().position(Corner::LeftTop))
        .x_axis_label("Time step")
        .y_axis_label("Rotation angle [rad]")
        .show(ui, |plot_ui| {
            for arm in 0..ARM_COUNT {
                let points: PlotPoints = matrix
                    .series(arm)
                    .iter()
                    .enumerate()
                    .map(|(step, &angle)| [step as f64, angle])
                    .collect();

                let line = Line::new(points)
                    .name(ARM_LABELS[arm])
                    .color(series_color(arm))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}

/// Distinct colour for one series: evenly spaced hues over the arm count.
fn series_color(arm: usize) -> Color32 {
    let hue = (arm as f32 / ARM_COUNT as f32) * 360.0;
    let rgb: Srgb = Hsl::new(hue, 0.75, 0.55).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colors_are_distinct() {
        let colors: Vec<Color32> = (0..ARM_COUNT).map(series_color).collect();
        for i in 0..ARM_COUNT {
            for j in (i + 1)..ARM_COUNT {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }
}
