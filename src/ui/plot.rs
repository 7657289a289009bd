use eframe::egui::Ui;
use egui_plot::{Legend, Plot, Points};

use penguin_dash::color::SpeciesColors;
use penguin_dash::Session;

// ---------------------------------------------------------------------------
// Bill length vs. depth scatter
// ---------------------------------------------------------------------------

/// Scatter of bill length (x) against bill depth (y), one series per species.
/// An empty view draws empty axes.
pub fn length_depth_plot(ui: &mut Ui, session: &mut Session, colors: &SpeciesColors) {
    let projection = session.scatter();

    Plot::new("length_depth_plot")
        .legend(Legend::default())
        .x_axis_label("bill_length_mm")
        .y_axis_label("bill_depth_mm")
        .view_aspect(1.2)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (species, points) in projection.by_species() {
                let series = Points::new(points)
                    .name(species.as_str())
                    .color(colors.color_for(species))
                    .filled(true)
                    .radius(3.5);
                plot_ui.points(series);
            }
        });
}
