use std::path::Path;

use eframe::egui;

use penguin_dash::state::AppState;

use crate::ui::{cards, grid, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PenguinDashApp {
    pub state: AppState,
}

impl PenguinDashApp {
    pub fn new(startup_path: Option<&Path>) -> Self {
        let mut app = Self::default();
        match startup_path {
            Some(path) => app.state.load_path(path),
            None => app.state.load_bundled(),
        }
        app
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filter controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: value boxes, scatter, grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let AppState { session, colors, .. } = &mut self.state;
            let Some(session) = session else {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a file to view penguins  (File → Open…)");
                });
                return;
            };

            cards::value_boxes(ui, session);
            ui.add_space(8.0);

            ui.columns(2, |cols| {
                cards::card(&mut cols[0], "Bill length and depth", |ui| {
                    plot::length_depth_plot(ui, session, colors);
                });
                cards::card(&mut cols[1], "Penguin Data", |ui| {
                    grid::penguin_grid(ui, session, colors);
                });
            });
        });
    }
}
