use eframe::egui::{self, Color32, RichText, Ui};

use penguin_dash::state::AppState;
use penguin_dash::{Species, MASS_MAX, MASS_MIN};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter controls");
    ui.separator();

    let Some(session) = &state.session else {
        ui.label("No dataset loaded.");
        return;
    };

    // Copy the current inputs out so the widgets can hand changes back to
    // the session through its setters.
    let mut mass = session.filters().mass_threshold();
    let selection = Species::ALL.map(|sp| (sp, session.filters().is_selected(sp)));

    // ---- Mass slider ----
    let slider = egui::Slider::new(&mut mass, MASS_MIN..=MASS_MAX)
        .text("Mass")
        .step_by(1.0);
    if ui.add(slider).changed() {
        state.set_mass_threshold(mass);
    }
    ui.add_space(8.0);

    // ---- Species checkbox group ----
    ui.strong("Species");
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_species();
        }
        if ui.small_button("None").clicked() {
            state.select_no_species();
        }
    });
    for (species, selected) in selection {
        let mut checked = selected;
        let text = RichText::new(species.as_str()).color(state.colors.color_for(species));
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_species(species);
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = state.session.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export grid…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(session) = &mut state.session {
            let total = session.dataset().len();
            ui.label(format!("{} of {total} penguins visible", session.count()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open penguin data")
        .add_filter("Supported files", &["parquet", "pq", "json", "csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export grid")
        .set_file_name("penguins_filtered.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        state.export_grid(&path);
    }
}
