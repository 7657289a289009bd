use eframe::egui::{self, Color32, RichText, Ui};

use penguin_dash::data::aggregate::format_mean;
use penguin_dash::Session;

// ---------------------------------------------------------------------------
// Value boxes
// ---------------------------------------------------------------------------

/// The three headline numbers: count and the two bill means.
pub fn value_boxes(ui: &mut Ui, session: &mut Session) {
    let count = session.count();
    let bill_length = format_mean(session.mean_bill_length());
    let bill_depth = format_mean(session.mean_bill_depth());

    ui.columns(3, |cols| {
        value_box(&mut cols[0], "Number of penguins", &count.to_string());
        value_box(&mut cols[1], "Average bill length", &bill_length);
        value_box(&mut cols[2], "Average bill depth", &bill_depth);
    });
}

fn value_box(ui: &mut Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style())
        .fill(Color32::LIGHT_BLUE)
        .show(ui, |ui: &mut Ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).color(Color32::DARK_BLUE));
            ui.label(
                RichText::new(value)
                    .size(26.0)
                    .strong()
                    .color(Color32::DARK_BLUE),
            );
        });
}

// ---------------------------------------------------------------------------
// Card container
// ---------------------------------------------------------------------------

/// A titled frame around one dashboard widget.
pub fn card(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.strong(title);
        ui.separator();
        add_contents(ui);
    });
}
