use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use penguin_dash::color::SpeciesColors;
use penguin_dash::data::aggregate::{format_cell, GridTable};
use penguin_dash::Session;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Penguin data grid
// ---------------------------------------------------------------------------

/// Filtered rows, five columns, in dataset order.
pub fn penguin_grid(ui: &mut Ui, session: &mut Session, colors: &SpeciesColors) {
    let table = session.grid();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(72.0), GridTable::COLUMNS.len())
        .header(20.0, |mut header| {
            for name in GridTable::COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            let rows = table.rows();
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let r = &rows[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(RichText::new(r.species.as_str()).color(colors.color_for(r.species)));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&r.island);
                });
                for value in [r.bill_length_mm, r.bill_depth_mm, r.body_mass_g] {
                    row.col(|ui: &mut Ui| {
                        ui.label(format_cell(value));
                    });
                }
            });
        });

    if table.is_empty() {
        ui.label("No penguins match the current filters.");
    }
}
