use eframe::egui::{self, ScrollArea, Ui};

use crate::data::model::DestinationRecord;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Destination cards (right panel)
// ---------------------------------------------------------------------------

/// Render the scrollable card list, one card per visible record, in
/// filtered order.
pub fn card_list(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Destinations");
    ui.separator();

    let table = match &state.table {
        Some(table) => table,
        None => {
            ui.label("No destinations loaded.");
            return;
        }
    };

    if state.visible_indices.is_empty() {
        ui.weak("No destinations matched your filters. Try adjusting them.");
        return;
    }

    // Focus requests are collected and applied after the loop so the cards
    // can keep an immutable borrow of the table while rendering.
    let mut focus_request = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for &idx in &state.visible_indices {
                ui.group(|ui: &mut Ui| {
                    destination_card(ui, &table.records[idx], idx, &mut focus_request);
                });
                ui.add_space(6.0);
            }
        });

    if let Some(idx) = focus_request {
        state.focus_on(idx);
    }
}

/// One card: header, photo (or a textual placeholder), description,
/// attraction list, and a "View on map" button when the record has a
/// position.
fn destination_card(
    ui: &mut Ui,
    record: &DestinationRecord,
    index: usize,
    focus_request: &mut Option<usize>,
) {
    ui.strong(format!("{}, {}", record.name, record.state));
    ui.add_space(4.0);

    match record.image_url.as_deref() {
        Some(url) => {
            ui.add(
                egui::Image::from_uri(url)
                    .max_height(160.0)
                    .max_width(ui.available_width()),
            );
            ui.small(record.name.as_str());
        }
        None => {
            ui.weak("No image available");
        }
    }

    if let Some(description) = &record.description {
        ui.add_space(4.0);
        ui.label(description);
    }

    let attractions = record.attractions();
    if !attractions.is_empty() {
        ui.add_space(4.0);
        ui.strong("Popular attractions");
        for attraction in attractions {
            ui.label(format!("• {attraction}"));
        }
    }

    if record.position().is_some() {
        ui.add_space(4.0);
        if ui
            .button("View on map")
            .on_hover_text(format!("Show {} on the map", record.name))
            .clicked()
        {
            *focus_request = Some(index);
        }
    }
}
