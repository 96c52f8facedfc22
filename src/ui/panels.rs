use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – search and region filters
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let table = match &state.table {
        Some(table) => table,
        None => {
            ui.label("No destinations loaded.");
            return;
        }
    };

    // Clone what the widgets need so we can mutate state inside closures.
    let regions = table.regions.clone();
    let total = table.len();

    // ---- Free-text search ----
    ui.strong("Search");
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.filters.query)
            .hint_text("Search destinations…"),
    );
    if response.changed() {
        state.refilter();
    }

    ui.add_space(8.0);

    // ---- Region selector ----
    ui.strong("Region");
    let selected_label = state
        .filters
        .region
        .clone()
        .unwrap_or_else(|| "All regions".to_string());
    egui::ComboBox::from_id_salt("region_filter")
        .selected_text(selected_label)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.filters.region.is_none(), "All regions")
                .clicked()
            {
                state.set_region(None);
            }
            for region in &regions {
                let is_selected = state.filters.region.as_deref() == Some(region.as_str());

                // Tint each entry with its marker colour so the combo doubles
                // as the map legend.
                let mut text = RichText::new(region);
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(region));
                }

                if ui.selectable_label(is_selected, text).clicked() {
                    state.set_region(Some(region.clone()));
                }
            }
        });

    ui.separator();

    // ---- Active filter summary ----
    ui.strong("Current filters");
    if state.filters.is_unconstrained() {
        ui.weak("None (showing every destination)");
    } else {
        match &state.filters.region {
            Some(region) => ui.label(format!("Region: {region}")),
            None => ui.label("Region: all"),
        };
        if !state.filters.query.is_empty() {
            ui.label(format!("Search: \"{}\"", state.filters.query));
        }
    }
    ui.add_space(4.0);
    ui.label(format!("{} of {total} destinations shown", state.visible_indices.len()));
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
            // Reload drops the memoized table and re-reads the source.
            if ui
                .add_enabled(state.source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} of {} destinations",
                state.visible_indices.len(),
                table.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open destinations CSV")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_from(&path);
    }
}
