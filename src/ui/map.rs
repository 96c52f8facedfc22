use eframe::egui::{Color32, Ui};
use egui_plot::{MarkerShape, Plot, PlotBounds, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Destination map (central panel)
// ---------------------------------------------------------------------------

/// Default view: centred on India, spanning the whole country.
const DEFAULT_CENTER: (f64, f64) = (20.5937, 78.9629);
const DEFAULT_HALF_SPAN: (f64, f64) = (14.0, 15.0);

/// View span when jumping to a single destination.
const FOCUS_HALF_SPAN: (f64, f64) = (1.0, 1.25);

/// Render the marker map in the central panel.
///
/// One marker per visible record with a position, coloured by region;
/// hovering a marker shows the destination name. A pending focus request
/// (set by a card's "View on map" button) pans the view to that record.
/// Records missing either coordinate stay in the card list but never
/// become markers.
pub fn destination_map(ui: &mut Ui, state: &mut AppState) {
    // Consume the one-shot focus request before borrowing the table.
    let focused = state.focused.take();

    let table = match &state.table {
        Some(table) => table,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a destinations CSV to see the map  (File → Open…)");
            });
            return;
        }
    };

    let focus_position = focused
        .and_then(|idx| table.records.get(idx))
        .and_then(|rec| rec.position());

    let color_map = &state.color_map;
    let (center_lat, center_lon) = DEFAULT_CENTER;
    let (half_lat, half_lon) = DEFAULT_HALF_SPAN;

    Plot::new("destination_map")
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .include_x(center_lon - half_lon)
        .include_x(center_lon + half_lon)
        .include_y(center_lat - half_lat)
        .include_y(center_lat + half_lat)
        .label_formatter(|name, point| {
            if name.is_empty() {
                format!("{:.4} N\n{:.4} E", point.y, point.x)
            } else {
                format!("{name}\n{:.4} N, {:.4} E", point.y, point.x)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if let Some((lat, lon)) = focus_position {
                let (focus_lat, focus_lon) = FOCUS_HALF_SPAN;
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [lon - focus_lon, lat - focus_lat],
                    [lon + focus_lon, lat + focus_lat],
                ));
            }

            for &idx in &state.visible_indices {
                let rec = &table.records[idx];
                let Some((lat, lon)) = rec.position() else {
                    continue;
                };

                let color = color_map
                    .as_ref()
                    .map(|cm| cm.color_for(&rec.state))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let marker: PlotPoints = vec![[lon, lat]].into();
                plot_ui.points(
                    Points::new(marker)
                        .name(&rec.name)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(5.0),
                );
            }
        });
}
