use eframe::egui;

use crate::state::AppState;
use crate::ui::{cards, map, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WayfarerApp {
    pub state: AppState,
}

impl Default for WayfarerApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for WayfarerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Right side panel: destination cards ----
        egui::SidePanel::right("card_panel")
            .default_width(340.0)
            .resizable(true)
            .show(ctx, |ui| {
                cards::card_list(ui, &mut self.state);
            });

        // ---- Central panel: map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            map::destination_map(ui, &mut self.state);
        });
    }
}
