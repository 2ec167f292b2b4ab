use std::time::{Duration, Instant};

use eframe::egui;

use crate::state::AppState;
use crate::ui::{listing, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct CourseScoutApp {
    pub state: AppState,
}

impl eframe::App for CourseScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance the auto-submit clock, then make sure a frame arrives at
        // the deadline so the trailing submission is observed promptly.
        let now = Instant::now();
        self.state.tick(now);
        if let Some(remaining) = self.state.form.pending_submit_in(now) {
            ctx.request_repaint_after(remaining.max(Duration::from_millis(10)));
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: course listing ----
        egui::CentralPanel::default().show(ctx, |ui| {
            listing::course_listing(ui, &self.state);
        });
    }
}
