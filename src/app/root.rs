use eframe::{
    Frame,
    egui::{CentralPanel, Context, RichText, ScrollArea, TopBottomPanel},
};

use crate::{
    Cli,
    app::ChartPanel,
    ui::{UI_CONFIG, UI_TEXT, install_visuals},
};

/// Composition root: a static heading and one embedded chart panel. All
/// dashboard state lives in the panel.
pub struct App {
    panel: ChartPanel,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        install_visuals(&cc.egui_ctx);
        Self {
            panel: ChartPanel::new(&args),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        TopBottomPanel::top("app_heading")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.heading(
                    RichText::new(UI_TEXT.app_heading)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
            });

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.panel.ui(ui);
                });
        });
    }
}
