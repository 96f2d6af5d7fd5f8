use std::sync::Once;

use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::ui::ui_config::UI_CONFIG;

static VISUALS_INIT: Once = Once::new();

/// Install the application visuals. Every chart view draws against these
/// globals, so this runs before the first frame; repeated calls are no-ops
/// and there is no teardown.
pub fn install_visuals(ctx: &Context) {
    VISUALS_INIT.call_once(|| {
        let mut visuals = Visuals::dark();
        visuals.window_fill = UI_CONFIG.colors.central_panel;
        visuals.panel_fill = UI_CONFIG.colors.central_panel;
        visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
        visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
        visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
        visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
        ctx.set_visuals(visuals);
        ctx.style_mut(|s| s.interaction.selectable_labels = false);
    });
}

pub(crate) fn section_heading(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .strong()
            .size(16.0)
            .color(UI_CONFIG.colors.heading),
    );
}
