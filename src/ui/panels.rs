use eframe::egui::{ComboBox, RichText, Ui};

use crate::models::{FilterOptions, FilterSelection};
use crate::ui::ui_config::UI_TEXT;

/// A renderable UI section that reports interactions as typed events.
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Selection change on one of the two filter dimensions. Carries the
/// underlying option value, never the display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    Category(String),
    Brand(String),
}

/// Display text for a selector option: empty values show as "unknown",
/// everything is uppercased. The underlying value is never altered.
pub fn option_label(raw: &str) -> String {
    let shown = if raw.is_empty() { "unknown" } else { raw };
    shown.to_uppercase()
}

/// The two single-select dropdowns, populated from the scanned option sets.
pub struct FilterPanel<'a> {
    options: &'a FilterOptions,
    selected_category: String,
    selected_brand: String,
}

impl<'a> FilterPanel<'a> {
    pub fn new(options: &'a FilterOptions, selection: &FilterSelection) -> Self {
        Self {
            options,
            selected_category: selection.category.clone(),
            selected_brand: selection.brand.clone(),
        }
    }
}

impl Panel for FilterPanel<'_> {
    type Event = FilterEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<FilterEvent> {
        let mut events = Vec::new();

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(UI_TEXT.label_category).strong());
            ComboBox::from_id_salt("category_filter")
                .selected_text(option_label(&self.selected_category))
                .show_ui(ui, |ui| {
                    for option in &self.options.categories {
                        if ui
                            .selectable_value(
                                &mut self.selected_category,
                                option.clone(),
                                option_label(option),
                            )
                            .clicked()
                        {
                            events.push(FilterEvent::Category(self.selected_category.clone()));
                        }
                    }
                });

            ui.add_space(20.0);

            ui.label(RichText::new(UI_TEXT.label_brand).strong());
            ComboBox::from_id_salt("brand_filter")
                .selected_text(option_label(&self.selected_brand))
                .show_ui(ui, |ui| {
                    for option in &self.options.brands {
                        if ui
                            .selectable_value(
                                &mut self.selected_brand,
                                option.clone(),
                                option_label(option),
                            )
                            .clicked()
                        {
                            events.push(FilterEvent::Brand(self.selected_brand.clone()));
                        }
                    }
                });
        });
        ui.add_space(4.0);

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_uppercased() {
        assert_eq!(option_label("beauty"), "BEAUTY");
        assert_eq!(option_label("Annibale Colombo"), "ANNIBALE COLOMBO");
        assert_eq!(option_label("all"), "ALL");
    }

    #[test]
    fn empty_value_displays_as_unknown() {
        assert_eq!(option_label(""), "UNKNOWN");
    }
}
