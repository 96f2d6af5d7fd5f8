use std::sync::mpsc::{self, Receiver, TryRecvError};

use eframe::egui::Ui;

use crate::{
    Cli,
    data::{DummyJsonProvider, FetchOutcome},
    models::{ChartSeries, FilterOptions, FilterSelection, Product},
    ui::{FilterEvent, FilterPanel, Panel, render_charts},
};

#[cfg(not(target_arch = "wasm32"))]
use {std::thread, tokio::runtime::Runtime};

/// Owns every piece of dashboard state: the raw catalog, the derived filter
/// options, the current selection, and the series all three chart views
/// bind to.
///
/// Exactly two triggers mutate state after construction: the fetch result
/// arriving on the channel, and a selection change from one of the filter
/// controls. Both funnel into `ChartSeries::derive`.
pub struct ChartPanel {
    products: Vec<Product>,
    options: FilterOptions,
    selection: FilterSelection,
    series: ChartSeries,
    fetch_rx: Option<Receiver<FetchOutcome>>,
}

impl ChartPanel {
    /// Spawns the catalog fetch off the UI thread and returns immediately;
    /// the panel renders its empty default state until the result lands.
    pub fn new(args: &Cli) -> Self {
        let (tx, rx) = mpsc::channel();
        let provider = DummyJsonProvider::new(args.products_url.as_deref());

        #[cfg(not(target_arch = "wasm32"))]
        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            rt.block_on(async move {
                // A dropped receiver just discards the late result
                let _ = tx.send(provider.fetch().await);
            });
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(provider.fetch().await);
        });

        Self {
            products: Vec::new(),
            options: FilterOptions::default(),
            selection: FilterSelection::default(),
            series: ChartSeries::default(),
            fetch_rx: Some(rx),
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        if self.fetch_rx.is_some() {
            // No input arrives while loading, so keep frames coming until
            // the channel delivers
            ui.ctx().request_repaint();
            self.poll_fetch();
        }

        let events = FilterPanel::new(&self.options, &self.selection).render(ui);
        self.apply_filter_events(events);

        render_charts(ui, &self.series);
    }

    fn poll_fetch(&mut self) {
        let Some(rx) = &self.fetch_rx else { return };
        match rx.try_recv() {
            Ok(outcome) => {
                self.fetch_rx = None;
                self.apply_fetch_outcome(outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.fetch_rx = None;
                log::error!("catalog fetch worker disconnected before sending a result");
            }
        }
    }

    /// Initial-load transition. A failure is logged for the operator and
    /// the panel stays in its empty default state for the session: no
    /// user-visible error, no retry.
    fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(products) => {
                self.options = FilterOptions::scan(&products);
                self.products = products;
                self.series = ChartSeries::derive(&self.products, &self.selection);
            }
            Err(err) => log::error!("catalog fetch failed: {err}"),
        }
    }

    /// Filter-change transition. The selection always tracks the controls;
    /// the series is only re-derived once a catalog is loaded.
    fn apply_filter_events(&mut self, events: Vec<FilterEvent>) {
        if events.is_empty() {
            return;
        }
        for event in events {
            match event {
                FilterEvent::Category(value) => self.selection.category = value,
                FilterEvent::Brand(value) => self.selection.brand = value,
            }
        }
        if !self.products.is_empty() {
            self.series = ChartSeries::derive(&self.products, &self.selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CatalogError;

    fn idle_panel() -> ChartPanel {
        ChartPanel {
            products: Vec::new(),
            options: FilterOptions::default(),
            selection: FilterSelection::default(),
            series: ChartSeries::default(),
            fetch_rx: None,
        }
    }

    fn product(id: u64, title: &str, price: f64, category: &str, brand: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            category: category.to_string(),
            brand: brand.to_string(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Mascara", 9.99, "beauty", "Essence"),
            product(2, "Lipstick", 12.99, "beauty", "Chic"),
            product(3, "Bed", 900.0, "furniture", "Annibale Colombo"),
        ]
    }

    fn shape_error() -> CatalogError {
        CatalogError::InvalidResponse(
            serde_json::from_str::<crate::models::CatalogPage>("{}").unwrap_err(),
        )
    }

    #[test]
    fn successful_fetch_populates_options_and_default_series() {
        let mut panel = idle_panel();
        panel.apply_fetch_outcome(Ok(catalog()));

        assert_eq!(panel.products.len(), 3);
        assert_eq!(panel.options.categories, vec!["all", "beauty", "furniture"]);
        assert_eq!(
            panel.options.brands,
            vec!["all", "Essence", "Chic", "Annibale Colombo"]
        );
        assert_eq!(panel.series.labels, vec!["Mascara", "Lipstick", "Bed"]);
        assert_eq!(panel.series.values, vec![9.99, 12.99, 900.0]);
    }

    #[test]
    fn failed_fetch_leaves_empty_default_state() {
        let mut panel = idle_panel();
        panel.apply_fetch_outcome(Err(shape_error()));

        assert!(panel.products.is_empty());
        assert_eq!(panel.options.categories, vec!["all"]);
        assert_eq!(panel.options.brands, vec!["all"]);
        assert!(panel.series.is_empty());
        assert_eq!(panel.selection, FilterSelection::default());
    }

    #[test]
    fn filter_events_before_load_do_not_derive() {
        let mut panel = idle_panel();
        panel.apply_filter_events(vec![FilterEvent::Category("beauty".to_string())]);

        // selection tracks the control, series stays untouched
        assert_eq!(panel.selection.category, "beauty");
        assert!(panel.series.is_empty());
    }

    #[test]
    fn filter_events_after_load_rederive_the_series() {
        let mut panel = idle_panel();
        panel.apply_fetch_outcome(Ok(catalog()));

        panel.apply_filter_events(vec![FilterEvent::Category("beauty".to_string())]);
        assert_eq!(panel.series.labels, vec!["Mascara", "Lipstick"]);

        panel.apply_filter_events(vec![FilterEvent::Brand("Chic".to_string())]);
        assert_eq!(panel.series.labels, vec!["Lipstick"]);

        // unmatched pair: empty series is a valid terminal state
        panel.apply_filter_events(vec![FilterEvent::Category("furniture".to_string())]);
        assert!(panel.series.is_empty());
    }

    #[test]
    fn options_survive_filter_changes() {
        let mut panel = idle_panel();
        panel.apply_fetch_outcome(Ok(catalog()));
        let options_before = panel.options.clone();

        panel.apply_filter_events(vec![FilterEvent::Category("beauty".to_string())]);
        assert_eq!(panel.options, options_before);
    }
}
