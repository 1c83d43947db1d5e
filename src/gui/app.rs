//! Main Application Window
//! Wires the control panel, background CSV loader, and chart viewer.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use egui::SidePanel;

use crate::charts::BarSeries;
use crate::data::{self, Dataset, EntitySeries};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};

/// Loaded automatically at startup when present in the working directory.
const DEFAULT_DATASET: &str = "MilitaryExpenditureTotal.csv";

/// CSV loading result from the background thread.
enum LoadResult {
    Complete {
        dataset: Dataset,
        line_series: Vec<EntitySeries>,
    },
    Error(String),
}

/// Main application window.
pub struct ViewerApp {
    dataset: Option<Dataset>,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl ViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            dataset: None,
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            load_rx: None,
            is_loading: false,
        };

        if Path::new(DEFAULT_DATASET).exists() {
            app.start_load(PathBuf::from(DEFAULT_DATASET));
        }
        app
    }

    /// Handle CSV file selection.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_load(path);
        }
    }

    /// Load and parse the CSV in a background thread; derive the per-entity
    /// line series there as well so the UI thread only receives results.
    fn start_load(&mut self, path: PathBuf) {
        self.chart_viewer.clear();
        self.dataset = None;
        self.control_panel.settings.csv_path = Some(path.clone());
        self.control_panel.set_status("Loading CSV file...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        let path_str = path.to_string_lossy().to_string();
        log::info!("loading {}", path.display());

        thread::spawn(move || {
            let result = match data::load_csv(&path_str) {
                Ok(dataset) => {
                    let line_series = dataset.entity_series();
                    LoadResult::Complete {
                        dataset,
                        line_series,
                    }
                }
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for CSV loading results.
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete {
                        dataset,
                        line_series,
                    } => {
                        let rows = dataset.len();
                        let countries = dataset.entities.len();
                        log::info!("loaded {rows} rows across {countries} entities");

                        self.control_panel.update_entities(dataset.entities.clone());
                        self.chart_viewer
                            .set_line_series(line_series, dataset.year_extent());
                        self.dataset = Some(dataset);
                        self.rebuild_bar_series();

                        self.control_panel
                            .set_status(&format!("Loaded {rows} rows, {countries} countries"));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        log::error!("load failed: {error}");
                        self.control_panel.set_error(&format!("Error: {error}"));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Refilter the dataset for the bar chart's selected entity.
    fn rebuild_bar_series(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        let entity = self.control_panel.settings.selected_entity.clone();
        let points = dataset
            .filter_by_entity(&entity)
            .iter()
            .map(|r| (r.year, r.expenditure))
            .collect();
        self.chart_viewer.set_bar_series(BarSeries { entity, points });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::EntityChanged => self.rebuild_bar_series(),
                        ControlPanelAction::ScaleChanged => {
                            // The line chart reads the mode each frame; the
                            // redraw happens on this same frame.
                            log::debug!(
                                "scale mode: {}",
                                self.control_panel.settings.scale_mode.label()
                            );
                        }
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer
                .show(ui, self.control_panel.settings.scale_mode);
        });
    }
}
