//! Chart Viewer Widget
//! Central scrollable panel holding the bar and line chart cards.

use egui::{RichText, ScrollArea};

use crate::charts::{bar, line, BarSeries, ScaleMode};
use crate::data::EntitySeries;

const CARD_SPACING: f32 = 15.0;

/// Holds the derived series for both charts.
pub struct ChartViewer {
    pub bar_series: BarSeries,
    pub line_series: Vec<EntitySeries>,
    pub year_extent: Option<(i32, i32)>,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self {
            bar_series: BarSeries::default(),
            line_series: Vec::new(),
            year_extent: None,
        }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all chart data (before a new load).
    pub fn clear(&mut self) {
        self.bar_series = BarSeries::default();
        self.line_series.clear();
        self.year_extent = None;
    }

    pub fn set_line_series(&mut self, series: Vec<EntitySeries>, year_extent: Option<(i32, i32)>) {
        self.line_series = series;
        self.year_extent = year_extent;
    }

    pub fn set_bar_series(&mut self, series: BarSeries) {
        self.bar_series = series;
    }

    /// Draw both chart cards.
    pub fn show(&mut self, ui: &mut egui::Ui, scale_mode: ScaleMode) {
        if self.line_series.is_empty() && self.bar_series.points.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let bar_title = format!("Expenditure by Year — {}", self.bar_series.entity);
                Self::card(ui, &bar_title, |ui| {
                    bar::show(ui, &self.bar_series);
                });

                ui.add_space(CARD_SPACING);

                Self::card(ui, "Expenditure by Country", |ui| {
                    line::show(ui, &self.line_series, scale_mode, self.year_extent);
                });
            });
    }

    fn card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(16.0).strong());
                    ui.add_space(8.0);
                    add_contents(ui);
                });
            });
    }
}
