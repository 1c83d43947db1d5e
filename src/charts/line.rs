//! Multi-Line Chart
//! One line per entity with a linear/log y axis and a nearest-point
//! hover tooltip.

use egui::{Color32, Id};
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints, Points};

use super::format;
use super::scale::{self, ScaleMode};
use crate::data::EntitySeries;

/// Categorical palette for entity lines (classic 10-color scheme).
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(148, 103, 189),
    Color32::from_rgb(140, 86, 75),
    Color32::from_rgb(227, 119, 194),
    Color32::from_rgb(127, 127, 127),
    Color32::from_rgb(188, 189, 34),
    Color32::from_rgb(23, 190, 207),
];

pub fn entity_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// The data point nearest the pointer, resolved inside the plot closure.
struct HoverPoint {
    entity: String,
    color: Color32,
    year: i32,
    value: f64,
    plotted: [f64; 2],
}

/// Render the line chart for all entities in the given scale mode.
pub fn show(
    ui: &mut egui::Ui,
    series: &[EntitySeries],
    mode: ScaleMode,
    year_extent: Option<(i32, i32)>,
) {
    let ticks: Vec<f64> = year_extent
        .map(|(min, max)| scale::decade_ticks(min, max))
        .unwrap_or_default()
        .into_iter()
        .map(|t| t as f64)
        .collect();

    // Keying the plot id on the scale mode resets the view on a mode
    // switch, so the chart is rebuilt from the retained dataset.
    let plot = Plot::new(("line_chart", mode))
        .height(420.0)
        .allow_scroll(false)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Expenditure")
        .x_grid_spacer(move |_input| {
            ticks
                .iter()
                .map(|&value| GridMark {
                    value,
                    step_size: 10.0,
                })
                .collect()
        })
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .y_axis_formatter(move |mark, _range| format::dollars_si(mode.invert(mark.value)))
        .include_y(0.0);

    let inner = plot.show(ui, |plot_ui| {
        for (idx, s) in series.iter().enumerate() {
            let points: PlotPoints = s
                .points
                .iter()
                .filter(|&&(_, v)| mode.admits(v))
                .map(|&(year, v)| [year as f64, mode.apply(v)])
                .collect();
            plot_ui.line(
                Line::new(points)
                    .color(entity_color(idx))
                    .width(1.5)
                    .name(&s.entity),
            );
        }

        let hover = plot_ui
            .pointer_coordinate()
            .and_then(|p| nearest_hover(series, mode, p.x, p.y));

        if let Some(h) = &hover {
            plot_ui.points(
                Points::new(vec![h.plotted])
                    .radius(4.0)
                    .color(h.color),
            );
        }
        hover
    });

    if let Some(h) = inner.inner.filter(|_| inner.response.hovered()) {
        egui::show_tooltip_at_pointer(
            ui.ctx(),
            inner.response.layer_id,
            Id::new("line_tooltip"),
            |ui| {
                ui.colored_label(
                    h.color,
                    format!("{} ({}): ${}B", h.entity, h.year, format::thousands(h.value)),
                );
            },
        );
    }
}

/// Snap the pointer's x to the nearest year on each series, then pick the
/// series whose point is vertically closest to the pointer.
fn nearest_hover(
    series: &[EntitySeries],
    mode: ScaleMode,
    x: f64,
    y: f64,
) -> Option<HoverPoint> {
    let mut best: Option<(f64, HoverPoint)> = None;

    for (idx, s) in series.iter().enumerate() {
        let Some(i) = scale::nearest_index(&s.points, x) else {
            continue;
        };
        let (year, value) = s.points[i];
        if !mode.admits(value) {
            continue;
        }
        let plotted_y = mode.apply(value);
        let distance = (plotted_y - y).abs();
        if best.as_ref().map_or(true, |(d, _)| distance < *d) {
            best = Some((
                distance,
                HoverPoint {
                    entity: s.entity.clone(),
                    color: entity_color(idx),
                    year,
                    value,
                    plotted: [year as f64, plotted_y],
                },
            ));
        }
    }

    best.map(|(_, h)| h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(entity: &str, points: Vec<(i32, f64)>) -> EntitySeries {
        EntitySeries {
            entity: entity.to_string(),
            points,
        }
    }

    #[test]
    fn hover_snaps_to_nearest_year_and_value() {
        let all = vec![
            series("A", vec![(2000, 5.0), (2010, 10.0)]),
            series("B", vec![(2000, 100.0), (2010, 200.0)]),
        ];
        let h = nearest_hover(&all, ScaleMode::Linear, 2008.0, 11.0).unwrap();
        assert_eq!(h.entity, "A");
        assert_eq!(h.year, 2010);
        assert_eq!(h.value, 10.0);

        let h = nearest_hover(&all, ScaleMode::Linear, 2001.0, 90.0).unwrap();
        assert_eq!(h.entity, "B");
        assert_eq!(h.year, 2000);
    }

    #[test]
    fn hover_clamps_outside_year_range() {
        let all = vec![series("A", vec![(2000, 5.0), (2010, 10.0)])];
        let h = nearest_hover(&all, ScaleMode::Linear, 1950.0, 0.0).unwrap();
        assert_eq!(h.year, 2000);
        let h = nearest_hover(&all, ScaleMode::Linear, 2100.0, 0.0).unwrap();
        assert_eq!(h.year, 2010);
    }

    #[test]
    fn log_hover_skips_non_positive_values() {
        let all = vec![series("A", vec![(2000, 0.0), (2010, 10.0)])];
        let h = nearest_hover(&all, ScaleMode::Log, 2000.0, 0.0).unwrap();
        assert_eq!(h.year, 2010);
    }

    #[test]
    fn hover_on_empty_chart_is_none() {
        assert!(nearest_hover(&[], ScaleMode::Linear, 2000.0, 0.0).is_none());
    }

    #[test]
    fn scale_switch_is_idempotent_for_drawn_set() {
        // Same entities survive a linear -> log -> linear round trip, and
        // relative orderings at a year are preserved under both mappings.
        let all = vec![
            series("A", vec![(2000, 5.0)]),
            series("B", vec![(2000, 50.0)]),
        ];
        for mode in ScaleMode::ALL {
            let drawn: Vec<&EntitySeries> = all
                .iter()
                .filter(|s| s.points.iter().any(|&(_, v)| mode.admits(v)))
                .collect();
            assert_eq!(drawn.len(), 2);
            assert!(mode.apply(5.0) < mode.apply(50.0));
        }
    }
}
