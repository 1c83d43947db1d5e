//! Bar Chart
//! One bar per year for the selected entity, with hover highlight and a
//! pointer-anchored tooltip.

use egui::{Color32, Id};
use egui_plot::{Bar, BarChart, Plot};

use super::format;

const BAR_FILL: Color32 = Color32::from_rgb(52, 152, 219);
const BAR_HOVER: Color32 = Color32::from_rgb(0, 0, 139);
const BAR_WIDTH: f64 = 0.8;

/// Bars for one entity, in file order.
#[derive(Debug, Clone, Default)]
pub struct BarSeries {
    pub entity: String,
    pub points: Vec<(i32, f64)>,
}

/// Render the bar chart. An empty series draws axes and zero bars.
pub fn show(ui: &mut egui::Ui, series: &BarSeries) {
    let year_labels: Vec<String> = series.points.iter().map(|&(y, _)| y.to_string()).collect();
    let y_max = series.points.iter().map(|&(_, v)| v).fold(0.0, f64::max);

    // Keying the plot id on the entity resets the view when the dropdown
    // selection changes, so the bars are cleared and redrawn.
    let plot = Plot::new(("bar_chart", &series.entity))
        .height(320.0)
        .allow_scroll(false)
        .x_axis_label("Year")
        .y_axis_label("Expenditure")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            year_labels
                .get(idx as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_axis_formatter(|mark, _range| format::dollars_si(mark.value))
        .include_y(0.0)
        .include_y(y_max);

    let inner = plot.show(ui, |plot_ui| {
        let hovered = plot_ui
            .pointer_coordinate()
            .and_then(|p| hit_test(&series.points, p.x, p.y));

        let bars: Vec<Bar> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, &(year, value))| {
                Bar::new(i as f64, value)
                    .width(BAR_WIDTH)
                    .name(year.to_string())
                    .fill(if hovered == Some(i) { BAR_HOVER } else { BAR_FILL })
            })
            .collect();

        plot_ui.bar_chart(BarChart::new(bars).name(&series.entity));
        hovered
    });

    if let Some(i) = inner.inner {
        let (year, value) = series.points[i];
        egui::show_tooltip_at_pointer(
            ui.ctx(),
            inner.response.layer_id,
            Id::new("bar_tooltip"),
            |ui| {
                ui.label(format!("Year: {year}"));
                ui.label(format!("Expenditure: ${}", format::thousands(value)));
            },
        );
    }
}

/// Which bar the plot-space pointer is inside, if any. Bar `i` is centered
/// on x = i and spans the bar width; the pointer must be between the axis
/// and the bar top.
pub fn hit_test(points: &[(i32, f64)], x: f64, y: f64) -> Option<usize> {
    let center = x.round();
    if center < 0.0 || center >= points.len() as f64 {
        return None;
    }
    if (x - center).abs() > BAR_WIDTH / 2.0 {
        return None;
    }
    let idx = center as usize;
    (y >= 0.0 && y <= points[idx].1).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTS: [(i32, f64); 2] = [(2000, 5.0), (2010, 10.0)];

    #[test]
    fn pointer_inside_bar_hits() {
        assert_eq!(hit_test(&POINTS, 0.0, 2.0), Some(0));
        assert_eq!(hit_test(&POINTS, 1.3, 9.9), Some(1));
    }

    #[test]
    fn pointer_above_bar_misses() {
        assert_eq!(hit_test(&POINTS, 0.0, 5.1), None);
        assert_eq!(hit_test(&POINTS, 1.0, 10.1), None);
    }

    #[test]
    fn pointer_between_bars_misses() {
        assert_eq!(hit_test(&POINTS, 0.5, 1.0), None);
    }

    #[test]
    fn pointer_outside_range_misses() {
        assert_eq!(hit_test(&POINTS, -1.0, 1.0), None);
        assert_eq!(hit_test(&POINTS, 2.0, 1.0), None);
        assert_eq!(hit_test(&POINTS, 0.0, -0.5), None);
    }

    #[test]
    fn empty_series_never_hits() {
        assert_eq!(hit_test(&[], 0.0, 0.0), None);
    }
}
