//! Axis scale mode, tick derivation, and nearest-point lookup.

/// Y-axis mapping for the line chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleMode {
    #[default]
    Linear,
    Log,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 2] = [ScaleMode::Linear, ScaleMode::Log];

    pub fn label(self) -> &'static str {
        match self {
            ScaleMode::Linear => "linear",
            ScaleMode::Log => "log",
        }
    }

    /// Map a data value to its plotted position.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            ScaleMode::Linear => value,
            ScaleMode::Log => value.log10(),
        }
    }

    /// Invert a plotted position back to the data value.
    pub fn invert(self, plotted: f64) -> f64 {
        match self {
            ScaleMode::Linear => plotted,
            ScaleMode::Log => 10f64.powf(plotted),
        }
    }

    /// Whether a value can be plotted on this scale.
    pub fn admits(self, value: f64) -> bool {
        match self {
            ScaleMode::Linear => value.is_finite(),
            ScaleMode::Log => value.is_finite() && value > 0.0,
        }
    }
}

/// X ticks for the line chart: decade stride from the first data year,
/// dropping any stride tick within a decade of the last year, which is
/// always included. Derived from the data extent rather than hard-coded
/// year lists.
pub fn decade_ticks(min_year: i32, max_year: i32) -> Vec<i32> {
    if min_year > max_year {
        return Vec::new();
    }
    let mut ticks: Vec<i32> = (min_year..max_year)
        .step_by(10)
        .filter(|t| max_year - t >= 10)
        .collect();
    ticks.push(max_year);
    ticks
}

/// Index of the point whose year is closest to `target` on a year-sorted
/// series. Clamps to the first/last point when the target lies outside
/// the year range.
pub fn nearest_index(points: &[(i32, f64)], target: f64) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let i = points.partition_point(|&(year, _)| (year as f64) < target);
    if i == 0 {
        return Some(0);
    }
    if i == points.len() {
        return Some(points.len() - 1);
    }
    let left = points[i - 1].0 as f64;
    let right = points[i].0 as f64;
    if target - left <= right - target {
        Some(i - 1)
    } else {
        Some(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_roundtrip_is_identity() {
        for v in [1.0, 2.5, 1e3, 3e11] {
            let plotted = ScaleMode::Log.apply(v);
            assert!((ScaleMode::Log.invert(plotted) - v).abs() / v < 1e-12);
        }
    }

    #[test]
    fn log_preserves_ordering() {
        let values = [1.0, 5.0, 40.0, 1e9];
        let plotted: Vec<f64> = values.iter().map(|&v| ScaleMode::Log.apply(v)).collect();
        assert!(plotted.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn log_rejects_non_positive() {
        assert!(!ScaleMode::Log.admits(0.0));
        assert!(!ScaleMode::Log.admits(-3.0));
        assert!(ScaleMode::Log.admits(0.5));
        assert!(ScaleMode::Linear.admits(-3.0));
    }

    #[test]
    fn decade_ticks_skip_crowded_final_decade() {
        // 2019 would sit one year from the 2020 end tick, so it is dropped.
        assert_eq!(
            decade_ticks(1949, 2020),
            vec![1949, 1959, 1969, 1979, 1989, 1999, 2009, 2020]
        );
    }

    #[test]
    fn decade_ticks_keep_full_decades() {
        assert_eq!(decade_ticks(1949, 2019), vec![1949, 1959, 1969, 1979, 1989, 1999, 2009, 2019]);
        assert_eq!(decade_ticks(2000, 2020), vec![2000, 2010, 2020]);
    }

    #[test]
    fn decade_ticks_degenerate_ranges() {
        assert_eq!(decade_ticks(2020, 2020), vec![2020]);
        assert_eq!(decade_ticks(2015, 2020), vec![2020]);
        assert!(decade_ticks(2021, 2020).is_empty());
    }

    const POINTS: [(i32, f64); 3] = [(2000, 1.0), (2005, 2.0), (2010, 3.0)];

    #[test]
    fn nearest_picks_closest_year() {
        assert_eq!(nearest_index(&POINTS, 2001.0), Some(0));
        assert_eq!(nearest_index(&POINTS, 2004.0), Some(1));
        assert_eq!(nearest_index(&POINTS, 2008.0), Some(2));
    }

    #[test]
    fn nearest_ties_resolve_left() {
        assert_eq!(nearest_index(&POINTS, 2002.5), Some(0));
    }

    #[test]
    fn nearest_clamps_outside_range() {
        assert_eq!(nearest_index(&POINTS, 1980.0), Some(0));
        assert_eq!(nearest_index(&POINTS, 2050.0), Some(2));
    }

    #[test]
    fn nearest_empty_is_none() {
        assert_eq!(nearest_index(&[], 2000.0), None);
    }
}
