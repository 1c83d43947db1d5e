//! In-Memory Dataset Model
//! Typed expenditure records and the derived per-entity views.

use rayon::prelude::*;
use std::collections::HashSet;

/// One CSV row: a country's expenditure for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub entity: String,
    pub year: i32,
    pub expenditure: f64,
}

/// One entity's points with years sorted ascending.
/// Sorted order is required by the line chart's nearest-point lookup.
#[derive(Debug, Clone)]
pub struct EntitySeries {
    pub entity: String,
    pub points: Vec<(i32, f64)>,
}

/// The full loaded dataset. Immutable after load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Distinct entity names in order of first occurrence.
    pub entities: Vec<String>,
}

impl Dataset {
    /// Build the dataset and derive the entity list.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut entities = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for record in &records {
            if seen.insert(&record.entity) {
                entities.push(record.entity.clone());
            }
        }
        Self { records, entities }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records for one entity, in file order.
    pub fn filter_by_entity(&self, entity: &str) -> Vec<&Record> {
        self.records.iter().filter(|r| r.entity == entity).collect()
    }

    /// (first year, last year) over all records.
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(min, max), y| (min.min(y), max.max(y))))
    }

    /// Maximum expenditure over all records, 0.0 when empty.
    pub fn max_expenditure(&self) -> f64 {
        self.records
            .iter()
            .map(|r| r.expenditure)
            .fold(0.0, f64::max)
    }

    /// Per-entity series sorted by year, in entity order.
    /// Built in parallel: the line chart wants every entity at once.
    pub fn entity_series(&self) -> Vec<EntitySeries> {
        self.entities
            .par_iter()
            .map(|entity| {
                let mut points: Vec<(i32, f64)> = self
                    .records
                    .iter()
                    .filter(|r| &r.entity == entity)
                    .map(|r| (r.year, r.expenditure))
                    .collect();
                points.sort_by_key(|&(year, _)| year);
                EntitySeries {
                    entity: entity.clone(),
                    points,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entity: &str, year: i32, expenditure: f64) -> Record {
        Record {
            entity: entity.to_string(),
            year,
            expenditure,
        }
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            record("A", 2000, 5.0),
            record("B", 2000, 7.0),
            record("A", 2010, 10.0),
            record("B", 2005, 3.0),
        ])
    }

    #[test]
    fn entities_in_first_occurrence_order() {
        let ds = sample();
        assert_eq!(ds.entities, vec!["A", "B"]);
    }

    #[test]
    fn filter_yields_exact_subset() {
        let ds = sample();
        let subset = ds.filter_by_entity("A");
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|r| r.entity == "A"));
        let years: Vec<i32> = subset.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2000, 2010]);
    }

    #[test]
    fn filter_unknown_entity_is_empty() {
        let ds = sample();
        assert!(ds.filter_by_entity("Z").is_empty());
    }

    #[test]
    fn year_extent_spans_all_records() {
        let ds = sample();
        assert_eq!(ds.year_extent(), Some((2000, 2010)));
        assert_eq!(Dataset::default().year_extent(), None);
    }

    #[test]
    fn max_expenditure_over_all_records() {
        let ds = sample();
        assert_eq!(ds.max_expenditure(), 10.0);
    }

    #[test]
    fn entity_series_sorted_by_year() {
        let ds = Dataset::from_records(vec![
            record("A", 2010, 10.0),
            record("A", 2000, 5.0),
            record("B", 2005, 3.0),
        ]);
        let series = ds.entity_series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].entity, "A");
        assert_eq!(series[0].points, vec![(2000, 5.0), (2010, 10.0)]);
        assert_eq!(series[1].points, vec![(2005, 3.0)]);
    }
}
