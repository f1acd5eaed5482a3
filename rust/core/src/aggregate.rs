// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-room aggregation of finish records by material mark.
//!
//! Records sharing a `(room number, mark)` key collapse into one
//! [`MarkTotals`]: the numeric fields sum, the text fields are fixed by
//! the first record seen for the key. Summing is commutative, so the
//! final totals are independent of element visitation order; only the
//! insertion order of marks within a room is observable downstream.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::extract::FinishElement;

/// Accumulated totals for one `(room number, mark)` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkTotals {
    pub mark: String,
    /// Sum of areas over every record with this key, in square metres.
    pub area_sum: f64,
    /// Sum of lengths over every record with this key, in metres.
    pub length_sum: f64,
    /// Fixed by the first record seen for the key.
    pub description: String,
    /// Fixed by the first record seen for the key.
    pub unit: String,
}

/// One room's marks, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomFinishes {
    marks: Vec<MarkTotals>,
    index: FxHashMap<String, usize>,
}

impl RoomFinishes {
    /// Insert-if-absent, else accumulate the numeric fields only.
    fn upsert(&mut self, record: FinishElement) {
        match self.index.get(&record.mark) {
            Some(&slot) => {
                let totals = &mut self.marks[slot];
                totals.area_sum += record.area;
                totals.length_sum += record.length;
            }
            None => {
                self.index.insert(record.mark.clone(), self.marks.len());
                self.marks.push(MarkTotals {
                    mark: record.mark,
                    area_sum: record.area,
                    length_sum: record.length,
                    description: record.description,
                    unit: record.unit,
                });
            }
        }
    }

    /// Marks in first-insertion order.
    pub fn marks(&self) -> &[MarkTotals] {
        &self.marks
    }

    /// Totals for one mark, if present.
    pub fn get(&self, mark: &str) -> Option<&MarkTotals> {
        self.index.get(mark).map(|&slot| &self.marks[slot])
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// One category's aggregate: room number to ordered marks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    rooms: FxHashMap<String, RoomFinishes>,
}

impl CategoryAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into the aggregate. Entries are never removed.
    pub fn upsert(&mut self, record: FinishElement) {
        self.rooms
            .entry(record.room_number.clone())
            .or_default()
            .upsert(record);
    }

    /// The marks aggregated for one room, if any element landed there.
    pub fn room(&self, number: &str) -> Option<&RoomFinishes> {
        self.rooms.get(number)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Folds a sequence of records into a fresh aggregate.
pub fn aggregate<I>(records: I) -> CategoryAggregate
where
    I: IntoIterator<Item = FinishElement>,
{
    let mut agg = CategoryAggregate::new();
    for record in records {
        agg.upsert(record);
    }
    agg
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(room: &str, mark: &str, area: f64, length: f64) -> FinishElement {
        FinishElement {
            room_number: room.to_string(),
            mark: mark.to_string(),
            area,
            length,
            description: format!("{} description", mark),
            unit: "м2".to_string(),
        }
    }

    #[test]
    fn duplicate_marks_sum_their_quantities() {
        let agg = aggregate(vec![
            record("101", "M1", 5.0, 1.0),
            record("101", "M1", 3.0, 2.0),
        ]);

        let totals = agg.room("101").unwrap().get("M1").unwrap();
        assert_relative_eq!(totals.area_sum, 8.0);
        assert_relative_eq!(totals.length_sum, 3.0);
        assert_eq!(agg.room("101").unwrap().len(), 1);
    }

    #[test]
    fn first_seen_wins_for_text_fields() {
        let mut later = record("101", "M1", 3.0, 0.5);
        later.description = "changed description".to_string();
        later.unit = "м".to_string();

        let agg = aggregate(vec![record("101", "M1", 5.0, 1.0), later]);

        let totals = agg.room("101").unwrap().get("M1").unwrap();
        assert_eq!(totals.description, "M1 description");
        assert_eq!(totals.unit, "м2");
        assert_relative_eq!(totals.area_sum, 8.0);
    }

    #[test]
    fn rooms_and_marks_aggregate_independently() {
        let agg = aggregate(vec![
            record("101", "M1", 1.0, 1.0),
            record("102", "M1", 2.0, 2.0),
            record("101", "M2", 4.0, 4.0),
        ]);

        assert_eq!(agg.room_count(), 2);
        assert_relative_eq!(agg.room("101").unwrap().get("M1").unwrap().area_sum, 1.0);
        assert_relative_eq!(agg.room("102").unwrap().get("M1").unwrap().area_sum, 2.0);
        assert_relative_eq!(agg.room("101").unwrap().get("M2").unwrap().area_sum, 4.0);
        assert!(agg.room("103").is_none());
    }

    #[test]
    fn sums_are_independent_of_visitation_order() {
        let records = vec![
            record("101", "M1", 5.0, 1.0),
            record("101", "M2", 2.5, 0.5),
            record("101", "M1", 3.0, 2.0),
            record("102", "M1", 7.0, 4.0),
        ];

        let permutations: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 2, 1, 0], [2, 0, 3, 1], [1, 3, 0, 2]];
        for order in permutations {
            let agg = aggregate(order.iter().map(|&i| records[i].clone()));
            assert_relative_eq!(agg.room("101").unwrap().get("M1").unwrap().area_sum, 8.0);
            assert_relative_eq!(agg.room("101").unwrap().get("M1").unwrap().length_sum, 3.0);
            assert_relative_eq!(agg.room("101").unwrap().get("M2").unwrap().area_sum, 2.5);
            assert_relative_eq!(agg.room("102").unwrap().get("M1").unwrap().area_sum, 7.0);
            assert_eq!(agg.room_count(), 2);
        }
    }

    #[test]
    fn aggregation_is_additive_over_splits() {
        let e1 = record("101", "M1", 5.0, 1.0);
        let e2 = record("101", "M1", 3.0, 2.0);

        let combined = aggregate(vec![e1.clone(), e2.clone()]);
        let left = aggregate(vec![e1]);
        let right = aggregate(vec![e2]);

        let combined_totals = combined.room("101").unwrap().get("M1").unwrap();
        let left_totals = left.room("101").unwrap().get("M1").unwrap();
        let right_totals = right.room("101").unwrap().get("M1").unwrap();

        assert_relative_eq!(
            combined_totals.area_sum,
            left_totals.area_sum + right_totals.area_sum
        );
        assert_relative_eq!(
            combined_totals.length_sum,
            left_totals.length_sum + right_totals.length_sum
        );
    }

    #[test]
    fn marks_keep_first_insertion_order() {
        let agg = aggregate(vec![
            record("101", "M3", 1.0, 1.0),
            record("101", "M1", 1.0, 1.0),
            record("101", "M3", 1.0, 1.0),
            record("101", "M2", 1.0, 1.0),
        ]);

        let order: Vec<&str> = agg
            .room("101")
            .unwrap()
            .marks()
            .iter()
            .map(|t| t.mark.as_str())
            .collect();
        assert_eq!(order, vec!["M3", "M1", "M2"]);
    }
}
