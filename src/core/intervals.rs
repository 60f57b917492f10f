//! Interval extraction between consecutive wins of the same producer
//!
//! Winning records are grouped by their producer credit, each group's distinct
//! win years are ordered, and every year is paired with the next strictly later
//! one. The global minimum and maximum gaps are then reported with all ties.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::award::AwardRecord;

/// Two wins by the same producer with no other win by that producer in between
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsecutiveWinPair {
    pub producer: String,
    /// Years between the two wins, always positive
    pub interval: i32,
    pub previous_win: i32,
    pub following_win: i32,
}

/// Producers with the shortest and the longest gaps between consecutive wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtremeIntervals {
    pub min: Vec<ConsecutiveWinPair>,
    /// Empty whenever every pair shares the same interval
    pub max: Vec<ConsecutiveWinPair>,
}

/// Every consecutive win pair in the dataset, ordered by producer then year.
///
/// Wins sharing a year count once, so simultaneous wins never produce a zero gap.
pub fn consecutive_win_pairs(records: &[AwardRecord]) -> Vec<ConsecutiveWinPair> {
    let mut wins_by_producer: BTreeMap<&str, BTreeSet<i32>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.winner) {
        wins_by_producer
            .entry(record.producers.as_str())
            .or_default()
            .insert(record.year);
    }

    let mut pairs = Vec::new();
    for (producer, years) in &wins_by_producer {
        let years: Vec<i32> = years.iter().copied().collect();
        for window in years.windows(2) {
            let (previous_win, following_win) = (window[0], window[1]);
            pairs.push(ConsecutiveWinPair {
                producer: producer.to_string(),
                interval: following_win - previous_win,
                previous_win,
                following_win,
            });
        }
    }

    debug!(
        "Found {} consecutive win pairs across {} winning producers",
        pairs.len(),
        wins_by_producer.len()
    );
    pairs
}

/// Compute the minimum and maximum interval groups over all producers
pub fn compute_extreme_intervals(records: &[AwardRecord]) -> ExtremeIntervals {
    let pairs = consecutive_win_pairs(records);

    let (global_min, global_max) = match (
        pairs.iter().map(|p| p.interval).min(),
        pairs.iter().map(|p| p.interval).max(),
    ) {
        (Some(min), Some(max)) => (min, max),
        _ => return ExtremeIntervals::default(),
    };

    let min = pairs
        .iter()
        .filter(|p| p.interval == global_min)
        .cloned()
        .collect();

    // A single distinct interval is reported only once, in `min`
    let max = if global_max == global_min {
        Vec::new()
    } else {
        pairs
            .into_iter()
            .filter(|p| p.interval == global_max)
            .collect()
    };

    ExtremeIntervals { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn win(year: i32, producer: &str) -> AwardRecord {
        AwardRecord::new(year, &format!("Film {}", year), "Studio", producer, true)
    }

    fn producers(pairs: &[ConsecutiveWinPair]) -> HashSet<&str> {
        pairs.iter().map(|p| p.producer.as_str()).collect()
    }

    #[test]
    fn test_empty_dataset() {
        assert_eq!(compute_extreme_intervals(&[]), ExtremeIntervals::default());
    }

    #[test]
    fn test_no_producer_wins_twice() {
        let records = vec![win(1980, "W"), win(1981, "X"), win(1982, "Y"), win(1983, "Z")];
        let result = compute_extreme_intervals(&records);
        assert!(result.min.is_empty());
        assert!(result.max.is_empty());
    }

    #[test]
    fn test_pairs_never_skip_intermediate_win() {
        let records = vec![win(1990, "X"), win(1980, "X"), win(1984, "X")];
        let pairs = consecutive_win_pairs(&records);
        assert_eq!(
            pairs,
            vec![
                ConsecutiveWinPair { producer: "X".into(), interval: 4, previous_win: 1980, following_win: 1984 },
                ConsecutiveWinPair { producer: "X".into(), interval: 6, previous_win: 1984, following_win: 1990 },
            ]
        );
    }

    #[test]
    fn test_same_year_wins_do_not_create_zero_interval() {
        let records = vec![win(2000, "X"), win(2000, "X"), win(2005, "X")];
        let pairs = consecutive_win_pairs(&records);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].interval, 5);
        assert_eq!(pairs[0].previous_win, 2000);
        assert_eq!(pairs[0].following_win, 2005);
    }

    #[test]
    fn test_non_winners_are_ignored() {
        let records = vec![
            win(2000, "X"),
            AwardRecord::new(2001, "Film B", "Studio", "X", false),
            win(2005, "X"),
        ];
        let result = compute_extreme_intervals(&records);
        assert_eq!(result.min.len(), 1);
        assert_eq!(result.min[0].interval, 5);
        assert!(result.max.is_empty());
    }

    #[test]
    fn test_distinct_min_and_max() {
        let records = vec![win(2000, "X"), win(2001, "X"), win(1985, "Y"), win(1995, "Y")];
        let result = compute_extreme_intervals(&records);
        assert_eq!(
            result,
            ExtremeIntervals {
                min: vec![ConsecutiveWinPair { producer: "X".into(), interval: 1, previous_win: 2000, following_win: 2001 }],
                max: vec![ConsecutiveWinPair { producer: "Y".into(), interval: 10, previous_win: 1985, following_win: 1995 }],
            }
        );
    }

    #[test]
    fn test_single_distinct_interval_goes_to_min_only() {
        let records = vec![win(1980, "X"), win(1985, "X"), win(1990, "Y"), win(1995, "Y")];
        let result = compute_extreme_intervals(&records);
        assert_eq!(result.min.len(), 2);
        assert!(result.min.iter().all(|p| p.interval == 5));
        assert!(result.max.is_empty());
    }

    #[test]
    fn test_ties_are_preserved() {
        let records = vec![
            win(2000, "Producer X"),
            win(2002, "Producer X"),
            win(2010, "Producer Y"),
            win(2012, "Producer Y"),
            win(2000, "Producer Z"),
            win(2008, "Producer Z"),
            win(2005, "Producer W"),
            win(2013, "Producer W"),
        ];
        let result = compute_extreme_intervals(&records);
        assert_eq!(producers(&result.min), HashSet::from(["Producer X", "Producer Y"]));
        assert_eq!(producers(&result.max), HashSet::from(["Producer Z", "Producer W"]));
    }

    #[test]
    fn test_one_producer_several_sequences() {
        let records = vec![win(1990, "X"), win(1992, "X"), win(1992, "X"), win(1997, "X"), win(1997, "X"), win(2000, "X")];
        let result = compute_extreme_intervals(&records);
        assert_eq!(result.min.len(), 1);
        assert_eq!(result.min[0].interval, 2);
        assert_eq!(result.max.len(), 1);
        assert_eq!(result.max[0].interval, 5);
    }

    #[test]
    fn test_producer_keys_are_exact() {
        let records = vec![
            win(2000, "John"),
            win(2003, "John"),
            win(2005, "John Smith"),
            win(2012, "John Smith"),
            win(2001, "Producer & Co."),
            win(2001, "Producer's Group"),
        ];
        let result = compute_extreme_intervals(&records);
        assert_eq!(result.min[0].producer, "John");
        assert_eq!(result.min[0].interval, 3);
        assert_eq!(result.max[0].producer, "John Smith");
        assert_eq!(result.max[0].interval, 7);
    }

    #[test]
    fn test_joint_credit_is_one_key() {
        let records = vec![
            win(1988, "Ted Field and Robert W. Cort"),
            win(1992, "Ted Field"),
            win(1995, "Ted Field and Robert W. Cort"),
        ];
        let pairs = consecutive_win_pairs(&records);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].producer, "Ted Field and Robert W. Cort");
        assert_eq!(pairs[0].interval, 7);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let records = vec![win(2010, "X"), win(2005, "X"), win(2000, "Y"), win(2003, "Y")];
        let result = compute_extreme_intervals(&records);
        for pair in result.min.iter().chain(result.max.iter()) {
            assert!(pair.interval > 0);
            assert_eq!(pair.interval, pair.following_win - pair.previous_win);
        }
        assert_eq!(result.min[0].producer, "Y");
        assert_eq!(result.max[0].producer, "X");
    }

    #[test]
    fn test_extremes_in_large_dataset() {
        let mut records = vec![
            win(2000, "Benchmark Producer"),
            win(2001, "Benchmark Producer"),
            win(2001, "Benchmark Producer Max"),
            win(2021, "Benchmark Producer Max"),
        ];
        for i in 0..1000 {
            let start = 1980 + i % 20;
            for j in 3..6 {
                records.push(win(start + j * 2, &format!("Producer {}", i)));
            }
        }
        let result = compute_extreme_intervals(&records);
        assert_eq!(producers(&result.min), HashSet::from(["Benchmark Producer"]));
        assert_eq!(producers(&result.max), HashSet::from(["Benchmark Producer Max"]));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let records = vec![win(1980, "X"), win(1984, "X"), win(1990, "X"), win(1985, "Y"), win(1995, "Y")];
        assert_eq!(compute_extreme_intervals(&records), compute_extreme_intervals(&records));
    }

    #[test]
    fn test_serialized_field_names() {
        let pair = ConsecutiveWinPair { producer: "Bo Derek".into(), interval: 6, previous_win: 1984, following_win: 1990 };
        let value = serde_json::to_value(ExtremeIntervals { min: vec![pair], max: vec![] }).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "min": [{"producer": "Bo Derek", "interval": 6, "previousWin": 1984, "followingWin": 1990}],
                "max": []
            })
        );
    }
}
