//! Data model shared by the collector, aggregator and table renderer.

use std::collections::HashMap;

// ── PerformanceRecord ─────────────────────────────────────────────────────────

/// One valid CSV row: a trimmed, non-empty position and its numeric score.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceRecord {
    pub position: String,
    pub performance: f64,
}

// ── PositionStats ─────────────────────────────────────────────────────────────

/// Performance values grouped by position.
///
/// Iteration yields positions in the order they were first inserted, which
/// is what the aggregator relies on to break ties between equal averages.
#[derive(Debug, Clone, Default)]
pub struct PositionStats {
    index: HashMap<String, usize>,
    entries: Vec<(String, Vec<f64>)>,
}

impl PositionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value list for `position`, inserting an empty one if absent.
    pub fn entry(&mut self, position: &str) -> &mut Vec<f64> {
        let idx = match self.index.get(position) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(position.to_string(), idx);
                self.entries.push((position.to_string(), Vec::new()));
                idx
            }
        };
        &mut self.entries[idx].1
    }

    /// Append `value` to the list for `position`.
    pub fn push(&mut self, position: &str, value: f64) {
        self.entry(position).push(value);
    }

    /// Accumulate a parsed record.
    pub fn add_record(&mut self, record: PerformanceRecord) {
        self.push(&record.position, record.performance);
    }

    pub fn get(&self, position: &str) -> Option<&[f64]> {
        self.index
            .get(position)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    /// Number of distinct positions, including those with no values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of values across all positions.
    pub fn total_values(&self) -> usize {
        self.entries.iter().map(|(_, values)| values.len()).sum()
    }

    /// Positions and their values in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries
            .iter()
            .map(|(position, values)| (position.as_str(), values.as_slice()))
    }
}

impl IntoIterator for PositionStats {
    type Item = (String, Vec<f64>);
    type IntoIter = std::vec::IntoIter<(String, Vec<f64>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<f64>)> for PositionStats {
    fn from_iter<I: IntoIterator<Item = (S, Vec<f64>)>>(iter: I) -> Self {
        let mut stats = PositionStats::new();
        for (position, values) in iter {
            let position = position.into();
            stats.entry(&position).extend(values);
        }
        stats
    }
}

// ── AveragedRow ───────────────────────────────────────────────────────────────

/// Mean performance for one position.
#[derive(Debug, Clone, PartialEq)]
pub struct AveragedRow {
    pub position: String,
    pub average: f64,
}

impl AveragedRow {
    pub fn new(position: impl Into<String>, average: f64) -> Self {
        Self {
            position: position.into(),
            average,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_stats_preserves_insertion_order() {
        let mut stats = PositionStats::new();
        stats.push("QA", 3.0);
        stats.push("DEV", 1.0);
        stats.push("QA", 4.0);
        stats.push("PM", 2.0);

        let order: Vec<&str> = stats.iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec!["QA", "DEV", "PM"]);
        assert_eq!(stats.get("QA"), Some(&[3.0, 4.0][..]));
    }

    #[test]
    fn test_position_stats_entry_materialises_empty_list() {
        let mut stats = PositionStats::new();
        stats.entry("QA");

        assert_eq!(stats.len(), 1);
        assert_eq!(stats.total_values(), 0);
        assert_eq!(stats.get("QA"), Some(&[] as &[f64]));
        assert!(stats.get("DEV").is_none());
    }

    #[test]
    fn test_position_stats_counts() {
        let mut stats = PositionStats::new();
        assert!(stats.is_empty());
        stats.add_record(PerformanceRecord {
            position: "QA".to_string(),
            performance: 4.5,
        });
        stats.push("DEV", 1.0);
        stats.push("DEV", 2.0);

        assert!(!stats.is_empty());
        assert_eq!(stats.len(), 2);
        assert_eq!(stats.total_values(), 3);
    }

    #[test]
    fn test_position_stats_from_iter_merges_duplicates() {
        let stats: PositionStats = vec![
            ("DEV", vec![1.0]),
            ("QA", vec![3.0]),
            ("DEV", vec![2.0]),
        ]
        .into_iter()
        .collect();

        let owned: Vec<(String, Vec<f64>)> = stats.into_iter().collect();
        assert_eq!(
            owned,
            vec![
                ("DEV".to_string(), vec![1.0, 2.0]),
                ("QA".to_string(), vec![3.0]),
            ]
        );
    }
}
