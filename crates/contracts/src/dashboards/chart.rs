use serde::{Deserialize, Serialize};

/// One labelled value of a pie or bar series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
}

impl ChartSlice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Sum of all slice values.
pub fn series_total(series: &[ChartSlice]) -> f64 {
    series.iter().map(|s| s.value).sum()
}

/// Share of each slice in percent of the total; all zeros for an empty total.
pub fn series_percentages(series: &[ChartSlice]) -> Vec<f64> {
    let total = series_total(series);
    series
        .iter()
        .map(|s| if total > 0.0 { s.value / total * 100.0 } else { 0.0 })
        .collect()
}

/// Count items per key, keeping the order of `keys` and dropping empty buckets.
pub fn count_by<K, T, F>(items: &[T], keys: &[K], label: impl Fn(&K) -> String, key_of: F) -> Vec<ChartSlice>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    keys.iter()
        .filter_map(|k| {
            let n = items.iter().filter(|item| key_of(item) == *k).count();
            (n > 0).then(|| ChartSlice::new(label(k), n as f64))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages() {
        let s = vec![ChartSlice::new("a", 1.0), ChartSlice::new("b", 3.0)];
        assert_eq!(series_total(&s), 4.0);
        assert_eq!(series_percentages(&s), vec![25.0, 75.0]);
    }

    #[test]
    fn test_percentages_of_empty_total() {
        let s = vec![ChartSlice::new("a", 0.0)];
        assert_eq!(series_percentages(&s), vec![0.0]);
    }

    #[test]
    fn test_count_by_keeps_key_order_and_drops_empty() {
        let items = vec![3, 1, 3, 3];
        let keys = vec![1, 2, 3];
        let out = count_by(&items, &keys, |k| format!("k{}", k), |i| *i);
        assert_eq!(out, vec![ChartSlice::new("k1", 1.0), ChartSlice::new("k3", 3.0)]);
    }
}
