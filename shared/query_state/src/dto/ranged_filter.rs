use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

///
/// Inclusive `[start, end]` constraint on the field named by `key`.
/// Bounds stay strings, the consumer decides how to compare them.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangedFilter {
    pub key: String,
    pub start: String,
    pub end: String,
}

impl RangedFilter {
    pub fn new(key: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "key": self.key,
            "start": self.start,
            "end": self.end,
        })
    }
}

///
/// Keeps one entry per key. A later entry replaces the earlier one
/// in place, so the position of the first occurrence is kept.
///
pub fn dedup_ranged_filters(ranged_filters: Vec<RangedFilter>) -> Vec<RangedFilter> {
    let mut unique: Vec<RangedFilter> = Vec::with_capacity(ranged_filters.len());

    for ranged_filter in ranged_filters {
        match unique.iter_mut().find(|kept| kept.key == ranged_filter.key) {
            Some(kept) => *kept = ranged_filter,
            None => unique.push(ranged_filter),
        }
    }

    unique
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dedup_keeps_latest_bounds() {
        let ranged_filters = vec![
            RangedFilter::new("createdAt", "2024-01-01", "2024-01-31"),
            RangedFilter::new("price", "10", "20"),
            RangedFilter::new("createdAt", "2024-02-01", "2024-02-29"),
        ];

        let unique = dedup_ranged_filters(ranged_filters);

        assert_eq!(
            unique,
            vec![
                RangedFilter::new("createdAt", "2024-02-01", "2024-02-29"),
                RangedFilter::new("price", "10", "20"),
            ]
        );
    }
}
