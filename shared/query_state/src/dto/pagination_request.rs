use super::{FilterValue, OrderRule, RangedFilter};
use crate::config::QueryStateConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type SearchFilters = BTreeMap<String, String>;
pub type Filters = BTreeMap<String, FilterValue>;

///
/// Snapshot of pagination, filter and sort state.
///
/// Empty collections are always stored as `None`,
/// see [crate::reducer::apply] and [crate::codec::parse].
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    ///
    /// indexing starts at 1
    ///
    pub page: u32,
    pub rows: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_filters: Option<SearchFilters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranged_filters: Option<Vec<RangedFilter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_rule: Option<OrderRule>,
}

impl PaginationRequest {
    /// State described by an empty query string
    pub fn defaults(config: &QueryStateConfig) -> Self {
        Self {
            page: config.default_page,
            rows: config.default_rows,
            search_filters: None,
            filters: None,
            ranged_filters: None,
            order_key: config.default_order_key.clone(),
            order_rule: config.default_order_rule,
        }
    }

    pub fn search_filter(&self, key: &str) -> Option<&str> {
        self.search_filters
            .as_ref()
            .and_then(|search_filters| search_filters.get(key))
            .map(String::as_str)
    }

    pub fn filter(&self, key: &str) -> Option<&FilterValue> {
        self.filters.as_ref().and_then(|filters| filters.get(key))
    }

    pub fn ranged_filter(&self, key: &str) -> Option<&RangedFilter> {
        self.ranged_filters
            .as_ref()
            .and_then(|ranged_filters| ranged_filters.iter().find(|filter| filter.key == key))
    }

    /// Number of records before the first one on this page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) as usize * self.rows as usize
    }
}
