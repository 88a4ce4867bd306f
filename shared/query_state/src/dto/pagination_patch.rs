use super::{Filters, OrderRule, RangedFilter, SearchFilters};

///
/// Partial update merged over a [super::PaginationRequest]
/// by [crate::reducer::apply].
///
/// For every field `None` keeps the previous value.
/// For optional fields `Some(None)` clears the previous value.
/// Empty collections clear as well.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationPatch {
    pub page: Option<u32>,
    pub rows: Option<u32>,
    pub search_filters: Option<Option<SearchFilters>>,
    pub filters: Option<Option<Filters>>,
    pub ranged_filters: Option<Option<Vec<RangedFilter>>>,
    pub order_key: Option<Option<String>>,
    pub order_rule: Option<Option<OrderRule>>,
}

impl PaginationPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_search_filters(mut self, search_filters: SearchFilters) -> Self {
        self.search_filters = Some(Some(search_filters));
        self
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = Some(Some(filters));
        self
    }

    pub fn with_ranged_filters(mut self, ranged_filters: Vec<RangedFilter>) -> Self {
        self.ranged_filters = Some(Some(ranged_filters));
        self
    }

    pub fn with_order_key(mut self, order_key: Option<String>) -> Self {
        self.order_key = Some(order_key);
        self
    }

    pub fn with_order_rule(mut self, order_rule: Option<OrderRule>) -> Self {
        self.order_rule = Some(order_rule);
        self
    }

    /// Clears search filters, filters and ranged filters
    pub fn without_filters(mut self) -> Self {
        self.search_filters = Some(None);
        self.filters = Some(None);
        self.ranged_filters = Some(None);
        self
    }
}
