use crate::dto::OrderRule;

///
/// Defaults of a single list screen.
///
/// `page` and `rows` equal to their defaults are left out of the query string.
///
#[derive(Debug, Clone, PartialEq)]
pub struct QueryStateConfig {
    pub default_page: u32,
    pub default_rows: u32,
    /// Fields that receive the free-text search term, in display order
    pub default_search_keys: Vec<String>,
    pub default_order_key: Option<String>,
    pub default_order_rule: Option<OrderRule>,
}

impl Default for QueryStateConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_rows: 10,
            default_search_keys: Vec::new(),
            default_order_key: None,
            default_order_rule: None,
        }
    }
}

impl QueryStateConfig {
    pub fn with_page(mut self, default_page: u32) -> Self {
        self.default_page = default_page;
        self
    }

    pub fn with_rows(mut self, default_rows: u32) -> Self {
        self.default_rows = default_rows;
        self
    }

    pub fn with_search_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_search_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_order(mut self, order_key: impl Into<String>, order_rule: OrderRule) -> Self {
        self.default_order_key = Some(order_key.into());
        self.default_order_rule = Some(order_rule);
        self
    }
}
