use crate::{
    codec,
    config::QueryStateConfig,
    dto::{
        FilterValue, OrderRule, PaginationPatch, PaginationRequest, RangedFilter, SearchFilters,
    },
    navigator::{join_url, Navigator},
    reducer,
};

///
/// Keeps [PaginationRequest] in the query string of a [Navigator].
///
/// Nothing is cached: every read parses the current URL and every
/// mutator replaces it, so the URL can be shared or reloaded.
/// Calls are not debounced, the last one wins.
///
pub struct QueryStateSync<N> {
    navigator: N,
    config: QueryStateConfig,
}

impl<N: Navigator> QueryStateSync<N> {
    pub fn new(navigator: N, config: QueryStateConfig) -> Self {
        Self { navigator, config }
    }

    pub fn config(&self) -> &QueryStateConfig {
        &self.config
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    ///
    /// State derived from the current URL
    ///
    pub fn request(&self) -> PaginationRequest {
        codec::parse(&self.navigator.query(), &self.config)
    }

    ///
    /// Search term of the first configured search key,
    /// empty when there is none.
    ///
    pub fn search_value(&self) -> String {
        let Some(key) = self.config.default_search_keys.first() else {
            return String::new();
        };

        self.request()
            .search_filter(key)
            .map(str::to_string)
            .unwrap_or_default()
    }

    ///
    /// Merges `patch` over the current state and replaces the URL.
    /// With `reset_page` the page goes back to 1.
    ///
    pub fn update_params(&mut self, patch: PaginationPatch, reset_page: bool) {
        let current_query = self.navigator.query();
        let previous = codec::parse(&current_query, &self.config);

        let next = reducer::apply(&previous, patch, reset_page);
        let query = codec::update_query(&current_query, &next, &self.config);
        let url = join_url(&self.navigator.path(), &query);

        tracing::debug!(url, "replacing url");
        self.navigator.replace(&url);
    }

    pub fn set_page(&mut self, page: u32) {
        self.update_params(PaginationPatch::new().with_page(page), false);
    }

    pub fn set_rows(&mut self, rows: u32) {
        self.update_params(PaginationPatch::new().with_rows(rows), true);
    }

    ///
    /// Applies `value` to every configured search key,
    /// an empty value clears all search filters.
    ///
    pub fn set_search(&mut self, value: &str) {
        if self.config.default_search_keys.is_empty() {
            tracing::warn!("search ignored: no search keys configured");
            return;
        }

        let search_filters = match value.is_empty() {
            true => SearchFilters::new(),
            false => self
                .config
                .default_search_keys
                .iter()
                .map(|key| (key.clone(), value.to_string()))
                .collect(),
        };

        self.update_params(
            PaginationPatch::new().with_search_filters(search_filters),
            true,
        );
    }

    /// An empty value removes the key
    pub fn set_search_by_key(&mut self, key: &str, value: &str) {
        let mut search_filters = self.request().search_filters.unwrap_or_default();
        match value.is_empty() {
            true => search_filters.remove(key),
            false => search_filters.insert(key.to_string(), value.to_string()),
        };

        self.update_params(
            PaginationPatch::new().with_search_filters(search_filters),
            true,
        );
    }

    /// `None` or an empty string removes the key
    pub fn set_filter(&mut self, key: &str, value: Option<FilterValue>) {
        let mut filters = self.request().filters.unwrap_or_default();
        match value.filter(|value| !value.is_empty()) {
            Some(value) => filters.insert(key.to_string(), value),
            None => filters.remove(key),
        };

        self.update_params(PaginationPatch::new().with_filters(filters), true);
    }

    ///
    /// Replaces the range of `key`. The range is only kept
    /// when both bounds are non-empty, otherwise `key` is removed.
    ///
    pub fn set_ranged_filter(&mut self, key: &str, start: &str, end: &str) {
        let mut ranged_filters = self.request().ranged_filters.unwrap_or_default();
        ranged_filters.retain(|ranged_filter| ranged_filter.key != key);

        if !start.is_empty() && !end.is_empty() {
            ranged_filters.push(RangedFilter::new(key, start, end));
        }

        self.update_params(
            PaginationPatch::new().with_ranged_filters(ranged_filters),
            true,
        );
    }

    pub fn remove_ranged_filter(&mut self, key: &str) {
        let mut ranged_filters = self.request().ranged_filters.unwrap_or_default();
        ranged_filters.retain(|ranged_filter| ranged_filter.key != key);

        self.update_params(
            PaginationPatch::new().with_ranged_filters(ranged_filters),
            true,
        );
    }

    pub fn set_order(&mut self, key: &str, rule: OrderRule) {
        let patch = PaginationPatch::new()
            .with_order_key(Some(key.to_string()))
            .with_order_rule(Some(rule));

        self.update_params(patch, false);
    }

    ///
    /// Flips the direction of the active order key,
    /// any other key starts ascending.
    ///
    pub fn toggle_order(&mut self, key: &str) {
        let request = self.request();

        let rule = match request.order_key.as_deref() == Some(key) {
            true => request.order_rule.unwrap_or(OrderRule::Asc).flipped(),
            false => OrderRule::Asc,
        };

        self.set_order(key, rule);
    }

    ///
    /// Removes every filter and goes back to the default page.
    /// Order is kept.
    ///
    pub fn clear_filters(&mut self) {
        let patch = PaginationPatch::new()
            .without_filters()
            .with_page(self.config.default_page);

        self.update_params(patch, false);
    }

    ///
    /// Drops the whole query string
    ///
    pub fn reset_all(&mut self) {
        let path = self.navigator.path();

        tracing::debug!(url = path, "replacing url");
        self.navigator.replace(&path);
    }
}
