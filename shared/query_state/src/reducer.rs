//!
//! Pure merge of a [PaginationPatch] over a [PaginationRequest].
//!

use crate::dto::{dedup_ranged_filters, PaginationPatch, PaginationRequest};
use std::collections::BTreeMap;

///
/// Produces the next state. The previous state is never modified.
///
/// When `reset_page` is set the page becomes 1, whatever the patch says.
/// A zero `page` or `rows` in the patch keeps the previous value.
///
pub fn apply(
    previous: &PaginationRequest,
    patch: PaginationPatch,
    reset_page: bool,
) -> PaginationRequest {
    let page = match reset_page {
        true => 1,
        false => positive(patch.page).unwrap_or(previous.page),
    };
    let rows = positive(patch.rows).unwrap_or(previous.rows);

    let search_filters = pick(patch.search_filters, &previous.search_filters);
    let filters = pick(patch.filters, &previous.filters);
    let ranged_filters = pick(patch.ranged_filters, &previous.ranged_filters)
        .map(dedup_ranged_filters)
        .filter(|ranged_filters| !ranged_filters.is_empty());

    PaginationRequest {
        page,
        rows,
        search_filters: non_empty(search_filters),
        filters: non_empty(filters),
        ranged_filters,
        order_key: pick(patch.order_key, &previous.order_key),
        order_rule: pick(patch.order_rule, &previous.order_rule),
    }
}

fn positive(value: Option<u32>) -> Option<u32> {
    value.filter(|value| *value > 0)
}

fn pick<T: Clone>(patched: Option<Option<T>>, previous: &Option<T>) -> Option<T> {
    patched.unwrap_or_else(|| previous.clone())
}

pub(crate) fn non_empty<K, V>(map: Option<BTreeMap<K, V>>) -> Option<BTreeMap<K, V>> {
    map.filter(|map| !map.is_empty())
}
