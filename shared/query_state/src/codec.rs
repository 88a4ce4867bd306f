//!
//! Query string representation of [PaginationRequest].
//!
//! | parameter       | encoding                         | omitted when          |
//! |-----------------|----------------------------------|-----------------------|
//! | `page`          | decimal integer                  | equals default page   |
//! | `rows`          | decimal integer                  | equals default rows   |
//! | `searchFilters` | JSON object string -> string     | empty or unset        |
//! | `filters`       | JSON object string -> scalar     | empty or unset        |
//! | `rangedFilters` | JSON array of `{key,start,end}`  | empty or unset        |
//! | `orderKey`      | raw string                       | unset                 |
//! | `orderRule`     | `asc` or `desc`                  | unset                 |
//!

use crate::{
    config::QueryStateConfig,
    dto::{
        dedup_ranged_filters, Filters, OrderRule, PaginationRequest, RangedFilter, SearchFilters,
    },
    error::Error,
    reducer::non_empty,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::str::FromStr;
use url::form_urlencoded;

pub mod params {
    pub const PAGE: &str = "page";
    pub const ROWS: &str = "rows";
    pub const SEARCH_FILTERS: &str = "searchFilters";
    pub const FILTERS: &str = "filters";
    pub const RANGED_FILTERS: &str = "rangedFilters";
    pub const ORDER_KEY: &str = "orderKey";
    pub const ORDER_RULE: &str = "orderRule";
}

const WIRE_PARAMS: [&str; 7] = [
    params::PAGE,
    params::ROWS,
    params::SEARCH_FILTERS,
    params::FILTERS,
    params::RANGED_FILTERS,
    params::ORDER_KEY,
    params::ORDER_RULE,
];

///
/// Derives state from a query string, with or without the leading `?`.
///
/// Malformed parameters are logged and treated as unset,
/// so a stale or hand-edited URL still renders.
///
pub fn parse(query: &str, config: &QueryStateConfig) -> PaginationRequest {
    let lenient = |err: Error| {
        tracing::warn!(%err, "ignoring malformed query parameter");
        Ok(())
    };

    match derive(query, config, lenient) {
        Ok(request) => request,
        Err(_) => PaginationRequest::defaults(config),
    }
}

///
/// Derives state from a query string and fails on the first malformed parameter.
///
/// ### Errors
/// - [Error::InvalidInteger] when `page` or `rows` is not a positive integer
/// - [Error::InvalidOrderRule] when `orderRule` is neither `asc` nor `desc`
/// - [Error::InvalidJson] when a filter parameter does not hold the expected JSON
/// - [Error::DuplicatedRangedFilter] when `rangedFilters` repeats a key
///
pub fn try_parse(query: &str, config: &QueryStateConfig) -> Result<PaginationRequest, Error> {
    derive(query, config, Err)
}

/// Canonical query string of the request, without the leading `?`
pub fn serialize(request: &PaginationRequest, config: &QueryStateConfig) -> String {
    update_query("", request, config)
}

///
/// Writes the request into `current_query`.
///
/// Parameters that are not part of the pagination state are kept
/// in their original order, pagination parameters follow them.
///
pub fn update_query(
    current_query: &str,
    request: &PaginationRequest,
    config: &QueryStateConfig,
) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (name, value) in form_urlencoded::parse(strip_question_mark(current_query).as_bytes()) {
        if !WIRE_PARAMS.contains(&name.as_ref()) {
            serializer.append_pair(&name, &value);
        }
    }

    for (name, value) in encode(request, config) {
        if let Some(value) = value {
            serializer.append_pair(name, &value);
        }
    }

    serializer.finish()
}

fn encode(
    request: &PaginationRequest,
    config: &QueryStateConfig,
) -> [(&'static str, Option<String>); 7] {
    let page = (request.page != config.default_page).then(|| request.page.to_string());
    let rows = (request.rows != config.default_rows).then(|| request.rows.to_string());

    let search_filters = request
        .search_filters
        .as_ref()
        .filter(|search_filters| !search_filters.is_empty())
        .map(|search_filters| {
            search_filters
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect::<Map<_, _>>()
        })
        .map(|object| Value::Object(object).to_string());

    let filters = request
        .filters
        .as_ref()
        .filter(|filters| !filters.is_empty())
        .map(|filters| {
            filters
                .iter()
                .map(|(key, value)| (key.clone(), Value::from(value)))
                .collect::<Map<_, _>>()
        })
        .map(|object| Value::Object(object).to_string());

    let ranged_filters = request
        .ranged_filters
        .as_ref()
        .filter(|ranged_filters| !ranged_filters.is_empty())
        .map(|ranged_filters| {
            ranged_filters
                .iter()
                .map(RangedFilter::to_json)
                .collect::<Vec<_>>()
        })
        .map(|array| Value::Array(array).to_string());

    [
        (params::PAGE, page),
        (params::ROWS, rows),
        (params::SEARCH_FILTERS, search_filters),
        (params::FILTERS, filters),
        (params::RANGED_FILTERS, ranged_filters),
        (params::ORDER_KEY, request.order_key.clone()),
        (params::ORDER_RULE, request.order_rule.map(|rule| rule.to_string())),
    ]
}

///
/// First occurrence of every pagination parameter.
/// Empty values count as absent.
///
#[derive(Default)]
struct RawParams {
    page: Option<String>,
    rows: Option<String>,
    search_filters: Option<String>,
    filters: Option<String>,
    ranged_filters: Option<String>,
    order_key: Option<String>,
    order_rule: Option<String>,
}

impl RawParams {
    fn read(query: &str) -> Self {
        let mut raw = Self::default();

        for (name, value) in form_urlencoded::parse(strip_question_mark(query).as_bytes()) {
            let slot = match name.as_ref() {
                params::PAGE => &mut raw.page,
                params::ROWS => &mut raw.rows,
                params::SEARCH_FILTERS => &mut raw.search_filters,
                params::FILTERS => &mut raw.filters,
                params::RANGED_FILTERS => &mut raw.ranged_filters,
                params::ORDER_KEY => &mut raw.order_key,
                params::ORDER_RULE => &mut raw.order_rule,
                _ => continue,
            };

            if slot.is_none() && !value.is_empty() {
                *slot = Some(value.into_owned());
            }
        }

        raw
    }
}

///
/// `on_error` decides what a malformed parameter means:
/// returning `Ok` drops the parameter, returning `Err` aborts.
///
fn derive<F>(
    query: &str,
    config: &QueryStateConfig,
    mut on_error: F,
) -> Result<PaginationRequest, Error>
where
    F: FnMut(Error) -> Result<(), Error>,
{
    let raw = RawParams::read(query);

    let page = decode(raw.page.as_deref(), &mut on_error, |value| {
        decode_positive(params::PAGE, value)
    })?;
    let rows = decode(raw.rows.as_deref(), &mut on_error, |value| {
        decode_positive(params::ROWS, value)
    })?;
    let search_filters = decode(raw.search_filters.as_deref(), &mut on_error, |value| {
        decode_json::<SearchFilters>(params::SEARCH_FILTERS, value)
    })?;
    let filters = decode(raw.filters.as_deref(), &mut on_error, |value| {
        decode_json::<Filters>(params::FILTERS, value)
    })?;
    let ranged_filters = decode(raw.ranged_filters.as_deref(), &mut on_error, |value| {
        decode_json::<Vec<RangedFilter>>(params::RANGED_FILTERS, value)
    })?;
    let order_rule = decode(raw.order_rule.as_deref(), &mut on_error, decode_order_rule)?;

    if let Some(key) = ranged_filters.as_deref().and_then(duplicated_key) {
        on_error(Error::DuplicatedRangedFilter(key.to_string()))?;
    }
    let ranged_filters = ranged_filters
        .map(dedup_ranged_filters)
        .filter(|ranged_filters| !ranged_filters.is_empty());

    Ok(PaginationRequest {
        page: page.unwrap_or(config.default_page),
        rows: rows.unwrap_or(config.default_rows),
        search_filters: non_empty(search_filters),
        filters: non_empty(filters),
        ranged_filters,
        order_key: raw.order_key.or_else(|| config.default_order_key.clone()),
        order_rule: order_rule.or(config.default_order_rule),
    })
}

fn decode<T, F, D>(raw: Option<&str>, on_error: &mut F, decode: D) -> Result<Option<T>, Error>
where
    F: FnMut(Error) -> Result<(), Error>,
    D: FnOnce(&str) -> Result<T, Error>,
{
    match raw.map(decode) {
        None => Ok(None),
        Some(Ok(value)) => Ok(Some(value)),
        Some(Err(err)) => {
            on_error(err)?;
            Ok(None)
        }
    }
}

fn decode_positive(param: &'static str, value: &str) -> Result<u32, Error> {
    value
        .parse::<u32>()
        .ok()
        .filter(|number| *number > 0)
        .ok_or_else(|| Error::InvalidInteger {
            param,
            value: value.to_string(),
        })
}

fn decode_json<T: DeserializeOwned>(param: &'static str, value: &str) -> Result<T, Error> {
    serde_json::from_str(value).map_err(|source| Error::InvalidJson { param, source })
}

fn decode_order_rule(value: &str) -> Result<OrderRule, Error> {
    OrderRule::from_str(value).map_err(|_| Error::InvalidOrderRule(value.to_string()))
}

fn duplicated_key(ranged_filters: &[RangedFilter]) -> Option<&str> {
    ranged_filters.iter().enumerate().find_map(|(idx, filter)| {
        ranged_filters[..idx]
            .iter()
            .any(|previous| previous.key == filter.key)
            .then_some(filter.key.as_str())
    })
}

fn strip_question_mark(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}
