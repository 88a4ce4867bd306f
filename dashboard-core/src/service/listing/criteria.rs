use super::{FieldKind, FieldValue, Record};
use crate::error::Error;
use query_state::{OrderRule, PaginationRequest};
use std::{cmp::Ordering, marker::PhantomData};

///
/// [PaginationRequest] validated against field names and kinds of `R`
///
pub struct Criteria<R> {
    /// Field name with lowercase term, any match is enough
    search: Vec<(String, String)>,
    filters: Vec<(String, FieldValue<'static>)>,
    ranges: Vec<(String, FieldValue<'static>, FieldValue<'static>)>,
    order: Option<(String, OrderRule)>,
    record: PhantomData<fn(&R)>,
}

impl<R: Record> Criteria<R> {
    ///
    /// ### Errors
    /// - [Error::ValidationUnknownField] when any parameter names a field `R` does not have
    /// - [Error::ValidationUnsupportedOperation] when searching non-text field
    ///   or ranging boolean field
    /// - [Error::ValidationInvalidValue] when filter value or range bound
    ///   cannot be read as the field kind
    ///
    pub fn compile(request: &PaginationRequest) -> Result<Self, Error> {
        let mut search = Vec::new();
        for (field, term) in request.search_filters.iter().flatten() {
            match Self::kind(field)? {
                FieldKind::Text => search.push((field.clone(), term.to_lowercase())),
                _ => return Err(Self::unsupported(field, "search")),
            }
        }

        let mut filters = Vec::new();
        for (field, value) in request.filters.iter().flatten() {
            let expected = Self::kind(field)?
                .from_filter(value)
                .ok_or_else(|| Self::invalid(field, &value.to_string()))?;
            filters.push((field.clone(), expected));
        }

        let mut ranges = Vec::new();
        for ranged_filter in request.ranged_filters.iter().flatten() {
            let field = &ranged_filter.key;
            let kind = match Self::kind(field)? {
                FieldKind::Bool => return Err(Self::unsupported(field, "range")),
                kind => kind,
            };
            let start = kind
                .parse(&ranged_filter.start)
                .ok_or_else(|| Self::invalid(field, &ranged_filter.start))?;
            let end = kind
                .parse(&ranged_filter.end)
                .ok_or_else(|| Self::invalid(field, &ranged_filter.end))?;
            ranges.push((field.clone(), start, end));
        }

        let order = match &request.order_key {
            Some(field) => {
                Self::kind(field)?;
                Some((field.clone(), request.order_rule.unwrap_or(OrderRule::Asc)))
            }
            None => None,
        };

        Ok(Self {
            search,
            filters,
            ranges,
            order,
            record: PhantomData,
        })
    }

    pub fn matches(&self, record: &R) -> bool {
        let searched = self.search.is_empty()
            || self.search.iter().any(|(field, term)| {
                record
                    .field(field)
                    .is_some_and(|value| value.contains(term))
            });

        let filtered = self.filters.iter().all(|(field, expected)| {
            record
                .field(field)
                .is_some_and(|value| value == *expected)
        });

        let ranged = self.ranges.iter().all(|(field, start, end)| {
            record
                .field(field)
                .is_some_and(|value| *start <= value && value <= *end)
        });

        searched && filtered && ranged
    }

    ///
    /// Ordering by the requested field, records missing
    /// the field go last. Without order key all records are equal.
    ///
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        let Some((field, rule)) = &self.order else {
            return Ordering::Equal;
        };

        match (a.field(field), b.field(field)) {
            (Some(a), Some(b)) => {
                let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
                match rule {
                    OrderRule::Asc => ordering,
                    OrderRule::Desc => ordering.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    fn kind(field: &str) -> Result<FieldKind, Error> {
        R::field_kind(field).ok_or_else(|| Error::ValidationUnknownField(field.to_string()))
    }

    fn unsupported(field: &str, operation: &'static str) -> Error {
        Error::ValidationUnsupportedOperation {
            field: field.to_string(),
            operation,
        }
    }

    fn invalid(field: &str, value: &str) -> Error {
        Error::ValidationInvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
