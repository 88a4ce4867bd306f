use query_state::FilterValue;
use std::{borrow::Cow, cmp::Ordering};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Bool,
    Date,
}

///
/// Value of a record field. Values of different kinds never compare.
///
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    Bool(bool),
    Date(Date),
}

impl<'a> FieldValue<'a> {
    pub fn text(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }

    /// Case-insensitive substring match, only text matches
    pub fn contains(&self, lowercase_term: &str) -> bool {
        match self {
            FieldValue::Text(text) => text.to_lowercase().contains(lowercase_term),
            _ => false,
        }
    }
}

impl PartialOrd for FieldValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.partial_cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.partial_cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.partial_cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl FieldKind {
    ///
    /// Reads raw query value as this kind.
    ///
    /// Dates accept `YYYY-MM-DD` and RFC 3339, the latter is truncated to its date.
    ///
    pub fn parse(self, raw: &str) -> Option<FieldValue<'static>> {
        match self {
            FieldKind::Text => Some(FieldValue::Text(Cow::Owned(raw.to_string()))),
            FieldKind::Number => raw.trim().parse::<f64>().ok().map(FieldValue::Number),
            FieldKind::Bool => raw.parse::<bool>().ok().map(FieldValue::Bool),
            FieldKind::Date => parse_date(raw).map(FieldValue::Date),
        }
    }

    pub fn from_filter(self, value: &FilterValue) -> Option<FieldValue<'static>> {
        match (self, value) {
            (FieldKind::Number, FilterValue::Number(number)) => {
                number.as_f64().map(FieldValue::Number)
            }
            (FieldKind::Bool, FilterValue::Bool(value)) => Some(FieldValue::Bool(*value)),
            (kind, value) => kind.parse(&value.to_string()),
        }
    }
}

pub fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .or_else(|| {
            OffsetDateTime::parse(raw, &Rfc3339)
                .ok()
                .map(|datetime| datetime.date())
        })
}
