use crate::{
    repository::Plan,
    service::listing::{FieldKind, FieldValue, Record},
};
use std::borrow::Cow;

impl Record for Plan {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("id", FieldKind::Text),
        ("name", FieldKind::Text),
        ("interval", FieldKind::Text),
        ("price", FieldKind::Number),
        ("currency", FieldKind::Text),
        ("active", FieldKind::Bool),
        ("createdAt", FieldKind::Date),
    ];

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Text(Cow::Owned(self.id.to_string())),
            "name" => FieldValue::text(&self.name),
            "interval" => FieldValue::text(self.interval.as_ref()),
            "price" => FieldValue::Number(self.price),
            "currency" => FieldValue::text(&self.currency),
            "active" => FieldValue::Bool(self.active),
            "createdAt" => FieldValue::Date(self.created_at.date()),
            _ => return None,
        };

        Some(value)
    }
}
