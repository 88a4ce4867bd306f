use crate::{
    repository::AcademyModule,
    service::listing::{FieldKind, FieldValue, Record},
};
use std::borrow::Cow;

impl Record for AcademyModule {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("id", FieldKind::Text),
        ("title", FieldKind::Text),
        ("teacher", FieldKind::Text),
        ("category", FieldKind::Text),
        ("lessons", FieldKind::Number),
        ("published", FieldKind::Bool),
        ("createdAt", FieldKind::Date),
    ];

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "id" => FieldValue::Text(Cow::Owned(self.id.to_string())),
            "title" => FieldValue::text(&self.title),
            "teacher" => FieldValue::text(&self.teacher),
            "category" => FieldValue::text(&self.category),
            "lessons" => FieldValue::Number(self.lessons.into()),
            "published" => FieldValue::Bool(self.published),
            "createdAt" => FieldValue::Date(self.created_at.date()),
            _ => return None,
        };

        Some(value)
    }
}
