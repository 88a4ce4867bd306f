use super::{FieldKind, FieldValue};

///
/// Record that can be searched, filtered and ordered by field name
///
pub trait Record {
    ///
    /// Every field name accepted in query parameters with its kind.
    /// Names use the same spelling as the JSON representation.
    ///
    const FIELDS: &'static [(&'static str, FieldKind)];

    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    fn field_kind(name: &str) -> Option<FieldKind> {
        Self::FIELDS
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, kind)| *kind)
    }
}
