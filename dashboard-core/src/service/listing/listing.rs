use super::{criteria::Criteria, Record};
use crate::error::Error;
use query_state::PaginationRequest;

#[derive(Debug)]
pub struct Listing<T> {
    /// Records of the requested page
    pub items: Vec<T>,
    /// Number of matching records on all pages
    pub total: usize,
}

///
/// Searches, filters, orders and pages `records`.
///
/// Ordering is stable, records equal by the order key keep storage order.
///
/// ### Errors
/// - see [Criteria::compile]
///
pub fn list<R: Record>(
    records: Vec<R>,
    request: &PaginationRequest,
) -> Result<Listing<R>, Error> {
    let criteria = Criteria::<R>::compile(request)?;

    let mut matching = records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect::<Vec<_>>();
    matching.sort_by(|a, b| criteria.compare(a, b));

    let total = matching.len();
    let items = matching
        .into_iter()
        .skip(request.offset())
        .take(request.rows as usize)
        .collect();

    Ok(Listing { items, total })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::listing::{FieldKind, FieldValue};
    use query_state::{
        FilterValue, Filters, OrderRule, QueryStateConfig, RangedFilter, SearchFilters,
    };
    use time::{macros::date, Date};

    #[derive(Debug, Clone, PartialEq)]
    struct Course {
        name: &'static str,
        teacher: &'static str,
        price: f64,
        active: bool,
        starts_at: Date,
    }

    impl Record for Course {
        const FIELDS: &'static [(&'static str, FieldKind)] = &[
            ("name", FieldKind::Text),
            ("teacher", FieldKind::Text),
            ("price", FieldKind::Number),
            ("active", FieldKind::Bool),
            ("startsAt", FieldKind::Date),
        ];

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "name" => Some(FieldValue::text(self.name)),
                "teacher" => Some(FieldValue::text(self.teacher)),
                "price" => Some(FieldValue::Number(self.price)),
                "active" => Some(FieldValue::Bool(self.active)),
                "startsAt" => Some(FieldValue::Date(self.starts_at)),
                _ => None,
            }
        }
    }

    fn courses() -> Vec<Course> {
        vec![
            Course {
                name: "Rust Basics",
                teacher: "Ada",
                price: 10.0,
                active: true,
                starts_at: date!(2024 - 01 - 10),
            },
            Course {
                name: "Go Basics",
                teacher: "Rusty",
                price: 20.0,
                active: false,
                starts_at: date!(2024 - 02 - 10),
            },
            Course {
                name: "Advanced Rust",
                teacher: "Grace",
                price: 30.0,
                active: true,
                starts_at: date!(2024 - 03 - 10),
            },
            Course {
                name: "SQL",
                teacher: "Edgar",
                price: 20.0,
                active: true,
                starts_at: date!(2024 - 01 - 31),
            },
        ]
    }

    fn request() -> PaginationRequest {
        PaginationRequest::defaults(&QueryStateConfig::default())
    }

    fn names(listing: &Listing<Course>) -> Vec<&'static str> {
        listing.items.iter().map(|course| course.name).collect()
    }

    #[test]
    fn list_without_criteria_keeps_storage_order() {
        let listing = list(courses(), &request()).unwrap();

        assert_eq!(listing.total, 4);
        assert_eq!(
            names(&listing),
            ["Rust Basics", "Go Basics", "Advanced Rust", "SQL"]
        );
    }

    #[test]
    fn search_matches_any_field() {
        let mut request = request();
        request.search_filters = Some(SearchFilters::from([
            ("name".to_string(), "RUST".to_string()),
            ("teacher".to_string(), "RUST".to_string()),
        ]));

        let listing = list(courses(), &request).unwrap();

        assert_eq!(
            names(&listing),
            ["Rust Basics", "Go Basics", "Advanced Rust"]
        );
    }

    #[test]
    fn filters_must_all_match() {
        let mut request = request();
        request.filters = Some(Filters::from([
            ("active".to_string(), FilterValue::Bool(true)),
            ("price".to_string(), FilterValue::from(20)),
        ]));

        let listing = list(courses(), &request).unwrap();

        assert_eq!(names(&listing), ["SQL"]);
    }

    #[test]
    fn date_range_is_inclusive() {
        let mut request = request();
        request.ranged_filters = Some(vec![RangedFilter::new(
            "startsAt",
            "2024-01-10",
            "2024-01-31",
        )]);

        let listing = list(courses(), &request).unwrap();

        assert_eq!(names(&listing), ["Rust Basics", "SQL"]);
    }

    #[test]
    fn number_range() {
        let mut request = request();
        request.ranged_filters = Some(vec![RangedFilter::new("price", "15", "25.5")]);

        let listing = list(courses(), &request).unwrap();

        assert_eq!(names(&listing), ["Go Basics", "SQL"]);
    }

    #[test]
    fn order_desc_is_stable() {
        let mut request = request();
        request.order_key = Some("price".to_string());
        request.order_rule = Some(OrderRule::Desc);

        let listing = list(courses(), &request).unwrap();

        assert_eq!(
            names(&listing),
            ["Advanced Rust", "Go Basics", "SQL", "Rust Basics"]
        );
    }

    #[test]
    fn order_without_rule_is_ascending() {
        let mut request = request();
        request.order_key = Some("name".to_string());

        let listing = list(courses(), &request).unwrap();

        assert_eq!(
            names(&listing),
            ["Advanced Rust", "Go Basics", "Rust Basics", "SQL"]
        );
    }

    #[test]
    fn paging_after_filtering() {
        let mut request = request();
        request.page = 2;
        request.rows = 2;
        request.order_key = Some("startsAt".to_string());
        request.order_rule = Some(OrderRule::Asc);

        let listing = list(courses(), &request).unwrap();

        assert_eq!(listing.total, 4);
        assert_eq!(names(&listing), ["Go Basics", "Advanced Rust"]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let mut request = request();
        request.page = 9;

        let listing = list(courses(), &request).unwrap();

        assert_eq!(listing.total, 4);
        assert!(listing.items.is_empty());
    }

    #[test]
    fn unknown_field_rejected_even_without_records() {
        let mut request = request();
        request.order_key = Some("password".to_string());

        let result = list(Vec::<Course>::new(), &request);

        assert!(matches!(
            result,
            Err(Error::ValidationUnknownField(field)) if field == "password"
        ));
    }

    #[test]
    fn search_on_number_rejected() {
        let mut request = request();
        request.search_filters = Some(SearchFilters::from([(
            "price".to_string(),
            "10".to_string(),
        )]));

        let result = list(courses(), &request);

        assert!(matches!(
            result,
            Err(Error::ValidationUnsupportedOperation {
                operation: "search",
                ..
            })
        ));
    }

    #[test]
    fn invalid_bound_rejected() {
        let mut request = request();
        request.ranged_filters = Some(vec![RangedFilter::new(
            "startsAt",
            "yesterday",
            "2024-01-31",
        )]);

        let result = list(courses(), &request);

        assert!(matches!(
            result,
            Err(Error::ValidationInvalidValue { value, .. }) if value == "yesterday"
        ));
    }
}
