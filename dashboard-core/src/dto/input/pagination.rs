use crate::error::Error;
use query_state::{OrderRule, PaginationRequest, QueryStateConfig};

///
/// Query string defaults of every list endpoint
///
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    pub max_rows: u32,
    pub academy_modules: QueryStateConfig,
    pub plans: QueryStateConfig,
}

impl PaginationConfig {
    pub fn new(default_rows: u32, max_rows: u32) -> Self {
        let base = QueryStateConfig::default().with_rows(default_rows);

        Self {
            max_rows,
            academy_modules: base
                .clone()
                .with_search_keys(["title", "teacher"])
                .with_order("createdAt", OrderRule::Desc),
            plans: base
                .with_search_keys(["name"])
                .with_order("price", OrderRule::Asc),
        }
    }
}

///
/// Reads [PaginationRequest] from raw query string.
///
/// ### Errors
/// - [Error::Query] when any pagination parameter is malformed
/// - [Error::ValidationRowsTooLarge] when rows exceeds `max_rows`
///
pub fn parse_pagination(
    query: Option<&str>,
    config: &QueryStateConfig,
    max_rows: u32,
) -> Result<PaginationRequest, Error> {
    let request = query_state::codec::try_parse(query.unwrap_or_default(), config)?;

    if request.rows > max_rows {
        return Err(Error::ValidationRowsTooLarge {
            rows: request.rows,
            max_rows,
        });
    }

    Ok(request)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_pagination_without_query() {
        let config = PaginationConfig::new(20, 100);

        let request = parse_pagination(None, &config.academy_modules, config.max_rows).unwrap();

        assert_eq!(request.page, 1);
        assert_eq!(request.rows, 20);
        assert_eq!(request.order_key.as_deref(), Some("createdAt"));
        assert_eq!(request.order_rule, Some(OrderRule::Desc));
    }

    #[test]
    fn parse_pagination_rows_too_large() {
        let config = PaginationConfig::new(20, 100);

        let result = parse_pagination(Some("rows=101"), &config.plans, config.max_rows);

        assert!(matches!(
            result,
            Err(Error::ValidationRowsTooLarge {
                rows: 101,
                max_rows: 100
            })
        ));
    }

    #[test]
    fn parse_pagination_malformed() {
        let config = PaginationConfig::new(20, 100);

        let result = parse_pagination(Some("filters=%7B"), &config.plans, config.max_rows);

        assert!(matches!(result, Err(Error::Query(_))));
    }
}
