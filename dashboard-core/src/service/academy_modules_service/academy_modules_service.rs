use crate::{dto::output, error::Error};
use axum::async_trait;
use query_state::PaginationRequest;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AcademyModulesService: Send + Sync {
    ///
    /// Find academy modules matching search, filters and ranges
    /// of the request, ordered and paged.
    ///
    /// ### Errors
    /// - [Error::ValidationUnknownField] when request names a field
    ///   academy modules do not have
    /// - [Error::ValidationUnsupportedOperation] when field cannot be searched or ranged
    /// - [Error::ValidationInvalidValue] when filter value or range bound
    ///   does not fit the field
    ///
    async fn find_many(
        &self,
        request: PaginationRequest,
    ) -> Result<output::Page<output::AcademyModule>, Error>;
}
