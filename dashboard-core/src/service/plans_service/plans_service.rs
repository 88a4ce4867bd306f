use crate::{dto::output, error::Error};
use axum::async_trait;
use query_state::PaginationRequest;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlansService: Send + Sync {
    ///
    /// Find plans matching the request, ordered and paged.
    ///
    /// ### Errors
    /// - same as [crate::service::academy_modules_service::AcademyModulesService::find_many]
    ///
    async fn find_many(&self, request: PaginationRequest)
        -> Result<output::Page<output::Plan>, Error>;
}
