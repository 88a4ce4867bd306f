use super::AcademyModulesService;
use crate::{dto::output, error::Error, repository::AcademyModulesRepository, service::listing};
use axum::async_trait;
use query_state::PaginationRequest;
use std::sync::Arc;

pub struct AcademyModulesServiceImpl {
    repository: Arc<dyn AcademyModulesRepository>,
}

impl AcademyModulesServiceImpl {
    pub fn new(repository: Arc<dyn AcademyModulesRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AcademyModulesService for AcademyModulesServiceImpl {
    #[tracing::instrument(
        name = "Find academy modules",
        skip_all,
        fields(
            page = request.page,
            rows = request.rows,
        )
    )]
    async fn find_many(
        &self,
        request: PaginationRequest,
    ) -> Result<output::Page<output::AcademyModule>, Error> {
        tracing::trace!(?request);

        let academy_modules = self.repository.find_all().await?;
        let listing = listing::list(academy_modules, &request)?;
        tracing::info!(
            total = listing.total,
            count = listing.items.len(),
            "found academy modules"
        );

        Ok(output::Page::new(listing, &request))
    }
}
