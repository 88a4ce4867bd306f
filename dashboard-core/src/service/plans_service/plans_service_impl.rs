use super::PlansService;
use crate::{dto::output, error::Error, repository::PlansRepository, service::listing};
use axum::async_trait;
use query_state::PaginationRequest;
use std::sync::Arc;

pub struct PlansServiceImpl {
    repository: Arc<dyn PlansRepository>,
}

impl PlansServiceImpl {
    pub fn new(repository: Arc<dyn PlansRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PlansService for PlansServiceImpl {
    #[tracing::instrument(
        name = "Find plans",
        skip_all,
        fields(
            page = request.page,
            rows = request.rows,
        )
    )]
    async fn find_many(
        &self,
        request: PaginationRequest,
    ) -> Result<output::Page<output::Plan>, Error> {
        tracing::trace!(?request);

        let plans = self.repository.find_all().await?;
        let listing = listing::list(plans, &request)?;
        tracing::info!(total = listing.total, count = listing.items.len(), "found plans");

        Ok(output::Page::new(listing, &request))
    }
}
