use super::{dto::Plan, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlansRepository: Send + Sync {
    ///
    /// Finds all plans in storage order
    ///
    async fn find_all(&self) -> Result<Vec<Plan>, Error>;
}
