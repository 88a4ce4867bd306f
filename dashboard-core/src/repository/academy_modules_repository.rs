use super::{dto::AcademyModule, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AcademyModulesRepository: Send + Sync {
    ///
    /// Finds all academy modules in storage order
    ///
    async fn find_all(&self) -> Result<Vec<AcademyModule>, Error>;
}
