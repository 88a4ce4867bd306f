use super::ApplicationEnv;
use crate::{
    dto::input::PaginationConfig,
    repository::{AcademyModulesRepositoryImpl, PlansRepositoryImpl},
    service::{
        academy_modules_service::{AcademyModulesService, AcademyModulesServiceImpl},
        plans_service::{PlansService, PlansServiceImpl},
    },
};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub academy_modules_service: Arc<dyn AcademyModulesService>,
    pub plans_service: Arc<dyn PlansService>,
    pub pagination_config: Arc<PaginationConfig>,
}

pub async fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("creating repositories");
    let academy_modules_repository =
        AcademyModulesRepositoryImpl::load(&env.academy_modules_file).await?;
    let academy_modules_repository = Arc::new(academy_modules_repository);

    let plans_repository = PlansRepositoryImpl::load(&env.plans_file).await?;
    let plans_repository = Arc::new(plans_repository);

    tracing::info!("creating services");
    let academy_modules_service = AcademyModulesServiceImpl::new(academy_modules_repository);
    let academy_modules_service = Arc::new(academy_modules_service);

    let plans_service = PlansServiceImpl::new(plans_repository);
    let plans_service = Arc::new(plans_service);

    let pagination_config = PaginationConfig::new(env.default_rows, env.max_rows);
    let pagination_config = Arc::new(pagination_config);

    Ok(ApplicationState {
        academy_modules_service,
        plans_service,
        pagination_config,
    })
}
