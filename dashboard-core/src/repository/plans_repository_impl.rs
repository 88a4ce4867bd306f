use super::{
    json_file::{ensure_unique_ids, read_json},
    Error, Plan, PlansRepository,
};
use axum::async_trait;
use std::path::Path;

pub struct PlansRepositoryImpl {
    plans: Vec<Plan>,
}

impl PlansRepositoryImpl {
    pub fn new(plans: Vec<Plan>) -> Result<Self, Error> {
        ensure_unique_ids(plans.iter().map(|plan| plan.id))?;

        Ok(Self { plans })
    }

    pub async fn load(path: &Path) -> Result<Self, Error> {
        let plans = read_json::<Vec<Plan>>(path).await?;
        tracing::info!(count = plans.len(), "loaded plans");

        Self::new(plans)
    }
}

#[async_trait]
impl PlansRepository for PlansRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Plan>, Error> {
        Ok(self.plans.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn load_seed_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/plans.json");

        let repository = PlansRepositoryImpl::load(&path).await.unwrap();

        assert!(!repository.find_all().await.unwrap().is_empty());
    }
}
