use super::{
    json_file::{ensure_unique_ids, read_json},
    AcademyModule, AcademyModulesRepository, Error,
};
use axum::async_trait;
use std::path::Path;

///
/// Read-only repository loaded once at startup
///
pub struct AcademyModulesRepositoryImpl {
    academy_modules: Vec<AcademyModule>,
}

impl AcademyModulesRepositoryImpl {
    ///
    /// ### Errors
    /// - [Error::DuplicatedId] when two academy modules share an id
    ///
    pub fn new(academy_modules: Vec<AcademyModule>) -> Result<Self, Error> {
        ensure_unique_ids(academy_modules.iter().map(|academy_module| academy_module.id))?;

        Ok(Self { academy_modules })
    }

    ///
    /// Loads academy modules from JSON array file
    ///
    /// ### Errors
    /// - [Error::Io] when file cannot be read
    /// - [Error::Json] when file content is not valid
    /// - [Error::DuplicatedId] when two academy modules share an id
    ///
    pub async fn load(path: &Path) -> Result<Self, Error> {
        let academy_modules = read_json::<Vec<AcademyModule>>(path).await?;
        tracing::info!(count = academy_modules.len(), "loaded academy modules");

        Self::new(academy_modules)
    }
}

#[async_trait]
impl AcademyModulesRepository for AcademyModulesRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<AcademyModule>, Error> {
        Ok(self.academy_modules.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn data_file() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/academy_modules.json")
    }

    #[tokio::test]
    async fn load_seed_file() {
        let repository = AcademyModulesRepositoryImpl::load(&data_file()).await.unwrap();

        let academy_modules = repository.find_all().await.unwrap();

        assert!(!academy_modules.is_empty());
    }

    #[tokio::test]
    async fn load_missing_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/missing.json");

        let result = AcademyModulesRepositoryImpl::load(&path).await;

        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn new_rejects_duplicated_ids() {
        let repository = AcademyModulesRepositoryImpl::load(&data_file()).await.unwrap();
        let mut academy_modules = repository.find_all().await.unwrap();
        academy_modules.push(academy_modules[0].clone());

        let result = AcademyModulesRepositoryImpl::new(academy_modules);

        assert!(matches!(result, Err(Error::DuplicatedId(_))));
    }
}
