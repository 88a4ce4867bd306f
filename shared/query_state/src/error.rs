#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid query parameter {param}: expected positive integer, got {value:?}")]
    InvalidInteger { param: &'static str, value: String },

    #[error("invalid query parameter orderRule: expected asc or desc, got {0:?}")]
    InvalidOrderRule(String),

    #[error("invalid query parameter {param}: {source}")]
    InvalidJson {
        param: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid query parameter rangedFilters: duplicated key {0:?}")]
    DuplicatedRangedFilter(String),
}
