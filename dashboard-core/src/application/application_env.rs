use anyhow::anyhow;
use std::{net::SocketAddr, path::PathBuf};
use tracing::level_filters::LevelFilter;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,
    /// Lowest level written to the rolling log file
    pub log_file_level: LevelFilter,

    pub bind_address: SocketAddr,

    pub academy_modules_file: PathBuf,
    pub plans_file: PathBuf,

    pub default_rows: u32,
    /// Upper bound for `rows` query parameter
    pub max_rows: u32,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("DASHBOARD_CORE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("DASHBOARD_CORE_LOG_FILENAME")?;
        let log_file_level = Self::env_var("DASHBOARD_CORE_LOG_FILE_LEVEL")?.parse()?;
        let bind_address = Self::env_var("DASHBOARD_CORE_BIND_ADDRESS")?.parse()?;
        let academy_modules_file = Self::env_var("DASHBOARD_CORE_ACADEMY_MODULES_FILE")?.into();
        let plans_file = Self::env_var("DASHBOARD_CORE_PLANS_FILE")?.into();
        let default_rows = Self::env_var("DASHBOARD_CORE_DEFAULT_ROWS")?.parse()?;
        let max_rows = Self::env_var("DASHBOARD_CORE_MAX_ROWS")?.parse()?;

        if default_rows == 0 || default_rows > max_rows {
            return Err(anyhow!(
                "DASHBOARD_CORE_DEFAULT_ROWS need to be in range 1..=DASHBOARD_CORE_MAX_ROWS"
            ));
        }

        Ok(Self {
            log_directory,
            log_filename,
            log_file_level,
            bind_address,
            academy_modules_file,
            plans_file,
            default_rows,
            max_rows,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
