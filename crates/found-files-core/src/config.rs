use crate::error::Result;
use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_DATABASE_PATH: &str = "found_files.db";
pub const DEFAULT_SOURCE: &str = "default";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// SQLite file holding the `found_files` table.
    pub database_path: String,
    /// Source label used when a caller does not name one.
    pub source: String,
}

/// Load configuration from `path`, or from `Config.toml` in the working
/// directory when no path is given (optional in that case), then apply
/// `FOUND_FILES_*` environment overrides.
pub fn load_configuration(path: Option<&Path>) -> Result<AppConfig> {
    build_configuration(path, Environment::with_prefix("FOUND_FILES"))
}

fn build_configuration(path: Option<&Path>, environment: Environment) -> Result<AppConfig> {
    let file_source = match path {
        Some(path) => ConfigFile::from(path).required(true),
        None => ConfigFile::with_name("Config").required(false),
    };

    let builder = Config::builder()
        .set_default("database_path", DEFAULT_DATABASE_PATH)?
        .set_default("source", DEFAULT_SOURCE)?
        .add_source(file_source)
        .add_source(environment)
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}
