pub mod config;
pub mod error;
pub mod path;
pub mod storage;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use storage::{Database, FoundFile};
