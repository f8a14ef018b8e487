pub mod models;
pub mod queries;
pub mod sqlite;

pub use models::FoundFile;
pub use queries::{
    count_found_files, count_found_paths, create_found_file_table, get_found_file,
    get_found_file_versions, save_found_files,
};
pub use sqlite::Database;
