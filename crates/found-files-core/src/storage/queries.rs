use super::models::FoundFile;
use super::sqlite::Database;
use rusqlite::{params, Connection, OptionalExtension, Result};
use tracing::debug;

const UPSERT_FOUND_FILE: &str = "INSERT INTO found_files \
     (source, path, md5hash, name, extension, type, size, modified, discovered, \
      last_checked, category, label) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12) \
     ON CONFLICT (source, path, md5hash) DO UPDATE SET \
         name = excluded.name, \
         type = excluded.type, \
         extension = excluded.extension, \
         size = excluded.size, \
         modified = excluded.modified, \
         discovered = excluded.discovered, \
         last_checked = excluded.last_checked, \
         category = excluded.category, \
         label = excluded.label";

/// Create the `found_files` table if it does not exist yet.
pub fn create_found_file_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(include_str!("schema.sql"))?;
    debug!("found_files table ready");
    Ok(())
}

/// Look up the entry stored at `source`/`path`.
///
/// When several content versions exist only one is returned: the most
/// recently checked, newest row on ties. This explicit ordering replaces
/// taking whichever row the cursor happens to yield first, which SQLite
/// does not guarantee. Use [`get_found_file_versions`] to see all of them.
pub fn get_found_file(conn: &Connection, source: &str, path: &str) -> Result<Option<FoundFile>> {
    conn.query_row(
        "SELECT source, path, md5hash, name, size, modified, extension, type, category, \
                label, discovered, last_checked \
         FROM found_files WHERE source = ?1 AND path = ?2 \
         ORDER BY last_checked DESC, rowid DESC LIMIT 1",
        params![source, path],
        FoundFile::from_row,
    )
    .optional()
}

/// Every content version stored at `source`/`path`, oldest discovery first.
pub fn get_found_file_versions(
    conn: &Connection,
    source: &str,
    path: &str,
) -> Result<Vec<FoundFile>> {
    let mut stmt = conn.prepare(
        "SELECT source, path, md5hash, name, size, modified, extension, type, category, \
                label, discovered, last_checked \
         FROM found_files WHERE source = ?1 AND path = ?2 \
         ORDER BY discovered ASC, rowid ASC",
    )?;
    let files = stmt
        .query_map(params![source, path], FoundFile::from_row)?
        .collect::<Result<Vec<_>>>()?;
    Ok(files)
}

/// Upsert a batch of entries in a single transaction.
pub fn save_found_files(conn: &Connection, files: &[FoundFile]) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    let mut count = 0;
    {
        let mut stmt = tx.prepare_cached(UPSERT_FOUND_FILE)?;
        for file in files {
            count += stmt.execute(params![
                file.source,
                file.path,
                file.md5hash,
                file.name,
                file.extension,
                file.file_type,
                file.size,
                file.modified,
                file.discovered,
                file.last_checked,
                file.category,
                file.label,
            ])?;
        }
    }
    tx.commit()?;
    debug!("Upserted {} found files", count);
    Ok(count)
}

pub fn count_found_files(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM found_files", [], |row| row.get(0))
}

/// Number of distinct (source, path) pairs, regardless of content versions.
pub fn count_found_paths(conn: &Connection) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM (SELECT DISTINCT source, path FROM found_files)",
        [],
        |row| row.get(0),
    )
}

impl FoundFile {
    /// Insert this entry, or refresh the non-key columns of the row that
    /// already holds the same (source, path, md5hash). `tags` and `notes`
    /// are left as they are.
    pub fn save(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            UPSERT_FOUND_FILE,
            params![
                self.source,
                self.path,
                self.md5hash,
                self.name,
                self.extension,
                self.file_type,
                self.size,
                self.modified,
                self.discovered,
                self.last_checked,
                self.category,
                self.label,
            ],
        )?;
        debug!(
            "Saved found file {}:{} ({})",
            self.source, self.path, self.md5hash
        );
        Ok(())
    }
}

impl Database {
    pub fn get_found_file(&self, source: &str, path: &str) -> Result<Option<FoundFile>> {
        get_found_file(self.connection(), source, path)
    }

    pub fn get_found_file_versions(&self, source: &str, path: &str) -> Result<Vec<FoundFile>> {
        get_found_file_versions(self.connection(), source, path)
    }

    pub fn save_found_file(&self, file: &FoundFile) -> Result<()> {
        file.save(self.connection())
    }

    pub fn save_found_files(&self, files: &[FoundFile]) -> Result<usize> {
        save_found_files(self.connection(), files)
    }

    pub fn count_found_files(&self) -> Result<i64> {
        count_found_files(self.connection())
    }

    pub fn count_found_paths(&self) -> Result<i64> {
        count_found_paths(self.connection())
    }
}
