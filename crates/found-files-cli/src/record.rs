use crate::commands::RecordArgs;
use chrono::{DateTime, Utc};
use found_files_core::{Database, FoundFile, Result};

/// Build the entry for a `record` invocation observed at `now`.
///
/// A version already stored under the same (source, path, hash) keeps its
/// first-seen time; `last_checked` is always `now`.
pub fn build_found_file(
    db: &Database,
    source: &str,
    args: &RecordArgs,
    now: DateTime<Utc>,
) -> Result<FoundFile> {
    let mut file = FoundFile::new(
        source,
        &args.path,
        &args.hash,
        args.size,
        args.modified.unwrap_or(now),
        now,
    )
    .with_classification(&args.file_type, &args.category, &args.label);

    let previous = db
        .get_found_file_versions(source, &args.path)?
        .into_iter()
        .find(|existing| existing.md5hash == file.md5hash);
    if let Some(previous) = previous {
        file.discovered = previous.discovered;
    }

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record_args(path: &str, hash: &str, size: i64) -> RecordArgs {
        RecordArgs {
            path: path.to_string(),
            hash: hash.to_string(),
            size,
            source: None,
            modified: None,
            file_type: String::new(),
            category: String::new(),
            label: String::new(),
        }
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, day, 12, 0, 0).unwrap()
    }

    fn record(db: &Database, args: &RecordArgs, now: DateTime<Utc>) -> FoundFile {
        let file = build_found_file(db, "S", args, now).unwrap();
        db.save_found_file(&file).unwrap();
        file
    }

    #[test]
    fn test_rerecording_keeps_discovered() {
        let db = Database::open_in_memory().unwrap();
        record(&db, &record_args("P", "H1", 100), at(1));
        record(&db, &record_args("P", "H1", 120), at(9));

        let stored = db.get_found_file("S", "P").unwrap().unwrap();
        assert_eq!(db.count_found_files().unwrap(), 1);
        assert_eq!(stored.discovered, at(1));
        assert_eq!(stored.last_checked, at(9));
        assert_eq!(stored.size, 120);
    }

    #[test]
    fn test_new_hash_gets_fresh_discovered() {
        let db = Database::open_in_memory().unwrap();
        record(&db, &record_args("P", "H1", 100), at(1));
        let changed = record(&db, &record_args("P", "H2", 100), at(5));

        assert_eq!(changed.discovered, at(5));
        let versions = db.get_found_file_versions("S", "P").unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].md5hash, "H1");
        assert_eq!(versions[0].discovered, at(1));
        assert_eq!(versions[1].md5hash, "H2");
        assert_eq!(versions[1].discovered, at(5));
    }

    #[test]
    fn test_modified_defaults_to_now() {
        let db = Database::open_in_memory().unwrap();
        let file = build_found_file(&db, "S", &record_args("a/b.txt", "H", 1), at(3)).unwrap();
        assert_eq!(file.modified, at(3));
        assert_eq!(file.name, "b.txt");
        assert_eq!(file.extension, "txt");
    }
}
