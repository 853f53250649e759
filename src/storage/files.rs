//! Stored clip records
//!
//! SQL for the `files` table: one row per canonical key, holding the
//! Telegram `file_id` the clip was uploaded with. Rows are only ever
//! inserted; nothing here updates or deletes them.

use rusqlite::{Connection, OptionalExtension, Result};

/// Structure representing a stored clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Canonical key, e.g. "42.mp3"
    pub name: String,
    /// Telegram file_id, opaque to us
    pub file_id: String,
    /// Insertion timestamp
    pub created_at: String,
}

/// Inserts a record unless the key is already taken.
///
/// `INSERT OR IGNORE` against the primary key makes this atomic: of two
/// concurrent inserts for the same key exactly one row survives, and the
/// first handle stays in effect.
///
/// # Returns
///
/// Returns `Ok(true)` if a new row was written, `Ok(false)` if the key existed.
pub fn insert_file_if_absent(conn: &Connection, name: &str, file_id: &str) -> Result<bool> {
    let rows_affected = conn.execute(
        "INSERT OR IGNORE INTO files (name, file_id) VALUES (?1, ?2)",
        rusqlite::params![name, file_id],
    )?;
    Ok(rows_affected > 0)
}

/// Gets the file_id stored under `name`.
///
/// # Returns
///
/// Returns `Ok(Some(file_id))` if found, `Ok(None)` if not found.
pub fn get_file_id(conn: &Connection, name: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT file_id FROM files WHERE name = ?1",
        rusqlite::params![name],
        |row| row.get(0),
    )
    .optional()
}

/// Lists stored records, oldest first.
pub fn list_files(conn: &Connection, limit: usize) -> Result<Vec<FileRecord>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let mut stmt = conn.prepare(
        "SELECT name, file_id, created_at FROM files
         ORDER BY created_at ASC, rowid ASC
         LIMIT ?1",
    )?;

    let records = stmt
        .query_map(rusqlite::params![limit], |row| {
            Ok(FileRecord {
                name: row.get(0)?,
                file_id: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    Ok(records)
}

/// Gets the total number of stored records
pub fn count_files(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM files", [], |row| row.get(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::migrations::run_migrations;
    use pretty_assertions::assert_eq;

    fn test_conn() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_get_missing_returns_none() {
        let conn = test_conn();
        assert_eq!(get_file_id(&conn, "5.mp3").unwrap(), None);
    }

    #[test]
    fn test_insert_then_get() {
        let conn = test_conn();
        assert!(insert_file_if_absent(&conn, "5.mp3", "H1").unwrap());
        assert_eq!(get_file_id(&conn, "5.mp3").unwrap().as_deref(), Some("H1"));
    }

    #[test]
    fn test_duplicate_insert_keeps_first_handle() {
        let conn = test_conn();
        assert!(insert_file_if_absent(&conn, "5.mp3", "H1").unwrap());
        assert!(!insert_file_if_absent(&conn, "5.mp3", "H2").unwrap());

        assert_eq!(get_file_id(&conn, "5.mp3").unwrap().as_deref(), Some("H1"));
        assert_eq!(count_files(&conn).unwrap(), 1);
    }

    #[test]
    fn test_list_files_in_insertion_order() {
        let conn = test_conn();
        insert_file_if_absent(&conn, "3.mp3", "H3").unwrap();
        insert_file_if_absent(&conn, "1.mp3", "H1").unwrap();
        insert_file_if_absent(&conn, "2.mp3", "H2").unwrap();

        let names: Vec<String> = list_files(&conn, 10).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["3.mp3", "1.mp3", "2.mp3"]);

        assert_eq!(list_files(&conn, 2).unwrap().len(), 2);
    }
}
