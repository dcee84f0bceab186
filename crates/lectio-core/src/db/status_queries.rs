//! Read status queries.

use std::collections::HashMap;

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{Result, StoreResultExt},
    models::{ChapterRef, ReadStatus},
    store::ReadStatusStore,
};

const SELECT_STATUS_SQL: &str = "SELECT is_read FROM read_status WHERE book = ?1 AND chapter = ?2";
const SELECT_ALL_FLAGS_SQL: &str = "SELECT book, chapter, is_read FROM read_status";
const SELECT_ALL_STATUSES_SQL: &str =
    "SELECT book, chapter, is_read, read_at FROM read_status ORDER BY book, chapter";
const UPSERT_STATUS_SQL: &str = "INSERT INTO read_status (book, chapter, is_read, read_at) \
     VALUES (?1, ?2, ?3, ?4) \
     ON CONFLICT(book, chapter) DO UPDATE SET is_read = excluded.is_read, read_at = excluded.read_at";
const DELETE_ALL_STATUSES_SQL: &str = "DELETE FROM read_status";
const COUNT_READ_SQL: &str = "SELECT COUNT(*) FROM read_status WHERE is_read = 1";

fn chapter_from_row(row: &Row<'_>) -> rusqlite::Result<ChapterRef> {
    Ok(ChapterRef::new(row.get(0)?, row.get(1)?))
}

fn status_from_row(row: &Row<'_>) -> rusqlite::Result<ReadStatus> {
    let read_at = row
        .get::<_, Option<String>>(3)?
        .map(|value| {
            value.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })
        })
        .transpose()?;

    Ok(ReadStatus {
        chapter: chapter_from_row(row)?,
        is_read: row.get(2)?,
        read_at,
    })
}

impl ReadStatusStore for super::Database {
    fn get(&self, chapter: ChapterRef) -> Result<bool> {
        let is_read: Option<bool> = self
            .connection
            .query_row(
                SELECT_STATUS_SQL,
                params![chapter.book, chapter.chapter],
                |row| row.get(0),
            )
            .optional()
            .store_context("Failed to query read status")?;
        Ok(is_read.unwrap_or(false))
    }

    fn get_all(&self) -> Result<HashMap<ChapterRef, bool>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_FLAGS_SQL)
            .store_context("Failed to prepare read status query")?;

        let rows = stmt
            .query_map([], |row| Ok((chapter_from_row(row)?, row.get::<_, bool>(2)?)))
            .store_context("Failed to query read status")?;

        rows.collect::<rusqlite::Result<HashMap<_, _>>>()
            .store_context("Failed to read read status rows")
    }

    fn set(&mut self, chapter: ChapterRef, is_read: bool, at: Timestamp) -> Result<()> {
        let read_at = is_read.then(|| at.to_string());
        self.connection
            .execute(
                UPSERT_STATUS_SQL,
                params![chapter.book, chapter.chapter, is_read, read_at],
            )
            .store_context("Failed to write read status")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.connection
            .execute(DELETE_ALL_STATUSES_SQL, [])
            .store_context("Failed to clear read status")?;
        Ok(())
    }

    fn statuses(&self) -> Result<Vec<ReadStatus>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_STATUSES_SQL)
            .store_context("Failed to prepare read status query")?;

        let rows = stmt
            .query_map([], status_from_row)
            .store_context("Failed to query read status")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .store_context("Failed to read read status rows")
    }

    fn read_count(&self) -> Result<usize> {
        let count: i64 = self
            .connection
            .query_row(COUNT_READ_SQL, [], |row| row.get(0))
            .store_context("Failed to count read chapters")?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}
