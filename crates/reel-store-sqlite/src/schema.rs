//! SQL schema for the Reel SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Every name-bearing table carries a `*_key` column holding the case-folded
/// value under a UNIQUE constraint; lookups and filters compare against it.
/// `AUTOINCREMENT` keeps ids from being reused after a delete.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS genres (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    name_key  TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS languages (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    name_key  TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS movies (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    title         TEXT    NOT NULL,
    title_key     TEXT    NOT NULL UNIQUE,
    genre_id      INTEGER NOT NULL REFERENCES genres(id),
    language_id   INTEGER NOT NULL REFERENCES languages(id),
    oscar_count   INTEGER NOT NULL DEFAULT 0 CHECK (oscar_count >= 0),
    release_date  TEXT,              -- YYYY-MM-DD or NULL
    duration      INTEGER CHECK (duration IS NULL OR duration >= 0)
);

CREATE INDEX IF NOT EXISTS movies_genre_idx    ON movies(genre_id);
CREATE INDEX IF NOT EXISTS movies_language_idx ON movies(language_id);

PRAGMA user_version = 1;
";
