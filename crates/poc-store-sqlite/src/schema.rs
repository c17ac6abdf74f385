//! SQL schema for the POC SQLite store.
//!
//! Executed on every open. Idempotent thanks to `CREATE TABLE IF NOT EXISTS`,
//! so reopening an existing file keeps its rows.

pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS poc_contacts (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    city             TEXT NOT NULL DEFAULT '',
    institute_name   TEXT NOT NULL DEFAULT '',
    poc_name         TEXT NOT NULL DEFAULT '',
    mobile           TEXT NOT NULL DEFAULT '',
    email            TEXT NOT NULL DEFAULT '',
    status           TEXT NOT NULL DEFAULT 'Cold',  -- Cold | Warm | Active | Closed
    remarks          TEXT NOT NULL DEFAULT '',
    meeting_schedule TEXT NOT NULL,                 -- YYYY-MM-DDTHH:MM:SS
    created_at       TEXT NOT NULL                  -- RFC 3339 UTC
);

CREATE INDEX IF NOT EXISTS poc_contacts_created_idx ON poc_contacts(created_at);

PRAGMA user_version = 1;
";
