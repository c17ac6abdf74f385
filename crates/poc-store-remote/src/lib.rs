//! Remote backend for the POC desk: a hosted relational table reached over
//! its PostgREST-style HTTP API (e.g. Supabase).
//!
//! The table must already exist; this crate never creates it. Every
//! operation is one independent request with no retry.

mod row;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{RemoteConfig, RemoteStore};
