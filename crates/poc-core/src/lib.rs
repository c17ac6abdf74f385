//! Core types and trait definitions for the POC desk.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! store backends and the web layer depend on it.

// `PocStore` spells out `Send` on its futures; silence the advisory lint.
#![allow(async_fn_in_trait)]

pub mod contact;
pub mod error;
pub mod filter;
pub mod intake;
pub mod store;
pub mod view;

pub use error::{Error, Result};
