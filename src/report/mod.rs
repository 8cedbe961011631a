//! Report renderers for repository listings.
//!
//! - [`terminal`] — colored table with license risk; respects `--verbose` / `--quiet`.
//! - JSON output is a plain `serde_json` dump of [`Repo`](crate::models::Repo) values,
//!   written directly by the binary.

pub mod terminal;
