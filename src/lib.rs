//! This is intended to serve as a binary crate.
//!
//! Checks a list of URLs for status code, redirection and load time,
//! one URL at a time. See `url_status_checker --help`.
pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod report;
pub mod run;
