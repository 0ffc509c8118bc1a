#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` maps the `dirlist` verbosity flags onto the [`tracing`]
//! ecosystem. Library crates emit ordinary `tracing` events; the binary calls
//! [`init_tracing`] once with the [`VerbosityConfig`] parsed from `-v` flags.
//!
//! # Design
//!
//! - [`VerbosityConfig`] turns a `-v` count into a [`LevelFilter`](tracing::level_filters::LevelFilter).
//! - [`subscriber`] builds a `tracing-subscriber` formatter with an
//!   [`EnvFilter`](tracing_subscriber::EnvFilter). The [`LOG_ENV`] variable
//!   may override the derived level with arbitrary filter directives.
//! - Diagnostics go to standard error so standard output carries only
//!   listing data.

mod config;
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use tracing_bridge::{LOG_ENV, build_filter, init_tracing, subscriber};
