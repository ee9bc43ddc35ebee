//! `mc-pi` library crate.
//!
//! The binary (`mcpi`) is a thin wrapper around this library so that:
//!
//! - the pipeline is testable without spawning processes
//! - each stage (simulate, aggregate, plot, export) can be used on its own

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;
pub mod sim;
pub mod stats;
