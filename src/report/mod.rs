//! Reporting: the tabular report model and console formatting.

pub mod format;
pub mod table;

pub use format::*;
pub use table::*;
