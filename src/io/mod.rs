//! Output writers.
//!
//! - spreadsheet report with embedded chart (`workbook`)
//! - JSON results export (`export`)

pub mod export;
pub mod workbook;

pub use export::*;
pub use workbook::*;
