//! Report renderers for fetched products.
//!
//! - [`terminal`] — colored, tabular output with a product header box;
//!   respects `--quiet`.
//! - [`xlsx`] — three-sheet workbook (nutrition facts, Nutri-Score
//!   breakdown, score summary).

pub mod terminal;
pub mod xlsx;
