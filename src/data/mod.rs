//! Everything below the UI: reading the export, the record types, and the
//! filter/rank step.
//!
//! `loader::load_csv` turns the CSV into a [`model::Dataset`] once per
//! session. Each selector change then calls [`filter::filter_and_sort`],
//! which returns a [`filter::RankedView`] of dataset indices.

pub mod filter;
pub mod loader;
pub mod model;
