//! The aggregation driver: runs the clip, merge, resolve, classify
//! pipeline across entities and days.

mod driver;
#[cfg(test)]
mod tests;

pub use driver::{CoverageEngine, GroupBy};
