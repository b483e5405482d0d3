//! Interval algebra: clipping and merging.
//!
//! These routines are the kernel the rest of the coverage pipeline is built
//! on. They are pure functions over [`crate::types::Interval`] with no
//! knowledge of shifts or services.

mod clip;
mod merge;
#[cfg(test)]
mod tests;

pub use clip::clip;
pub use merge::merge_intervals;
