//! Core domain types for the coverage engine.

mod ids;
mod interval;
mod service;
mod shift;

pub use ids::*;
pub use interval::*;
pub use service::*;
pub use shift::*;
