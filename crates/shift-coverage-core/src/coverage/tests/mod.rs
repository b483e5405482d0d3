//! Tests for the coverage pipeline.

mod helpers;
