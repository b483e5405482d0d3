//! Tests for interval clipping and merging.

mod helpers;
