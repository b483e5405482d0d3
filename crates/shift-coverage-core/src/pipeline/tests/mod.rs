//! Integration-style tests driving the whole pipeline end to end.

mod helpers;
