//! Common type aliases shared across MarkKit crates.

pub mod aliases;

pub use aliases::*;
