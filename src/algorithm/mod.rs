//! Algorithms on the geometry tree.

pub mod orientation;
