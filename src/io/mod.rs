//! Readers and writers of geometry text formats.

pub mod wkt;
