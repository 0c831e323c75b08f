//! Cassettes: YAML recordings of port interactions, replayed in tests.

pub mod format;
pub mod recorder;
pub mod replayer;
