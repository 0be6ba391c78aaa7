mod autotrim;

pub use autotrim::{AutoTrimPlugin, TrimSet};
