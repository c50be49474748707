//! Helpers shared by several puzzle days

pub mod dp_cache;
pub mod grid;
