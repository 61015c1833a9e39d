//! CLI command implementations

pub mod categories;
pub mod pools;
pub mod roll;
