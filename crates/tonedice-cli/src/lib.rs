//! Tonedice CLI library.
//!
//! Config loading and the command implementations behind the `tonedice`
//! binary.

pub mod commands;
pub mod input;
