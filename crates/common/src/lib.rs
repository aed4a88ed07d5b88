//! Shared building blocks for the library workspace: logging bootstrap and
//! small wire types that do not belong to any single layer.

pub mod types;
pub mod utils;
