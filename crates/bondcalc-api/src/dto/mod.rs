//! Data Transfer Objects for API requests and responses.

pub mod bonds;
pub mod common;

pub use bonds::*;
pub use common::*;
