//! Domain logic shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O; everything here can be unit tested
//! without a database.

pub mod directory;
pub mod error;
pub mod forms;
pub mod schedule;
pub mod search;
pub mod types;
