//! diary - In-memory journal with an interactive text menu
//!
//! Authors and diary entries live in two registers for the lifetime of the
//! process. Nothing is written to disk.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DiaryError;
