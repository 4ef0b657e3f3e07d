// crates/core/src/lib.rs
//! Core library for seedscribe: turns JSON fixture files into EF Core
//! `HasData(...)` seed blocks and scans fixtures for duplicate identifiers.

pub mod entity;
pub mod error;
pub mod format;
pub mod generator;
pub mod input;
pub mod output;
pub mod record;
pub mod scanner;
pub mod template;

pub use entity::*;
pub use error::*;
pub use format::*;
pub use generator::*;
pub use input::*;
pub use output::*;
pub use record::*;
pub use scanner::*;
pub use template::*;
