// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod repository;
pub mod target;

pub use repository::Repository;
pub use target::{Target, TargetKind};
