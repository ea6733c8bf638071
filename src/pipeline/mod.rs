// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline stages after collection

mod filter;
mod progress;
mod summary;

pub use filter::{RepositoryFilter, filter_repositories};
pub use progress::{FetchStats, ProgressTracker};
pub use summary::RepositorySummary;
