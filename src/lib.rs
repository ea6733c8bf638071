// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod github;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use config::{ApiConfig, Config, FilterConfig, OutputConfig};
pub use error::{Result, ScraperError};
pub use exporter::{
    CsvExporter, ExportKind, ExportOutcome, Exporters, JsonExporter, OutputFormat,
    export_file_stem,
};
pub use github::{ClientSettings, PageFetcher, PageResult, PaginatingCollector};
pub use models::{Repository, Target, TargetKind};
pub use pipeline::{
    FetchStats, ProgressTracker, RepositoryFilter, RepositorySummary, filter_repositories,
};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default();
        let _filter = RepositoryFilter::from(&config.filter);
        let _settings = ClientSettings::from_config(&config.api);
    }
}
