// file: src/exporter/json.rs
// description: json export of collected repositories

use crate::error::{Result, ScraperError};
use crate::models::Repository;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
    pretty: bool,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            pretty,
        }
    }

    /// Writes `{file_stem}.json` into the output directory.
    pub fn export(&self, repos: &[Repository], file_stem: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ScraperError::FileOperation {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.output_dir.join(format!("{}.json", file_stem));
        self.write_to(repos, &path)?;

        info!("Exported {} repositories to {}", repos.len(), path.display());
        Ok(path)
    }

    pub fn write_to(&self, repos: &[Repository], path: &Path) -> Result<()> {
        let data = self.render(repos)?;
        fs::write(path, data).map_err(|source| ScraperError::FileOperation {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn render(&self, repos: &[Repository]) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(repos)
        } else {
            serde_json::to_string(repos)
        };
        rendered.map_err(|e| ScraperError::Serialization(e.to_string()))
    }
}
