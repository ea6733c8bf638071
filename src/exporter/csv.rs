// file: src/exporter/csv.rs
// description: csv export of collected repositories
// reference: only the description column is quoted; other fields are written verbatim

use crate::error::{Result, ScraperError};
use crate::models::Repository;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSV_HEADER: &str = "Name,Full Name,Description,Language,Stars,Forks,Clone URL,HTML URL,Created At,Updated At,Private,Fork,Archived";

#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes `{file_stem}.csv` into the output directory.
    pub fn export(&self, repos: &[Repository], file_stem: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ScraperError::FileOperation {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.output_dir.join(format!("{}.csv", file_stem));
        self.write_to(repos, &path)?;

        info!("Exported {} repositories to {}", repos.len(), path.display());
        Ok(path)
    }

    /// A failed write stops at that row; the partial file stays on disk.
    pub fn write_to(&self, repos: &[Repository], path: &Path) -> Result<()> {
        let file_error = |source| ScraperError::FileOperation {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(file_error)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", CSV_HEADER).map_err(file_error)?;
        for repo in repos {
            writeln!(writer, "{}", render_row(repo)).map_err(file_error)?;
        }

        writer.flush().map_err(file_error)
    }
}

pub fn render_row(repo: &Repository) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{}",
        repo.name,
        repo.full_name,
        quote(&repo.description),
        repo.language,
        repo.stars,
        repo.forks,
        repo.clone_url,
        repo.html_url,
        repo.created_at,
        repo.updated_at,
        repo.private,
        repo.fork,
        repo.archived
    )
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
