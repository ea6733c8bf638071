// file: src/exporter/mod.rs
// description: export format selection and per-format dispatch
// reference: internal module structure

pub mod csv;
pub mod json;

use crate::error::{Result, ScraperError};
use crate::models::{Repository, Target};
use chrono::NaiveDateTime;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;

pub use self::csv::CsvExporter;
pub use self::json::JsonExporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Both,
}

impl FromStr for OutputFormat {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "both" => Ok(OutputFormat::Both),
            other => Err(ScraperError::Config(format!(
                "unknown output format '{}'. Use 'json', 'csv', or 'both'",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Both => "both",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Json,
    Csv,
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportKind::Json => "JSON",
            ExportKind::Csv => "CSV",
        })
    }
}

/// Result of one format's export. A failure here never stops the others.
#[derive(Debug)]
pub struct ExportOutcome {
    pub kind: ExportKind,
    pub result: Result<PathBuf>,
}

impl ExportOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// `{kind}_{name}_{YYYYmmdd_HHMMSS}`, safe to use as a file name.
pub fn export_file_stem(target: &Target, at: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}",
        target.kind,
        target.name,
        at.format("%Y%m%d_%H%M%S")
    )
}

#[derive(Debug, Clone)]
pub struct Exporters {
    json: JsonExporter,
    csv: CsvExporter,
}

impl Exporters {
    pub fn new(output_dir: &Path, pretty_json: bool) -> Self {
        Self {
            json: JsonExporter::new(output_dir, pretty_json),
            csv: CsvExporter::new(output_dir),
        }
    }

    pub fn export(
        &self,
        format: OutputFormat,
        repos: &[Repository],
        file_stem: &str,
    ) -> Vec<ExportOutcome> {
        let kinds: &[ExportKind] = match format {
            OutputFormat::Json => &[ExportKind::Json],
            OutputFormat::Csv => &[ExportKind::Csv],
            OutputFormat::Both => &[ExportKind::Json, ExportKind::Csv],
        };

        kinds
            .iter()
            .map(|&kind| {
                let result = match kind {
                    ExportKind::Json => self.json.export(repos, file_stem),
                    ExportKind::Csv => self.csv.export(repos, file_stem),
                };
                if let Err(e) = &result {
                    error!("Error saving {}: {}", kind, e);
                }
                ExportOutcome { kind, result }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::repository::sample;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("both".parse::<OutputFormat>().unwrap(), OutputFormat::Both);
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(ScraperError::Config(_))
        ));
    }

    #[test]
    fn test_export_file_stem_is_filesystem_safe() {
        let stem = export_file_stem(&Target::org("noi-techpark"), timestamp());
        assert_eq!(stem, "org_noi-techpark_20240309_140507");
        assert!(!stem.contains([':', ' ', '/', '\\']));
    }

    #[test]
    fn test_export_both_writes_two_files() {
        let dir = tempdir().unwrap();
        let repos = vec![sample(1, "alpha")];

        let outcomes = Exporters::new(dir.path(), true).export(OutputFormat::Both, &repos, "stem");

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(ExportOutcome::is_ok));
        assert!(dir.path().join("stem.json").exists());
        assert!(dir.path().join("stem.csv").exists());
    }

    #[test]
    fn test_export_single_format() {
        let dir = tempdir().unwrap();
        let outcomes = Exporters::new(dir.path(), true).export(OutputFormat::Csv, &[], "stem");

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].kind, ExportKind::Csv);
        assert!(!dir.path().join("stem.json").exists());
    }

    #[test]
    fn test_json_failure_does_not_stop_csv() {
        let dir = tempdir().unwrap();
        // A directory squatting on the JSON file name makes that write fail.
        fs::create_dir(dir.path().join("stem.json")).unwrap();

        let outcomes =
            Exporters::new(dir.path(), true).export(OutputFormat::Both, &[sample(1, "a")], "stem");

        assert!(!outcomes[0].is_ok());
        assert!(outcomes[1].is_ok());
        assert!(dir.path().join("stem.csv").is_file());
    }
}
