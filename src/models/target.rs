// file: src/models/target.rs
// description: the user or organization whose repositories are collected
// reference: internal data structures

use crate::error::{Result, ScraperError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    User,
    Org,
}

impl TargetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::User => "user",
            TargetKind::Org => "org",
        }
    }

    /// First path segment of the repository listing endpoint.
    pub fn api_segment(self) -> &'static str {
        match self {
            TargetKind::User => "users",
            TargetKind::Org => "orgs",
        }
    }
}

impl FromStr for TargetKind {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(TargetKind::User),
            "org" => Ok(TargetKind::Org),
            other => Err(ScraperError::Config(format!(
                "target kind must be 'user' or 'org', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub kind: TargetKind,
    pub name: String,
}

impl Target {
    pub fn new(kind: TargetKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn user(name: impl Into<String>) -> Self {
        Self::new(TargetKind::User, name)
    }

    pub fn org(name: impl Into<String>) -> Self {
        Self::new(TargetKind::Org, name)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}
