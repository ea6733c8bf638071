// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{Result, ScraperError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // GitHub logins: alphanumerics and single hyphens, no leading or trailing hyphen
    static ref GITHUB_LOGIN: Regex = Regex::new(
        r"^[A-Za-z0-9](?:[A-Za-z0-9]|-[A-Za-z0-9])*$"
    ).expect("GITHUB_LOGIN regex is valid");
}

const MAX_LOGIN_LENGTH: usize = 39;

pub struct Validator;

impl Validator {
    pub fn validate_target_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(ScraperError::Validation(
                "Target name cannot be empty".to_string(),
            ));
        }

        if name.len() > MAX_LOGIN_LENGTH {
            return Err(ScraperError::Validation(format!(
                "Target name is longer than {} characters: {}",
                MAX_LOGIN_LENGTH, name
            )));
        }

        if !GITHUB_LOGIN.is_match(name) {
            return Err(ScraperError::Validation(format!(
                "Invalid GitHub user or organization name: {}",
                name
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ScraperError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }
}
