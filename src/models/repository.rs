// file: src/models/repository.rs
// description: repository record as returned by the GitHub REST API
// reference: https://docs.github.com/en/rest/repos/repos

use serde::{Deserialize, Deserializer, Serialize};

/// Snapshot of one repository at fetch time.
///
/// Field names follow the GitHub API so the JSON export can be decoded again
/// with the same type. Fields the API returns beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub clone_url: String,
    pub ssh_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language: String,
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    #[serde(rename = "forks_count")]
    pub forks: u64,
    pub created_at: String,
    pub updated_at: String,
    pub private: bool,
    pub fork: bool,
    pub archived: bool,
}

impl Repository {
    /// Empty language means GitHub could not determine one.
    pub fn has_language(&self) -> bool {
        !self.language.is_empty()
    }
}

// The API sends `null` for a missing description or language.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) fn sample(id: u64, name: &str) -> Repository {
    Repository {
        id,
        name: name.to_string(),
        full_name: format!("octocat/{}", name),
        html_url: format!("https://github.com/octocat/{}", name),
        clone_url: format!("https://github.com/octocat/{}.git", name),
        ssh_url: format!("git@github.com:octocat/{}.git", name),
        description: String::new(),
        language: String::new(),
        stars: 0,
        forks: 0,
        created_at: "2020-01-01T00:00:00Z".to_string(),
        updated_at: "2024-06-01T12:30:00Z".to_string(),
        private: false,
        fork: false,
        archived: false,
    }
}
