// file: src/pipeline/filter.rs
// description: visibility and provenance filtering of collected repositories
// reference: internal pipeline stage

use crate::config::FilterConfig;
use crate::models::Repository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryFilter {
    pub include_private: bool,
    pub include_forks: bool,
    pub include_archived: bool,
}

impl RepositoryFilter {
    pub fn new(include_private: bool, include_forks: bool, include_archived: bool) -> Self {
        Self {
            include_private,
            include_forks,
            include_archived,
        }
    }

    /// Keeps everything.
    pub fn all() -> Self {
        Self::new(true, true, true)
    }

    pub fn matches(&self, repo: &Repository) -> bool {
        (self.include_private || !repo.private)
            && (self.include_forks || !repo.fork)
            && (self.include_archived || !repo.archived)
    }

    /// Matching repositories in their original order.
    pub fn apply(&self, repos: &[Repository]) -> Vec<Repository> {
        repos
            .iter()
            .filter(|repo| self.matches(repo))
            .cloned()
            .collect()
    }
}

impl Default for RepositoryFilter {
    fn default() -> Self {
        Self::from(&FilterConfig::default())
    }
}

impl From<&FilterConfig> for RepositoryFilter {
    fn from(config: &FilterConfig) -> Self {
        Self::new(
            config.include_private,
            config.include_forks,
            config.include_archived,
        )
    }
}

pub fn filter_repositories(
    repos: &[Repository],
    include_private: bool,
    include_forks: bool,
    include_archived: bool,
) -> Vec<Repository> {
    RepositoryFilter::new(include_private, include_forks, include_archived).apply(repos)
}
