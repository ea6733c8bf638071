// file: src/pipeline/summary.rs
// description: aggregate counts and language histogram for console display
// reference: internal pipeline stage

use crate::models::Repository;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositorySummary {
    pub total: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    pub private_count: usize,
    pub fork_count: usize,
    pub archived_count: usize,
    pub languages: HashMap<String, usize>,
}

impl RepositorySummary {
    pub fn from_repositories(repos: &[Repository]) -> Self {
        let mut summary = Self {
            total: repos.len(),
            ..Self::default()
        };

        for repo in repos {
            summary.total_stars += repo.stars;
            summary.total_forks += repo.forks;
            summary.private_count += usize::from(repo.private);
            summary.fork_count += usize::from(repo.fork);
            summary.archived_count += usize::from(repo.archived);

            if repo.has_language() {
                *summary.languages.entry(repo.language.clone()).or_insert(0) += 1;
            }
        }

        summary
    }

    /// Languages by descending count, ties broken by name.
    pub fn top_languages(&self) -> Vec<(&str, usize)> {
        let mut languages: Vec<(&str, usize)> = self
            .languages
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        languages.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        languages
    }

    pub fn format(&self, target_name: &str) -> String {
        let mut output = format!(
            "=== Repository Summary for {} ===\nTotal repositories found: {}\n",
            target_name, self.total
        );

        if self.total == 0 {
            return output;
        }

        output.push_str(&format!(
            "Total stars: {}\n\
             Total forks: {}\n\
             Private repositories: {}\n\
             Forked repositories: {}\n\
             Archived repositories: {}\n",
            self.total_stars,
            self.total_forks,
            self.private_count,
            self.fork_count,
            self.archived_count
        ));

        if !self.languages.is_empty() {
            output.push_str("\nTop languages:\n");
            for (language, count) in self.top_languages() {
                output.push_str(&format!("  {}: {} repositories\n", language, count));
            }
        }

        output
    }
}
