// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for paginated fetching
// reference: uses indicatif for the spinner and tracks page metrics

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct FetchStats {
    pub pages_fetched: usize,
    pub repositories_fetched: usize,
    pub duration: Duration,
}

impl FetchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repositories_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.repositories_fetched as f64 / secs
    }

    pub fn average_page_size(&self) -> f64 {
        if self.pages_fetched == 0 {
            return 0.0;
        }
        self.repositories_fetched as f64 / self.pages_fetched as f64
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    pages_fetched: AtomicUsize,
    repositories_fetched: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(colored: bool) -> Self {
        Self::from_bar(create_spinner(colored))
    }

    /// Tracks counters without drawing anything.
    pub fn hidden() -> Self {
        Self::from_bar(ProgressBar::hidden())
    }

    fn from_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            pages_fetched: AtomicUsize::new(0),
            repositories_fetched: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn start_page(&self, page: u32) {
        self.bar.set_message(format!(
            "Fetching page {} ({} repositories so far)",
            page,
            self.repositories_fetched.load(Ordering::SeqCst)
        ));
    }

    pub fn page_done(&self, repositories: usize) {
        self.pages_fetched.fetch_add(1, Ordering::SeqCst);
        self.repositories_fetched
            .fetch_add(repositories, Ordering::SeqCst);
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        let stats = self.get_stats();
        self.bar.finish_with_message(format!(
            "Fetched {} repositories in {} pages",
            stats.repositories_fetched, stats.pages_fetched
        ));
    }

    pub fn abandon(&self) {
        self.bar.abandon_with_message("Fetch failed");
    }

    pub fn get_stats(&self) -> FetchStats {
        FetchStats {
            pages_fetched: self.pages_fetched.load(Ordering::SeqCst),
            repositories_fetched: self.repositories_fetched.load(Ordering::SeqCst),
            duration: self.start_time.elapsed(),
        }
    }
}

fn create_spinner(colored: bool) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] {msg}"
    } else {
        "{spinner} [{elapsed_precise}] {msg}"
    };
    bar.set_style(
        ProgressStyle::default_spinner()
            .template(template)
            .expect("Failed to create spinner template"),
    );
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_stats_calculations() {
        let stats = FetchStats {
            pages_fetched: 4,
            repositories_fetched: 350,
            duration: Duration::from_secs(5),
        };

        assert_eq!(stats.repositories_per_second(), 70.0);
        assert_eq!(stats.average_page_size(), 87.5);
    }

    #[test]
    fn test_fetch_stats_zero_values() {
        let stats = FetchStats::new();
        assert_eq!(stats.repositories_per_second(), 0.0);
        assert_eq!(stats.average_page_size(), 0.0);
    }

    #[test]
    fn test_progress_tracker_counts_pages() {
        let tracker = ProgressTracker::hidden();

        tracker.start_page(1);
        tracker.page_done(100);
        tracker.start_page(2);
        tracker.page_done(42);
        tracker.finish();

        let stats = tracker.get_stats();
        assert_eq!(stats.pages_fetched, 2);
        assert_eq!(stats.repositories_fetched, 142);
    }
}
