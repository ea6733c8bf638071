// file: src/github/fetcher.rs
// description: single page fetch with status check, JSON decoding and Link header inspection
// reference: https://docs.github.com/en/rest/using-the-rest-api/using-pagination-in-the-rest-api

use crate::config::ApiConfig;
use crate::error::{Result, ScraperError};
use crate::github::http::{HttpRequest, HttpTransport};
use crate::models::Repository;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Immutable request settings shared by every page fetch.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub token: Option<String>,
    pub accept: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl ClientSettings {
    pub fn from_config(api: &ApiConfig) -> Self {
        Self {
            token: api.token.clone(),
            accept: api.accept.clone(),
            user_agent: api.user_agent.clone(),
            timeout: Duration::from_secs(api.timeout_secs),
        }
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Accept".to_string(), self.accept.clone()),
            ("User-Agent".to_string(), self.user_agent.clone()),
        ];

        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        headers
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::from_config(&ApiConfig::default())
    }
}

/// Records of one page and whether the API announced another one.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub repositories: Vec<Repository>,
    pub has_more: bool,
}

pub struct PageFetcher {
    transport: Arc<dyn HttpTransport>,
    settings: ClientSettings,
}

impl PageFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>, settings: ClientSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub async fn fetch_page(&self, url: &str) -> Result<PageResult> {
        debug!("GET {}", url);

        let response = self
            .transport
            .get(HttpRequest {
                url: url.to_string(),
                headers: self.settings.headers(),
            })
            .await?;

        if response.status != 200 {
            return Err(ScraperError::Remote {
                status: response.status,
                body: response.body_text(),
            });
        }

        let repositories = decode_repositories(&response.body)?;
        let has_more = response.header("link").is_some_and(has_next_page);

        debug!(
            "Decoded {} repositories (has_more: {})",
            repositories.len(),
            has_more
        );

        Ok(PageResult {
            repositories,
            has_more,
        })
    }
}

/// Decode a JSON array of repository records.
pub fn decode_repositories(body: &[u8]) -> Result<Vec<Repository>> {
    serde_json::from_slice(body).map_err(|e| ScraperError::Decode(e.to_string()))
}

/// True iff one of the comma separated `<url>; rel="..."` entries of a Link
/// header has the relation `next`.
///
/// `<https://api.github.com/user/1/repos?page=3>; rel="next", <...?page=5>; rel="last"`
pub fn has_next_page(link_header: &str) -> bool {
    link_header
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .any(|entry| link_relations(entry).any(|rel| rel == "next"))
}

// A rel value may hold several space separated relation types.
fn link_relations(entry: &str) -> impl Iterator<Item = &str> {
    entry
        .split(';')
        .skip(1)
        .filter_map(|param| {
            let (key, value) = param.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("rel")
                .then(|| value.trim().trim_matches('"'))
        })
        .flat_map(str::split_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::http::{HttpResponse, MockTransport};

    const URL: &str = "https://api.github.com/users/octocat/repos?page=1";

    fn fetcher(transport: &MockTransport, token: Option<&str>) -> PageFetcher {
        let settings = ClientSettings {
            token: token.map(str::to_string),
            ..ClientSettings::default()
        };
        PageFetcher::new(Arc::new(transport.clone()), settings)
    }

    #[test]
    fn test_has_next_page_full_header() {
        let header = r#"<https://api.github.com/user/9/repos?page=2>; rel="next", <https://api.github.com/user/9/repos?page=4>; rel="last""#;
        assert!(has_next_page(header));
    }

    #[test]
    fn test_has_next_page_prev_and_last_only() {
        let header = r#"<https://api.github.com/user/9/repos?page=3>; rel="prev", <https://api.github.com/user/9/repos?page=4>; rel="last""#;
        assert!(!has_next_page(header));
    }

    #[test]
    fn test_has_next_page_all_relations() {
        let header = r#"<https://x/?page=1>; rel="prev", <https://x/?page=3>; rel="next", <https://x/?page=4>; rel="last", <https://x/?page=1>; rel="first""#;
        assert!(has_next_page(header));
    }

    #[test]
    fn test_has_next_page_empty() {
        assert!(!has_next_page(""));
        assert!(!has_next_page("   "));
    }

    #[test]
    fn test_has_next_page_ignores_next_inside_url() {
        let header = r#"<https://x/?rel=next&page=2>; rel="prev""#;
        assert!(!has_next_page(header));
    }

    #[test]
    fn test_has_next_page_unquoted_and_spaced() {
        assert!(has_next_page("<https://x/?page=2> ; rel = next"));
    }

    #[tokio::test]
    async fn test_fetch_page_sends_headers_with_token() {
        let transport = MockTransport::new();
        transport.push_json(URL, "[]", None);

        fetcher(&transport, Some("ghp_secret"))
            .fetch_page(URL)
            .await
            .unwrap();

        let requests = transport.requests();
        let headers = &requests[0].headers;
        assert!(headers.contains(&(
            "Authorization".to_string(),
            "Bearer ghp_secret".to_string()
        )));
        assert!(headers.contains(&(
            "Accept".to_string(),
            "application/vnd.github.v3+json".to_string()
        )));
        assert!(headers.contains(&(
            "User-Agent".to_string(),
            "GitHub-Repo-Scraper/1.0".to_string()
        )));
    }

    #[tokio::test]
    async fn test_fetch_page_without_token_omits_authorization() {
        for token in [None, Some("")] {
            let transport = MockTransport::new();
            transport.push_json(URL, "[]", None);

            fetcher(&transport, token).fetch_page(URL).await.unwrap();

            let requests = transport.requests();
            assert!(requests[0].headers.iter().all(|(k, _)| k != "Authorization"));
        }
    }

    #[tokio::test]
    async fn test_fetch_page_reads_link_header() {
        let transport = MockTransport::new();
        transport.push_json(
            URL,
            "[]",
            Some(r#"<https://api.github.com/users/octocat/repos?page=2>; rel="next""#),
        );

        let page = fetcher(&transport, None).fetch_page(URL).await.unwrap();
        assert!(page.has_more);
        assert!(page.repositories.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_page_non_200_is_remote_error() {
        let transport = MockTransport::new();
        transport.push_response(
            URL,
            HttpResponse {
                status: 404,
                headers: Vec::new(),
                body: br#"{"message":"Not Found"}"#.to_vec(),
            },
        );

        let err = fetcher(&transport, None).fetch_page(URL).await.unwrap_err();
        match err {
            ScraperError::Remote { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, r#"{"message":"Not Found"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_malformed_body_is_decode_error() {
        let transport = MockTransport::new();
        transport.push_json(URL, r#"{"message":"not an array"}"#, None);

        let err = fetcher(&transport, None).fetch_page(URL).await.unwrap_err();
        assert!(matches!(err, ScraperError::Decode(_)));
    }
}
