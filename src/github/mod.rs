// file: src/github/mod.rs
// description: GitHub REST API access module exports
// reference: internal module structure

pub mod collector;
pub mod fetcher;
pub mod http;

pub use collector::PaginatingCollector;
pub use fetcher::{ClientSettings, PageFetcher, PageResult, decode_repositories, has_next_page};
pub use http::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
