//! sitesmoke - smoke tests for a locally served website.
//!
//! A run fetches a fixed list of pages, times each load, scans the markup for
//! missing alt text, unmuted autoplay video and placeholder form actions, and
//! prints a report.

pub mod cli;
pub mod config;
pub mod errors;
pub mod implementations;
pub mod models;
pub mod traits;
#[cfg(test)]
mod tests;

// Re-export core components
pub use config::{ ConfigError, ConfigOverrides, HttpSettings, SmokeConfig };
pub use errors::{ FailureKind, SmokeError, SmokeResult };
pub use implementations::{ scan_html, HttpPageFetcher, PageTester };
pub use models::{
    page::{ FetchedPage, LoadRating, PageDescriptor, PageOutcome, DEFAULT_PAGES },
    run::{ PageRecord, RunResult },
    scan::{ ImageInfo, Issue, ScanResult, VideoInfo },
};
pub use traits::PageFetcher;
