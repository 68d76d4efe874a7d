pub mod page_fetcher;

// Re-export traits
pub use page_fetcher::PageFetcher;
