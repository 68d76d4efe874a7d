pub mod page;
pub mod run;
pub mod scan;

// Re-export common model types
pub use page::{ FetchedPage, LoadRating, PageDescriptor, PageOutcome, DEFAULT_PAGES };
pub use run::{ PageRecord, RunResult };
pub use scan::{ ImageInfo, Issue, ScanResult, VideoInfo };
