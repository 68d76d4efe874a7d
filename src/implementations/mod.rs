pub mod html_scanner;
pub mod http_fetcher;
pub mod page_tester;

pub use html_scanner::scan_html;
pub use http_fetcher::HttpPageFetcher;
pub use page_tester::PageTester;
