use log::{ info, warn };

use crate::cli::ui;
use crate::errors::{ SmokeError, SmokeResult };
use crate::implementations::html_scanner::scan_html;
use crate::models::page::{ FetchedPage, LoadRating, PageOutcome };
use crate::traits::page_fetcher::PageFetcher;

/// Tests one page at a time and prints its report.
pub struct PageTester<'a, F: PageFetcher> {
    fetcher: &'a F,
    max_issues_shown: usize,
}

impl<'a, F: PageFetcher> PageTester<'a, F> {
    pub fn new(fetcher: &'a F, max_issues_shown: usize) -> Self {
        Self { fetcher, max_issues_shown }
    }

    /// Fetch, time and scan `url`, printing the per-page report.
    ///
    /// Never fails: every error is printed as a single `ERROR:` line and
    /// turned into a failed outcome with zero load time.
    pub async fn test(&self, url: &str, label: &str) -> PageOutcome {
        ui::print_page_header(label, url);

        let spinner = ui::fetch_spinner(url);
        let fetched = self.fetcher.fetch_page(url).await;
        spinner.finish_and_clear();

        match fetched.and_then(|page| self.report(page)) {
            Ok(outcome) => {
                info!("{} passed in {:.2}s", label, outcome.load_time.as_secs_f64());
                outcome
            }
            Err(e) => {
                warn!("{} failed ({:?}): {}", label, e.kind(), e);
                ui::print_error(&e.to_string());
                PageOutcome::failed()
            }
        }
    }

    fn report(&self, page: FetchedPage) -> SmokeResult<PageOutcome> {
        ui::print_status_line(page.status);
        ui::print_load_time(page.load_time, LoadRating::from_load_time(page.load_time));

        let html = String::from_utf8(page.body).map_err(|e| SmokeError::Decode(e.to_string()))?;
        let scan = scan_html(&html);

        ui::print_page_statistics(&scan);
        ui::print_issues(&scan.issues, self.max_issues_shown);

        Ok(PageOutcome::passed(page.load_time))
    }
}
