use chrono::Local;
use log::{ debug, info };

use crate::cli::ui;
use crate::config::SmokeConfig;
use crate::implementations::page_tester::PageTester;
use crate::models::page::DEFAULT_PAGES;
use crate::models::run::RunResult;
use crate::traits::page_fetcher::PageFetcher;

/// Test every page in order and print the final report.
///
/// Pages are tested one after another with `config.delay()` between them
/// (not after the last one). Page failures are recorded, never propagated.
pub async fn execute<F: PageFetcher>(fetcher: &F, config: &SmokeConfig) -> RunResult {
    ui::print_banner(&config.site_name, Local::now());

    let tester = PageTester::new(fetcher, config.max_issues_shown);
    let delay = config.delay();
    let mut run = RunResult::new();

    for (index, page) in DEFAULT_PAGES.iter().enumerate() {
        let url = page.url(&config.base_url);
        let outcome = tester.test(&url, page.label).await;
        run.record(page.label, &outcome);

        if index + 1 < DEFAULT_PAGES.len() && !delay.is_zero() {
            debug!("Sleeping {:?} before next page", delay);
            tokio::time::sleep(delay).await;
        }
    }

    info!("Run finished: {}/{} pages passed", run.passed(), run.total());
    ui::print_final_report(&run);

    run
}
