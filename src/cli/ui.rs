use chrono::{ DateTime, Local };
use colored::*;
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;

use crate::models::page::{ LoadRating, PageDescriptor };
use crate::models::run::RunResult;
use crate::models::scan::{ Issue, ScanResult };

/// Width of the `=` rules framing each section
pub const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Print the run banner
pub fn print_banner(site_name: &str, started_at: DateTime<Local>) {
    println!("\n{}", rule());
    println!("{}", format!("  {} WEBSITE COMPREHENSIVE TEST SUITE", site_name.to_uppercase()).bold());
    println!("{}", rule());
    println!("Started: {}", started_at.format("%Y-%m-%d %H:%M:%S"));
}

/// Print the framed header that opens each page's report
pub fn print_page_header(label: &str, url: &str) {
    println!("\n{}", rule());
    println!("Testing: {}", label.bold());
    println!("URL: {}", url);
    println!("{}", rule());
}

/// Print an error message
pub fn print_error(message: &str) {
    println!("{} {}", "ERROR:".red().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

pub fn print_status_line(status: u16) {
    println!("Status Code: {}", status);
}

pub fn print_load_time(load_time: Duration, rating: LoadRating) {
    let label = format!("({})", rating);
    let label = match rating {
        LoadRating::Excellent => label.green(),
        LoadRating::Good => label.yellow(),
        LoadRating::Slow => label.red(),
    };
    println!("Load Time: {:.2}s {}", load_time.as_secs_f64(), label);
}

/// Print the per-category counts of a scan
pub fn print_page_statistics(scan: &ScanResult) {
    println!("\nPage Statistics:");
    println!("  - Images: {}", scan.images.len());
    println!("  - Links: {}", scan.links.len());
    println!("  - Videos: {}", scan.videos.len());
    println!("  - Forms: {}", scan.forms.len());
    println!("  - Buttons: {}", scan.buttons.len());
}

/// Print at most `limit` issues, or a clean bill of health
pub fn print_issues(issues: &[Issue], limit: usize) {
    if issues.is_empty() {
        println!("\n{}", "No Issues Found!".green());
        return;
    }

    println!("\n{}", format!("ISSUES FOUND ({}):", issues.len()).yellow().bold());
    for issue in issues.iter().take(limit) {
        println!("  - {}", issue);
    }
    if issues.len() > limit {
        println!("  ... and {} more", issues.len() - limit);
    }
}

/// Print the pass/fail table and verdict for a finished run
pub fn print_final_report(run: &RunResult) {
    println!("\n\n{}", rule());
    println!("{}", "FINAL REPORT".bold());
    println!("{}", rule());

    println!("\nTests Passed: {}/{}", run.passed(), run.total());
    println!("Average Load Time: {:.2}s", run.average_load_time().as_secs_f64());

    println!("\nPage Status:");
    for record in &run.records {
        let icon = if record.success { "PASS".green().bold() } else { "FAIL".red().bold() };
        println!("  [{}] {}", icon, record.label);
    }

    if run.all_passed() {
        println!("\n{}", "All tests passed! Site is ready for production.".green().bold());
    } else {
        println!("\n{}", "Some tests failed. Please review and fix issues.".red().bold());
    }

    println!("\n{}", rule());
}

/// Print the fixed page list with the URLs it resolves to
pub fn print_page_list(pages: &[PageDescriptor], base_url: &str) {
    println!("{}", format!("Pages tested against {}", base_url).bold());
    for page in pages {
        println!("  {:<10} {}", page.label, page.url(base_url));
    }
}

/// Spinner shown on stderr while a request is in flight.
///
/// Hidden when nobody is watching the terminal so piped output stays clean.
pub fn fetch_spinner(url: &str) -> ProgressBar {
    if !console::user_attended_stderr() {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching {}...", url));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
