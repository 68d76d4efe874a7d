use std::time::Duration;

use crate::models::page::{ LoadRating, PageDescriptor, PageOutcome, DEFAULT_PAGES };
use crate::models::run::RunResult;

#[test]
fn test_load_rating_tiers() {
    assert_eq!(LoadRating::from_load_time(Duration::from_millis(120)), LoadRating::Excellent);
    assert_eq!(LoadRating::from_load_time(Duration::from_millis(1999)), LoadRating::Excellent);
    assert_eq!(LoadRating::from_load_time(Duration::from_secs(2)), LoadRating::Good);
    assert_eq!(LoadRating::from_load_time(Duration::from_millis(4999)), LoadRating::Good);
    assert_eq!(LoadRating::from_load_time(Duration::from_secs(5)), LoadRating::Slow);
    assert_eq!(LoadRating::Slow.to_string(), "Slow - needs optimization");
}

#[test]
fn test_default_pages_are_fixed() {
    let labels: Vec<&str> = DEFAULT_PAGES.iter().map(|p| p.label).collect();
    assert_eq!(labels, vec!["Home", "Services", "Solutions", "Contact", "Projects"]);
    assert_eq!(DEFAULT_PAGES[0].path, "index.html");
}

#[test]
fn test_page_url_joins_base() {
    let page = PageDescriptor { label: "Home", path: "index.html" };
    assert_eq!(page.url("http://localhost:8000"), "http://localhost:8000/index.html");
    assert_eq!(page.url("http://localhost:8000/"), "http://localhost:8000/index.html");
}

#[test]
fn test_average_counts_failed_pages() {
    let mut run = RunResult::new();
    for label in ["Home", "Services", "Solutions", "Projects"] {
        run.record(label, &PageOutcome::passed(Duration::from_secs(1)));
    }
    run.record("Contact", &PageOutcome::failed());

    assert_eq!(run.passed(), 4);
    assert_eq!(run.total(), 5);
    assert_eq!(run.total_load_time, Duration::from_secs(4));
    assert_eq!(run.average_load_time(), Duration::from_millis(800));
    assert!(!run.all_passed());
}

#[test]
fn test_empty_run_average_is_zero() {
    let run = RunResult::new();
    assert_eq!(run.average_load_time(), Duration::ZERO);
    assert!(run.all_passed());
}

#[test]
fn test_failed_outcome_has_zero_load_time() {
    let outcome = PageOutcome::failed();
    assert!(!outcome.success);
    assert_eq!(outcome.load_time, Duration::ZERO);
}
