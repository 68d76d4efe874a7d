mod models_tests;
mod page_tester_tests;

/// Initialize logging once for the whole test binary
pub(crate) fn setup() {
    // Logger already initialized by another test is fine
    let _ = env_logger::builder().is_test(true).try_init();
}
