use crate::cli::ui;
use crate::config::SmokeConfig;
use crate::models::page::DEFAULT_PAGES;

pub fn execute(config: &SmokeConfig) {
    ui::print_page_list(&DEFAULT_PAGES, &config.base_url);
}
