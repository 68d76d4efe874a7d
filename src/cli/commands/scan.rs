use anyhow::{ anyhow, Result };
use std::fs;
use std::path::Path;

use crate::cli::ui;
use crate::implementations::html_scanner::scan_html;
use crate::models::scan::ScanResult;

/// Scan a local HTML file and print the same statistics a page run prints
pub fn execute(path: &Path, max_issues_shown: usize) -> Result<ScanResult> {
    let html = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return Err(anyhow!("Failed to read {}: {}", path.display(), e)),
    };

    ui::print_info(&format!("Scanning {}", path.display()));
    let scan = scan_html(&html);

    ui::print_page_statistics(&scan);
    ui::print_issues(&scan.issues, max_issues_shown);

    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_scan_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"<img src="a.png"><form action="#"></form>"##).unwrap();

        let scan = execute(file.path(), 10).unwrap();
        assert_eq!(scan.images.len(), 1);
        assert_eq!(scan.forms.len(), 1);
        assert_eq!(scan.issue_count(), 2);
    }

    #[test]
    fn test_scan_missing_file_errors() {
        let err = execute(Path::new("/nonexistent/page.html"), 10).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
