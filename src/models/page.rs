use std::fmt;
use std::time::Duration;

/// One fixed unit of work: a label and the page path relative to the base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub label: &'static str,
    pub path: &'static str,
}

/// The pages every run tests, in order.
pub const DEFAULT_PAGES: [PageDescriptor; 5] = [
    PageDescriptor { label: "Home", path: "index.html" },
    PageDescriptor { label: "Services", path: "services.html" },
    PageDescriptor { label: "Solutions", path: "solutions.html" },
    PageDescriptor { label: "Contact", path: "contact.html" },
    PageDescriptor { label: "Projects", path: "projects.html" },
];

impl PageDescriptor {
    /// Full URL of this page under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path)
    }
}

/// A successful response as seen by the transport
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    /// Time from sending the request until the response head arrived
    pub load_time: Duration,
    pub body: Vec<u8>,
}

/// What the page tester reports back for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOutcome {
    pub success: bool,
    pub load_time: Duration,
}

impl PageOutcome {
    pub fn passed(load_time: Duration) -> Self {
        Self { success: true, load_time }
    }

    /// Failed pages always carry a zero load time.
    pub fn failed() -> Self {
        Self { success: false, load_time: Duration::ZERO }
    }
}

/// Qualitative label for a load time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRating {
    Excellent,
    Good,
    Slow,
}

impl LoadRating {
    pub fn from_load_time(load_time: Duration) -> Self {
        let secs = load_time.as_secs_f64();
        if secs < 2.0 {
            LoadRating::Excellent
        } else if secs < 5.0 {
            LoadRating::Good
        } else {
            LoadRating::Slow
        }
    }
}

impl fmt::Display for LoadRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadRating::Excellent => write!(f, "Excellent"),
            LoadRating::Good => write!(f, "Good"),
            LoadRating::Slow => write!(f, "Slow - needs optimization"),
        }
    }
}
