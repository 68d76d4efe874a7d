use std::fmt;

/// An `<img>` start tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub src: String,
    pub alt: Option<String>,
}

/// A `<video>` start tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo {
    pub src: String,
    pub autoplay: bool,
    pub muted: bool,
}

/// A structural or accessibility concern found in a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingAltText { src: String },
    UnmutedAutoplay { src: String },
    PlaceholderFormAction,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingAltText { src } => write!(f, "Image missing alt text: {}", src),
            Issue::UnmutedAutoplay { src } => write!(f, "Video has autoplay but not muted: {}", src),
            Issue::PlaceholderFormAction => write!(f, "Form has no action or placeholder action"),
        }
    }
}

/// Everything discovered in one pass over a page's start tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub images: Vec<ImageInfo>,
    pub links: Vec<String>,
    pub videos: Vec<VideoInfo>,
    pub forms: Vec<String>,
    pub buttons: Vec<String>,
    pub issues: Vec<Issue>,
}

/// Look up an attribute value; with duplicate names the last one wins.
fn attr<'a>(attrs: &[(&'a str, &'a str)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .rev()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

fn has_attr(attrs: &[(&str, &str)], name: &str) -> bool {
    attrs.iter().any(|(key, _)| *key == name)
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one start tag. `tag` and attribute names are expected in
    /// lowercase; unrecognised tags are ignored.
    pub fn handle_start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        match tag {
            "img" => {
                let src = attr(attrs, "src").unwrap_or("").to_string();
                let alt = attr(attrs, "alt").map(str::to_string);
                if alt.as_deref().map_or(true, str::is_empty) {
                    self.issues.push(Issue::MissingAltText { src: src.clone() });
                }
                self.images.push(ImageInfo { src, alt });
            }
            "a" => {
                self.links.push(attr(attrs, "href").unwrap_or("").to_string());
            }
            "video" => {
                let src = attr(attrs, "src").unwrap_or("").to_string();
                let autoplay = has_attr(attrs, "autoplay");
                let muted = has_attr(attrs, "muted");
                if autoplay && !muted {
                    self.issues.push(Issue::UnmutedAutoplay { src: src.clone() });
                }
                self.videos.push(VideoInfo { src, autoplay, muted });
            }
            "form" => {
                let action = attr(attrs, "action").unwrap_or("");
                if action.is_empty() || action == "#" {
                    self.issues.push(Issue::PlaceholderFormAction);
                }
                self.forms.push(action.to_string());
            }
            "button" => {
                self.buttons.push(attr(attrs, "type").unwrap_or("button").to_string());
            }
            "input" if attr(attrs, "type") == Some("submit") => {
                self.buttons.push("submit".to_string());
            }
            _ => {}
        }
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}
