// Pattern-based input classification

use crate::model::InputCategory;
use regex::Regex;
use std::sync::LazyLock;

/// Hosts whose links are treated as video rather than generic web pages
pub const VIDEO_HOSTS: [&str; 3] = ["youtube.com", "youtu.be", "vimeo.com"];

static VIDEO_RE: LazyLock<Regex> = LazyLock::new(|| {
    let hosts = VIDEO_HOSTS
        .iter()
        .map(|h| regex::escape(h))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^(https?://)?(www\.)?({})/.+$", hosts)).unwrap()
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Classify raw user input.
///
/// Video links are also generic URLs, so the video pattern must be tried
/// first.
pub fn classify(input: &str) -> InputCategory {
    if VIDEO_RE.is_match(input) {
        InputCategory::VideoLink
    } else if URL_RE.is_match(input) {
        InputCategory::WebLink
    } else {
        InputCategory::Prompt
    }
}

pub fn is_video_link(input: &str) -> bool {
    VIDEO_RE.is_match(input)
}

pub fn is_web_link(input: &str) -> bool {
    URL_RE.is_match(input)
}
