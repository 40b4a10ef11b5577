// Category -> workflow address table

use crate::error::Result;
use crate::model::InputCategory;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7860/api/v1/run/";

/// Fixed mapping from input category to the workflow that handles it.
///
/// Built once at startup and handed to whoever needs it; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointTable {
    pub web_link: Url,
    pub video_link: Url,
    pub prompt: Url,
}

impl EndpointTable {
    pub fn new(web_link: Url, video_link: Url, prompt: Url) -> Self {
        Self {
            web_link,
            video_link,
            prompt,
        }
    }

    /// Point all three workflows at `base`, using the category slug as the
    /// final path segment.
    pub fn from_base(base: &Url) -> std::result::Result<Self, url::ParseError> {
        Ok(Self {
            web_link: base.join("web-link")?,
            video_link: base.join("video-link")?,
            prompt: base.join("prompt")?,
        })
    }

    pub fn resolve(&self, category: InputCategory) -> &Url {
        match category {
            InputCategory::WebLink => &self.web_link,
            InputCategory::VideoLink => &self.video_link,
            InputCategory::Prompt => &self.prompt,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (InputCategory, &Url)> {
        InputCategory::ALL.into_iter().map(|c| (c, self.resolve(c)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading endpoint table from {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the table at `path`, or the built-in defaults when no file exists
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No endpoint table at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl Default for EndpointTable {
    fn default() -> Self {
        let base = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        Self::from_base(&base).expect("category slugs join onto the default base")
    }
}
