use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// What kind of text the user handed us
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputCategory {
    /// Any `http://` or `https://` address that is not a video link
    WebLink,
    /// A link to a known video platform
    VideoLink,
    /// Free-form text
    Prompt,
}

impl InputCategory {
    pub const ALL: [InputCategory; 3] = [
        InputCategory::WebLink,
        InputCategory::VideoLink,
        InputCategory::Prompt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputCategory::WebLink => "web_link",
            InputCategory::VideoLink => "video_link",
            InputCategory::Prompt => "prompt",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "web_link" | "web" | "url" => Some(InputCategory::WebLink),
            "video_link" | "video" => Some(InputCategory::VideoLink),
            "prompt" | "text" => Some(InputCategory::Prompt),
            _ => None,
        }
    }

    /// Hint shown next to the input box once the category is known
    pub fn placeholder(&self) -> &'static str {
        match self {
            InputCategory::WebLink => "Web page detected - its content will be summarized into a map",
            InputCategory::VideoLink => "Video link detected - the transcript will be mapped",
            InputCategory::Prompt => "Describe a topic, meeting or lesson to map out",
        }
    }
}

impl fmt::Display for InputCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            details: None,
            children: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = Some(children.into_iter().map(Into::into).collect());
        self
    }

    pub fn child_ids(&self) -> &[String] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// A generated mind map: the node list plus a flow-chart rendering of it.
///
/// Missing fields in a decoded body fall back to empty values. `diagram_text`
/// is not kept in sync with `nodes` after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapResult {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default, rename = "diagramText")]
    pub diagram_text: String,
}

impl MapResult {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// First node that no other node lists as a child
    pub fn root(&self) -> Option<&Node> {
        let referenced: HashSet<&str> = self
            .nodes
            .iter()
            .flat_map(|n| n.child_ids().iter().map(String::as_str))
            .collect();

        self.nodes.iter().find(|n| !referenced.contains(n.id.as_str()))
    }

    /// `(parent, child)` pairs where the child id has no node in this map
    pub fn dangling_children(&self) -> Vec<(String, String)> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();

        self.nodes
            .iter()
            .flat_map(|parent| {
                parent
                    .child_ids()
                    .iter()
                    .filter(|child| !ids.contains(child.as_str()))
                    .map(|child| (parent.id.clone(), child.clone()))
            })
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.child_ids().len()).sum()
    }
}
