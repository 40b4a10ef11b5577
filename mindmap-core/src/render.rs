// Text output for generated maps

use crate::model::{MapResult, Node};
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tree,
    Json,
    Diagram,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tree" | "text" => Some(OutputFormat::Tree),
            "json" => Some(OutputFormat::Json),
            "diagram" | "mermaid" => Some(OutputFormat::Diagram),
            _ => None,
        }
    }
}

pub fn render(map: &MapResult, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Tree => Ok(render_tree(map)),
        OutputFormat::Json => serde_json::to_string_pretty(map),
        OutputFormat::Diagram => {
            let mut out = map.diagram_text.clone();
            if !out.ends_with('\n') {
                out.push('\n');
            }
            Ok(out)
        }
    }
}

/// Flow-chart text for `nodes`: a `graph TD` header followed by one
/// `parent --> child` line per edge, in node-list order.
pub fn to_flowchart(nodes: &[Node]) -> String {
    let mut out = String::from("graph TD\n");

    for parent in nodes {
        for child_id in parent.child_ids() {
            let child_label = nodes
                .iter()
                .find(|n| &n.id == child_id)
                .map(|n| n.label.as_str())
                .unwrap_or(child_id);
            out.push_str(&format!(
                "    {}[\"{}\"] --> {}[\"{}\"]\n",
                parent.id,
                escape_label(&parent.label),
                child_id,
                escape_label(child_label)
            ));
        }
    }

    out
}

fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}

/// Box-drawing tree starting at the map's root.
///
/// Nodes unreachable from the root are listed afterwards; a child that was
/// already printed higher up is shown once more and not expanded again.
pub fn render_tree(map: &MapResult) -> String {
    let Some(root) = map.root().or_else(|| map.nodes.first()) else {
        return "  (empty)\n".to_string();
    };

    let mut out = String::new();
    let mut seen = HashSet::new();
    write_node(map, root, "", None, &mut seen, &mut out);

    let orphans: Vec<&Node> = map
        .nodes
        .iter()
        .filter(|n| !seen.contains(n.id.as_str()))
        .collect();
    if !orphans.is_empty() {
        out.push_str("\nUnreachable nodes:\n");
        for node in orphans {
            out.push_str(&format!("  - {} ({})\n", node.label, node.id));
        }
    }

    out
}

fn write_node<'a>(
    map: &'a MapResult,
    node: &'a Node,
    indent: &str,
    is_last: Option<bool>,
    seen: &mut HashSet<&'a str>,
    out: &mut String,
) {
    let (branch, child_indent) = match is_last {
        None => ("", String::new()),
        Some(true) => ("└── ", format!("{}    ", indent)),
        Some(false) => ("├── ", format!("{}│   ", indent)),
    };

    out.push_str(&format!("{}{}{}", indent, branch, node.label));
    if let Some(ref details) = node.details {
        out.push_str(&format!("  - {}", details));
    }
    out.push('\n');

    if !seen.insert(node.id.as_str()) {
        return;
    }

    let children = node.child_ids();
    for (i, child_id) in children.iter().enumerate() {
        let last = i == children.len() - 1;
        match map.node(child_id) {
            Some(child) => write_node(map, child, &child_indent, Some(last), seen, out),
            None => {
                let prefix = if last { "└── " } else { "├── " };
                out.push_str(&format!("{}{}? {} (missing)\n", child_indent, prefix, child_id));
            }
        }
    }
}

pub fn save_output(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
