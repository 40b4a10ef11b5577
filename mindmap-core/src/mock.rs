// Deterministic stand-in map used when the workflow service can't answer

use crate::model::{MapResult, Node};
use crate::render::to_flowchart;

/// How many characters of the input end up in the root node's details
pub const ROOT_EXCERPT_CHARS: usize = 50;

const BRANCHES: [(&str, &str, &str); 3] = [
    (
        "branch1",
        "Core Principles",
        "The fundamental ideas everything else builds on",
    ),
    (
        "branch2",
        "Practical Applications",
        "Where and how the concept is put to use",
    ),
    (
        "branch3",
        "Challenges & Considerations",
        "Limitations, risks and open questions",
    ),
];

const LEAVES: [(&str, &str, &str); 6] = [
    ("sub1", "Definition", "What the concept is and what it is not"),
    ("sub2", "Key Components", "The building blocks that make it work"),
    ("sub3", "Real-World Examples", "Concrete cases that illustrate the idea"),
    ("sub4", "Best Practices", "Approaches that tend to work well"),
    ("sub5", "Common Pitfalls", "Mistakes to watch out for"),
    ("sub6", "Future Directions", "Where the topic is heading next"),
];

/// Build the fixed ten-node fallback map for `input`.
///
/// Only the root details depend on the input: its first
/// [`ROOT_EXCERPT_CHARS`] characters followed by `...`. The marker is
/// appended even when nothing was cut off.
pub fn generate_mock(input: &str) -> MapResult {
    let excerpt: String = input.chars().take(ROOT_EXCERPT_CHARS).collect();

    let root = Node::new("root", "Main Concept")
        .with_details(format!("Main concept derived from: {}...", excerpt))
        .with_children(BRANCHES.iter().map(|(id, _, _)| *id));

    let mut nodes = Vec::with_capacity(1 + BRANCHES.len() + LEAVES.len());
    nodes.push(root);

    for (i, (id, label, details)) in BRANCHES.iter().enumerate() {
        let leaves = &LEAVES[i * 2..i * 2 + 2];
        nodes.push(
            Node::new(*id, *label)
                .with_details(*details)
                .with_children(leaves.iter().map(|(leaf_id, _, _)| *leaf_id)),
        );
    }

    for (id, label, details) in LEAVES {
        nodes.push(Node::new(id, label).with_details(details));
    }

    let diagram_text = to_flowchart(&nodes);
    MapResult {
        nodes,
        diagram_text,
    }
}
