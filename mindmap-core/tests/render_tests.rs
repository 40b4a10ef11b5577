// Tests for map output formats

use mindmap_core::mock::generate_mock;
use mindmap_core::model::{MapResult, Node};
use mindmap_core::render::{OutputFormat, render, render_tree, save_output, to_flowchart};
use tempfile::NamedTempFile;

// ============================================================================
// Output Format Tests
// ============================================================================

#[test]
fn test_output_format_from_str() {
    assert_eq!(OutputFormat::from_str("tree"), Some(OutputFormat::Tree));
    assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_str("mermaid"), Some(OutputFormat::Diagram));
    assert_eq!(OutputFormat::from_str("csv"), None);
}

#[test]
fn test_render_json_uses_wire_names() {
    let map = generate_mock("topic");
    let json = render(&map, OutputFormat::Json).unwrap();

    assert!(json.contains("\"diagramText\""));
    let parsed: MapResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, map);
}

#[test]
fn test_render_diagram_is_verbatim() {
    let map = generate_mock("topic");
    let out = render(&map, OutputFormat::Diagram).unwrap();
    assert_eq!(out, map.diagram_text);
}

#[test]
fn test_render_diagram_adds_trailing_newline() {
    let map = MapResult {
        nodes: vec![],
        diagram_text: "graph TD".to_string(),
    };
    assert_eq!(render(&map, OutputFormat::Diagram).unwrap(), "graph TD\n");
}

// ============================================================================
// Tree Tests
// ============================================================================

#[test]
fn test_tree_of_mock_map() {
    let tree = render_tree(&generate_mock("Hi"));
    let lines: Vec<&str> = tree.lines().collect();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "Main Concept  - Main concept derived from: Hi...");
    assert!(lines[1].starts_with("├── Core Principles"));
    assert!(lines[2].starts_with("│   ├── Definition"));
    assert!(lines[3].starts_with("│   └── Key Components"));
    assert!(lines[7].starts_with("└── Challenges & Considerations"));
    assert!(lines[9].starts_with("    └── Future Directions"));
}

#[test]
fn test_tree_empty_map() {
    assert_eq!(render_tree(&MapResult::default()), "  (empty)\n");
}

#[test]
fn test_tree_marks_missing_children() {
    let map = MapResult {
        nodes: vec![Node::new("a", "A").with_children(["ghost"])],
        diagram_text: String::new(),
    };
    let tree = render_tree(&map);
    assert!(tree.contains("└── ? ghost (missing)"));
}

#[test]
fn test_tree_survives_cycles() {
    let map = MapResult {
        nodes: vec![
            Node::new("a", "A").with_children(["b"]),
            Node::new("b", "B").with_children(["a"]),
        ],
        diagram_text: String::new(),
    };
    // No unreferenced node here, so the first node is used as root
    let tree = render_tree(&map);
    assert_eq!(tree, "A\n└── B\n    └── A\n");
}

#[test]
fn test_tree_lists_unreachable_nodes() {
    let map = MapResult {
        nodes: vec![
            Node::new("a", "A"),
            Node::new("x", "X").with_children(["y"]),
            Node::new("y", "Y").with_children(["x"]),
        ],
        diagram_text: String::new(),
    };
    let tree = render_tree(&map);
    assert!(tree.contains("Unreachable nodes:"));
    assert!(tree.contains("  - X (x)"));
    assert!(tree.contains("  - Y (y)"));
}

// ============================================================================
// Flowchart Tests
// ============================================================================

#[test]
fn test_flowchart_escapes_quotes() {
    let nodes = vec![
        Node::new("a", "Say \"hi\"").with_children(["b"]),
        Node::new("b", "B"),
    ];
    assert_eq!(
        to_flowchart(&nodes),
        "graph TD\n    a[\"Say #quot;hi#quot;\"] --> b[\"B\"]\n"
    );
}

#[test]
fn test_flowchart_without_edges() {
    assert_eq!(to_flowchart(&[Node::new("solo", "Solo")]), "graph TD\n");
}

#[test]
fn test_save_output() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new()?;
    save_output("graph TD\n", file.path())?;
    assert_eq!(std::fs::read_to_string(file.path())?, "graph TD\n");
    Ok(())
}
