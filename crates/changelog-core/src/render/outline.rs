use crate::errors::Result;
use crate::host::Host;
use crate::model::{Node, NodeId, Paint};

/// Render a document subtree as an indented text outline
///
/// One line per node: kind, name, a lock marker, and for text nodes the
/// quoted characters plus any hyperlink target.
///
/// # Errors
/// * `Host(NodeNotFound)` - If `node_id` doesn't exist
pub fn render_outline<H: Host + ?Sized>(host: &H, node_id: &NodeId) -> Result<String> {
    let node = host.snapshot(node_id)?;
    Ok(render_node_outline(&node))
}

/// Render a node value as an indented text outline
pub fn render_node_outline(node: &Node) -> String {
    let mut output = String::new();
    write_node(&mut output, node, 0);
    output
}

fn write_node(output: &mut String, node: &Node, depth: usize) {
    output.push_str(&"  ".repeat(depth));
    output.push_str(&format!("{} \"{}\"", node.kind.as_str(), node.name));

    if node.locked {
        output.push_str(" [locked]");
    }
    if let Some(text) = &node.text {
        output.push_str(&format!(": {:?}", text.characters));
        if let Some(url) = &text.hyperlink {
            output.push_str(&format!(" -> {}", url));
        }
    }
    if node
        .style
        .fills
        .iter()
        .any(|fill| matches!(fill, Paint::Image { .. }))
    {
        output.push_str(" (image)");
    }
    output.push('\n');

    for child in &node.children {
        write_node(output, child, depth + 1);
    }
}
