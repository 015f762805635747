use crate::types::Node;
use std::fmt::Write;

/// Indented one-line-per-node outline of a subtree, capped at `cap` nodes.
///
/// Elements show their `id`/`class` attributes and `data-label` when present;
/// text is trimmed and truncated. Intended for logs and the demo driver, not
/// for serialization.
pub fn outline(root: &Node, cap: usize) -> Vec<String> {
    fn walk(node: &Node, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let indent = "  ".repeat(depth);
        match node {
            Node::Document { children, .. } => {
                out.push(format!("{indent}#document"));
                for child in children {
                    walk(child, depth + 1, out, left);
                }
            }
            Node::Element {
                name,
                attributes,
                children,
                ..
            } => {
                let mut line = format!("{indent}<{name}");
                for key in ["id", "class", "data-label"] {
                    if let Some(value) = attributes
                        .iter()
                        .find(|(k, _)| k.eq_ignore_ascii_case(key))
                        .and_then(|(_, v)| v.as_deref())
                        .filter(|v| !v.is_empty())
                    {
                        let _ = write!(&mut line, r#" {key}="{value}""#);
                    }
                }
                line.push('>');
                out.push(line);
                for child in children {
                    walk(child, depth + 1, out, left);
                }
            }
            Node::Text { text, .. } => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    *left += 1; // whitespace-only text does not spend the cap
                    return;
                }
                let show = clip(trimmed, 40);
                out.push(format!("{indent}\"{show}\""));
            }
            Node::Comment { text, .. } => {
                let show = clip(text.trim(), 40);
                out.push(format!("{indent}<!-- {show} -->"));
            }
        }
    }

    fn clip(s: &str, max_chars: usize) -> String {
        match s.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}…", &s[..cut]),
            None => s.to_string(),
        }
    }

    let mut out = Vec::new();
    let mut left = cap;
    walk(root, 0, &mut out, &mut left);
    out
}
