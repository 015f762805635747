use crate::types::{Id, Node, NodeId};

/// Assign ids to any `Id::UNSET` nodes in the subtree, drawing from `next`.
///
/// `next` persists across calls (the page owns it) so appended fragments can
/// never reuse an id that is already live elsewhere in the tree.
pub fn assign_node_ids(root: &mut Node, next: &mut NodeId) {
    if root.id() == Id::UNSET {
        root.set_id(Id(*next));
        *next = next.wrapping_add(1);
    }
    if let Some(children) = root.children_mut() {
        for child in children {
            assign_node_ids(child, next);
        }
    }
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    for child in node.children()? {
        if let Some(found) = find_node_by_id(child, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    for child in node.children_mut()? {
        if let Some(found) = find_node_by_id_mut(child, id) {
            return Some(found);
        }
    }
    None
}

/// First element whose `id` attribute equals `elem_id` (the `#…` selector).
pub fn find_by_element_id<'a>(node: &'a Node, elem_id: &str) -> Option<&'a Node> {
    find_first(node, &|n| n.attr("id") == Some(elem_id))
}

/// First element whose `data-label` attribute equals `label`.
pub fn find_by_label<'a>(node: &'a Node, label: &str) -> Option<&'a Node> {
    find_first(node, &|n| n.attr("data-label") == Some(label))
}

/// Ids of every element carrying `token` in its `class` list, document order.
pub fn collect_by_class(node: &Node, token: &str, out: &mut Vec<Id>) {
    if node.has_class_token(token) {
        out.push(node.id());
    }
    let Some(children) = node.children() else {
        return;
    };
    for child in children {
        collect_by_class(child, token, out);
    }
}

/// Nearest ancestor-or-self of `target` carrying `token` in its `class` list
/// (the `closest()` equivalent).
pub fn ancestor_with_class(root: &Node, target: Id, token: &str) -> Option<Id> {
    fn walk(node: &Node, target: Id, token: &str, nearest: Option<Id>) -> Option<Option<Id>> {
        let nearest = if node.has_class_token(token) {
            Some(node.id())
        } else {
            nearest
        };
        if node.id() == target {
            return Some(nearest);
        }
        for child in node.children()? {
            if let Some(found) = walk(child, target, token, nearest) {
                return Some(found);
            }
        }
        None
    }
    walk(root, target, token, None)?
}

/// Concatenated text of all descendant text nodes, document order.
pub fn text_content(node: &Node, out: &mut String) {
    match node {
        Node::Text { text, .. } => out.push_str(text),
        Node::Document { children, .. } | Node::Element { children, .. } => {
            for child in children {
                text_content(child, out);
            }
        }
        Node::Comment { .. } => {}
    }
}

fn find_first<'a>(node: &'a Node, pred: &dyn Fn(&Node) -> bool) -> Option<&'a Node> {
    if pred(node) {
        return Some(node);
    }
    for child in node.children()? {
        if let Some(found) = find_first(child, pred) {
            return Some(found);
        }
    }
    None
}
