use crate::builder::build_fragment;
use crate::tokenizer::tokenize;
use crate::traverse::{assign_node_ids, find_node_by_id, find_node_by_id_mut};
use crate::types::{Id, Node, NodeId};

#[derive(Debug, PartialEq, Eq)]
pub enum PageError {
    MissingNode(Id),
    NotAnElement(Id),
}

/// An owned page tree plus its id allocator.
///
/// Invariants:
/// - Every attached node has a non-`UNSET` id, unique for the page's lifetime.
/// - Removed subtree ids are never reissued; lookups for them simply miss.
/// - The root is always a `Node::Document`.
pub struct Page {
    root: Node,
    next_id: NodeId,
}

impl Page {
    /// Parse `html` as the page body. The fragment roots become the document's
    /// children.
    pub fn from_html(html: &str) -> Page {
        let mut root = Node::Document {
            id: Id::UNSET,
            children: build_fragment(&tokenize(html)),
        };
        let mut next_id = 1;
        assign_node_ids(&mut root, &mut next_id);
        Page { root, next_id }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn find(&self, id: Id) -> Option<&Node> {
        find_node_by_id(&self.root, id)
    }

    /// Parse `html` and append its roots as the last children of `container`.
    /// Returns the ids of the appended roots, in order.
    pub fn append_fragment(&mut self, container: Id, html: &str) -> Result<Vec<Id>, PageError> {
        let mut fragment = build_fragment(&tokenize(html));
        for node in &mut fragment {
            assign_node_ids(node, &mut self.next_id);
        }
        let appended: Vec<Id> = fragment.iter().map(Node::id).collect();

        let target =
            find_node_by_id_mut(&mut self.root, container).ok_or(PageError::MissingNode(container))?;
        let children = target.children_mut().ok_or(PageError::NotAnElement(container))?;
        children.extend(fragment);
        Ok(appended)
    }

    /// Replace the element's children with a single text node holding `text`.
    pub fn set_text_content(&mut self, id: Id, text: &str) -> Result<(), PageError> {
        let text_id = Id(self.next_id);
        let target = find_node_by_id_mut(&mut self.root, id).ok_or(PageError::MissingNode(id))?;
        match target {
            Node::Text {
                text: existing, ..
            } => {
                existing.clear();
                existing.push_str(text);
                return Ok(());
            }
            Node::Element { children, .. } => {
                // Reuse the sole existing text child to avoid burning ids on
                // every patch.
                if let [Node::Text { text: existing, .. }] = children.as_mut_slice() {
                    existing.clear();
                    existing.push_str(text);
                    return Ok(());
                }
                children.clear();
                children.push(Node::Text {
                    id: text_id,
                    text: text.to_string(),
                });
            }
            _ => return Err(PageError::NotAnElement(id)),
        }
        self.next_id = self.next_id.wrapping_add(1);
        Ok(())
    }

    /// Remove the node and its entire subtree. The document root itself has no
    /// parent and cannot be removed.
    pub fn remove_subtree(&mut self, id: Id) -> Result<(), PageError> {
        fn remove_in(node: &mut Node, id: Id) -> bool {
            let Some(children) = node.children_mut() else {
                return false;
            };
            let before = children.len();
            children.retain(|child| child.id() != id);
            if children.len() != before {
                debug_assert!(before - children.len() == 1, "page ids must be unique");
                return true;
            }
            children.iter_mut().any(|child| remove_in(child, id))
        }

        if remove_in(&mut self.root, id) {
            Ok(())
        } else {
            Err(PageError::MissingNode(id))
        }
    }

    /// Append `token` to the element's `class` attribute unless already
    /// present. Returns whether the class list changed.
    pub fn add_class(&mut self, id: Id, token: &str) -> Result<bool, PageError> {
        let target = find_node_by_id_mut(&mut self.root, id).ok_or(PageError::MissingNode(id))?;
        if target.has_class_token(token) {
            return Ok(false);
        }
        let Node::Element { attributes, .. } = target else {
            return Err(PageError::NotAnElement(id));
        };
        match attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case("class"))
        {
            Some((_, value)) => {
                let classes = value.get_or_insert_with(String::new);
                if !classes.is_empty() {
                    classes.push(' ');
                }
                classes.push_str(token);
            }
            None => attributes.push(("class".to_string(), Some(token.to_string()))),
        }
        Ok(true)
    }
}
