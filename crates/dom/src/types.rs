pub type NodeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

impl Id {
    /// Sentinel for "not yet assigned"; `Page` replaces it on attach.
    pub const UNSET: Id = Id(0);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    StartTag {
        name: String,
        attributes: Vec<(String, Option<String>)>,
        self_closing: bool,
    },
    EndTag(String),
    Comment(String),
    Text(String),
}

#[derive(Clone, Debug)]
pub enum Node {
    Document {
        id: Id,
        children: Vec<Node>,
    },
    Element {
        id: Id,
        name: String,
        attributes: Vec<(String, Option<String>)>,
        children: Vec<Node>,
    },
    Text {
        id: Id,
        text: String,
    },
    Comment {
        id: Id,
        text: String,
    },
}

impl Node {
    pub fn id(&self) -> Id {
        match self {
            Node::Document { id, .. } => *id,
            Node::Element { id, .. } => *id,
            Node::Text { id, .. } => *id,
            Node::Comment { id, .. } => *id,
        }
    }

    pub fn set_id(&mut self, new_id: Id) {
        match self {
            Node::Document { id, .. } => *id = new_id,
            Node::Element { id, .. } => *id = new_id,
            Node::Text { id, .. } => *id = new_id,
            Node::Comment { id, .. } => *id = new_id,
        }
    }

    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Document { children, .. } | Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document { children, .. } | Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn element_name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Attribute lookup, ASCII-case-insensitive on the name.
    ///
    /// A valueless attribute (`<input checked>`) reports `Some("")` so callers
    /// can distinguish "present" from "absent" without a second walk.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_deref().unwrap_or("")),
            _ => None,
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        match self {
            Node::Element { attributes, .. } => {
                attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
            }
            _ => false,
        }
    }

    /// Whole-token membership test against the whitespace-separated `class`
    /// attribute value.
    pub fn has_class_token(&self, token: &str) -> bool {
        match self.attr("class") {
            Some(classes) => classes.split_whitespace().any(|t| t == token),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elem(attributes: Vec<(String, Option<String>)>) -> Node {
        Node::Element {
            id: Id::UNSET,
            name: "div".to_string(),
            attributes,
            children: Vec::new(),
        }
    }

    #[test]
    fn attr_is_case_insensitive_on_name_only() {
        let node = elem(vec![("Data-Label".to_string(), Some("DOB".to_string()))]);
        assert_eq!(node.attr("data-label"), Some("DOB"));
        assert_eq!(node.attr("DATA-LABEL"), Some("DOB"));
    }

    #[test]
    fn valueless_attr_reads_as_empty_string() {
        let node = elem(vec![("checked".to_string(), None)]);
        assert_eq!(node.attr("checked"), Some(""));
        assert!(node.has_attr("checked"));
    }

    #[test]
    fn class_token_matching_is_whole_token() {
        let node = elem(vec![(
            "class".to_string(),
            Some("nav-item  active".to_string()),
        )]);
        assert!(node.has_class_token("nav-item"));
        assert!(node.has_class_token("active"));
        assert!(!node.has_class_token("nav"));
    }

    #[test]
    fn text_nodes_have_no_attributes() {
        let node = Node::Text {
            id: Id::UNSET,
            text: "hello".to_string(),
        };
        assert_eq!(node.attr("class"), None);
        assert!(!node.has_class_token("x"));
    }
}
