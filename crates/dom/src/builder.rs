use crate::types::{Id, Node, Token};

/// Build a fragment (zero or more root nodes) from a token stream.
///
/// Nesting follows the open-element stack: an end tag closes up to and
/// including the nearest matching open element; a stray end tag with no
/// matching open element is dropped. Elements still open at end of input are
/// closed implicitly. All node ids are left `Id::UNSET`; `Page` assigns them
/// on attach.
pub fn build_fragment(tokens: &[Token]) -> Vec<Node> {
    let mut roots: Vec<Node> = Vec::new();
    let mut open: Vec<Node> = Vec::new();

    fn attach(roots: &mut Vec<Node>, open: &mut Vec<Node>, node: Node) {
        match open.last_mut() {
            Some(Node::Element { children, .. }) => children.push(node),
            _ => roots.push(node),
        }
    }

    for token in tokens {
        match token {
            Token::Text(text) => {
                if !text.is_empty() {
                    attach(
                        &mut roots,
                        &mut open,
                        Node::Text {
                            id: Id::UNSET,
                            text: text.clone(),
                        },
                    );
                }
            }
            Token::Comment(text) => {
                attach(
                    &mut roots,
                    &mut open,
                    Node::Comment {
                        id: Id::UNSET,
                        text: text.clone(),
                    },
                );
            }
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let element = Node::Element {
                    id: Id::UNSET,
                    name: name.clone(),
                    attributes: attributes.clone(),
                    children: Vec::new(),
                };
                if *self_closing {
                    attach(&mut roots, &mut open, element);
                } else {
                    open.push(element);
                }
            }
            Token::EndTag(name) => {
                let has_match = open
                    .iter()
                    .any(|n| matches!(n, Node::Element { name: open_name, .. } if open_name == name));
                if !has_match {
                    log::trace!(target: "dom.builder", "ignoring stray end tag </{name}>");
                    continue;
                }
                while let Some(top) = open.pop() {
                    let closes = matches!(&top, Node::Element { name: open_name, .. } if open_name == name);
                    attach(&mut roots, &mut open, top);
                    if closes {
                        break;
                    }
                }
            }
        }
    }

    // Close anything left open at end of input.
    while let Some(top) = open.pop() {
        attach(&mut roots, &mut open, top);
    }

    roots
}
