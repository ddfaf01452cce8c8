
use crate::constants::{BLOCK_SEPARATOR, CONTENT_CLASS_MARKERS, TEXT_BLOCK_TAGS};
use libxml::tree::{Document, Node, NodeType};

/// Collects the plain text of headings and paragraphs.
///
/// The walk is a plain pre-order descent over the whole tree. `<div>`s whose
/// class marks them as article content get an extra pass over their children,
/// so a block below `n` such containers is emitted `2^n` times.
pub struct ContentExtractor;

impl ContentExtractor {
    pub fn extract(document: &Document) -> String {
        match document.get_root_element() {
            Some(root) => Self::extract_node(&root),
            None => String::new(),
        }
    }

    pub fn extract_node(node: &Node) -> String {
        let mut content = String::new();
        Self::collect_blocks(node, &mut content);
        content.trim().to_owned()
    }

    fn collect_blocks(node: &Node, content: &mut String) {
        if node.get_type() == Some(NodeType::ElementNode) {
            let tag_name = node.get_name();

            if TEXT_BLOCK_TAGS.contains(&tag_name.as_str()) {
                let text = Self::text_content(node);
                if !text.is_empty() {
                    content.push_str(&text);
                    content.push_str(BLOCK_SEPARATOR);
                }
            } else if tag_name == "div" && Self::is_content_container(node) {
                for child in node.get_child_nodes() {
                    Self::collect_blocks(&child, content);
                }
            }
        }

        for child in node.get_child_nodes() {
            Self::collect_blocks(&child, content);
        }
    }

    fn is_content_container(node: &Node) -> bool {
        node.get_attribute("class")
            .map(|class| {
                CONTENT_CLASS_MARKERS
                    .iter()
                    .any(|marker| class.contains(marker))
            })
            .unwrap_or(false)
    }

    /// Raw character data of every text node below `node`, in document order.
    /// Only the ends are trimmed.
    pub fn text_content(node: &Node) -> String {
        let mut text = String::new();
        Self::collect_text(node, &mut text);
        text.trim().to_owned()
    }

    fn collect_text(node: &Node, text: &mut String) {
        if matches!(
            node.get_type(),
            Some(NodeType::TextNode) | Some(NodeType::CDataSectionNode)
        ) {
            text.push_str(&node.get_content());
        }

        for child in node.get_child_nodes() {
            Self::collect_text(&child, text);
        }
    }
}
