//! Navigation helpers over roxmltree nodes.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use cosim_config::xml::get_tag_name;
///
/// let doc = Document::parse("<settings><ORCHESTRATOR/></settings>").unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "settings");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given tag name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Get all element children of a node, excluding text and comment nodes.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Check whether a node has at least one element child.
///
/// Leaf sections carry only text; structured sections carry elements.
pub fn has_element_children(node: Node<'_, '_>) -> bool {
    node.children().any(|child| child.is_element())
}

/// Get the raw text content of a node.
///
/// Returns the text untrimmed; callers that tokenize decide how much
/// whitespace to strip. Empty string if the node has no text.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name() {
        let doc = Document::parse("<services_deployment/>").unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "services_deployment");
    }

    #[test]
    fn test_find_child() {
        let doc = Document::parse("<root><a/><b/></root>").unwrap();
        let root = doc.root_element();

        assert!(find_child(root, "a").is_some());
        assert!(find_child(root, "c").is_none());
    }

    #[test]
    fn test_element_children_skips_text_nodes() {
        let doc = Document::parse("<root>text<a/>more<b/></root>").unwrap();
        let children: Vec<_> = element_children(doc.root_element()).collect();
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_has_element_children() {
        let doc = Document::parse("<root><leaf>text</leaf></root>").unwrap();
        let root = doc.root_element();

        assert!(has_element_children(root));
        let leaf = find_child(root, "leaf").unwrap();
        assert!(!has_element_children(leaf));
    }

    #[test]
    fn test_get_text_untrimmed() {
        let doc = Document::parse("<opt>srun --exact\n</opt>").unwrap();
        assert_eq!(get_text(doc.root_element()), "srun --exact\n");
    }

    #[test]
    fn test_get_text_empty_element() {
        let doc = Document::parse("<opt/>").unwrap();
        assert_eq!(get_text(doc.root_element()), "");
    }
}
