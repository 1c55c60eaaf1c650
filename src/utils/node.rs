//! Dotted node shaping for hierarchical keys such as `server.worlds.spawn`.

use std::borrow::Cow;

/// Append the node separator so the text can take a child key.
/// Empty text stays empty: the root node has no prefix.
pub fn append_node_dot(node: &str) -> Cow<'_, str> {
    if node.is_empty() {
        Cow::Borrowed(node)
    } else {
        Cow::Owned(format!("{}.", node))
    }
}

/// Suffix starting at the last `.` (the dot included), or the whole text.
pub fn strip_before_last_node(node: &str) -> &str {
    match node.rfind('.') {
        Some(start) => &node[start..],
        None => node,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_node_dot_adds_separator() {
        assert_eq!(append_node_dot("root.child"), "root.child.");
    }

    #[test]
    fn append_node_dot_leaves_empty_alone() {
        assert_eq!(append_node_dot(""), "");
    }

    #[test]
    fn strip_before_last_node_keeps_leading_dot() {
        assert_eq!(strip_before_last_node("a.b.c"), ".c");
        assert_eq!(strip_before_last_node("trailing."), ".");
    }

    #[test]
    fn strip_before_last_node_without_dot_is_unchanged() {
        assert_eq!(strip_before_last_node("abc"), "abc");
        assert_eq!(strip_before_last_node(""), "");
    }

    #[test]
    fn strip_before_last_node_passes_absence_through() {
        let absent: Option<&str> = None;
        assert_eq!(absent.map(strip_before_last_node), None);
    }
}
