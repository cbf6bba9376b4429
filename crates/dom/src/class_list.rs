//! Marker-class mutation on an element's whitespace-separated `class`
//! attribute. Tokens match exactly (case-sensitive), attribute names match
//! ASCII case-insensitively.

use crate::Node;

pub fn has_class(node: &Node, class: &str) -> bool {
    node.attr("class")
        .map(|list| list.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Add `class` if absent. Never introduces a duplicate token.
pub fn add_class(node: &mut Node, class: &str) {
    if has_class(node, class) {
        return;
    }
    let Node::Element { attributes, .. } = node else {
        return;
    };
    for (k, v) in attributes.iter_mut() {
        if k.eq_ignore_ascii_case("class") {
            match v {
                Some(existing) if !existing.trim().is_empty() => {
                    existing.push(' ');
                    existing.push_str(class);
                }
                _ => *v = Some(class.to_string()),
            }
            return;
        }
    }
    attributes.push(("class".to_string(), Some(class.to_string())));
}

/// Remove every occurrence of `class`; other tokens keep their order.
pub fn remove_class(node: &mut Node, class: &str) {
    let Node::Element { attributes, .. } = node else {
        return;
    };
    for (k, v) in attributes.iter_mut() {
        if k.eq_ignore_ascii_case("class") {
            if let Some(existing) = v {
                let kept = existing
                    .split_whitespace()
                    .filter(|c| *c != class)
                    .collect::<Vec<_>>()
                    .join(" ");
                *existing = kept;
            }
            return;
        }
    }
}

/// Invert the presence of `class`. Returns the new presence.
pub fn toggle_class(node: &mut Node, class: &str) -> bool {
    if has_class(node, class) {
        remove_class(node, class);
        false
    } else {
        add_class(node, class);
        true
    }
}

/// Ensure `class` is present iff `present`. Idempotent.
pub fn set_class(node: &mut Node, class: &str, present: bool) {
    if present {
        add_class(node, class);
    } else {
        remove_class(node, class);
    }
}
