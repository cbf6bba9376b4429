use crate::{Id, Node};

/// Assign fresh ids to nodes that still carry the unset id `Id(0)`.
pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        if node.id() == Id(0) {
            let id = Id(*next);
            *next = next.wrapping_add(1);
            node.set_id(id);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = 1;
    walk(root, &mut next);
}

pub fn find_node_by_id<'a>(node: &'a Node, id: Id) -> Option<&'a Node> {
    if node.id() == id {
        return Some(node);
    }
    if let Some(children) = node.children() {
        for c in children {
            if let Some(found) = find_node_by_id(c, id) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() != id {
        return match node.children_mut() {
            Some(children) => children.iter_mut().find_map(|c| find_node_by_id_mut(c, id)),
            None => None,
        };
    }
    Some(node)
}

/// Compact tree outline for load-time diagnostics, capped at `cap` lines.
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
                for c in children {
                    walk(c, depth + 1, out, left);
                }
            }
            Node::Element { name, children, .. } => {
                let mut line = format!("{indent}<{name}");
                if let Some(class) = node.attr("class") {
                    if !class.is_empty() {
                        line.push_str(&format!(r#" class="{class}""#));
                    }
                }
                line.push('>');
                out.push(line);
                for c in children {
                    walk(c, depth + 1, out, left);
                }
            }
            Node::Text { text, .. } => {
                let t = text.trim();
                if !t.is_empty() {
                    out.push(format!("{indent}\"{t}\""));
                }
            }
        }
    }

    let mut out = Vec::new();
    let mut left = cap;
    walk(root, 0, &mut out, &mut left);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::document(vec![Node::element(
            "nav",
            &[("class", "navbar")],
            vec![
                Node::element("button", &[("class", "mobile-menu-toggle")], Vec::new()),
                Node::element("ul", &[("class", "mobile-menu-items")], Vec::new()),
            ],
        )])
    }

    #[test]
    fn assign_gives_every_node_a_unique_nonzero_id() {
        let mut dom = sample();
        assign_node_ids(&mut dom);

        let mut seen = std::collections::HashSet::new();
        fn collect(node: &Node, seen: &mut std::collections::HashSet<Id>) {
            assert_ne!(node.id(), Id(0));
            assert!(seen.insert(node.id()));
            if let Some(children) = node.children() {
                for c in children {
                    collect(c, seen);
                }
            }
        }
        collect(&dom, &mut seen);
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn find_by_id_reaches_nested_nodes() {
        let mut dom = sample();
        assign_node_ids(&mut dom);

        let toggle_id = dom.children().unwrap()[0].children().unwrap()[0].id();
        let found = find_node_by_id(&dom, toggle_id).unwrap();
        assert_eq!(found.attr("class"), Some("mobile-menu-toggle"));

        let found = find_node_by_id_mut(&mut dom, toggle_id).unwrap();
        assert_eq!(found.id(), toggle_id);
    }

    #[test]
    fn find_by_id_misses_unknown_ids() {
        let mut dom = sample();
        assign_node_ids(&mut dom);
        assert!(find_node_by_id(&dom, Id(999)).is_none());
    }

    #[test]
    fn outline_shows_classes_and_respects_cap() {
        let mut dom = sample();
        assign_node_ids(&mut dom);

        let lines = outline(&dom, 64);
        assert_eq!(lines[0], "#document");
        assert!(lines[1].contains(r#"<nav class="navbar">"#));

        assert_eq!(outline(&dom, 2).len(), 2);
    }
}
