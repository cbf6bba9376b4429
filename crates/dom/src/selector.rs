//! Descendant selector paths, e.g. ".navbar .mobile-menu-toggle".

use crate::{Id, Node};

pub enum SimpleSelector {
    Universal,
    Type(String),  // element/tag selector
    Id(String),    // #id selector
    Class(String), // .class selector
}

/// Whitespace-separated chain of simple selectors; each step must match a
/// descendant of the previous step's match.
pub struct SelectorPath {
    steps: Vec<SimpleSelector>,
}

// input: ".navbar .mobile-menu-toggle"
// output: Some(SelectorPath { steps: [Class("navbar"), Class("mobile-menu-toggle")] })
pub fn parse_selector(input: &str) -> Option<SelectorPath> {
    let steps = input
        .split_whitespace()
        .map(parse_step)
        .collect::<Option<Vec<_>>>()?;
    if steps.is_empty() {
        return None;
    }
    Some(SelectorPath { steps })
}

// input: "#id", ".class", "div", "*"
fn parse_step(s: &str) -> Option<SimpleSelector> {
    if s == "*" {
        return Some(SimpleSelector::Universal);
    }
    if let Some(id) = s.strip_prefix('#') {
        return Some(SimpleSelector::Id(id.to_string()));
    }
    if let Some(class) = s.strip_prefix('.') {
        return Some(SimpleSelector::Class(class.to_string()));
    }
    if s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Some(SimpleSelector::Type(s.to_ascii_lowercase()));
    }
    None
}

fn matches_step(node: &Node, step: &SimpleSelector) -> bool {
    let Node::Element { name, .. } = node else {
        return false;
    };
    match step {
        SimpleSelector::Universal => true,
        SimpleSelector::Type(t) => name.eq_ignore_ascii_case(t),
        SimpleSelector::Id(want) => node.attr("id").map(|v| v == want).unwrap_or(false),
        SimpleSelector::Class(want) => node
            .attr("class")
            .map(|list| list.split_whitespace().any(|c| c == want))
            .unwrap_or(false),
    }
}

/// First element matching the whole path, found by a depth-first scan.
pub fn query(root: &Node, path: &SelectorPath) -> Option<Id> {
    fn here(node: &Node, steps: &[SimpleSelector]) -> Option<Id> {
        let [first, rest @ ..] = steps else {
            return None;
        };
        if !matches_step(node, first) {
            return None;
        }
        if rest.is_empty() {
            return Some(node.id());
        }
        let children = node.children()?;
        children.iter().find_map(|c| anywhere(c, rest))
    }

    fn anywhere(node: &Node, steps: &[SimpleSelector]) -> Option<Id> {
        if let Some(found) = here(node, steps) {
            return Some(found);
        }
        let children = node.children()?;
        children.iter().find_map(|c| anywhere(c, steps))
    }

    anywhere(root, &path.steps)
}
