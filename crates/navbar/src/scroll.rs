use dom::class_list::set_class;
use dom::dom_utils::find_node_by_id_mut;
use dom::{Id, Node};

use crate::SCROLL_CLASS;

/// Converge the bar's `navbar-scroll` marker onto the current offset:
/// present iff `offset_y > 0`, whatever the prior state. Idempotent, so
/// high-frequency scroll delivery needs no throttling. Returns presence.
pub fn apply_scroll_state(dom: &mut Node, navbar: Id, offset_y: f32) -> bool {
    let scrolled = offset_y > 0.0;
    let Some(node) = find_node_by_id_mut(dom, navbar) else {
        log::warn!(target: "navbar.scroll", "navbar node {navbar:?} is gone");
        return false;
    };
    set_class(node, SCROLL_CLASS, scrolled);
    scrolled
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::class_list::has_class;
    use dom::dom_utils::{assign_node_ids, find_node_by_id};

    fn bar() -> (Node, Id) {
        let mut dom = Node::document(vec![Node::element(
            "nav",
            &[("class", "navbar")],
            Vec::new(),
        )]);
        assign_node_ids(&mut dom);
        let navbar = dom.children().unwrap()[0].id();
        (dom, navbar)
    }

    fn marked(dom: &Node, navbar: Id) -> bool {
        has_class(find_node_by_id(dom, navbar).unwrap(), SCROLL_CLASS)
    }

    #[test]
    fn marker_follows_the_sign_of_the_offset() {
        let (mut dom, navbar) = bar();

        assert!(apply_scroll_state(&mut dom, navbar, 50.0));
        assert!(marked(&dom, navbar));

        assert!(!apply_scroll_state(&mut dom, navbar, 0.0));
        assert!(!marked(&dom, navbar));
    }

    #[test]
    fn reapplying_the_same_offset_converges() {
        let (mut dom, navbar) = bar();

        for _ in 0..10 {
            apply_scroll_state(&mut dom, navbar, 50.0);
        }
        let node = find_node_by_id(&dom, navbar).unwrap();
        let count = node
            .attr("class")
            .unwrap()
            .split_whitespace()
            .filter(|c| *c == SCROLL_CLASS)
            .count();
        assert_eq!(count, 1);

        for _ in 0..10 {
            apply_scroll_state(&mut dom, navbar, 0.0);
        }
        assert!(!marked(&dom, navbar));
    }

    #[test]
    fn tiny_positive_offsets_still_count_as_scrolled() {
        let (mut dom, navbar) = bar();
        assert!(apply_scroll_state(&mut dom, navbar, 0.5));
        assert!(marked(&dom, navbar));
    }
}
