use dom::class_list::toggle_class;
use dom::dom_utils::find_node_by_id_mut;
use dom::{Id, Node};

use crate::ACTIVE_CLASS;

/// Invert the `active` marker on the menu container. Each call flips the
/// state, so presence tracks click-count parity. Returns the new state.
pub fn toggle_menu(dom: &mut Node, menu: Id) -> bool {
    let Some(node) = find_node_by_id_mut(dom, menu) else {
        log::warn!(target: "navbar.menu", "menu node {menu:?} is gone");
        return false;
    };
    let open = toggle_class(node, ACTIVE_CLASS);
    log::trace!(
        target: "navbar.menu",
        "menu {}",
        if open { "opened" } else { "closed" }
    );
    open
}
