use dom::selector::{parse_selector, query};
use dom::{Id, Node};
use events::{Event, EventBus, EventKind};

use crate::config::NavbarSelectors;
use crate::menu::toggle_menu;
use crate::scroll::apply_scroll_state;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstallError {
    ElementNotFound { selector: String },
}

/// Resolved element handles, kept for diagnostics and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Installed {
    pub navbar: Id,
    pub toggle: Id,
    pub menu: Id,
}

fn resolve(dom: &Node, selector: &str) -> Result<Id, InstallError> {
    parse_selector(selector)
        .and_then(|path| query(dom, &path))
        .ok_or_else(|| {
            log::error!(target: "navbar.install", "no element for selector {selector:?}");
            InstallError::ElementNotFound {
                selector: selector.to_string(),
            }
        })
}

/// Wire both behaviors onto the bus. Called once by the composition root
/// after the document is built; a missing structural element is a
/// configuration defect, reported before any subscription happens so the
/// page never ends up partially wired.
pub fn install(
    dom: &Node,
    bus: &mut EventBus,
    selectors: &NavbarSelectors,
) -> Result<Installed, InstallError> {
    let navbar = resolve(dom, &selectors.navbar)?;
    let toggle = resolve(dom, &selectors.toggle)?;
    let menu = resolve(dom, &selectors.menu)?;

    // Clicks arrive for the whole page; only the toggle control toggles.
    bus.subscribe(
        EventKind::Click,
        Box::new(move |event, dom| {
            if let Event::Click { target } = event {
                if *target == toggle {
                    toggle_menu(dom, menu);
                }
            }
        }),
    );
    bus.subscribe(
        EventKind::Scroll,
        Box::new(move |event, dom| {
            if let Event::Scroll { offset_y } = event {
                apply_scroll_state(dom, navbar, *offset_y);
            }
        }),
    );

    log::debug!(
        target: "navbar.install",
        "installed: navbar={navbar:?} toggle={toggle:?} menu={menu:?}"
    );
    Ok(Installed {
        navbar,
        toggle,
        menu,
    })
}
