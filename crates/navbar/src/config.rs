/// Marker class that reveals the mobile menu items.
pub const ACTIVE_CLASS: &str = "active";

/// Marker class applied to the bar once the page is scrolled off the top.
pub const SCROLL_CLASS: &str = "navbar-scroll";

/// Locators for the three structural elements the behaviors are wired to.
/// The markup author owns these; defaults match the stock navbar markup.
#[derive(Clone, Debug)]
pub struct NavbarSelectors {
    pub navbar: String,
    pub toggle: String,
    pub menu: String,
}

impl Default for NavbarSelectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar".into(),
            toggle: ".navbar .mobile-menu-toggle".into(),
            menu: ".navbar .mobile-menu-items".into(),
        }
    }
}
