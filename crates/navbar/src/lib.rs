//! Navigation-bar behaviors: click-to-toggle for the mobile menu and
//! scroll-position restyling of the bar. The stylesheet gives the marker
//! classes their visual meaning; this crate only flips them.

mod config;
mod install;
mod menu;
mod scroll;

pub use config::{ACTIVE_CLASS, NavbarSelectors, SCROLL_CLASS};
pub use install::{InstallError, Installed, install};
pub use menu::toggle_menu;
pub use scroll::apply_scroll_state;
