//! Mobile menu rendering.
//!
//! Whether the menu is open is explicit state threaded through the
//! render pass, toggled by a host action. It is never derived by
//! querying the rendered document.

use crate::html::{Element, Node};
use cmsview_core::NavigationItem;

/// Explicit open/closed state for the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    /// Whether the overlay and panel carry the `active` class.
    pub open: bool,
}

impl MenuState {
    /// Closed menu.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Flips the menu state; the host calls this from its toggle and
    /// close controls.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

fn classes(base: &str, open: bool) -> String {
    if open {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

/// Renders the menu overlay and panel as two sibling nodes.
pub fn render_mobile_menu(navigation: &[NavigationItem], state: MenuState) -> Vec<Node> {
    let overlay = Element::new("div").class(classes("mobile-menu-overlay", state.open));

    let panel = Element::new("div")
        .class(classes("mobile-menu-panel", state.open))
        .child(
            Element::new("div")
                .class("mobile-menu-header")
                .child(Element::new("h2").class("mobile-menu-title").text("Menu"))
                .child(Element::new("button").class("mobile-menu-close").text("×")),
        )
        .child(
            Element::new("nav").class("mobile-menu-nav").child(
                Element::new("ul").class("mobile-nav-list").children(
                    navigation.iter().map(|item| {
                        Element::new("li")
                            .class("mobile-nav-item")
                            .child(
                                Element::new("a")
                                    .class("mobile-nav-link")
                                    .attr("href", "#")
                                    .text(item.name.clone()),
                            )
                            .into()
                    }),
                ),
            ),
        );

    vec![overlay.into(), panel.into()]
}
