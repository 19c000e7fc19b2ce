use crate::classes::Attributes;
use crate::config::{BODY_LOCKED, BODY_UNLOCKED, ICON_CLOSED, ICON_OPEN, WIRED_ATTR};

/// Open/closed state of the mobile drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    pub open: bool,
}

/// What the DOM should show for a given [`MobileMenu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub hidden: bool,
    pub icon: &'static str,
    pub body_overflow: &'static str,
}

impl MobileMenu {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// A link inside the drawer was clicked: close if open, else nothing.
    pub fn close_via_link(self) -> Option<Self> {
        self.open.then(|| self.toggled())
    }

    pub fn view(self) -> MenuView {
        if self.open {
            MenuView {
                hidden: false,
                icon: ICON_OPEN,
                body_overflow: BODY_LOCKED,
            }
        } else {
            MenuView {
                hidden: true,
                icon: ICON_CLOSED,
                body_overflow: BODY_UNLOCKED,
            }
        }
    }
}

/// Marks `button` as wired. `false` if an earlier run already did, in
/// which case no handlers may be attached again.
pub fn claim_wiring(button: &impl Attributes) -> bool {
    if button.has_attr(WIRED_ATTR) {
        return false;
    }
    button.set_attr(WIRED_ATTR, "");
    true
}

#[cfg(feature = "web")]
pub use web::wire_mobile_menu;

#[cfg(feature = "web")]
mod web {
    use std::rc::Rc;

    use anyhow::Result;
    use leptos::leptos_dom::logging::console_log;
    use web_sys::{Element, Event, HtmlElement};

    use super::{MobileMenu, claim_wiring};
    use crate::classes::ClassList;
    use crate::config::{MENU_HIDDEN, MENU_LINKS_SELECTOR};
    use crate::dom;

    struct Drawer {
        panel: Element,
        icon: Element,
        body: HtmlElement,
    }

    impl Drawer {
        /// Read back from the panel so a reloaded header starts from its markup.
        fn current(&self) -> MobileMenu {
            MobileMenu {
                open: !self.panel.has_class(MENU_HIDDEN),
            }
        }

        fn render(&self, menu: MobileMenu) {
            let view = menu.view();
            if view.hidden {
                self.panel.add_classes(&[MENU_HIDDEN]);
            } else {
                self.panel.remove_classes(&[MENU_HIDDEN]);
            }
            self.icon.set_text_content(Some(view.icon));
            if let Err(e) = self.body.style().set_property("overflow", view.body_overflow) {
                dom::warn_js("body scroll lock", e);
            }
        }

        fn toggle(&self) {
            self.render(self.current().toggled());
        }

        fn close_via_link(&self) {
            if let Some(next) = self.current().close_via_link() {
                self.render(next);
            }
        }
    }

    /// Wires the toggle button and the drawer links, once per button node.
    pub fn wire_mobile_menu(button: Element, panel: Element, icon: Element) -> Result<()> {
        if !claim_wiring(&button) {
            console_log("nav: mobile menu already wired");
            return Ok(());
        }

        let drawer = Rc::new(Drawer {
            panel,
            icon,
            body: dom::body()?,
        });
        let links = dom::query_all_in(&drawer.panel, MENU_LINKS_SELECTOR)?;

        let d = drawer.clone();
        dom::add_listener(&button, "click", move |_: Event| d.toggle())?;

        for link in links {
            let d = drawer.clone();
            dom::add_listener(&link, "click", move |_: Event| d.close_via_link())?;
        }
        Ok(())
    }
}
