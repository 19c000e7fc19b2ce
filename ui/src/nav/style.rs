use crate::classes::ClassList;
use crate::config::{NAV_GLASS, NAV_SOLID, SOLID_AFTER_PX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    /// Translucent, blurred; used while the page sits at the top.
    Glass,
    Solid,
}

impl NavStyle {
    pub fn from_offset(scroll_y: f64) -> Self {
        if scroll_y > SOLID_AFTER_PX {
            Self::Solid
        } else {
            Self::Glass
        }
    }

    pub fn classes(self) -> (&'static [&'static str], &'static [&'static str]) {
        match self {
            Self::Solid => (NAV_SOLID, NAV_GLASS),
            Self::Glass => (NAV_GLASS, NAV_SOLID),
        }
    }
}

pub fn apply_nav_style(navbar: &impl ClassList, style: NavStyle) {
    let (add, remove) = style.classes();
    navbar.swap_classes(add, remove);
}

#[cfg(feature = "web")]
pub fn attach_scroll_style(navbar: web_sys::Element) -> anyhow::Result<()> {
    use crate::dom;

    let win = dom::window()?;
    let restyle = {
        let win = win.clone();
        move || {
            let y = win.scroll_y().unwrap_or_default();
            apply_nav_style(&navbar, NavStyle::from_offset(y));
        }
    };

    // page may have been restored mid-scroll
    restyle();
    dom::add_listener(&win, "scroll", move |_: web_sys::Event| restyle())
}
