use super::links::{apply_link_state, fix_relative_href, static_states};
use crate::classes::{Attributes, ClassList};
use crate::page::PageContext;

/// How the active link is picked on a given page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Menu sub-pages: links into the menu stay active.
    StaticMatch,
    /// Homepage: follow the section in view.
    Scrollspy,
    None,
}

impl Strategy {
    pub fn for_context(context: PageContext) -> Self {
        match context {
            PageContext::MenuSubpage => Self::StaticMatch,
            PageContext::Homepage => Self::Scrollspy,
            PageContext::Other => Self::None,
        }
    }
}

/// Whether dynamic links need the `../` rewrite on this page.
pub fn needs_path_fix(context: PageContext) -> bool {
    context == PageContext::MenuSubpage
}

pub fn fix_dynamic_links<L: Attributes>(links: &[L]) {
    for link in links {
        if let Some(href) = link.attr("href").and_then(|h| fix_relative_href(&h)) {
            link.set_attr("href", &href);
        }
    }
}

pub fn mark_menu_links<L: Attributes + ClassList>(links: &[L]) {
    let hrefs: Vec<Option<String>> = links.iter().map(|l| l.attr("href")).collect();
    let states = static_states(hrefs.iter().map(Option::as_deref));
    for (link, state) in links.iter().zip(states) {
        apply_link_state(link, state);
    }
}

#[cfg(feature = "web")]
pub use web::init_navbar;

#[cfg(feature = "web")]
mod web {
    use anyhow::Result;
    use leptos::leptos_dom::logging::console_warn;

    use super::{Strategy, fix_dynamic_links, mark_menu_links, needs_path_fix};
    use crate::config::{
        DYNAMIC_LINKS_SELECTOR, MENU_ICON, MOBILE_MENU, MOBILE_MENU_BTN, NAV_LINKS_SELECTOR,
    };
    use crate::dom;
    use crate::nav::menu::wire_mobile_menu;
    use crate::nav::scrollspy::init_scrollspy;
    use crate::page::PageContext;

    /// Configures the navbar once the header fragment is in the DOM.
    pub fn init_navbar(context: PageContext) -> Result<()> {
        if needs_path_fix(context) {
            fix_dynamic_links(&dom::query_all(DYNAMIC_LINKS_SELECTOR)?);
        }

        match (
            dom::by_id(MOBILE_MENU_BTN),
            dom::by_id(MOBILE_MENU),
            dom::by_id(MENU_ICON),
        ) {
            (Some(button), Some(panel), Some(icon)) => wire_mobile_menu(button, panel, icon)?,
            _ => console_warn("header has no complete mobile menu; drawer left unwired"),
        }

        let links = dom::query_all(NAV_LINKS_SELECTOR)?;
        match Strategy::for_context(context) {
            Strategy::StaticMatch => mark_menu_links(&links),
            Strategy::Scrollspy => init_scrollspy(links)?,
            Strategy::None => {}
        }
        Ok(())
    }
}
