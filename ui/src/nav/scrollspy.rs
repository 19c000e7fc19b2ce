//! Homepage scrollspy: highlights the link for the section crossing the
//! middle band of the viewport.

use super::links::LinkState;
use crate::config::{TOP_HREFS, TOP_SECTION_IDS};

/// What a section id points the nav at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTarget<'a> {
    /// Top of the homepage; matched by root-style hrefs.
    Top,
    Anchor(&'a str),
}

impl<'a> SectionTarget<'a> {
    pub fn from_id(id: &'a str) -> Self {
        if TOP_SECTION_IDS.contains(&id) {
            Self::Top
        } else {
            Self::Anchor(id)
        }
    }

    pub fn matches(self, href: Option<&str>) -> bool {
        let Some(href) = href else {
            return false;
        };
        match self {
            Self::Top => TOP_HREFS.contains(&href),
            Self::Anchor(id) => href.contains(&format!("#{id}")),
        }
    }
}

/// One spy pass: links matching `section_id` become active, every other
/// link inactive. Stale actives from earlier sections are cleared.
pub fn spy_states<'a>(
    hrefs: impl IntoIterator<Item = Option<&'a str>>,
    section_id: &str,
) -> Vec<LinkState> {
    let target = SectionTarget::from_id(section_id);
    hrefs
        .into_iter()
        .map(|href| LinkState { is_active: target.matches(href) })
        .collect()
}

#[cfg(feature = "web")]
pub fn init_scrollspy(links: Vec<web_sys::Element>) -> anyhow::Result<()> {
    use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::links::apply_link_state;
    use crate::config::{SECTIONS_SELECTOR, SPY_ROOT_MARGIN, SPY_THRESHOLD};
    use crate::dom;

    let sections = dom::query_all(SECTIONS_SELECTOR)?;

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let Some(id) = entry.target().get_attribute("id") else {
                    continue;
                };

                let hrefs: Vec<Option<String>> =
                    links.iter().map(|l| l.get_attribute("href")).collect();
                let states = spy_states(hrefs.iter().map(Option::as_deref), &id);
                for (link, state) in links.iter().zip(states) {
                    apply_link_state(link, state);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(SPY_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(SPY_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
            .map_err(dom::js_err)?;
    on_intersect.forget();

    for section in &sections {
        observer.observe(section);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAV: [Option<&str>; 6] = [
        Some("./"),
        Some("index.html"),
        Some("#about"),
        Some("index.html#menu-highlights"),
        Some("menu/espresso.html"),
        Some("#contact"),
    ];

    fn active(states: &[LinkState]) -> Vec<usize> {
        states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_active)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn home_section_activates_root_links_only() {
        let states = spy_states(NAV, "home");
        assert_eq!(active(&states), vec![0, 1]);
    }

    #[test]
    fn header_placeholder_counts_as_top() {
        assert_eq!(SectionTarget::from_id("header-placeholder"), SectionTarget::Top);
        assert!(SectionTarget::Top.matches(Some("/")));
        assert!(SectionTarget::Top.matches(Some("")));
        assert!(!SectionTarget::Top.matches(None));
    }

    #[test]
    fn anchor_section_matches_hash_links() {
        assert_eq!(active(&spy_states(NAV, "about")), vec![2]);
        assert_eq!(active(&spy_states(NAV, "menu-highlights")), vec![3]);
    }

    #[test]
    fn only_latest_section_group_stays_active() {
        // desktop and mobile copies of the same target
        let hrefs = [Some("#about"), Some("#contact"), Some("#about"), Some("#contact")];
        for id in ["about", "contact", "about", "home", "contact"] {
            let states = spy_states(hrefs, id);
            let groups: Vec<_> = hrefs
                .iter()
                .zip(&states)
                .filter(|(_, s)| s.is_active)
                .map(|(h, _)| *h)
                .collect();
            assert!(groups.windows(2).all(|w| w[0] == w[1]), "section {id}");
        }
    }

    #[test]
    fn unknown_section_deactivates_everything() {
        assert!(active(&spy_states(NAV, "gallery")).is_empty());
    }
}
