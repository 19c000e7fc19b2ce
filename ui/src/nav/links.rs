use crate::classes::ClassList;
use crate::config::{MENU_LINK_NEEDLE, NAV_ACTIVE, NAV_INACTIVE, PARENT_PREFIX};

/// Active/inactive state of one navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkState {
    pub is_active: bool,
}

impl LinkState {
    pub const ACTIVE: Self = Self { is_active: true };
    pub const INACTIVE: Self = Self { is_active: false };

    /// `(to add, to remove)`; the two sets never overlap.
    pub fn classes(self) -> (&'static [&'static str], &'static [&'static str]) {
        if self.is_active {
            (NAV_ACTIVE, NAV_INACTIVE)
        } else {
            (NAV_INACTIVE, NAV_ACTIVE)
        }
    }
}

pub fn apply_link_state(link: &impl ClassList, state: LinkState) {
    let (add, remove) = state.classes();
    link.swap_classes(add, remove);
}

/// The href a menu sub-page should use instead of `href`, or `None` when
/// it already resolves correctly from the nested folder.
///
/// Left alone: empty hrefs, anything with a scheme, root-absolute and
/// protocol-relative paths, in-page anchors, and hrefs that already climb
/// out with `../`.
pub fn fix_relative_href(href: &str) -> Option<String> {
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with('/')
        || href.starts_with(PARENT_PREFIX)
        || has_scheme(href)
    {
        return None;
    }
    Some(format!("{PARENT_PREFIX}{href}"))
}

fn has_scheme(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Static matcher used on menu sub-pages.
pub fn menu_link_state(href: Option<&str>) -> LinkState {
    LinkState {
        is_active: href.is_some_and(|h| h.contains(MENU_LINK_NEEDLE)),
    }
}

pub fn static_states<'a>(hrefs: impl IntoIterator<Item = Option<&'a str>>) -> Vec<LinkState> {
    hrefs.into_iter().map(menu_link_state).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::fake::FakeElement;

    #[test]
    fn exactly_one_class_set_after_any_pass() {
        let link = FakeElement::default();
        let passes = [
            LinkState::ACTIVE,
            LinkState::INACTIVE,
            LinkState::INACTIVE,
            LinkState::ACTIVE,
        ];
        for state in passes {
            apply_link_state(&link, state);
            let active = link.has_all(NAV_ACTIVE) && link.has_none(NAV_INACTIVE);
            let inactive = link.has_all(NAV_INACTIVE) && link.has_none(NAV_ACTIVE);
            assert!(active ^ inactive);
            assert_eq!(active, state.is_active);
        }
    }

    #[test]
    fn state_overrides_markup_that_had_both_sets() {
        let link = FakeElement::with(&[
            "font-bold",
            "text-coffee-900",
            "font-medium",
            "text-coffee-700",
        ]);
        apply_link_state(&link, LinkState::INACTIVE);
        assert!(link.has_all(NAV_INACTIVE));
        assert!(link.has_none(NAV_ACTIVE));
    }

    #[test]
    fn nested_page_gets_parent_prefix() {
        assert_eq!(fix_relative_href("drinks.html").as_deref(), Some("../drinks.html"));
        assert_eq!(
            fix_relative_href("index.html#about").as_deref(),
            Some("../index.html#about")
        );
        assert_eq!(fix_relative_href("./").as_deref(), Some(".././"));
    }

    #[test]
    fn fixing_twice_equals_fixing_once() {
        for href in ["drinks.html", "menu/espresso.html", "../x.html", "#top", "https://a.b"] {
            let once = fix_relative_href(href).unwrap_or_else(|| href.to_string());
            let twice = fix_relative_href(&once).unwrap_or_else(|| once.clone());
            assert_eq!(once, twice, "href {href}");
        }
    }

    #[test]
    fn absolute_and_anchor_hrefs_untouched() {
        for href in [
            "https://instagram.com/kopi",
            "http://example.com",
            "mailto:hello@kopi.id",
            "tel:+62123",
            "//cdn.example.com/x.js",
            "/index.html",
            "#contact",
            "",
        ] {
            assert_eq!(fix_relative_href(href), None, "href {href}");
        }
    }

    #[test]
    fn colon_in_query_is_not_a_scheme() {
        assert_eq!(
            fix_relative_href("order.html?at=10:30").as_deref(),
            Some("../order.html?at=10:30")
        );
    }

    #[test]
    fn static_matcher_marks_menu_links() {
        let states = static_states([
            Some("../menu/espresso.html"),
            Some("../index.html"),
            Some("../index.html#contact"),
            None,
        ]);
        assert_eq!(
            states,
            vec![
                LinkState::ACTIVE,
                LinkState::INACTIVE,
                LinkState::INACTIVE,
                LinkState::INACTIVE,
            ]
        );
    }
}
