use crate::config::{HOME_DOCUMENT, MENU_SEGMENT, PARENT_PREFIX};

/// Where the current page sits in the site, derived from `location.pathname`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContext {
    /// A page inside the nested `menu/` folder.
    MenuSubpage,
    Homepage,
    Other,
}

impl PageContext {
    pub fn from_path(path: &str) -> Self {
        if path.contains(MENU_SEGMENT) {
            Self::MenuSubpage
        } else if path.ends_with('/') || path.ends_with(HOME_DOCUMENT) {
            Self::Homepage
        } else {
            Self::Other
        }
    }

    /// Prefix that takes a site-relative path back to the site root.
    pub fn asset_prefix(self) -> &'static str {
        match self {
            Self::MenuSubpage => PARENT_PREFIX,
            Self::Homepage | Self::Other => "",
        }
    }

    pub fn fragment_url(self, file: &str) -> String {
        format!("{}{}", self.asset_prefix(), file)
    }
}

/// `document.readyState` before `DOMContentLoaded` has fired.
pub fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FOOTER_FRAGMENT, HEADER_FRAGMENT};

    #[test]
    fn menu_folder_wins_over_index_name() {
        assert_eq!(PageContext::from_path("/menu/espresso.html"), PageContext::MenuSubpage);
        assert_eq!(PageContext::from_path("/menu/index.html"), PageContext::MenuSubpage);
        assert_eq!(PageContext::from_path("/menu/"), PageContext::MenuSubpage);
    }

    #[test]
    fn root_like_paths_are_homepage() {
        assert_eq!(PageContext::from_path("/"), PageContext::Homepage);
        assert_eq!(PageContext::from_path("/index.html"), PageContext::Homepage);
        assert_eq!(PageContext::from_path("/kopi/"), PageContext::Homepage);
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(PageContext::from_path("/about.html"), PageContext::Other);
        assert_eq!(PageContext::from_path("/menus.html"), PageContext::Other);
    }

    #[test]
    fn fragments_resolve_from_nested_folder() {
        assert_eq!(
            PageContext::MenuSubpage.fragment_url(HEADER_FRAGMENT),
            "../layouts/header.html"
        );
        assert_eq!(
            PageContext::Homepage.fragment_url(FOOTER_FRAGMENT),
            "layouts/footer.html"
        );
        assert_eq!(PageContext::Other.asset_prefix(), "");
    }

    #[test]
    fn only_loading_state_waits_for_dom() {
        assert!(still_parsing("loading"));
        assert!(!still_parsing("interactive"));
        assert!(!still_parsing("complete"));
    }
}
