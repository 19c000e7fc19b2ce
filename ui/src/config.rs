//! DOM contract and style tokens shared by the nav behaviors.
//!
//! The header/footer fragments and the pages under `www/` are written
//! against these names; change both sides together.

// ─── element ids ───
pub const HEADER_PLACEHOLDER: &str = "header-placeholder";
pub const FOOTER_PLACEHOLDER: &str = "footer-placeholder";
pub const NAVBAR: &str = "navbar";
pub const MOBILE_MENU_BTN: &str = "mobile-menu-btn";
pub const MOBILE_MENU: &str = "mobile-menu";
pub const MENU_ICON: &str = "menu-icon";

// ─── selectors ───
pub const NAV_LINKS_SELECTOR: &str = "#desktop-nav a.nav-item, #mobile-menu a";
pub const DYNAMIC_LINKS_SELECTOR: &str = ".nav-link-dynamic";
pub const MENU_LINKS_SELECTOR: &str = "a";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const SECTIONS_SELECTOR: &str = "section[id]";

// ─── fragments & paths ───
pub const HEADER_FRAGMENT: &str = "layouts/header.html";
pub const FOOTER_FRAGMENT: &str = "layouts/footer.html";
pub const MENU_SEGMENT: &str = "/menu/";
pub const HOME_DOCUMENT: &str = "index.html";
pub const PARENT_PREFIX: &str = "../";

/// Substring that marks a link as pointing into the menu section.
pub const MENU_LINK_NEEDLE: &str = "menu";

// ─── class sets ───
pub const NAV_ACTIVE: &[&str] = &["font-bold", "text-coffee-900"];
pub const NAV_INACTIVE: &[&str] = &["font-medium", "text-coffee-700"];
pub const NAV_SOLID: &[&str] = &["bg-cream", "shadow-md", "border-coffee-100"];
pub const NAV_GLASS: &[&str] = &["bg-cream/70", "backdrop-blur-lg", "border-white/20"];
pub const MENU_HIDDEN: &str = "hidden";
pub const REVEAL_ACTIVE: &str = "active";

// ─── mobile menu ───
pub const ICON_OPEN: &str = "close";
pub const ICON_CLOSED: &str = "menu";
pub const BODY_LOCKED: &str = "hidden";
pub const BODY_UNLOCKED: &str = "";
/// Set on the toggle button once its click handler is attached.
pub const WIRED_ATTR: &str = "data-nav-wired";

// ─── thresholds ───
pub const SOLID_AFTER_PX: f64 = 10.0;
pub const REVEAL_OFFSET_PX: f64 = 100.0;

// ─── scrollspy ───
pub const SPY_ROOT_MARGIN: &str = "-30% 0px -60% 0px";
pub const SPY_THRESHOLD: f64 = 0.0;
/// Section ids that stand for the top of the homepage.
pub const TOP_SECTION_IDS: &[&str] = &["home", HEADER_PLACEHOLDER];
/// Hrefs that point at the homepage root.
pub const TOP_HREFS: &[&str] = &["/", "./", HOME_DOCUMENT, ""];
