pub mod controller;
pub mod links;
pub mod menu;
pub mod scrollspy;
pub mod style;

pub use controller::Strategy;
pub use links::LinkState;
pub use menu::MobileMenu;
pub use style::NavStyle;
