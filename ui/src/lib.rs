pub mod classes;
pub mod config;
pub mod nav;
pub mod page;
pub mod reveal;

#[cfg(feature = "web")]
pub mod dom;
#[cfg(feature = "web")]
pub mod fragment;

#[cfg(feature = "web")]
pub use web::main;

#[cfg(feature = "web")]
mod web {
    use anyhow::Result;
    use leptos::leptos_dom::logging::{console_error, console_log};
    use wasm_bindgen::prelude::*;
    use web_sys::Event;

    use crate::config::{
        FOOTER_FRAGMENT, FOOTER_PLACEHOLDER, HEADER_FRAGMENT, HEADER_PLACEHOLDER, NAVBAR,
    };
    use crate::nav::{controller::init_navbar, style::attach_scroll_style};
    use crate::page::{PageContext, still_parsing};
    use crate::{dom, fragment, reveal};

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        report(on_dom_ready(|| report(boot())));
    }

    fn report(result: Result<()>) {
        if let Err(e) = result {
            console_error(&format!("{e:#}"));
        }
    }

    /// Module scripts can run after `DOMContentLoaded` has already fired.
    fn on_dom_ready(f: fn()) -> Result<()> {
        let document = dom::document()?;
        if still_parsing(&document.ready_state()) {
            dom::add_listener(&document, "DOMContentLoaded", move |_: Event| f())
        } else {
            f();
            Ok(())
        }
    }

    fn boot() -> Result<()> {
        let path = dom::window()?.location().pathname().map_err(dom::js_err)?;
        let context = PageContext::from_path(&path);
        console_log(&format!("nav: {path} as {context:?}"));

        fragment::load_fragment_then(
            HEADER_PLACEHOLDER,
            context.fragment_url(HEADER_FRAGMENT),
            move || {
                report(init_navbar(context));
                if let Some(navbar) = dom::by_id(NAVBAR) {
                    report(attach_scroll_style(navbar));
                }
            },
        );
        fragment::load_fragment(FOOTER_PLACEHOLDER, context.fragment_url(FOOTER_FRAGMENT));

        reveal::init_scroll_reveal()
    }
}
