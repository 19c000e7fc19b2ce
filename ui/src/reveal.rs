use crate::classes::ClassList;
use crate::config::{REVEAL_ACTIVE, REVEAL_OFFSET_PX};

pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_OFFSET_PX
}

/// One-way: an element that was revealed stays revealed.
pub fn reveal(el: &impl ClassList, top: f64, viewport_height: f64) {
    if should_reveal(top, viewport_height) {
        el.add_classes(&[REVEAL_ACTIVE]);
    }
}

#[cfg(feature = "web")]
pub fn init_scroll_reveal() -> anyhow::Result<()> {
    use crate::config::REVEAL_SELECTOR;
    use crate::dom;

    let win = dom::window()?;
    let targets = dom::query_all(REVEAL_SELECTOR)?;

    let pass = {
        let win = win.clone();
        move || {
            let height = win
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or_default();
            for el in &targets {
                reveal(el, el.get_bounding_client_rect().top(), height);
            }
        }
    };

    pass();
    dom::add_listener(&win, "scroll", move |_: web_sys::Event| pass())
}
