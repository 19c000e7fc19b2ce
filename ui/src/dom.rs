use anyhow::Result;
use anyhow::anyhow;
use leptos::leptos_dom::logging::console_warn;
use wasm_bindgen::{JsCast, JsValue, convert::FromWasmAbi, prelude::Closure};
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

use crate::classes::{Attributes, ClassList};

pub fn js_err(err: JsValue) -> anyhow::Error {
    anyhow!("{err:?}")
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global `window`"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow!("window has no document"))
}

pub fn body() -> Result<HtmlElement> {
    document()?
        .body()
        .ok_or_else(|| anyhow!("document has no body"))
}

/// `None` when the element (or the document itself) is missing.
pub fn by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let list = document()?.query_selector_all(selector).map_err(js_err)?;
    Ok(elements(list))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let list = root.query_selector_all(selector).map_err(js_err)?;
    Ok(elements(list))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attaches `f` for the lifetime of the page; the closure is leaked.
pub fn add_listener<T, F>(target: &EventTarget, ty: &str, f: F) -> Result<()>
where
    T: 'static + JsCast + FromWasmAbi,
    F: 'static + FnMut(T),
{
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(_)>);
    target
        .add_event_listener_with_callback(ty, cb.as_ref().unchecked_ref())
        .map_err(js_err)?;
    cb.forget();
    Ok(())
}

/// Logs a failed DOM write; the nav keeps going with the rest of its pass.
pub fn warn_js(what: &str, err: JsValue) {
    console_warn(&format!("{what}: {err:?}"));
}

impl ClassList for Element {
    fn add_classes(&self, classes: &[&str]) {
        let list = self.class_list();
        for class in classes {
            if let Err(e) = list.add_1(class) {
                warn_js(&format!("add class {class}"), e);
            }
        }
    }

    fn remove_classes(&self, classes: &[&str]) {
        let list = self.class_list();
        for class in classes {
            if let Err(e) = list.remove_1(class) {
                warn_js(&format!("remove class {class}"), e);
            }
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

impl Attributes for Element {
    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        if let Err(e) = self.set_attribute(name, value) {
            warn_js(&format!("set {name}={value:?}"), e);
        }
    }
}
