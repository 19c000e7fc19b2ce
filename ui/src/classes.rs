/// Anything that carries a CSS class list.
///
/// Implemented for `web_sys::Element` in [`crate::dom`]; the nav behaviors
/// only talk to this trait so their class bookkeeping can run off-browser.
pub trait ClassList {
    fn add_classes(&self, classes: &[&str]);
    fn remove_classes(&self, classes: &[&str]);
    fn has_class(&self, class: &str) -> bool;

    /// Removes `remove` first so a class present in both sets survives.
    fn swap_classes(&self, add: &[&str], remove: &[&str]) {
        self.remove_classes(remove);
        self.add_classes(add);
    }
}

/// Attribute access, same seam as [`ClassList`].
pub trait Attributes {
    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);

    fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeElement;
    use super::*;

    #[test]
    fn swap_keeps_unrelated_classes() {
        let el = FakeElement::with(&["px-4", "old"]);
        el.swap_classes(&["new"], &["old"]);
        assert!(el.has_all(&["px-4", "new"]));
        assert!(el.has_none(&["old"]));
    }

    #[test]
    fn swap_is_idempotent() {
        let el = FakeElement::default();
        el.swap_classes(&["a", "b"], &["c"]);
        el.swap_classes(&["a", "b"], &["c"]);
        assert!(el.has_all(&["a", "b"]));
        assert!(el.has_none(&["c"]));
    }

    #[test]
    fn empty_attribute_still_counts_as_present() {
        let el = FakeElement::default();
        assert!(!el.has_attr("data-nav-wired"));
        el.set_attr("data-nav-wired", "");
        assert!(el.has_attr("data-nav-wired"));
    }
}
