#![forbid(unsafe_code)]

//! Plugin registration.
//!
//! The widget does not define what plugins do. It only promises to hand each
//! configured plugin to a [`PluginRegistry`] at construction, and to accept
//! more later. Registration is fire-and-forget: it cannot fail and never
//! affects filtering, rendering, or navigation.
//!
//! # Invariants
//!
//! - Plugins are kept in registration order.
//! - Names are unique per registry; re-registering a name replaces the
//!   earlier plugin in place.

use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;

use crate::id::WidgetId;

/// An extension attached to a widget.
pub trait Plugin {
    /// Stable name used to de-duplicate registrations.
    fn name(&self) -> &str;

    /// Called once when the plugin is registered with a widget.
    fn on_register(&self, _widget: WidgetId) {}
}

/// Per-widget plugin registry.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Rc<dyn Plugin>>,
    by_name: AHashMap<String, usize>,
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.plugins.iter().map(|p| p.name()))
            .finish()
    }
}

impl PluginRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `plugin` on behalf of `owner`.
    pub fn register(&mut self, owner: WidgetId, plugin: Rc<dyn Plugin>) {
        let name = plugin.name().to_owned();
        match self.by_name.get(&name).copied() {
            Some(slot) => {
                tracing::debug!(%owner, plugin = %name, "replacing plugin");
                self.plugins[slot] = Rc::clone(&plugin);
            }
            None => {
                tracing::debug!(%owner, plugin = %name, "registering plugin");
                self.by_name.insert(name, self.plugins.len());
                self.plugins.push(Rc::clone(&plugin));
            }
        }
        plugin.on_register(owner);
    }

    /// Look up a plugin by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rc<dyn Plugin>> {
        self.by_name.get(name).map(|&slot| &self.plugins[slot])
    }

    /// Registered plugins in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn Plugin>> {
        self.plugins.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Tally {
        name: &'static str,
        registered: Cell<u32>,
    }

    impl Tally {
        fn new(name: &'static str) -> Rc<Self> {
            Rc::new(Self {
                name,
                registered: Cell::new(0),
            })
        }
    }

    impl Plugin for Tally {
        fn name(&self) -> &str {
            self.name
        }

        fn on_register(&self, _widget: WidgetId) {
            self.registered.set(self.registered.get() + 1);
        }
    }

    #[test]
    fn register_notifies_plugin() {
        let mut registry = PluginRegistry::new();
        let tally = Tally::new("history");
        registry.register(WidgetId::next(), tally.clone());
        assert_eq!(tally.registered.get(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry = PluginRegistry::new();
        let owner = WidgetId::next();
        registry.register(owner, Tally::new("a"));
        registry.register(owner, Tally::new("b"));
        let names: Vec<&str> = registry.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn same_name_replaces_in_place() {
        let mut registry = PluginRegistry::new();
        let owner = WidgetId::next();
        registry.register(owner, Tally::new("a"));
        registry.register(owner, Tally::new("b"));
        let replacement: Rc<dyn Plugin> = Tally::new("a");
        registry.register(owner, Rc::clone(&replacement));

        assert_eq!(registry.len(), 2);
        let first = registry.iter().next().unwrap();
        assert!(Rc::ptr_eq(first, &replacement));
    }

    #[test]
    fn empty_registry() {
        let registry = PluginRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("missing").is_none());
    }
}
