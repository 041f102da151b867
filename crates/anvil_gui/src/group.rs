//! Named widget collection with no behaviour of its own.

use crate::element::Element;
use crate::registry::{WidgetKey, Widgets};

/// A naming convenience over a set of widgets.
///
/// Groups only collect keys and iterate them; they carry no interaction
/// logic. In particular, putting radio buttons in a group does not make
/// them mutually exclusive; hosts coordinate that themselves by walking
/// the group in a state-changed callback.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub name: String,
    members: Vec<WidgetKey>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a widget to the group. Keys are not validated; stale ones are
    /// skipped at resolution time.
    pub fn add(&mut self, key: WidgetKey) {
        self.members.push(key);
    }

    /// The collected keys, in insertion order.
    pub fn keys(&self) -> &[WidgetKey] {
        &self.members
    }

    /// Resolve the members against an arena, skipping stale keys.
    pub fn elements<'a>(&'a self, widgets: &'a Widgets) -> impl Iterator<Item = &'a Element> {
        self.members.iter().filter_map(|&key| widgets.get(key))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_keys_in_order() {
        let mut widgets = Widgets::new();
        let a = widgets.spawn_button("A", 0.0, 0.0, 10.0, 10.0);
        let b = widgets.spawn_button("B", 0.0, 0.0, 10.0, 10.0);

        let mut group = Group::new("row");
        group.add(a);
        group.add(b);
        assert_eq!(group.keys(), &[a, b]);

        let names: Vec<_> = group.elements(&widgets).map(|e| e.name.clone()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn stale_members_resolve_to_nothing() {
        let mut widgets = Widgets::new();
        let a = widgets.spawn_button("A", 0.0, 0.0, 10.0, 10.0);
        let mut group = Group::new("row");
        group.add(a);
        widgets.despawn(a);

        assert_eq!(group.len(), 1);
        assert_eq!(group.elements(&widgets).count(), 0);
    }
}
