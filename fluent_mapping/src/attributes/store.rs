//! Three-layer attribute storage.

use std::collections::BTreeMap;

use super::{Attribute, AttributeValue, Layer};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Slots {
    default: Option<AttributeValue>,
    convention: Option<AttributeValue>,
    explicit: Option<AttributeValue>,
}

impl Slots {
    const fn slot(&self, layer: Layer) -> Option<&AttributeValue> {
        match layer {
            Layer::Default => self.default.as_ref(),
            Layer::Convention => self.convention.as_ref(),
            Layer::Explicit => self.explicit.as_ref(),
        }
    }

    fn resolve(&self) -> Option<(Layer, &AttributeValue)> {
        [Layer::Explicit, Layer::Convention, Layer::Default]
            .into_iter()
            .find_map(|layer| self.slot(layer).map(|value| (layer, value)))
    }
}

/// Layered key/value storage for the attributes of one mapping node.
///
/// Writes target a single [`Layer`]; reads return the value of the highest
/// populated layer. Writing one layer never disturbs the others, so the
/// order in which defaults, conventions, and explicit values arrive does not
/// change what [`AttributeStore::get`] resolves to.
///
/// # Examples
///
/// ```
/// use fluent_mapping::attributes::{AttributeStore, Layer};
/// use fluent_mapping::model::ColumnAttr;
///
/// let mut store = AttributeStore::new();
/// store.set(ColumnAttr::Length, 64_u32);
/// store.set_default(ColumnAttr::Length, 255_u32);
/// assert_eq!(store.number(ColumnAttr::Length), Some(64));
/// assert_eq!(store.layer_of(ColumnAttr::Length), Some(Layer::Explicit));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttributeStore<A: Attribute> {
    slots: BTreeMap<A, Slots>,
}

impl<A: Attribute> Default for AttributeStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Attribute> AttributeStore<A> {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Set an explicit value, replacing any earlier explicit value.
    pub fn set(&mut self, attribute: A, value: impl Into<AttributeValue>) {
        self.slots.entry(attribute).or_default().explicit = Some(value.into());
    }

    /// Set a convention value.
    ///
    /// Returns `false` and leaves the store untouched when the key already
    /// holds an explicit value.
    pub fn set_convention(&mut self, attribute: A, value: impl Into<AttributeValue>) -> bool {
        let slots = self.slots.entry(attribute).or_default();
        if slots.explicit.is_some() {
            return false;
        }
        slots.convention = Some(value.into());
        true
    }

    /// Set a default value unless one is already present.
    ///
    /// Returns whether the value was written.
    pub fn set_default(&mut self, attribute: A, value: impl Into<AttributeValue>) -> bool {
        let slots = self.slots.entry(attribute).or_default();
        if slots.default.is_some() {
            return false;
        }
        slots.default = Some(value.into());
        true
    }

    /// Resolve a key to the value of its highest populated layer.
    #[must_use]
    pub fn get(&self, attribute: A) -> Option<&AttributeValue> {
        self.slots
            .get(&attribute)
            .and_then(Slots::resolve)
            .map(|(_, value)| value)
    }

    /// Read the value stored in one specific layer.
    #[must_use]
    pub fn get_layer(&self, attribute: A, layer: Layer) -> Option<&AttributeValue> {
        self.slots
            .get(&attribute)
            .and_then(|slots| slots.slot(layer))
    }

    /// The layer a key currently resolves from.
    #[must_use]
    pub fn layer_of(&self, attribute: A) -> Option<Layer> {
        self.slots
            .get(&attribute)
            .and_then(Slots::resolve)
            .map(|(layer, _)| layer)
    }

    /// Whether any layer holds a value for `attribute`.
    #[must_use]
    pub fn is_set(&self, attribute: A) -> bool {
        self.get(attribute).is_some()
    }

    /// Whether the key holds an explicit value.
    #[must_use]
    pub fn is_explicit(&self, attribute: A) -> bool {
        self.get_layer(attribute, Layer::Explicit).is_some()
    }

    /// Whether no key holds a value in any layer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.values().all(|slots| slots.resolve().is_none())
    }

    /// Resolved text value of a key.
    #[must_use]
    pub fn text(&self, attribute: A) -> Option<&str> {
        self.get(attribute).and_then(AttributeValue::as_text)
    }

    /// Resolved boolean value of a key.
    #[must_use]
    pub fn flag(&self, attribute: A) -> Option<bool> {
        self.get(attribute).and_then(AttributeValue::as_bool)
    }

    /// Resolved numeric value of a key.
    #[must_use]
    pub fn number(&self, attribute: A) -> Option<u64> {
        self.get(attribute).and_then(AttributeValue::as_int)
    }

    /// Iterate over resolved values in [`Attribute::ALL`] order.
    pub fn resolved(&self) -> impl Iterator<Item = (A, &AttributeValue)> {
        A::ALL
            .iter()
            .filter_map(|&attribute| self.get(attribute).map(|value| (attribute, value)))
    }

    /// Copy every populated slot into `target`, layer by layer.
    ///
    /// Explicit values always land. Convention values land unless `target`
    /// already holds an explicit value for the key, and defaults only fill
    /// keys whose default slot is still empty.
    pub fn copy_to(&self, target: &mut Self) {
        for (&attribute, slots) in &self.slots {
            if let Some(value) = &slots.explicit {
                target.set(attribute, value.clone());
            }
            if let Some(value) = &slots.convention {
                target.set_convention(attribute, value.clone());
            }
            if let Some(value) = &slots.default {
                target.set_default(attribute, value.clone());
            }
        }
    }
}
