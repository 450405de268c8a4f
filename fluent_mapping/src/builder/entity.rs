//! Typed handles connecting builders to entity types.

use std::{
    any::type_name,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    fmt,
    marker::PhantomData,
    rc::Rc,
    sync::Arc,
};

/// An entity type that can be mapped.
///
/// Usually derived with `#[derive(Entity)]`, which generates a companion
/// struct exposing one [`Property`] handle per field.
///
/// # Examples
///
/// ```
/// use fluent_mapping::{Entity, Property};
///
/// struct Record {
///     name: String,
/// }
///
/// struct RecordProperties {
///     name: Property<Record, String>,
/// }
///
/// impl Entity for Record {
///     const NAME: &'static str = "Record";
///     type Properties = RecordProperties;
///
///     fn properties() -> Self::Properties {
///         RecordProperties { name: Property::new("name") }
///     }
/// }
///
/// assert_eq!(Record::properties().name.name(), "name");
/// ```
pub trait Entity: 'static {
    /// Name the entity is mapped under.
    const NAME: &'static str;

    /// Companion struct of property handles.
    type Properties;

    /// Produce the property handles.
    fn properties() -> Self::Properties;
}

/// Handle naming one property of entity `E` whose value has type `T`.
pub struct Property<E, T> {
    name: &'static str,
    marker: PhantomData<fn() -> (E, T)>,
}

impl<E, T> Property<E, T> {
    /// Handle for the property called `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            marker: PhantomData,
        }
    }

    /// Property name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Fully qualified name of the value type.
    #[must_use]
    pub fn value_type(self) -> &'static str {
        type_name::<T>()
    }
}

impl<E, T> Clone for Property<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for Property<E, T> {}

impl<E, T> fmt::Debug for Property<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("value_type", &type_name::<T>())
            .finish()
    }
}

/// A field type holding many entities of one kind.
pub trait Collection {
    /// The child entity.
    type Item: Entity;
}

impl<T: Entity> Collection for Vec<T> {
    type Item = T;
}

impl<T: Entity> Collection for VecDeque<T> {
    type Item = T;
}

impl<T: Entity, S> Collection for HashSet<T, S> {
    type Item = T;
}

impl<T: Entity> Collection for BTreeSet<T> {
    type Item = T;
}

impl<K, T: Entity, S> Collection for HashMap<K, T, S> {
    type Item = T;
}

impl<K, T: Entity> Collection for BTreeMap<K, T> {
    type Item = T;
}

/// A field type pointing at a single entity.
pub trait Referenced {
    /// The referenced entity.
    type Target: Entity;
}

impl<T: Entity> Referenced for Option<T> {
    type Target = T;
}

impl<T: Entity> Referenced for Box<T> {
    type Target = T;
}

impl<T: Entity> Referenced for Rc<T> {
    type Target = T;
}

impl<T: Entity> Referenced for Arc<T> {
    type Target = T;
}
