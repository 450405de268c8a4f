//! Collection nodes and their key, index, and contents.

use crate::attributes::AttributeStore;

use super::{CollectionAttr, ColumnMapping, IndexAttr, KeyAttr, ManyToManyAttr, OneToManyAttr};

/// Shape of a collection.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CollectionKind {
    /// Unordered, duplicates allowed.
    #[default]
    Bag,
    /// Unordered, no duplicates.
    Set,
    /// Ordered by an index column.
    List,
    /// Keyed by an index column.
    Map,
}

impl CollectionKind {
    /// Element name used in the document.
    #[must_use]
    pub const fn element_name(self) -> &'static str {
        match self {
            Self::Bag => "bag",
            Self::Set => "set",
            Self::List => "list",
            Self::Map => "map",
        }
    }

    /// Whether this shape needs an index.
    #[must_use]
    pub const fn is_indexed(self) -> bool {
        matches!(self, Self::List | Self::Map)
    }
}

/// Foreign key linking collection rows back to their owner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyMapping {
    /// Key attributes.
    pub attributes: AttributeStore<KeyAttr>,
    /// Key columns.
    pub columns: Vec<ColumnMapping>,
}

/// Position or map key of an indexed collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexMapping {
    /// Index attributes.
    pub attributes: AttributeStore<IndexAttr>,
    /// Index columns.
    pub columns: Vec<ColumnMapping>,
}

/// Rows of a collection stored in the child entity's own table.
#[derive(Clone, Debug, PartialEq)]
pub struct OneToManyMapping {
    /// Child entity name.
    pub class: String,
    /// Contents attributes.
    pub attributes: AttributeStore<OneToManyAttr>,
}

/// Rows of a collection stored in a join table.
#[derive(Clone, Debug, PartialEq)]
pub struct ManyToManyMapping {
    /// Child entity name.
    pub class: String,
    /// Contents attributes.
    pub attributes: AttributeStore<ManyToManyAttr>,
    /// Join table columns referencing the child.
    pub columns: Vec<ColumnMapping>,
}

/// What a collection holds.
#[derive(Clone, Debug, PartialEq)]
pub enum CollectionContents {
    /// Child rows keyed directly by the owner.
    OneToMany(OneToManyMapping),
    /// Child rows linked through a join table.
    ManyToMany(ManyToManyMapping),
}

impl CollectionContents {
    /// Child entity name.
    #[must_use]
    pub fn class(&self) -> &str {
        match self {
            Self::OneToMany(contents) => &contents.class,
            Self::ManyToMany(contents) => &contents.class,
        }
    }
}

/// A collection member of a class or subclass.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionMapping {
    /// Collection property name.
    pub name: String,
    /// Collection shape.
    pub kind: CollectionKind,
    /// Collection attributes.
    pub attributes: AttributeStore<CollectionAttr>,
    /// Foreign key back to the owner.
    pub key: KeyMapping,
    /// Index; present for lists and maps.
    pub index: Option<IndexMapping>,
    /// Contents; required at emission.
    pub contents: Option<CollectionContents>,
}

impl CollectionMapping {
    /// Collection with an empty key and no contents.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: CollectionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            attributes: AttributeStore::new(),
            key: KeyMapping::default(),
            index: None,
            contents: None,
        }
    }
}
