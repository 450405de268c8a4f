//! Mapping model: the tree of nodes a compilation emits.
//!
//! Every node owns an [`AttributeStore`] keyed by its own attribute enum and
//! the structural children that make up the mapping. Builders produce these
//! nodes, conventions annotate them, and the emitter turns them into a
//! [`Document`](crate::document::Document).

mod class;
mod collection;
mod keys;
mod member;

use std::fmt;

use crate::attributes::{Attribute, AttributeStore};

pub use class::{ClassMapping, HibernateMapping, SubclassMapping};
pub use collection::{
    CollectionContents, CollectionKind, CollectionMapping, IndexMapping, KeyMapping,
    ManyToManyMapping, OneToManyMapping,
};
pub use keys::{
    ClassAttr, CollectionAttr, ColumnAttr, DiscriminatorAttr, IdAttr, IndexAttr, KeyAttr,
    ManyToManyAttr, MappingAttr, OneToManyAttr, PropertyAttr, ReferenceAttr, SubclassAttr,
};
pub use member::{
    ColumnMapping, DiscriminatorMapping, GeneratorMapping, IdMapping, PropertyMapping,
    ReferenceMapping,
};

/// Kinds of node in the mapping tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    /// The `hibernate-mapping` root.
    Mapping,
    /// A root class.
    Class,
    /// A subclass at any depth.
    Subclass,
    /// An identity mapping.
    Id,
    /// A discriminator.
    Discriminator,
    /// A scalar property.
    Property,
    /// A column under any column-bearing node.
    Column,
    /// A many-to-one reference.
    Reference,
    /// A bag, set, list, or map.
    Collection,
    /// A collection key.
    Key,
    /// A collection index.
    Index,
    /// One-to-many collection contents.
    OneToMany,
    /// Many-to-many collection contents.
    ManyToMany,
}

impl NodeKind {
    /// Short label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mapping => "hibernate-mapping",
            Self::Class => "class",
            Self::Subclass => "subclass",
            Self::Id => "id",
            Self::Discriminator => "discriminator",
            Self::Property => "property",
            Self::Column => "column",
            Self::Reference => "many-to-one",
            Self::Collection => "collection",
            Self::Key => "key",
            Self::Index => "index",
            Self::OneToMany => "one-to-many",
            Self::ManyToMany => "many-to-many",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the mapping tree that carries layered attributes.
pub trait MappingNode {
    /// Attribute keys accepted by this node.
    type Attr: Attribute;

    /// Kind of this node.
    const KIND: NodeKind;

    /// The node's attribute store.
    fn attributes(&self) -> &AttributeStore<Self::Attr>;

    /// Mutable access to the node's attribute store.
    fn attributes_mut(&mut self) -> &mut AttributeStore<Self::Attr>;
}

/// Links an attribute key enum back to the node kind that owns it.
pub trait NodeAttribute: Attribute {
    /// The node whose store is keyed by this enum.
    type Node: MappingNode<Attr = Self>;
}

macro_rules! mapping_node {
    ($node:ty, $attr:ty, $kind:ident) => {
        impl MappingNode for $node {
            type Attr = $attr;
            const KIND: NodeKind = NodeKind::$kind;

            fn attributes(&self) -> &AttributeStore<$attr> {
                &self.attributes
            }

            fn attributes_mut(&mut self) -> &mut AttributeStore<$attr> {
                &mut self.attributes
            }
        }

        impl NodeAttribute for $attr {
            type Node = $node;
        }
    };
}

mapping_node!(HibernateMapping, MappingAttr, Mapping);
mapping_node!(ClassMapping, ClassAttr, Class);
mapping_node!(SubclassMapping, SubclassAttr, Subclass);
mapping_node!(IdMapping, IdAttr, Id);
mapping_node!(DiscriminatorMapping, DiscriminatorAttr, Discriminator);
mapping_node!(PropertyMapping, PropertyAttr, Property);
mapping_node!(ColumnMapping, ColumnAttr, Column);
mapping_node!(ReferenceMapping, ReferenceAttr, Reference);
mapping_node!(CollectionMapping, CollectionAttr, Collection);
mapping_node!(KeyMapping, KeyAttr, Key);
mapping_node!(IndexMapping, IndexAttr, Index);
mapping_node!(OneToManyMapping, OneToManyAttr, OneToMany);
mapping_node!(ManyToManyMapping, ManyToManyAttr, ManyToMany);
