//! Read-only traversal of the mapping model.
//!
//! Each `visit_*` method defaults to the matching free function, which visits
//! the node's children. Implementors override the methods for the nodes they
//! care about and call the free function to keep descending.
//!
//! Children are visited in document order: a class visits its id, its
//! discriminator, then its properties, references, collections, and
//! subclasses; a collection visits its key, its index, then its contents.

mod visit_mut;

pub use visit_mut::*;

use crate::model::{
    ClassMapping, CollectionContents, CollectionMapping, ColumnMapping, DiscriminatorMapping,
    HibernateMapping, IdMapping, IndexMapping, KeyMapping, ManyToManyMapping, OneToManyMapping,
    PropertyMapping, ReferenceMapping, SubclassMapping,
};

/// Read-only visitor over the mapping model.
pub trait Visit {
    /// Visit the root.
    fn visit_mapping(&mut self, node: &HibernateMapping) {
        visit_mapping(self, node);
    }

    /// Visit a root class.
    fn visit_class(&mut self, node: &ClassMapping) {
        visit_class(self, node);
    }

    /// Visit a subclass.
    fn visit_subclass(&mut self, node: &SubclassMapping) {
        visit_subclass(self, node);
    }

    /// Visit an identity mapping.
    fn visit_id(&mut self, node: &IdMapping) {
        visit_id(self, node);
    }

    /// Visit a discriminator.
    fn visit_discriminator(&mut self, _node: &DiscriminatorMapping) {}

    /// Visit a scalar property.
    fn visit_property(&mut self, node: &PropertyMapping) {
        visit_property(self, node);
    }

    /// Visit a column.
    fn visit_column(&mut self, _node: &ColumnMapping) {}

    /// Visit a many-to-one reference.
    fn visit_reference(&mut self, node: &ReferenceMapping) {
        visit_reference(self, node);
    }

    /// Visit a collection.
    fn visit_collection(&mut self, node: &CollectionMapping) {
        visit_collection(self, node);
    }

    /// Visit a collection key.
    fn visit_key(&mut self, node: &KeyMapping) {
        visit_key(self, node);
    }

    /// Visit a collection index.
    fn visit_index(&mut self, node: &IndexMapping) {
        visit_index(self, node);
    }

    /// Visit collection contents.
    fn visit_contents(&mut self, node: &CollectionContents) {
        visit_contents(self, node);
    }

    /// Visit one-to-many contents.
    fn visit_one_to_many(&mut self, _node: &OneToManyMapping) {}

    /// Visit many-to-many contents.
    fn visit_many_to_many(&mut self, node: &ManyToManyMapping) {
        visit_many_to_many(self, node);
    }
}

/// Visit the children of the root in document order.
pub fn visit_mapping<V>(v: &mut V, node: &HibernateMapping)
where
    V: Visit + ?Sized,
{
    for class in &node.classes {
        v.visit_class(class);
    }
}

/// Visit the children of a root class in document order.
pub fn visit_class<V>(v: &mut V, node: &ClassMapping)
where
    V: Visit + ?Sized,
{
    if let Some(id) = &node.id {
        v.visit_id(id);
    }

    if let Some(discriminator) = &node.discriminator {
        v.visit_discriminator(discriminator);
    }

    for property in &node.properties {
        v.visit_property(property);
    }

    for reference in &node.references {
        v.visit_reference(reference);
    }

    for collection in &node.collections {
        v.visit_collection(collection);
    }

    for subclass in &node.subclasses {
        v.visit_subclass(subclass);
    }
}

/// Visit the children of a subclass in document order.
pub fn visit_subclass<V>(v: &mut V, node: &SubclassMapping)
where
    V: Visit + ?Sized,
{
    for property in &node.properties {
        v.visit_property(property);
    }

    for reference in &node.references {
        v.visit_reference(reference);
    }

    for collection in &node.collections {
        v.visit_collection(collection);
    }

    for subclass in &node.subclasses {
        v.visit_subclass(subclass);
    }
}

/// Visit the children of an identity mapping in document order.
pub fn visit_id<V>(v: &mut V, node: &IdMapping)
where
    V: Visit + ?Sized,
{
    for column in &node.columns {
        v.visit_column(column);
    }
}

/// Visit the children of a scalar property in document order.
pub fn visit_property<V>(v: &mut V, node: &PropertyMapping)
where
    V: Visit + ?Sized,
{
    for column in &node.columns {
        v.visit_column(column);
    }
}

/// Visit the children of a many-to-one reference in document order.
pub fn visit_reference<V>(v: &mut V, node: &ReferenceMapping)
where
    V: Visit + ?Sized,
{
    for column in &node.columns {
        v.visit_column(column);
    }
}

/// Visit the children of a collection in document order.
pub fn visit_collection<V>(v: &mut V, node: &CollectionMapping)
where
    V: Visit + ?Sized,
{
    v.visit_key(&node.key);

    if let Some(index) = &node.index {
        v.visit_index(index);
    }

    if let Some(contents) = &node.contents {
        v.visit_contents(contents);
    }
}

/// Visit the children of a collection key in document order.
pub fn visit_key<V>(v: &mut V, node: &KeyMapping)
where
    V: Visit + ?Sized,
{
    for column in &node.columns {
        v.visit_column(column);
    }
}

/// Visit the children of a collection index in document order.
pub fn visit_index<V>(v: &mut V, node: &IndexMapping)
where
    V: Visit + ?Sized,
{
    for column in &node.columns {
        v.visit_column(column);
    }
}

/// Visit the children of collection contents in document order.
pub fn visit_contents<V>(v: &mut V, node: &CollectionContents)
where
    V: Visit + ?Sized,
{
    match node {
        CollectionContents::OneToMany(contents) => v.visit_one_to_many(contents),
        CollectionContents::ManyToMany(contents) => v.visit_many_to_many(contents),
    }
}

/// Visit the children of many-to-many contents in document order.
pub fn visit_many_to_many<V>(v: &mut V, node: &ManyToManyMapping)
where
    V: Visit + ?Sized,
{
    for column in &node.columns {
        v.visit_column(column);
    }
}
