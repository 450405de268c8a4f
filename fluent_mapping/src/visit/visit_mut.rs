//! Mutating traversal of the mapping model.

use crate::model::{
    ClassMapping, CollectionContents, CollectionMapping, ColumnMapping, DiscriminatorMapping,
    HibernateMapping, IdMapping, IndexMapping, KeyMapping, ManyToManyMapping, OneToManyMapping,
    PropertyMapping, ReferenceMapping, SubclassMapping,
};

/// Mutating visitor over the mapping model.
pub trait VisitMut {
    /// Visit the root.
    fn visit_mapping_mut(&mut self, node: &mut HibernateMapping) {
        visit_mapping_mut(self, node);
    }

    /// Visit a root class.
    fn visit_class_mut(&mut self, node: &mut ClassMapping) {
        visit_class_mut(self, node);
    }

    /// Visit a subclass.
    fn visit_subclass_mut(&mut self, node: &mut SubclassMapping) {
        visit_subclass_mut(self, node);
    }

    /// Visit an identity mapping.
    fn visit_id_mut(&mut self, node: &mut IdMapping) {
        visit_id_mut(self, node);
    }

    /// Visit a discriminator.
    fn visit_discriminator_mut(&mut self, _node: &mut DiscriminatorMapping) {}

    /// Visit a scalar property.
    fn visit_property_mut(&mut self, node: &mut PropertyMapping) {
        visit_property_mut(self, node);
    }

    /// Visit a column.
    fn visit_column_mut(&mut self, _node: &mut ColumnMapping) {}

    /// Visit a many-to-one reference.
    fn visit_reference_mut(&mut self, node: &mut ReferenceMapping) {
        visit_reference_mut(self, node);
    }

    /// Visit a collection.
    fn visit_collection_mut(&mut self, node: &mut CollectionMapping) {
        visit_collection_mut(self, node);
    }

    /// Visit a collection key.
    fn visit_key_mut(&mut self, node: &mut KeyMapping) {
        visit_key_mut(self, node);
    }

    /// Visit a collection index.
    fn visit_index_mut(&mut self, node: &mut IndexMapping) {
        visit_index_mut(self, node);
    }

    /// Visit collection contents.
    fn visit_contents_mut(&mut self, node: &mut CollectionContents) {
        visit_contents_mut(self, node);
    }

    /// Visit one-to-many contents.
    fn visit_one_to_many_mut(&mut self, _node: &mut OneToManyMapping) {}

    /// Visit many-to-many contents.
    fn visit_many_to_many_mut(&mut self, node: &mut ManyToManyMapping) {
        visit_many_to_many_mut(self, node);
    }
}

/// Visit the children of the root in document order.
pub fn visit_mapping_mut<V>(v: &mut V, node: &mut HibernateMapping)
where
    V: VisitMut + ?Sized,
{
    for class in &mut node.classes {
        v.visit_class_mut(class);
    }
}

/// Visit the children of a root class in document order.
pub fn visit_class_mut<V>(v: &mut V, node: &mut ClassMapping)
where
    V: VisitMut + ?Sized,
{
    if let Some(id) = &mut node.id {
        v.visit_id_mut(id);
    }

    if let Some(discriminator) = &mut node.discriminator {
        v.visit_discriminator_mut(discriminator);
    }

    for property in &mut node.properties {
        v.visit_property_mut(property);
    }

    for reference in &mut node.references {
        v.visit_reference_mut(reference);
    }

    for collection in &mut node.collections {
        v.visit_collection_mut(collection);
    }

    for subclass in &mut node.subclasses {
        v.visit_subclass_mut(subclass);
    }
}

/// Visit the children of a subclass in document order.
pub fn visit_subclass_mut<V>(v: &mut V, node: &mut SubclassMapping)
where
    V: VisitMut + ?Sized,
{
    for property in &mut node.properties {
        v.visit_property_mut(property);
    }

    for reference in &mut node.references {
        v.visit_reference_mut(reference);
    }

    for collection in &mut node.collections {
        v.visit_collection_mut(collection);
    }

    for subclass in &mut node.subclasses {
        v.visit_subclass_mut(subclass);
    }
}

/// Visit the children of an identity mapping in document order.
pub fn visit_id_mut<V>(v: &mut V, node: &mut IdMapping)
where
    V: VisitMut + ?Sized,
{
    for column in &mut node.columns {
        v.visit_column_mut(column);
    }
}

/// Visit the children of a scalar property in document order.
pub fn visit_property_mut<V>(v: &mut V, node: &mut PropertyMapping)
where
    V: VisitMut + ?Sized,
{
    for column in &mut node.columns {
        v.visit_column_mut(column);
    }
}

/// Visit the children of a many-to-one reference in document order.
pub fn visit_reference_mut<V>(v: &mut V, node: &mut ReferenceMapping)
where
    V: VisitMut + ?Sized,
{
    for column in &mut node.columns {
        v.visit_column_mut(column);
    }
}

/// Visit the children of a collection in document order.
pub fn visit_collection_mut<V>(v: &mut V, node: &mut CollectionMapping)
where
    V: VisitMut + ?Sized,
{
    v.visit_key_mut(&mut node.key);

    if let Some(index) = &mut node.index {
        v.visit_index_mut(index);
    }

    if let Some(contents) = &mut node.contents {
        v.visit_contents_mut(contents);
    }
}

/// Visit the children of a collection key in document order.
pub fn visit_key_mut<V>(v: &mut V, node: &mut KeyMapping)
where
    V: VisitMut + ?Sized,
{
    for column in &mut node.columns {
        v.visit_column_mut(column);
    }
}

/// Visit the children of a collection index in document order.
pub fn visit_index_mut<V>(v: &mut V, node: &mut IndexMapping)
where
    V: VisitMut + ?Sized,
{
    for column in &mut node.columns {
        v.visit_column_mut(column);
    }
}

/// Visit the children of collection contents in document order.
pub fn visit_contents_mut<V>(v: &mut V, node: &mut CollectionContents)
where
    V: VisitMut + ?Sized,
{
    match node {
        CollectionContents::OneToMany(contents) => v.visit_one_to_many_mut(contents),
        CollectionContents::ManyToMany(contents) => v.visit_many_to_many_mut(contents),
    }
}

/// Visit the children of many-to-many contents in document order.
pub fn visit_many_to_many_mut<V>(v: &mut V, node: &mut ManyToManyMapping)
where
    V: VisitMut + ?Sized,
{
    for column in &mut node.columns {
        v.visit_column_mut(column);
    }
}
