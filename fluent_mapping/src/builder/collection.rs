//! Builder for collections with deferred resolution.
//!
//! A [`CollectionPart`] records everything the user configures but builds no
//! mapping node until the owning class is resolved. Shape calls such as
//! [`CollectionPart::as_set`] may therefore arrive in any order and the last
//! one wins.

use crate::attributes::{AttributeStore, AttributeValue};
use crate::model::{
    CollectionAttr, CollectionContents, CollectionKind, CollectionMapping, ColumnAttr, IndexAttr,
    IndexMapping, KeyAttr, KeyMapping, ManyToManyAttr, ManyToManyMapping, OneToManyAttr,
    OneToManyMapping,
};

use super::columns::{ColumnSpec, Negation};
use super::options::{Access, Cascade, Fetch, NotFound};

#[derive(Clone, Debug)]
enum ContentsPart {
    OneToMany {
        class: &'static str,
        attributes: AttributeStore<OneToManyAttr>,
    },
    ManyToMany {
        class: &'static str,
        attributes: AttributeStore<ManyToManyAttr>,
        columns: ColumnSpec,
    },
}

/// Fluent configuration of a one-to-many or many-to-many collection.
#[derive(Clone, Debug)]
pub struct CollectionPart {
    name: String,
    kind: CollectionKind,
    contents: ContentsPart,
    attributes: AttributeStore<CollectionAttr>,
    key_attributes: AttributeStore<KeyAttr>,
    key_columns: ColumnSpec,
    index_attributes: AttributeStore<IndexAttr>,
    index_columns: ColumnSpec,
    negation: Negation,
}

impl CollectionPart {
    fn new(name: &str, contents: ContentsPart) -> Self {
        Self {
            name: name.to_owned(),
            kind: CollectionKind::default(),
            contents,
            attributes: AttributeStore::new(),
            key_attributes: AttributeStore::new(),
            key_columns: ColumnSpec::default(),
            index_attributes: AttributeStore::new(),
            index_columns: ColumnSpec::default(),
            negation: Negation::default(),
        }
    }

    pub(crate) fn one_to_many(name: &str, class: &'static str) -> Self {
        Self::new(
            name,
            ContentsPart::OneToMany {
                class,
                attributes: AttributeStore::new(),
            },
        )
    }

    pub(crate) fn many_to_many(name: &str, class: &'static str) -> Self {
        Self::new(
            name,
            ContentsPart::ManyToMany {
                class,
                attributes: AttributeStore::new(),
                columns: ColumnSpec::default(),
            },
        )
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Store as a bag. This is the default shape.
    pub const fn as_bag(&mut self) -> &mut Self {
        self.kind = CollectionKind::Bag;
        self
    }

    /// Store as a set.
    pub const fn as_set(&mut self) -> &mut Self {
        self.kind = CollectionKind::Set;
        self
    }

    /// Store as a list ordered by an index column.
    pub const fn as_list(&mut self) -> &mut Self {
        self.kind = CollectionKind::List;
        self
    }

    /// Store as a map keyed by an index column.
    pub const fn as_map(&mut self) -> &mut Self {
        self.kind = CollectionKind::Map;
        self
    }

    /// Invert the next boolean call.
    pub const fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    /// Let the other side of a bidirectional association own it.
    pub fn inverse(&mut self) -> &mut Self {
        let inverse = self.negation.apply(true);
        self.attributes.set(CollectionAttr::Inverse, inverse);
        self
    }

    /// Load the collection lazily.
    pub fn lazy_load(&mut self) -> &mut Self {
        let lazy = self.negation.apply(true);
        self.attributes.set(CollectionAttr::Lazy, lazy);
        self
    }

    /// Collection table. For many-to-many collections this is the join table.
    pub fn table(&mut self, name: &str) -> &mut Self {
        self.attributes.set(CollectionAttr::Table, name);
        self
    }

    /// Schema of the collection table.
    pub fn schema(&mut self, name: &str) -> &mut Self {
        self.attributes.set(CollectionAttr::Schema, name);
        self
    }

    /// Cascade style.
    pub fn cascade(&mut self, cascade: Cascade) -> &mut Self {
        self.attributes.set(CollectionAttr::Cascade, cascade);
        self
    }

    /// Fetch strategy.
    pub fn fetch(&mut self, fetch: Fetch) -> &mut Self {
        self.attributes.set(CollectionAttr::Fetch, fetch);
        self
    }

    /// SQL ordering applied when loading.
    pub fn order_by(&mut self, clause: &str) -> &mut Self {
        self.attributes.set(CollectionAttr::OrderBy, clause);
        self
    }

    /// SQL restriction applied when loading.
    pub fn where_clause(&mut self, clause: &str) -> &mut Self {
        self.attributes.set(CollectionAttr::Where, clause);
        self
    }

    /// Number of collections loaded per batch.
    pub fn batch_size(&mut self, size: u32) -> &mut Self {
        self.attributes.set(CollectionAttr::BatchSize, size);
        self
    }

    /// Access strategy.
    pub fn access(&mut self, access: Access) -> &mut Self {
        self.attributes.set(CollectionAttr::Access, access);
        self
    }

    /// Set an arbitrary collection attribute.
    pub fn attribute(
        &mut self,
        attribute: CollectionAttr,
        value: impl Into<AttributeValue>,
    ) -> &mut Self {
        self.attributes.set(attribute, value);
        self
    }

    /// Add a key column referencing the owner.
    pub fn key_column(&mut self, name: &str) -> &mut Self {
        self.key_columns.push(name);
        self
    }

    /// Name of the key's foreign key constraint.
    pub fn key_foreign_key(&mut self, name: &str) -> &mut Self {
        self.key_attributes.set(KeyAttr::ForeignKey, name);
        self
    }

    /// Delete collection rows in the database when the owner is deleted.
    pub fn cascade_delete(&mut self) -> &mut Self {
        self.key_attributes.set(KeyAttr::OnDelete, "cascade");
        self
    }

    /// Add an index column for lists and maps.
    pub fn index_column(&mut self, name: &str) -> &mut Self {
        self.index_columns.push(name);
        self
    }

    /// Mapping type of the index.
    pub fn index_type(&mut self, type_name: &str) -> &mut Self {
        self.index_attributes.set(IndexAttr::Type, type_name);
        self
    }

    /// Add a join table column referencing the child. Only meaningful for
    /// many-to-many collections.
    pub fn child_column(&mut self, name: &str) -> &mut Self {
        match &mut self.contents {
            ContentsPart::ManyToMany { columns, .. } => columns.push(name),
            ContentsPart::OneToMany { .. } => {
                tracing::warn!(
                    collection = %self.name,
                    column = name,
                    "child column ignored on a one-to-many collection"
                );
            }
        }
        self
    }

    /// Set an arbitrary attribute on the join table columns referencing the
    /// child.
    pub fn child_column_attribute(
        &mut self,
        attribute: ColumnAttr,
        value: impl Into<AttributeValue>,
    ) -> &mut Self {
        match &mut self.contents {
            ContentsPart::ManyToMany { columns, .. } => columns.set(attribute, value),
            ContentsPart::OneToMany { .. } => {
                tracing::warn!(
                    collection = %self.name,
                    ?attribute,
                    "child column attribute ignored on a one-to-many collection"
                );
            }
        }
        self
    }

    /// Name of the foreign key from the join table to the child.
    pub fn child_foreign_key(&mut self, name: &str) -> &mut Self {
        match &mut self.contents {
            ContentsPart::ManyToMany { attributes, .. } => {
                attributes.set(ManyToManyAttr::ForeignKey, name);
            }
            ContentsPart::OneToMany { .. } => {
                tracing::warn!(
                    collection = %self.name,
                    foreign_key = name,
                    "child foreign key ignored on a one-to-many collection"
                );
            }
        }
        self
    }

    /// Behaviour when a child row is missing.
    pub fn not_found(&mut self, not_found: NotFound) -> &mut Self {
        match &mut self.contents {
            ContentsPart::OneToMany { attributes, .. } => {
                attributes.set(OneToManyAttr::NotFound, not_found);
            }
            ContentsPart::ManyToMany { attributes, .. } => {
                attributes.set(ManyToManyAttr::NotFound, not_found);
            }
        }
        self
    }

    /// Build the collection node for a collection declared on `owner`.
    ///
    /// Consuming the part guarantees this runs exactly once. Defaults are
    /// written to the default layer: the key column is `<owner>_id`, a list
    /// index is `Index`, a map index is `Key` of type `string`, and a
    /// many-to-many join table is `<owner>To<child>` with a child column
    /// named `<child>_id`.
    pub(crate) fn resolve(self, owner: &str) -> CollectionMapping {
        let mut collection = CollectionMapping::new(self.name, self.kind);
        collection.attributes = self.attributes;
        collection.key = KeyMapping {
            attributes: self.key_attributes,
            columns: self.key_columns.resolve(Some(&format!("{owner}_id"))),
        };
        collection.index = index_mapping(self.kind, self.index_attributes, self.index_columns);
        collection.contents = Some(match self.contents {
            ContentsPart::OneToMany { class, attributes } => {
                CollectionContents::OneToMany(OneToManyMapping {
                    class: class.to_owned(),
                    attributes,
                })
            }
            ContentsPart::ManyToMany {
                class,
                attributes,
                columns,
            } => {
                collection
                    .attributes
                    .set_default(CollectionAttr::Table, format!("{owner}To{class}"));
                CollectionContents::ManyToMany(ManyToManyMapping {
                    class: class.to_owned(),
                    attributes,
                    columns: columns.resolve(Some(&format!("{class}_id"))),
                })
            }
        });
        tracing::trace!(
            owner,
            collection = %collection.name,
            kind = collection.kind.element_name(),
            "resolved collection"
        );
        collection
    }
}

fn index_mapping(
    kind: CollectionKind,
    attributes: AttributeStore<IndexAttr>,
    columns: ColumnSpec,
) -> Option<IndexMapping> {
    let implicit = match kind {
        CollectionKind::List => "Index",
        CollectionKind::Map => "Key",
        CollectionKind::Bag | CollectionKind::Set => {
            if !columns.is_empty() {
                tracing::debug!(
                    kind = kind.element_name(),
                    "index columns ignored on an unindexed collection"
                );
            }
            return None;
        }
    };
    let mut index = IndexMapping {
        attributes,
        columns: columns.resolve(Some(implicit)),
    };
    if kind == CollectionKind::Map {
        index.attributes.set_default(IndexAttr::Type, "string");
    }
    Some(index)
}
