//! Visitor building document elements from model nodes.

use std::collections::HashMap;

use crate::attributes::{Attribute, AttributeStore};
use crate::document::{Document, Element};
use crate::error::{MappingError, MappingResult};
use crate::model::{
    ClassMapping, CollectionMapping, ColumnAttr, ColumnMapping, DiscriminatorMapping,
    HibernateMapping, IdMapping, IndexMapping, KeyMapping, ManyToManyMapping, OneToManyMapping,
    PropertyMapping, ReferenceMapping, SubclassMapping,
};
use crate::visit::{
    Visit, visit_class, visit_collection, visit_id, visit_index, visit_key,
    visit_many_to_many, visit_mapping, visit_property, visit_reference, visit_subclass,
};

use super::{EmitOptions, MAPPING_NAMESPACE};

const ROOT: &str = "hibernate-mapping";

/// Build an element from a label attribute followed by resolved attributes.
fn element<A: Attribute>(
    name: &str,
    label: Option<(&str, &str)>,
    attributes: &AttributeStore<A>,
) -> Element {
    let mut element = Element::new(name);
    if let Some((key, value)) = label {
        element.set_attribute(key, value);
    }
    for (attribute, value) in attributes.resolved() {
        element.set_attribute(attribute.xml_name(), value.to_string());
    }
    element
}

pub(super) struct Emitter {
    options: EmitOptions,
    root: Element,
    open: Vec<Element>,
    owners: Vec<String>,
    member: String,
    discriminator_column: String,
    errors: Vec<MappingError>,
}

impl Emitter {
    pub(super) fn new(options: EmitOptions) -> Self {
        Self {
            options,
            root: Element::new(ROOT),
            open: Vec::new(),
            owners: Vec::new(),
            member: String::new(),
            discriminator_column: String::new(),
            errors: Vec::new(),
        }
    }

    pub(super) fn finish(self) -> MappingResult<Document> {
        tracing::debug!(
            classes = self.root.children_named("class").count(),
            errors = self.errors.len(),
            "emitted mapping document"
        );
        MappingError::check(self.errors)?;
        Ok(Document::new(self.root).with_indent_width(self.options.indent_width))
    }

    fn owner(&self) -> String {
        self.owners.last().cloned().unwrap_or_default()
    }

    /// Attach a finished element to the innermost open element.
    fn push(&mut self, element: Element) {
        self.open.last_mut().unwrap_or(&mut self.root).push_child(element);
    }

    fn with_open(&mut self, element: Element, walk: impl FnOnce(&mut Self)) {
        self.open.push(element);
        walk(self);
        if let Some(done) = self.open.pop() {
            self.push(done);
        }
    }

    fn in_owner(&mut self, name: &str, walk: impl FnOnce(&mut Self)) {
        self.owners.push(name.to_owned());
        walk(self);
        self.owners.pop();
    }

    /// Name of a lone column carrying nothing but its name.
    fn shorthand<'c>(&self, columns: &'c [ColumnMapping]) -> Option<&'c str> {
        if !self.options.column_shorthand {
            return None;
        }
        let [column] = columns else {
            return None;
        };
        let only_name = column
            .attributes
            .resolved()
            .all(|(attribute, _)| attribute == ColumnAttr::Name);
        column.name().filter(|_| only_name)
    }

    fn require_columns(&mut self, columns: &[ColumnMapping]) {
        if columns.is_empty() {
            self.errors.push(MappingError::MissingColumns {
                owner: self.owner(),
                member: self.member.clone(),
            });
        }
    }

    /// Emit `element` carrying `columns`, either as a `column` attribute or
    /// as nested column elements visited by `walk`.
    fn with_columns(
        &mut self,
        mut element: Element,
        columns: &[ColumnMapping],
        walk: impl FnOnce(&mut Self),
    ) {
        match self.shorthand(columns) {
            Some(name) => {
                element.set_attribute("column", name);
                self.push(element);
            }
            None => self.with_open(element, walk),
        }
    }

    fn check_siblings(&mut self, subclasses: &[SubclassMapping]) {
        let mut claimed: HashMap<&str, &str> = HashMap::new();
        for subclass in subclasses {
            let Some(value) = subclass.discriminator_value() else {
                continue;
            };
            if let Some(first) = claimed.insert(value, &subclass.name) {
                self.errors.push(MappingError::DiscriminatorCollision {
                    column: self.discriminator_column.clone(),
                    value: value.to_owned(),
                    first: first.to_owned(),
                    second: subclass.name.clone(),
                });
                claimed.insert(value, first);
            }
        }
    }
}

impl Visit for Emitter {
    fn visit_mapping(&mut self, node: &HibernateMapping) {
        self.root = element(ROOT, Some(("xmlns", MAPPING_NAMESPACE)), &node.attributes);
        visit_mapping(self, node);
    }

    fn visit_class(&mut self, node: &ClassMapping) {
        if node.id.is_none() {
            self.errors.push(MappingError::MissingIdentity {
                class: node.name.clone(),
            });
        }
        let column = node
            .discriminator
            .as_ref()
            .and_then(DiscriminatorMapping::column);
        if !node.subclasses.is_empty() && column.is_none() {
            self.errors.push(MappingError::MissingDiscriminator {
                class: node.name.clone(),
            });
        }
        column.unwrap_or_default().clone_into(&mut self.discriminator_column);
        self.check_siblings(&node.subclasses);

        let class = element("class", Some(("name", node.name.as_str())), &node.attributes);
        self.in_owner(&node.name, |emitter| {
            emitter.with_open(class, |nested| visit_class(nested, node));
        });
    }

    fn visit_subclass(&mut self, node: &SubclassMapping) {
        self.check_siblings(&node.subclasses);
        let subclass = element(
            "subclass",
            Some(("name", node.name.as_str())),
            &node.attributes,
        );
        self.in_owner(&node.name, |emitter| {
            emitter.with_open(subclass, |nested| visit_subclass(nested, node));
        });
    }

    fn visit_id(&mut self, node: &IdMapping) {
        node.name.clone_into(&mut self.member);
        self.require_columns(&node.columns);
        let mut id = element("id", Some(("name", node.name.as_str())), &node.attributes);
        let shorthand = self.shorthand(&node.columns);
        if let Some(name) = shorthand {
            id.set_attribute("column", name);
        }
        self.with_open(id, |emitter| {
            if shorthand.is_none() {
                visit_id(emitter, node);
            }
            if let Some(generator) = &node.generator {
                let mut tag = Element::new("generator").with_attribute("class", &generator.class);
                for (name, value) in &generator.params {
                    tag.push_child(
                        Element::new("param")
                            .with_attribute("name", name)
                            .with_text(value),
                    );
                }
                emitter.push(tag);
            }
        });
    }

    fn visit_discriminator(&mut self, node: &DiscriminatorMapping) {
        self.push(element("discriminator", None, &node.attributes));
    }

    fn visit_property(&mut self, node: &PropertyMapping) {
        node.name.clone_into(&mut self.member);
        if node.is_formula() {
            if !node.columns.is_empty() {
                self.errors.push(MappingError::FormulaWithColumns {
                    owner: self.owner(),
                    member: self.member.clone(),
                });
            }
        } else {
            self.require_columns(&node.columns);
        }
        let property = element(
            "property",
            Some(("name", node.name.as_str())),
            &node.attributes,
        );
        self.with_columns(property, &node.columns, |nested| visit_property(nested, node));
    }

    fn visit_column(&mut self, node: &ColumnMapping) {
        if node.name().is_none() {
            self.errors.push(MappingError::UnnamedColumn {
                owner: self.owner(),
                member: self.member.clone(),
            });
        }
        self.push(element("column", None, &node.attributes));
    }

    fn visit_reference(&mut self, node: &ReferenceMapping) {
        node.name.clone_into(&mut self.member);
        self.require_columns(&node.columns);
        let reference = element(
            "many-to-one",
            Some(("name", node.name.as_str())),
            &node.attributes,
        );
        self.with_columns(reference, &node.columns, |nested| visit_reference(nested, node));
    }

    fn visit_collection(&mut self, node: &CollectionMapping) {
        node.name.clone_into(&mut self.member);
        if node.contents.is_none() {
            self.errors.push(MappingError::MissingContents {
                owner: self.owner(),
                collection: node.name.clone(),
            });
        }
        let collection = element(
            node.kind.element_name(),
            Some(("name", node.name.as_str())),
            &node.attributes,
        );
        self.with_open(collection, |nested| visit_collection(nested, node));
    }

    fn visit_key(&mut self, node: &KeyMapping) {
        self.require_columns(&node.columns);
        let key = element("key", None, &node.attributes);
        self.with_columns(key, &node.columns, |nested| visit_key(nested, node));
    }

    fn visit_index(&mut self, node: &IndexMapping) {
        self.require_columns(&node.columns);
        let index = element("index", None, &node.attributes);
        self.with_columns(index, &node.columns, |nested| visit_index(nested, node));
    }

    fn visit_one_to_many(&mut self, node: &OneToManyMapping) {
        self.push(element(
            "one-to-many",
            Some(("class", node.class.as_str())),
            &node.attributes,
        ));
    }

    fn visit_many_to_many(&mut self, node: &ManyToManyMapping) {
        self.require_columns(&node.columns);
        let contents = element(
            "many-to-many",
            Some(("class", node.class.as_str())),
            &node.attributes,
        );
        self.with_columns(contents, &node.columns, |nested| {
            visit_many_to_many(nested, node);
        });
    }
}
