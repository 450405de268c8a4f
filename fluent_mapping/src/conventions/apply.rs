//! Tree walk that runs registered conventions against every node.

use crate::attributes::Attribute;
use crate::model::{
    ClassMapping, CollectionMapping, ColumnMapping, DiscriminatorMapping, HibernateMapping,
    IdMapping, IndexMapping, KeyMapping, ManyToManyMapping, NodeKind, OneToManyMapping,
    PropertyMapping, ReferenceMapping, SubclassMapping,
};
use crate::visit::{
    VisitMut, visit_class_mut, visit_collection_mut, visit_id_mut, visit_index_mut,
    visit_key_mut, visit_many_to_many_mut, visit_mapping_mut, visit_property_mut,
    visit_reference_mut, visit_subclass_mut,
};

use super::{Convention, ConventionContext, ConventionTarget, Conventions};

/// Apply `conventions` to every node of `mapping`.
///
/// Explicit values are left alone. Running the pass twice over the same
/// tree writes the same convention values again, so the result is stable.
pub fn apply(conventions: &Conventions, mapping: &mut HibernateMapping) {
    ConventionPass::new(conventions).visit_mapping_mut(mapping);
}

#[derive(Clone, Debug)]
struct Member {
    name: String,
    value_type: Option<String>,
    target: Option<String>,
}

impl Member {
    fn new(name: &str, value_type: Option<&str>, target: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            value_type: value_type.map(str::to_owned),
            target: target.map(str::to_owned),
        }
    }
}

pub(crate) struct ConventionPass<'c> {
    conventions: &'c Conventions,
    classes: Vec<String>,
    member: Option<Member>,
    parent: Option<NodeKind>,
}

impl<'c> ConventionPass<'c> {
    pub(crate) const fn new(conventions: &'c Conventions) -> Self {
        Self {
            conventions,
            classes: Vec::new(),
            member: None,
            parent: None,
        }
    }

    /// Apply root conventions without descending into classes.
    pub(crate) fn apply_root(&self, root: &mut HibernateMapping) {
        self.apply_to(root);
    }

    fn context(&self) -> ConventionContext<'_> {
        ConventionContext {
            class: self.classes.last().map_or("", String::as_str),
            member: self.member.as_ref().map(|member| member.name.as_str()),
            parent: self.parent,
            value_type: self
                .member
                .as_ref()
                .and_then(|member| member.value_type.as_deref()),
            target: self
                .member
                .as_ref()
                .and_then(|member| member.target.as_deref()),
            depth: self.classes.len().saturating_sub(1),
        }
    }

    fn apply_to<N: ConventionTarget>(&self, node: &mut N) {
        let registered = self.conventions.for_kind::<N>();
        if registered.is_empty() {
            return;
        }
        let cx = self.context();
        let accepting: Vec<&dyn Convention<N>> = registered
            .iter()
            .map(Box::as_ref)
            .filter(|convention| convention.accepts(node, &cx))
            .collect();
        for &attribute in <N::Attr as Attribute>::ALL {
            if node.attributes().is_explicit(attribute) {
                continue;
            }
            let supplied = accepting
                .iter()
                .find_map(|convention| convention.supply(node, attribute, &cx));
            if let Some(value) = supplied {
                tracing::trace!(
                    kind = %N::KIND,
                    class = cx.class,
                    member = cx.member,
                    attribute = attribute.xml_name(),
                    %value,
                    "convention supplied value"
                );
                node.attributes_mut().set_convention(attribute, value);
            }
        }
    }

    fn descend(&mut self, parent: NodeKind, walk: impl FnOnce(&mut Self)) {
        let saved = self.parent.replace(parent);
        walk(self);
        self.parent = saved;
    }

    fn in_member(&mut self, member: Member, walk: impl FnOnce(&mut Self)) {
        let saved = self.member.replace(member);
        walk(self);
        self.member = saved;
    }

    fn in_class(&mut self, name: &str, walk: impl FnOnce(&mut Self)) {
        self.classes.push(name.to_owned());
        walk(self);
        self.classes.pop();
    }
}

impl VisitMut for ConventionPass<'_> {
    fn visit_mapping_mut(&mut self, node: &mut HibernateMapping) {
        self.apply_to(node);
        visit_mapping_mut(self, node);
    }

    fn visit_class_mut(&mut self, node: &mut ClassMapping) {
        let name = node.name.clone();
        self.in_class(&name, |pass| {
            pass.apply_to(node);
            pass.descend(NodeKind::Class, |nested| visit_class_mut(nested, node));
        });
    }

    fn visit_subclass_mut(&mut self, node: &mut SubclassMapping) {
        let name = node.name.clone();
        self.in_class(&name, |pass| {
            pass.apply_to(node);
            pass.descend(NodeKind::Subclass, |nested| visit_subclass_mut(nested, node));
        });
    }

    fn visit_id_mut(&mut self, node: &mut IdMapping) {
        let member = Member::new(&node.name, node.value_type.as_deref(), None);
        self.in_member(member, |pass| {
            pass.apply_to(node);
            pass.descend(NodeKind::Id, |nested| visit_id_mut(nested, node));
        });
    }

    fn visit_discriminator_mut(&mut self, node: &mut DiscriminatorMapping) {
        self.apply_to(node);
    }

    fn visit_property_mut(&mut self, node: &mut PropertyMapping) {
        let member = Member::new(&node.name, node.value_type.as_deref(), None);
        self.in_member(member, |pass| {
            pass.apply_to(node);
            pass.descend(NodeKind::Property, |nested| visit_property_mut(nested, node));
        });
    }

    fn visit_column_mut(&mut self, node: &mut ColumnMapping) {
        self.apply_to(node);
    }

    fn visit_reference_mut(&mut self, node: &mut ReferenceMapping) {
        let member = Member::new(&node.name, None, node.target());
        self.in_member(member, |pass| {
            pass.apply_to(node);
            pass.descend(NodeKind::Reference, |nested| visit_reference_mut(nested, node));
        });
    }

    fn visit_collection_mut(&mut self, node: &mut CollectionMapping) {
        let target = node.contents.as_ref().map(|contents| contents.class().to_owned());
        let member = Member::new(&node.name, None, target.as_deref());
        self.in_member(member, |pass| {
            pass.apply_to(node);
            pass.descend(NodeKind::Collection, |nested| visit_collection_mut(nested, node));
        });
    }

    fn visit_key_mut(&mut self, node: &mut KeyMapping) {
        self.apply_to(node);
        self.descend(NodeKind::Key, |nested| visit_key_mut(nested, node));
    }

    fn visit_index_mut(&mut self, node: &mut IndexMapping) {
        self.apply_to(node);
        self.descend(NodeKind::Index, |nested| visit_index_mut(nested, node));
    }

    fn visit_one_to_many_mut(&mut self, node: &mut OneToManyMapping) {
        self.apply_to(node);
    }

    fn visit_many_to_many_mut(&mut self, node: &mut ManyToManyMapping) {
        self.apply_to(node);
        self.descend(NodeKind::ManyToMany, |nested| visit_many_to_many_mut(nested, node));
    }
}
