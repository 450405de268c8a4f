//! Member lists shared by class and subclass maps.

use crate::model::{CollectionMapping, PropertyMapping, ReferenceMapping, SubclassMapping};

use super::collection::CollectionPart;
use super::property::PropertyPart;
use super::reference::ReferencePart;
use super::subclass::SubclassPart;

pub(crate) trait Named {
    fn name(&self) -> &str;
}

impl Named for PropertyPart {
    fn name(&self) -> &str {
        self.name()
    }
}

impl Named for ReferencePart {
    fn name(&self) -> &str {
        self.name()
    }
}

impl Named for CollectionPart {
    fn name(&self) -> &str {
        self.name()
    }
}

impl Named for SubclassPart {
    fn name(&self) -> &str {
        self.name()
    }
}

/// Members declared on one level of a hierarchy, in registration order.
#[derive(Clone, Debug)]
pub(crate) struct Members {
    owner: &'static str,
    properties: Vec<PropertyPart>,
    references: Vec<ReferencePart>,
    collections: Vec<CollectionPart>,
    subclasses: Vec<SubclassPart>,
}

pub(crate) struct ResolvedMembers {
    pub(crate) properties: Vec<PropertyMapping>,
    pub(crate) references: Vec<ReferenceMapping>,
    pub(crate) collections: Vec<CollectionMapping>,
    pub(crate) subclasses: Vec<SubclassMapping>,
}

impl Members {
    pub(crate) const fn new(owner: &'static str) -> Self {
        Self {
            owner,
            properties: Vec::new(),
            references: Vec::new(),
            collections: Vec::new(),
            subclasses: Vec::new(),
        }
    }

    pub(crate) fn property(&mut self, part: PropertyPart) -> &mut PropertyPart {
        upsert(self.owner, &mut self.properties, part)
    }

    pub(crate) fn reference(&mut self, part: ReferencePart) -> &mut ReferencePart {
        upsert(self.owner, &mut self.references, part)
    }

    pub(crate) fn collection(&mut self, part: CollectionPart) -> &mut CollectionPart {
        upsert(self.owner, &mut self.collections, part)
    }

    pub(crate) fn subclass(&mut self, part: SubclassPart) {
        upsert(self.owner, &mut self.subclasses, part);
    }

    pub(crate) fn resolve(self) -> ResolvedMembers {
        let owner = self.owner;
        ResolvedMembers {
            properties: self
                .properties
                .into_iter()
                .map(PropertyPart::resolve)
                .collect(),
            references: self
                .references
                .into_iter()
                .map(ReferencePart::resolve)
                .collect(),
            collections: self
                .collections
                .into_iter()
                .map(|part| part.resolve(owner))
                .collect(),
            subclasses: self
                .subclasses
                .into_iter()
                .map(SubclassPart::resolve)
                .collect(),
        }
    }
}

/// Register `item`, replacing an earlier registration of the same name in
/// place so the member keeps its original position.
#[expect(
    clippy::indexing_slicing,
    reason = "index comes from position() or push() on the same vector"
)]
fn upsert<'a, T: Named>(owner: &str, items: &'a mut Vec<T>, item: T) -> &'a mut T {
    let existing = items
        .iter()
        .position(|candidate| candidate.name() == item.name());
    let index = if let Some(index) = existing {
        tracing::debug!(
            owner,
            member = item.name(),
            "member mapped twice; the later mapping replaces the earlier one"
        );
        items[index] = item;
        index
    } else {
        items.push(item);
        items.len() - 1
    };
    &mut items[index]
}
