//! Column lists and negation state shared by the member builders.

use crate::attributes::{AttributeStore, AttributeValue};
use crate::model::{ColumnAttr, ColumnMapping};

/// Column names plus attributes applied to every column of a member.
#[derive(Clone, Debug, Default)]
pub(crate) struct ColumnSpec {
    names: Vec<String>,
    attributes: AttributeStore<ColumnAttr>,
}

impl ColumnSpec {
    pub(crate) fn push(&mut self, name: &str) {
        self.names.push(name.to_owned());
    }

    pub(crate) fn set(&mut self, attribute: ColumnAttr, value: impl Into<AttributeValue>) {
        self.attributes.set(attribute, value);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Build the column nodes. Without explicit names a single implicit
    /// column named `implicit` is produced, or none when `implicit` is `None`.
    pub(crate) fn resolve(self, implicit: Option<&str>) -> Vec<ColumnMapping> {
        let mut columns: Vec<ColumnMapping> = if self.names.is_empty() {
            implicit.map(ColumnMapping::implicit).into_iter().collect()
        } else {
            self.names
                .iter()
                .map(|name| ColumnMapping::named(name))
                .collect()
        };
        for column in &mut columns {
            self.attributes.copy_to(&mut column.attributes);
        }
        columns
    }
}

/// Pending `not()` flag consumed by the next boolean call.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Negation(bool);

impl Negation {
    pub(crate) const fn new() -> Self {
        Self(false)
    }

    pub(crate) const fn toggle(&mut self) {
        self.0 = !self.0;
    }

    /// Returns `value`, inverted when a negation is pending, and clears it.
    pub(crate) const fn apply(&mut self, value: bool) -> bool {
        let negated = self.0;
        self.0 = false;
        value != negated
    }
}
