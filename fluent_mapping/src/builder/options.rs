//! Typed values for enumerated attributes.

use crate::attributes::AttributeValue;
use crate::model::GeneratorMapping;

/// How the mapper reaches a member's value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Access {
    /// Through the property accessor.
    Property,
    /// Directly through the field.
    Field,
    /// Through a compiler-generated backing field.
    BackField,
    /// Read through the accessor and never written.
    ReadOnly,
    /// Not accessed at all.
    NoOp,
    /// A custom accessor strategy.
    Custom(String),
}

impl Access {
    /// Value written into the document.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Property => "property",
            Self::Field => "field",
            Self::BackField => "backfield",
            Self::ReadOnly => "readonly",
            Self::NoOp => "noop",
            Self::Custom(strategy) => strategy,
        }
    }
}

/// Operations that propagate from an owner to associated entities.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cascade {
    /// Nothing cascades.
    None,
    /// Saves and updates cascade.
    SaveUpdate,
    /// Every operation cascades.
    All,
    /// Every operation cascades and orphans are deleted.
    AllDeleteOrphan,
    /// Deletes cascade.
    Delete,
    /// Orphans are deleted.
    DeleteOrphan,
}

impl Cascade {
    /// Value written into the document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SaveUpdate => "save-update",
            Self::All => "all",
            Self::AllDeleteOrphan => "all-delete-orphan",
            Self::Delete => "delete",
            Self::DeleteOrphan => "delete-orphan",
        }
    }
}

/// Fetching strategy for associations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Fetch {
    /// Separate select.
    Select,
    /// Outer join.
    Join,
    /// Subselect over the owners.
    Subselect,
}

impl Fetch {
    /// Value written into the document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Join => "join",
            Self::Subselect => "subselect",
        }
    }
}

/// Behaviour when an association points at a missing row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotFound {
    /// Treat the association as empty.
    Ignore,
    /// Raise an error.
    Exception,
}

impl NotFound {
    /// Value written into the document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Exception => "exception",
        }
    }
}

/// Identifier generation strategy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IdGenerator {
    /// Database identity column.
    Identity,
    /// Whatever the database prefers.
    Native,
    /// Assigned by the application.
    Assigned,
    /// In-process increment.
    Increment,
    /// Random GUID.
    Guid,
    /// Sequential GUID.
    GuidComb,
    /// Named database sequence.
    Sequence(String),
    /// High/low allocation backed by a table.
    HiLo {
        /// Table holding the high value.
        table: String,
        /// Column holding the high value.
        column: String,
        /// Size of each low block.
        max_lo: u32,
    },
    /// Copied from the identifier of an associated entity.
    Foreign(String),
}

impl IdGenerator {
    /// Generator class written into the document.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Native => "native",
            Self::Assigned => "assigned",
            Self::Increment => "increment",
            Self::Guid => "guid",
            Self::GuidComb => "guid.comb",
            Self::Sequence(_) => "sequence",
            Self::HiLo { .. } => "hilo",
            Self::Foreign(_) => "foreign",
        }
    }

    /// Generator chosen when none is configured: identity for integers,
    /// `guid.comb` for UUIDs, and assigned for everything else.
    #[must_use]
    pub fn for_value_type(value_type: &str) -> Self {
        let short = value_type.rsplit("::").next().unwrap_or(value_type);
        match short {
            "i16" | "i32" | "i64" | "u16" | "u32" | "u64" | "isize" | "usize" => Self::Identity,
            "Uuid" => Self::GuidComb,
            _ => Self::Assigned,
        }
    }

    /// Generator node with its parameters.
    #[must_use]
    pub fn to_mapping(&self) -> GeneratorMapping {
        let generator = GeneratorMapping::new(self.class());
        match self {
            Self::Sequence(sequence) => generator.with_param("sequence", sequence.as_str()),
            Self::HiLo {
                table,
                column,
                max_lo,
            } => generator
                .with_param("table", table.as_str())
                .with_param("column", column.as_str())
                .with_param("max_lo", max_lo.to_string()),
            Self::Foreign(property) => generator.with_param("property", property.as_str()),
            Self::Identity
            | Self::Native
            | Self::Assigned
            | Self::Increment
            | Self::Guid
            | Self::GuidComb => generator,
        }
    }
}

impl From<Access> for AttributeValue {
    fn from(value: Access) -> Self {
        Self::Text(value.as_str().to_owned())
    }
}

impl From<Cascade> for AttributeValue {
    fn from(value: Cascade) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Fetch> for AttributeValue {
    fn from(value: Fetch) -> Self {
        Self::from(value.as_str())
    }
}

impl From<NotFound> for AttributeValue {
    fn from(value: NotFound) -> Self {
        Self::from(value.as_str())
    }
}
