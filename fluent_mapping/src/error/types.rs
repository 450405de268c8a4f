//! Primary error enum for mapping compilation.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors that can occur while compiling or writing a mapping document.
///
/// Validation failures found during emission are collected and reported
/// together through [`MappingError::Aggregate`] when more than one occurs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MappingError {
    /// A class mapping was emitted without an identity mapping.
    #[error("class '{class}' has no identity mapping")]
    MissingIdentity {
        /// Name of the class missing its identifier.
        class: String,
    },

    /// A column-bearing member resolved to no columns and no formula.
    #[error("member '{member}' of '{owner}' resolves to no columns")]
    MissingColumns {
        /// Class or subclass owning the member.
        owner: String,
        /// Property, reference, or collection name.
        member: String,
    },

    /// A property computed from a formula also carries columns.
    #[error("property '{member}' of '{owner}' has both a formula and columns")]
    FormulaWithColumns {
        /// Class or subclass owning the property.
        owner: String,
        /// Property name.
        member: String,
    },

    /// A column was emitted without a name.
    #[error("member '{member}' of '{owner}' has a column without a name")]
    UnnamedColumn {
        /// Class or subclass owning the member.
        owner: String,
        /// Property, reference, or collection name.
        member: String,
    },

    /// A collection reached emission without one-to-many or many-to-many contents.
    #[error("collection '{collection}' of '{owner}' has no contents")]
    MissingContents {
        /// Class or subclass owning the collection.
        owner: String,
        /// Name of the collection member.
        collection: String,
    },

    /// A class declares subclasses but no discriminator column.
    #[error("class '{class}' declares subclasses but no discriminator")]
    MissingDiscriminator {
        /// Name of the root class.
        class: String,
    },

    /// Two sibling subclasses share a discriminator value.
    #[error(
        "discriminator value '{value}' on column '{column}' is claimed by both '{first}' and '{second}'"
    )]
    DiscriminatorCollision {
        /// Discriminator column of the hierarchy.
        column: String,
        /// Value claimed twice.
        value: String,
        /// Subclass that claimed the value first.
        first: String,
        /// Subclass that claimed the value second.
        second: String,
    },

    /// Mapping settings could not be extracted from their providers.
    #[error("failed to load mapping settings: {0}")]
    Settings(#[from] Box<FigmentError>),

    /// Writing a compiled document failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A compiled document could not be serialized as JSON.
    #[cfg(feature = "serde_json")]
    #[error("failed to serialize mapping document: {0}")]
    Json(#[from] serde_json::Error),

    /// Multiple errors occurred while compiling a mapping.
    #[error("multiple mapping errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}

impl From<std::convert::Infallible> for MappingError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
