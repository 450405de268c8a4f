//! Error types produced while compiling mappings.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::MappingError;

/// Convenience alias for results returned by the mapping compiler.
pub type MappingResult<T> = Result<T, MappingError>;
