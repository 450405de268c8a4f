//! Constructors and aggregation helpers for `MappingError`.

use camino::Utf8Path;
use figment::Error as FigmentError;

use super::{AggregatedErrors, MappingError};

impl MappingError {
    /// Combine the supplied errors into a single [`MappingError`].
    ///
    /// Returns `None` when no errors are supplied and the error itself when
    /// exactly one is supplied. Nested aggregates are flattened so callers
    /// always see a single level of errors.
    #[must_use]
    pub fn aggregate<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut flat: Vec<Self> = errors
            .into_iter()
            .flat_map(|err| match err {
                Self::Aggregate(inner) => (*inner).into_iter().collect::<Vec<_>>(),
                other => vec![other],
            })
            .collect();
        if flat.len() > 1 {
            return Some(Self::Aggregate(Box::new(AggregatedErrors::new(flat))));
        }
        flat.pop()
    }

    /// Turn a list of collected errors into a result.
    ///
    /// # Errors
    ///
    /// Returns the aggregated error when `errors` is not empty.
    pub fn check<I>(errors: I) -> Result<(), Self>
    where
        I: IntoIterator<Item = Self>,
    {
        Self::aggregate(errors).map_or(Ok(()), Err)
    }

    /// Iterate over this error, or over every error it aggregates.
    pub fn iter(&self) -> impl Iterator<Item = &Self> {
        let (single, many) = match self {
            Self::Aggregate(inner) => (None, Some(inner.iter())),
            other => (Some(other), None),
        };
        single.into_iter().chain(many.into_iter().flatten())
    }

    /// Construct a settings error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_mapping::MappingError;
    /// let err = MappingError::settings(figment::Error::from("boom"));
    /// assert!(matches!(err, MappingError::Settings(_)));
    /// ```
    #[must_use]
    pub fn settings(source: FigmentError) -> Self {
        Self::Settings(Box::new(source))
    }

    /// Construct an I/O error tagged with the path that failed.
    #[must_use]
    pub fn io(path: &Utf8Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
