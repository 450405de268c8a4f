//! Compilation settings loaded from defaults, a TOML file, and the
//! environment.
//!
//! Sources are merged in increasing precedence: built-in defaults, then
//! `fluent-mapping.toml` (or an explicit file), then variables prefixed with
//! `FLUENT_MAPPING_`. Settings only ever supply the default layer of the
//! root attributes, so anything set through the builder API wins.

use camino::Utf8Path;
use figment::Figment;
#[cfg(feature = "toml")]
use figment::providers::{Format, Toml};
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

use crate::attributes::AttributeStore;
use crate::emit::EmitOptions;
use crate::error::{MappingError, MappingResult};
use crate::model::MappingAttr;

/// Prefix of environment variables read by [`MappingSettings::load`].
pub const ENV_PREFIX: &str = "FLUENT_MAPPING_";

/// File searched for in the working directory and its ancestors.
pub const DEFAULT_FILE_NAME: &str = "fluent-mapping.toml";

/// Mapping-wide defaults and output options.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct MappingSettings {
    /// Default cascade style for associations.
    pub default_cascade: Option<String>,
    /// Default property access strategy.
    pub default_access: Option<String>,
    /// Whether associations are lazy unless stated otherwise.
    pub default_lazy: Option<bool>,
    /// Whether unqualified class names may be used in queries.
    pub auto_import: Option<bool>,
    /// Namespace prefixed to unqualified class names.
    pub namespace: Option<String>,
    /// Default database schema.
    pub schema: Option<String>,
    /// Collapse lone name-only columns into a `column` attribute.
    pub column_shorthand: bool,
    /// Spaces per nesting level when writing XML.
    pub indent_width: usize,
}

impl Default for MappingSettings {
    fn default() -> Self {
        Self {
            default_cascade: None,
            default_access: None,
            default_lazy: None,
            auto_import: None,
            namespace: None,
            schema: None,
            column_shorthand: true,
            indent_width: 2,
        }
    }
}

impl MappingSettings {
    /// Load settings from `fluent-mapping.toml` and the environment.
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Settings`] when a source holds a value of the
    /// wrong type.
    pub fn load() -> MappingResult<Self> {
        Self::extract(&Self::figment(None))
    }

    /// Load settings from `path` and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Io`] when `path` is not a file and
    /// [`MappingError::Settings`] when a source cannot be extracted.
    #[cfg(feature = "toml")]
    pub fn load_from(path: &Utf8Path) -> MappingResult<Self> {
        if !path.is_file() {
            return Err(MappingError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "settings file not found"),
            ));
        }
        Self::extract(&Self::figment(Some(path)))
    }

    /// The merged provider stack, for callers that want to add their own
    /// providers before extracting.
    #[must_use]
    pub fn figment(path: Option<&Utf8Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        #[cfg(feature = "toml")]
        {
            figment = match path {
                Some(file) => figment.merge(Toml::file_exact(file.as_std_path())),
                None => figment.merge(Toml::file(DEFAULT_FILE_NAME)),
            };
        }
        #[cfg(not(feature = "toml"))]
        let _ = path;
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    fn extract(figment: &Figment) -> MappingResult<Self> {
        let settings: Self = figment.extract().map_err(MappingError::settings)?;
        tracing::debug!(?settings, "loaded mapping settings");
        Ok(settings)
    }

    /// Emission options derived from these settings.
    #[must_use]
    pub const fn emit_options(&self) -> EmitOptions {
        EmitOptions::new()
            .with_column_shorthand(self.column_shorthand)
            .with_indent_width(self.indent_width)
    }

    /// Write configured root attributes into the default layer of
    /// `attributes`.
    pub fn apply_defaults(&self, attributes: &mut AttributeStore<MappingAttr>) {
        let texts = [
            (MappingAttr::DefaultCascade, &self.default_cascade),
            (MappingAttr::DefaultAccess, &self.default_access),
            (MappingAttr::Namespace, &self.namespace),
            (MappingAttr::Schema, &self.schema),
        ];
        for (attribute, value) in texts {
            if let Some(text) = value {
                attributes.set_default(attribute, text.as_str());
            }
        }
        let flags = [
            (MappingAttr::DefaultLazy, self.default_lazy),
            (MappingAttr::AutoImport, self.auto_import),
        ];
        for (attribute, value) in flags {
            if let Some(flag) = value {
                attributes.set_default(attribute, flag);
            }
        }
    }
}
