//! Orchestration of a whole compilation.
//!
//! A [`PersistenceModel`] collects class builders, owns the conventions that
//! apply to them, and compiles everything into one [`Document`]. Builders are
//! resolved and annotated by conventions exactly once; after that the
//! resolved tree is kept and can be inspected through
//! [`PersistenceModel::mapping`].

use crate::attributes::AttributeValue;
use crate::builder::{Access, Cascade, ClassSource};
use crate::conventions::{Convention, ConventionPass, ConventionTarget, Conventions};
use crate::document::Document;
use crate::emit::emit;
use crate::error::{MappingError, MappingResult};
use crate::model::{HibernateMapping, MappingAttr};
use crate::output::MappingSink;
use crate::settings::MappingSettings;
use crate::visit::VisitMut;

/// Collects class maps and compiles them into a mapping document.
///
/// # Examples
///
/// ```
/// use fluent_mapping::{ClassMap, Entity, PersistenceModel};
///
/// #[derive(Entity)]
/// struct Record {
///     id: i32,
///     name: String,
/// }
///
/// let mut record = ClassMap::<Record>::new();
/// record.id(|p| p.id);
/// record.map(|p| p.name).length(50);
///
/// let mut model = PersistenceModel::new();
/// model.add(record);
/// let document = model.compile().expect("mapping is valid");
/// let column = document
///     .select("hibernate-mapping/class/property[@name='name']/column")
///     .expect("nested column");
/// assert_eq!(column.attribute("length"), Some("50"));
/// ```
pub struct PersistenceModel {
    settings: MappingSettings,
    conventions: Conventions,
    pending: Vec<Box<dyn ClassSource>>,
    mapping: HibernateMapping,
    root_applied: bool,
}

impl PersistenceModel {
    /// Model with default settings and no conventions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(MappingSettings::default())
    }

    /// Model whose root defaults and output options come from `settings`.
    #[must_use]
    pub fn with_settings(settings: MappingSettings) -> Self {
        let mut mapping = HibernateMapping::new();
        settings.apply_defaults(&mut mapping.attributes);
        Self {
            settings,
            conventions: Conventions::new(),
            pending: Vec::new(),
            mapping,
            root_applied: false,
        }
    }

    /// Settings in effect.
    #[must_use]
    pub const fn settings(&self) -> &MappingSettings {
        &self.settings
    }

    /// Register a class map, or an already built class node.
    pub fn add(&mut self, source: impl ClassSource + 'static) -> &mut Self {
        tracing::debug!(entity = source.entity_name(), "registered class source");
        self.pending.push(Box::new(source));
        self
    }

    /// Register a convention. Conventions registered first take priority.
    ///
    /// Conventions only reach classes resolved after they are added.
    pub fn add_convention<N, C>(&mut self, convention: C) -> &mut Self
    where
        N: ConventionTarget,
        C: Convention<N> + 'static,
    {
        self.conventions.add(convention);
        self
    }

    /// The convention registry.
    pub const fn conventions_mut(&mut self) -> &mut Conventions {
        &mut self.conventions
    }

    /// Explicit default cascade for every association.
    pub fn default_cascade(&mut self, cascade: Cascade) -> &mut Self {
        self.set_root(MappingAttr::DefaultCascade, cascade)
    }

    /// Explicit default property access strategy.
    pub fn default_access(&mut self, access: Access) -> &mut Self {
        self.set_root(MappingAttr::DefaultAccess, access)
    }

    /// Explicit default laziness for associations.
    pub fn default_lazy(&mut self, lazy: bool) -> &mut Self {
        self.set_root(MappingAttr::DefaultLazy, lazy)
    }

    /// Whether unqualified class names may be used in queries.
    pub fn auto_import(&mut self, enabled: bool) -> &mut Self {
        self.set_root(MappingAttr::AutoImport, enabled)
    }

    /// Namespace prefixed to unqualified class names.
    pub fn namespace(&mut self, namespace: &str) -> &mut Self {
        self.set_root(MappingAttr::Namespace, namespace)
    }

    /// Default database schema.
    pub fn schema(&mut self, schema: &str) -> &mut Self {
        self.set_root(MappingAttr::Schema, schema)
    }

    fn set_root(&mut self, attribute: MappingAttr, value: impl Into<AttributeValue>) -> &mut Self {
        self.mapping.attributes.set(attribute, value);
        self
    }

    /// Whether registered sources still await resolution.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Resolve newly registered sources and run conventions over them.
    ///
    /// Each source is resolved exactly once. Classes resolved by an earlier
    /// call are not revisited.
    pub fn apply_conventions(&mut self) {
        let mut pass = ConventionPass::new(&self.conventions);
        if !self.root_applied {
            pass.apply_root(&mut self.mapping);
            self.root_applied = true;
        }
        for source in self.pending.drain(..) {
            let mut class = source.into_mapping();
            pass.visit_class_mut(&mut class);
            self.mapping.classes.push(class);
        }
    }

    /// The resolved mapping tree.
    ///
    /// Sources registered since the last [`apply_conventions`] or
    /// [`compile`] are not included yet.
    ///
    /// [`apply_conventions`]: Self::apply_conventions
    /// [`compile`]: Self::compile
    #[must_use]
    pub const fn mapping(&self) -> &HibernateMapping {
        &self.mapping
    }

    /// Resolve pending sources and emit the document.
    ///
    /// Compiling again without registering anything new yields an identical
    /// document.
    ///
    /// # Errors
    ///
    /// Returns every validation failure found during emission; see
    /// [`emit`](crate::emit::emit).
    pub fn compile(&mut self) -> MappingResult<Document> {
        if self.has_pending() || !self.root_applied {
            self.apply_conventions();
        }
        let document = emit(&self.mapping, &self.settings.emit_options())?;
        tracing::debug!(classes = self.mapping.classes.len(), "compiled persistence model");
        Ok(document)
    }

    /// Compile and hand the document to `sink`.
    ///
    /// # Errors
    ///
    /// Returns compilation failures, or the sink's own error converted into
    /// a [`MappingError`].
    pub fn configure<S>(&mut self, sink: &mut S) -> MappingResult<()>
    where
        S: MappingSink,
        MappingError: From<S::Error>,
    {
        let document = self.compile()?;
        sink.accept(&document)?;
        Ok(())
    }
}

impl Default for PersistenceModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PersistenceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceModel")
            .field("settings", &self.settings)
            .field("conventions", &self.conventions)
            .field("pending", &self.pending.len())
            .field("mapping", &self.mapping)
            .finish()
    }
}
