//! Fluent assertions over compiled mapping documents.

use fluent_mapping::{ClassMap, Document, Element, Entity, PersistenceModel};

/// Compiles mappings and checks the emitted document.
///
/// Paths are relative to the `hibernate-mapping` root, so
/// `class/property[@name='Age']` selects a property of any mapped class.
/// Each assertion panics with the rendered document when it fails.
///
/// # Examples
///
/// ```
/// use fluent_mapping::{ClassMap, Entity};
/// use fluent_mapping_test_helpers::MappingTester;
///
/// #[derive(Entity)]
/// struct Record {
///     id: i32,
///     name: String,
/// }
///
/// MappingTester::for_mapping::<Record>(|map| {
///     map.id(|p| p.id);
///     map.map(|p| p.name).length(20);
/// })
/// .element("class/property[@name='name']/column")
/// .exists()
/// .has_attribute("length", "20");
/// ```
#[derive(Debug)]
pub struct MappingTester {
    document: Document,
    path: String,
}

impl MappingTester {
    /// Wrap an already compiled document.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            path: String::new(),
        }
    }

    /// Compile a single class map with a default model.
    ///
    /// # Panics
    ///
    /// Panics if compilation fails.
    #[must_use]
    #[track_caller]
    pub fn for_mapping<E: Entity>(configure: impl FnOnce(&mut ClassMap<E>)) -> Self {
        Self::for_model(|model| {
            let mut map = ClassMap::<E>::new();
            configure(&mut map);
            model.add(map);
        })
    }

    /// Compile whatever `configure` registers on a fresh model.
    ///
    /// # Panics
    ///
    /// Panics if compilation fails.
    #[must_use]
    #[track_caller]
    pub fn for_model(configure: impl FnOnce(&mut PersistenceModel)) -> Self {
        let mut model = PersistenceModel::new();
        configure(&mut model);
        let document = model
            .compile()
            .unwrap_or_else(|err| panic!("mapping failed to compile: {err}"));
        Self::new(document)
    }

    /// The compiled document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Select the element later assertions apply to.
    pub fn element(&mut self, path: &str) -> &mut Self {
        path.clone_into(&mut self.path);
        self
    }

    /// Select the root element.
    pub fn root_element(&mut self) -> &mut Self {
        self.path.clear();
        self
    }

    fn find(&self) -> Option<&Element> {
        if self.path.is_empty() {
            Some(self.document.root())
        } else {
            self.document.root().select(&self.path)
        }
    }

    #[track_caller]
    fn current(&self) -> &Element {
        self.find().unwrap_or_else(|| {
            panic!(
                "no element at '{}' in\n{}",
                self.path,
                self.document.to_xml()
            )
        })
    }

    #[track_caller]
    fn fail(&self, message: &str) -> ! {
        panic!(
            "{message} (at '{}') in\n{}",
            self.path,
            self.document.to_xml()
        )
    }

    /// Assert the selected element exists.
    #[track_caller]
    pub fn exists(&mut self) -> &mut Self {
        self.current();
        self
    }

    /// Assert nothing matches the selected path.
    #[track_caller]
    pub fn doesnt_exist(&mut self) -> &mut Self {
        if self.find().is_some() {
            self.fail("expected no element");
        }
        self
    }

    /// Assert the selected element carries `name="value"`.
    #[track_caller]
    pub fn has_attribute(&mut self, name: &str, value: &str) -> &mut Self {
        let actual = self.current().attribute(name);
        if actual != Some(value) {
            self.fail(&format!(
                "expected {name}=\"{value}\", found {actual:?}"
            ));
        }
        self
    }

    /// Assert the selected element has no attribute `name`.
    #[track_caller]
    pub fn doesnt_have_attribute(&mut self, name: &str) -> &mut Self {
        if let Some(actual) = self.current().attribute(name) {
            self.fail(&format!("expected no {name}, found \"{actual}\""));
        }
        self
    }

    /// Assert the selected element has `count` child elements.
    #[track_caller]
    pub fn has_this_many_child_nodes(&mut self, count: usize) -> &mut Self {
        let actual = self.current().children().len();
        if actual != count {
            self.fail(&format!("expected {count} children, found {actual}"));
        }
        self
    }

    /// Assert the selected element is called `name`.
    #[track_caller]
    pub fn has_name(&mut self, name: &str) -> &mut Self {
        let actual = self.current().name();
        if actual != name {
            self.fail(&format!("expected <{name}>, found <{actual}>"));
        }
        self
    }

    /// Assert the selected element's text equals `text`.
    #[track_caller]
    pub fn value_equals(&mut self, text: &str) -> &mut Self {
        let actual = self.current().text();
        if actual != Some(text) {
            self.fail(&format!("expected text \"{text}\", found {actual:?}"));
        }
        self
    }

    /// Assert the selected element is the `position`th child of its parent,
    /// counting from zero.
    #[track_caller]
    pub fn should_be_in_parent_at_position(&mut self, position: usize) -> &mut Self {
        let element = self.current();
        let root = self.document.root();
        let parent = match self.path.rsplit_once('/') {
            Some((parent_path, _)) => root.select(parent_path),
            None => Some(root),
        };
        let actual = parent.and_then(|p| {
            p.children()
                .iter()
                .position(|child| std::ptr::eq(child, element))
        });
        if actual != Some(position) {
            self.fail(&format!("expected position {position}, found {actual:?}"));
        }
        self
    }
}
