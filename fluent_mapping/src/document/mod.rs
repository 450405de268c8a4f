//! The compiled mapping document and queries over it.
//!
//! A [`Document`] is a plain element tree. It renders to indented XML with
//! [`Document::to_xml`] and can be inspected with slash-separated paths:
//!
//! ```
//! use fluent_mapping::document::{Document, Element};
//!
//! let root = Element::new("hibernate-mapping").with_child(
//!     Element::new("class")
//!         .with_attribute("name", "Record")
//!         .with_child(Element::new("property").with_attribute("name", "Age")),
//! );
//! let document = Document::new(root);
//! let age = document.select("hibernate-mapping/class[@name='Record']/property");
//! assert_eq!(age.and_then(|p| p.attribute("name")), Some("Age"));
//! ```

mod path;
mod xml_writer;

use serde::Serialize;

use self::path::ElementPath;
use self::xml_writer::{XML_DECLARATION, XmlWriter};

const DEFAULT_INDENT: usize = 2;

/// One `name="value"` pair on an element.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct XmlAttribute {
    name: String,
    value: String,
}

impl XmlAttribute {
    /// Attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value as it will be written, before escaping.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An element with ordered attributes, child elements, and optional text.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Element {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<XmlAttribute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Self>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Builder form of [`Element::set_attribute`].
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`Element::push_child`].
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.push_child(child);
        self
    }

    /// Set the element's text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set an attribute, replacing the value in place if already present.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let text = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|a| a.name == name) {
            existing.value = text;
        } else {
            self.attributes.push(XmlAttribute {
                name: name.to_owned(),
                value: text,
            });
        }
    }

    /// Append a child element.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of attribute `name`, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(XmlAttribute::value)
    }

    /// Whether attribute `name` is present.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Attributes in the order they are written.
    pub fn attributes(&self) -> impl Iterator<Item = &XmlAttribute> {
        self.attributes.iter()
    }

    /// Child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Child elements called `name`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First descendant matching `path`, relative to this element.
    ///
    /// Steps are element names or `*`, optionally followed by predicates:
    /// `[@attr]`, `[@attr='value']`, or a one-based position such as `[2]`.
    /// Malformed paths match nothing.
    #[must_use]
    pub fn select(&self, path: &str) -> Option<&Self> {
        self.select_all(path).into_iter().next()
    }

    /// Every descendant matching `path`, relative to this element.
    #[must_use]
    pub fn select_all(&self, path: &str) -> Vec<&Self> {
        ElementPath::parse(path).map_or_else(Vec::new, |parsed| {
            let children: Vec<&Self> = self.children.iter().collect();
            parsed.select(&children)
        })
    }
}

/// A compiled mapping document.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Document {
    root: Element,
    #[serde(skip)]
    indent_width: usize,
}

impl Document {
    /// Wrap `root` as a document rendered with two-space indentation.
    #[must_use]
    pub const fn new(root: Element) -> Self {
        Self {
            root,
            indent_width: DEFAULT_INDENT,
        }
    }

    /// Render with `width` spaces per nesting level.
    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Spaces per nesting level used by [`Document::to_xml`].
    #[must_use]
    pub const fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// The document element.
    #[must_use]
    pub const fn root(&self) -> &Element {
        &self.root
    }

    /// Unwrap the document element.
    #[must_use]
    pub fn into_root(self) -> Element {
        self.root
    }

    /// First element matching `path`. The first step names the root.
    #[must_use]
    pub fn select(&self, path: &str) -> Option<&Element> {
        self.select_all(path).into_iter().next()
    }

    /// Every element matching `path`. The first step names the root.
    #[must_use]
    pub fn select_all(&self, path: &str) -> Vec<&Element> {
        ElementPath::parse(path).map_or_else(Vec::new, |parsed| parsed.select(&[&self.root]))
    }

    /// Render as XML with a declaration, using the document's indent width.
    #[must_use]
    pub fn to_xml(&self) -> String {
        self.to_xml_with_indent(self.indent_width)
    }

    /// Render as XML indenting each level by `width` spaces.
    #[must_use]
    pub fn to_xml_with_indent(&self, width: usize) -> String {
        let mut writer = XmlWriter::new(width);
        writer.line(XML_DECLARATION);
        writer.element(&self.root);
        writer.finish()
    }

    /// Render the element tree as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Json`](crate::MappingError::Json) if
    /// serialization fails.
    #[cfg(feature = "serde_json")]
    pub fn to_json(&self) -> crate::MappingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests;
