//! Indented XML rendering for compiled documents.

use super::Element;

pub(super) const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const NEWLINE: &str = "\n";

pub(super) fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub(super) struct XmlWriter {
    buffer: String,
    indent: usize,
    width: usize,
}

impl XmlWriter {
    #[expect(
        clippy::missing_const_for_fn,
        reason = "avoid relying on const-stability details for allocation constructors"
    )]
    pub(super) fn new(width: usize) -> Self {
        Self {
            buffer: String::new(),
            indent: 0,
            width,
        }
    }

    const fn indent(&mut self) {
        self.indent += 1;
    }

    const fn outdent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub(super) fn line(&mut self, line: &str) {
        let pad = self.indent * self.width;
        self.buffer.extend(std::iter::repeat_n(' ', pad));
        self.buffer.push_str(line);
        self.buffer.push_str(NEWLINE);
    }

    pub(super) fn element(&mut self, element: &Element) {
        let open = open_tag(element);
        match (element.children().is_empty(), element.text()) {
            (true, None) => self.line(&format!("{open} />")),
            (true, Some(text)) => {
                let name = element.name();
                self.line(&format!("{open}>{}</{name}>", escape_xml(text)));
            }
            (false, text) => {
                self.line(&format!("{open}>"));
                self.indent();
                if let Some(body) = text {
                    self.line(&escape_xml(body));
                }
                for child in element.children() {
                    self.element(child);
                }
                self.outdent();
                self.line(&format!("</{}>", element.name()));
            }
        }
    }

    pub(super) fn finish(self) -> String {
        self.buffer
    }
}

fn open_tag(element: &Element) -> String {
    let mut tag = format!("<{}", element.name());
    for attribute in element.attributes() {
        tag.push(' ');
        tag.push_str(attribute.name());
        tag.push_str("=\"");
        tag.push_str(&escape_xml(attribute.value()));
        tag.push('"');
    }
    tag
}
