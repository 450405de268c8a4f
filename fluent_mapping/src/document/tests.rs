//! Tests for element queries and XML rendering.

use rstest::{fixture, rstest};

use super::{Document, Element};

#[fixture]
fn document() -> Document {
    let class = Element::new("class")
        .with_attribute("name", "Record")
        .with_attribute("table", "Record")
        .with_child(
            Element::new("property")
                .with_attribute("name", "Name")
                .with_attribute("column", "Name"),
        )
        .with_child(
            Element::new("property").with_attribute("name", "Age").with_child(
                Element::new("column")
                    .with_attribute("name", "Age")
                    .with_attribute("not-null", "true"),
            ),
        );
    Document::new(
        Element::new("hibernate-mapping")
            .with_attribute("xmlns", "urn:nhibernate-mapping-2.2")
            .with_child(class),
    )
}

#[rstest]
#[case("hibernate-mapping/class/property", 2)]
#[case("hibernate-mapping/class/property[@name='Age']", 1)]
#[case("hibernate-mapping/class/property[@column]", 1)]
#[case("hibernate-mapping/class/property[2]/column", 1)]
#[case("hibernate-mapping/*/*", 2)]
#[case("hibernate-mapping/class/bag", 0)]
#[case("class/property", 0)]
#[case("hibernate-mapping/class[@name=Record]", 0)]
#[case("", 0)]
fn select_all_counts_matches(document: Document, #[case] path: &str, #[case] expected: usize) {
    assert_eq!(document.select_all(path).len(), expected);
}

#[rstest]
fn element_select_is_relative(document: Document) {
    let class = document.select("hibernate-mapping/class").expect("class present");
    let column = class
        .select("property[@name=\"Age\"]/column")
        .expect("nested column");
    assert_eq!(column.attribute("not-null"), Some("true"));
}

#[rstest]
fn set_attribute_replaces_in_place() {
    let mut element = Element::new("id")
        .with_attribute("name", "Id")
        .with_attribute("type", "Int32");
    element.set_attribute("name", "Key");
    let names: Vec<_> = element.attributes().map(|a| (a.name(), a.value())).collect();
    assert_eq!(names, [("name", "Key"), ("type", "Int32")]);
}

#[rstest]
fn xml_output_is_indented_and_escaped() {
    let root = Element::new("hibernate-mapping").with_child(
        Element::new("class")
            .with_attribute("name", "Record")
            .with_attribute("where", "age > 1 & name <> 'x'")
            .with_child(
                Element::new("id").with_child(
                    Element::new("generator")
                        .with_attribute("class", "sequence")
                        .with_child(
                            Element::new("param")
                                .with_attribute("name", "sequence")
                                .with_text("seq_id"),
                        ),
                ),
            ),
    );
    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
        "<hibernate-mapping>\n",
        "  <class name=\"Record\" where=\"age &gt; 1 &amp; name &lt;&gt; &apos;x&apos;\">\n",
        "    <id>\n",
        "      <generator class=\"sequence\">\n",
        "        <param name=\"sequence\">seq_id</param>\n",
        "      </generator>\n",
        "    </id>\n",
        "  </class>\n",
        "</hibernate-mapping>\n",
    );
    assert_eq!(Document::new(root).to_xml(), expected);
}

#[rstest]
fn indent_width_is_configurable() {
    let root = Element::new("a").with_child(Element::new("b"));
    let xml = Document::new(root).to_xml_with_indent(4);
    assert!(xml.contains("\n    <b />\n"), "unexpected output: {xml}");
}

#[cfg(feature = "serde_json")]
#[rstest]
fn json_output_skips_empty_parts(document: Document) {
    let json = document.to_json().expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value.pointer("/root/name").and_then(serde_json::Value::as_str),
        Some("hibernate-mapping")
    );
    let property = value
        .pointer("/root/children/0/children/0")
        .expect("first property");
    assert_eq!(
        property
            .pointer("/attributes/0/value")
            .and_then(serde_json::Value::as_str),
        Some("Name")
    );
    assert!(property.get("children").is_none());
}
