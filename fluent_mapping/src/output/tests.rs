//! Tests for document sinks.

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};

use super::{DirectorySink, MappingSink, write_document};
use crate::document::{Document, Element};
use crate::error::MappingError;

#[fixture]
fn document() -> Document {
    Document::new(Element::new("hibernate-mapping").with_child(Element::new("class")))
}

fn utf8_dir(temp: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("temp dir is UTF-8")
}

#[rstest]
fn directory_sink_creates_missing_directories(document: Document) {
    let temp = tempfile::tempdir().expect("temp dir");
    let out = utf8_dir(&temp).join("nested/mappings");
    let mut sink = DirectorySink::new(out.clone(), "Shop").with_indent_width(4);
    sink.accept(&document).expect("write succeeds");

    let expected = out.join("Shop.hbm.xml");
    assert_eq!(sink.written(), [expected.clone()]);
    let written = std::fs::read_to_string(&expected).expect("file readable");
    assert_eq!(written, document.to_xml_with_indent(4));
}

#[rstest]
fn write_document_overwrites_existing_files(document: Document) {
    let temp = tempfile::tempdir().expect("temp dir");
    let dir = utf8_dir(&temp);
    std::fs::write(dir.join("out.xml"), "stale content that is longer than the new one")
        .expect("seed file");
    let path = write_document(&dir, "out.xml", &document).expect("write succeeds");
    let written = std::fs::read_to_string(path).expect("file readable");
    assert_eq!(written, document.to_xml());
}

#[rstest]
fn writing_under_a_file_is_an_io_error(document: Document) {
    let temp = tempfile::tempdir().expect("temp dir");
    let blocker = utf8_dir(&temp).join("blocker");
    std::fs::write(&blocker, "").expect("seed file");
    let err = write_document(&blocker, "out.xml", &document).expect_err("not a directory");
    assert!(matches!(err, MappingError::Io { ref path, .. } if path == &blocker));
}

#[rstest]
fn vectors_collect_documents(document: Document) {
    let mut sink: Vec<Document> = Vec::new();
    let Ok(()) = sink.accept(&document);
    assert_eq!(sink, [document]);
}

#[rstest]
fn directory_sink_uses_the_document_indent(document: Document) {
    let temp = tempfile::tempdir().expect("temp dir");
    let dir = utf8_dir(&temp);
    let mut sink = DirectorySink::new(dir.clone(), "Wide");
    sink.accept(&document.with_indent_width(3)).expect("write succeeds");

    let written = std::fs::read_to_string(dir.join("Wide.hbm.xml")).expect("file readable");
    assert!(written.contains("\n   <class />"), "unexpected output:\n{written}");
}
