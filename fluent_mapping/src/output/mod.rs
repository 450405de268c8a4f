//! Hand-off of compiled documents to collaborators.

use std::convert::Infallible;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};

use crate::document::Document;
use crate::error::{MappingError, MappingResult};

/// Suffix of mapping files written by [`DirectorySink`].
pub const MAPPING_FILE_SUFFIX: &str = ".hbm.xml";

/// Receives compiled mapping documents.
pub trait MappingSink {
    /// Error produced when a document is rejected.
    type Error;

    /// Accept one compiled document.
    ///
    /// # Errors
    ///
    /// Implementations decide when a document is refused.
    fn accept(&mut self, document: &Document) -> Result<(), Self::Error>;
}

impl MappingSink for Vec<Document> {
    type Error = Infallible;

    fn accept(&mut self, document: &Document) -> Result<(), Self::Error> {
        self.push(document.clone());
        Ok(())
    }
}

/// Writes each accepted document to `<name>.hbm.xml` in a directory.
#[derive(Debug)]
pub struct DirectorySink {
    dir: Utf8PathBuf,
    name: String,
    indent_width: Option<usize>,
    written: Vec<Utf8PathBuf>,
}

impl DirectorySink {
    /// Sink writing `<name>.hbm.xml` into `dir`, creating it if needed.
    #[must_use]
    pub fn new(dir: impl Into<Utf8PathBuf>, name: &str) -> Self {
        Self {
            dir: dir.into(),
            name: name.to_owned(),
            indent_width: None,
            written: Vec::new(),
        }
    }

    /// Indent nested elements by `width` spaces instead of the document's
    /// own indent width.
    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = Some(width);
        self
    }

    /// Paths written so far, in order.
    #[must_use]
    pub fn written(&self) -> &[Utf8PathBuf] {
        &self.written
    }
}

impl MappingSink for DirectorySink {
    type Error = MappingError;

    fn accept(&mut self, document: &Document) -> Result<(), Self::Error> {
        let file_name = format!("{}{MAPPING_FILE_SUFFIX}", self.name);
        let xml = self
            .indent_width
            .map_or_else(|| document.to_xml(), |width| document.to_xml_with_indent(width));
        let path = write_file(&self.dir, &file_name, &xml)?;
        self.written.push(path);
        Ok(())
    }
}

/// Write `document` as XML to `out_dir/file_name`.
///
/// # Errors
///
/// Returns [`MappingError::Io`] when the directory cannot be created or the
/// file cannot be written.
pub fn write_document(
    out_dir: &Utf8Path,
    file_name: &str,
    document: &Document,
) -> MappingResult<Utf8PathBuf> {
    write_file(out_dir, file_name, &document.to_xml())
}

fn write_file(out_dir: &Utf8Path, file_name: &str, content: &str) -> MappingResult<Utf8PathBuf> {
    let dir = ensure_dir(out_dir)?;
    let path = out_dir.join(file_name);
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| MappingError::io(&path, io_err))?;
    file.write_all(content.as_bytes())
        .map_err(|io_err| MappingError::io(&path, io_err))?;
    tracing::debug!(%path, bytes = content.len(), "wrote mapping document");
    Ok(path)
}

fn ensure_dir(path: &Utf8Path) -> MappingResult<Dir> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority())
                .map_err(|io_err| MappingError::io(path, io_err))?;
            Dir::open_ambient_dir(path, ambient_authority())
                .map_err(|io_err| MappingError::io(path, io_err))
        }
        Err(open_err) => Err(MappingError::io(path, open_err)),
    }
}

#[cfg(test)]
mod tests;
