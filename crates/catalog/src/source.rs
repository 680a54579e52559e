//! CSV front end for the loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use biblio_core::{CatalogError, CatalogResult};

use crate::catalog::Catalog;
use crate::loader::CatalogLoader;
use crate::options::LoadOptions;

impl Catalog {
    /// Read delimited records from `reader` and build a catalog.
    ///
    /// Records may have any number of fields; short ones are skipped by the
    /// loader. Blank lines never reach the loader.
    pub fn from_csv_reader<R: Read>(reader: R, options: &LoadOptions) -> CatalogResult<Self> {
        let _span = tracing::debug_span!("catalog.load", has_headers = options.has_headers).entered();

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(options.has_headers)
            .delimiter(options.delimiter)
            .flexible(true)
            .from_reader(reader);

        let mut loader = CatalogLoader::new();
        for record in csv_reader.records() {
            let record = record.map_err(|e| CatalogError::csv(e.to_string()))?;
            let fields: Vec<&str> = record.iter().collect();
            loader.push(&fields)?;
        }

        Ok(Self::from_materials(loader.finish()))
    }

    /// Open `path` and read it with [`Catalog::from_csv_reader`].
    pub fn from_csv_path(path: impl AsRef<Path>, options: &LoadOptions) -> CatalogResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| CatalogError::io(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "reading catalog source");
        Self::from_csv_reader(file, options)
    }
}
