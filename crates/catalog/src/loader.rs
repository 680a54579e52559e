//! Row parsing and the load policy.
//!
//! Two kinds of bad rows are treated differently:
//! - unusable rows (empty, fewer than [`MIN_FIELDS`] fields, unknown kind code)
//!   are skipped and the load continues;
//! - rows with an unparseable numeric field abort the whole load with
//!   [`CatalogError::MalformedRow`].

use core::str::FromStr;

use rust_decimal::Decimal;

use biblio_core::{CatalogError, CatalogResult};
use biblio_materials::{Material, MaterialDetails, MaterialKind};

/// Minimum number of fields a row needs to be considered.
pub const MIN_FIELDS: usize = 6;

const KIND: usize = 0;
const CODE: usize = 1;
const TITLE: usize = 2;
const AUTHOR: usize = 3;
const BASE_PRICE: usize = 4;
const EXTRA: usize = 5;

/// Why a row was left out of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    TooShort { fields: usize },
    UnknownKind(i64),
}

impl core::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SkipReason::Empty => f.write_str("empty row"),
            SkipReason::TooShort { fields } => {
                write!(f, "row has {fields} fields, need at least {MIN_FIELDS}")
            }
            SkipReason::UnknownKind(code) => write!(f, "unknown kind code {code}"),
        }
    }
}

/// Result of parsing a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Material(Material),
    Skipped(SkipReason),
}

/// Parse one source row. `row` is the 1-based row number used in errors.
///
/// Field order: kind code, code, title, author, base price, extra. The extra
/// field is the day count (book), sale value (ebook) or origin (magazine).
/// Fields past the sixth are ignored.
pub fn parse_row<S: AsRef<str>>(row: usize, fields: &[S]) -> CatalogResult<RowOutcome> {
    if fields.is_empty() {
        return Ok(RowOutcome::Skipped(SkipReason::Empty));
    }
    if fields.len() < MIN_FIELDS {
        return Ok(RowOutcome::Skipped(SkipReason::TooShort {
            fields: fields.len(),
        }));
    }

    let kind_code: i64 = parse_integer(row, "kind", field(fields, KIND))?;
    let base_price = parse_decimal(row, "base_price", field(fields, BASE_PRICE))?;

    let Some(kind) = MaterialKind::from_code(kind_code) else {
        return Ok(RowOutcome::Skipped(SkipReason::UnknownKind(kind_code)));
    };

    let extra = field(fields, EXTRA);
    let details = match kind {
        MaterialKind::Book => MaterialDetails::Book {
            days_borrowed: parse_integer(row, "days_borrowed", extra)?,
        },
        MaterialKind::Ebook => MaterialDetails::Ebook {
            sale_value: parse_decimal(row, "sale_value", extra)?,
        },
        MaterialKind::Magazine => MaterialDetails::Magazine {
            origin: extra.to_string(),
        },
    };

    Ok(RowOutcome::Material(Material::new(
        field(fields, CODE),
        field(fields, TITLE),
        field(fields, AUTHOR),
        base_price,
        details,
    )))
}

fn field<S: AsRef<str>>(fields: &[S], idx: usize) -> &str {
    fields[idx].as_ref().trim()
}

fn parse_integer(row: usize, name: &'static str, value: &str) -> CatalogResult<i64> {
    value
        .parse::<i64>()
        .map_err(|e| CatalogError::malformed_row(row, name, value, e))
}

/// Plain decimal notation first, then exponent notation (`1e3`).
///
/// Values must fit an exact 96-bit decimal: magnitudes above `Decimal::MAX`
/// (about 7.9e28, so `1e29` and up) are rejected as malformed rows.
fn parse_decimal(row: usize, name: &'static str, value: &str) -> CatalogResult<Decimal> {
    Decimal::from_str(value)
        .or_else(|plain_err| Decimal::from_scientific(value).map_err(|_| plain_err))
        .map_err(|e| CatalogError::malformed_row(row, name, value, e))
}

/// Incremental loader: feed rows in source order, then take the materials.
///
/// Stops being useful after the first error; callers are expected to
/// propagate it and drop the loader.
#[derive(Debug, Default)]
pub struct CatalogLoader {
    materials: Vec<Material>,
    rows_seen: usize,
    skipped: usize,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and record the next row.
    pub fn push<S: AsRef<str>>(&mut self, fields: &[S]) -> CatalogResult<()> {
        self.rows_seen += 1;
        match parse_row(self.rows_seen, fields)? {
            RowOutcome::Material(material) => self.materials.push(material),
            RowOutcome::Skipped(reason) => {
                self.skipped += 1;
                tracing::debug!(row = self.rows_seen, %reason, "skipping row");
            }
        }
        Ok(())
    }

    pub fn rows_seen(&self) -> usize {
        self.rows_seen
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self) -> Vec<Material> {
        tracing::info!(
            rows = self.rows_seen,
            loaded = self.materials.len(),
            skipped = self.skipped,
            "catalog loaded"
        );
        self.materials
    }
}

/// Load every row, in order. Aborts on the first malformed row.
pub fn load_rows<I, R, S>(rows: I) -> CatalogResult<Vec<Material>>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let _span = tracing::debug_span!("catalog.load").entered();
    let mut loader = CatalogLoader::new();
    for row in rows {
        loader.push(row.as_ref())?;
    }
    Ok(loader.finish())
}
