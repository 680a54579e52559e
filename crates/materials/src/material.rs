use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use biblio_core::MaterialCode;

use crate::kind::MaterialKind;

/// Days covered by one book billing tranche.
pub const BOOK_TRANCHE_DAYS: i64 = 30;
/// Cost of one book billing tranche.
pub const BOOK_TRANCHE_COST: Decimal = Decimal::ONE_HUNDRED;
/// Fraction of an ebook's sale value charged as maintenance (0.05).
pub const EBOOK_COST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
/// Flat maintenance cost of a magazine (50).
pub const MAGAZINE_BASE_COST: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
/// Multiplier applied to imported magazines (1.2).
pub const IMPORT_SURCHARGE: Decimal = Decimal::from_parts(12, 0, 0, false, 1);

/// Origin values that mark a magazine as imported, compared after trimming
/// and lowercasing.
const IMPORTED_ORIGINS: [&str; 2] = ["imported", "importada"];

/// Variant-specific payload. The variant is the single source of truth for
/// the material's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MaterialDetails {
    Book { days_borrowed: i64 },
    Ebook { sale_value: Decimal },
    Magazine { origin: String },
}

impl MaterialDetails {
    pub fn kind(&self) -> MaterialKind {
        match self {
            MaterialDetails::Book { .. } => MaterialKind::Book,
            MaterialDetails::Ebook { .. } => MaterialKind::Ebook,
            MaterialDetails::Magazine { .. } => MaterialKind::Magazine,
        }
    }
}

/// A catalogued library material.
///
/// Immutable once built: there are no setters, so the kind chosen at
/// construction can never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    code: MaterialCode,
    title: String,
    author: String,
    base_price: Decimal,
    #[serde(flatten)]
    details: MaterialDetails,
}

impl Material {
    /// Build a material from its identity fields and variant payload.
    ///
    /// Text fields are trimmed; no other validation happens here.
    pub fn new(
        code: impl Into<MaterialCode>,
        title: impl AsRef<str>,
        author: impl AsRef<str>,
        base_price: Decimal,
        details: MaterialDetails,
    ) -> Self {
        let details = match details {
            MaterialDetails::Magazine { origin } => MaterialDetails::Magazine {
                origin: origin.trim().to_string(),
            },
            other => other,
        };
        Self {
            code: code.into(),
            title: title.as_ref().trim().to_string(),
            author: author.as_ref().trim().to_string(),
            base_price,
            details,
        }
    }

    pub fn book(
        code: impl Into<MaterialCode>,
        title: impl AsRef<str>,
        author: impl AsRef<str>,
        base_price: Decimal,
        days_borrowed: i64,
    ) -> Self {
        Self::new(code, title, author, base_price, MaterialDetails::Book { days_borrowed })
    }

    pub fn ebook(
        code: impl Into<MaterialCode>,
        title: impl AsRef<str>,
        author: impl AsRef<str>,
        base_price: Decimal,
        sale_value: Decimal,
    ) -> Self {
        Self::new(code, title, author, base_price, MaterialDetails::Ebook { sale_value })
    }

    pub fn magazine(
        code: impl Into<MaterialCode>,
        title: impl AsRef<str>,
        author: impl AsRef<str>,
        base_price: Decimal,
        origin: impl Into<String>,
    ) -> Self {
        Self::new(
            code,
            title,
            author,
            base_price,
            MaterialDetails::Magazine { origin: origin.into() },
        )
    }

    pub fn kind(&self) -> MaterialKind {
        self.details.kind()
    }

    pub fn code(&self) -> &MaterialCode {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    pub fn details(&self) -> &MaterialDetails {
        &self.details
    }

    /// Days on loan (books only).
    pub fn days_borrowed(&self) -> Option<i64> {
        match self.details {
            MaterialDetails::Book { days_borrowed } => Some(days_borrowed),
            _ => None,
        }
    }

    /// Sale value (ebooks only).
    pub fn sale_value(&self) -> Option<Decimal> {
        match self.details {
            MaterialDetails::Ebook { sale_value } => Some(sale_value),
            _ => None,
        }
    }

    /// Origin text (magazines only).
    pub fn origin(&self) -> Option<&str> {
        match &self.details {
            MaterialDetails::Magazine { origin } => Some(origin),
            _ => None,
        }
    }

    /// Number of 30-day tranches billed for a book.
    ///
    /// Any partial period rounds up; zero or negative day counts still bill
    /// one tranche. `None` for non-book materials.
    pub fn billing_tranches(&self) -> Option<i64> {
        self.days_borrowed().map(tranches_for)
    }

    /// True for magazines whose origin reads "imported" (any case, any
    /// surrounding whitespace).
    pub fn is_imported(&self) -> bool {
        self.origin().is_some_and(is_imported_origin)
    }

    /// Maintenance cost of this material.
    pub fn maintenance_cost(&self) -> Decimal {
        match &self.details {
            MaterialDetails::Book { days_borrowed } => {
                Decimal::from(tranches_for(*days_borrowed)) * BOOK_TRANCHE_COST
            }
            MaterialDetails::Ebook { sale_value } => *sale_value * EBOOK_COST_RATE,
            MaterialDetails::Magazine { origin } => {
                if is_imported_origin(origin) {
                    MAGAZINE_BASE_COST * IMPORT_SURCHARGE
                } else {
                    MAGAZINE_BASE_COST
                }
            }
        }
    }
}

fn tranches_for(days_borrowed: i64) -> i64 {
    if days_borrowed > 0 {
        // ceil(days / 30) without overflowing near i64::MAX
        (days_borrowed - 1) / BOOK_TRANCHE_DAYS + 1
    } else {
        1
    }
}

fn is_imported_origin(origin: &str) -> bool {
    let normalized = origin.trim().to_lowercase();
    IMPORTED_ORIGINS.contains(&normalized.as_str())
}
